use crate::data::list::KeyValueList;
use crate::render::{KEY_HEADER, VALUE_HEADER};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Cell, Row, Table, Widget},
};

/// Renders a key/value listing as a two-column table
///
/// The header row appears only when the listing has `show_head` set, and the
/// surrounding block picks up the listing title unless a custom block is
/// supplied via `block()`.
pub struct KeyValueListWidget<'a> {
    list: &'a KeyValueList,
    block: Option<Block<'a>>,
    header_style: Style,
    key_style: Style,
    value_style: Style,
}

impl<'a> KeyValueListWidget<'a> {
    pub fn new(list: &'a KeyValueList) -> Self {
        Self {
            list,
            block: None,
            header_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::Cyan),
            value_style: Style::default(),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn key_style(mut self, style: Style) -> Self {
        self.key_style = style;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }
}

impl<'a> Widget for KeyValueListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = match self.block {
            Some(block) => block,
            None => match self.list.title() {
                Some(title) => Block::bordered().title(title),
                None => Block::bordered(),
            },
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let rows: Vec<Row> = self
            .list
            .iter()
            .map(|entry| {
                Row::new(vec![
                    Cell::from(entry.key()).style(self.key_style),
                    Cell::from(entry.value_text()).style(self.value_style),
                ])
            })
            .collect();

        let mut table = Table::new(
            rows,
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        );
        if self.list.show_head() {
            let header = Row::new(vec![
                Cell::from(KEY_HEADER).style(self.header_style),
                Cell::from(VALUE_HEADER).style(self.header_style),
            ])
            .height(1)
            .bottom_margin(1);
            table = table.header(header);
        }

        Widget::render(table, inner, buf);
    }
}
