use crate::config::config::Config;
use crate::data::list::KeyValueList;
use crate::render::{render_plain, KEY_HEADER, VALUE_HEADER};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

/// Render a listing as a bordered table
///
/// Same containment guarantees as the plain renderer: the title sits above
/// the table, the bold `Key`/`Value` header cells exist only when the
/// listing asks for them, and each entry becomes one row in input order.
/// `max_value_width` of 0 leaves values untruncated.
pub fn render_table(list: &KeyValueList, max_value_width: usize) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if list.show_head() {
        table.set_header(vec![
            Cell::new(KEY_HEADER).add_attribute(Attribute::Bold),
            Cell::new(VALUE_HEADER).add_attribute(Attribute::Bold),
        ]);
    }

    for entry in list {
        table.add_row(vec![
            entry.key().to_string(),
            truncate_cell(&entry.value_text(), max_value_width),
        ]);
    }

    match list.title() {
        Some(title) => format!("{}\n{}", title, table),
        None => table.to_string(),
    }
}

/// Shorten a cell to `max_width` characters, marking the cut with `...`
fn truncate_cell(text: &str, max_width: usize) -> String {
    if max_width == 0 || text.chars().count() <= max_width {
        return text.to_string();
    }
    // Widths under 4 leave no room for the marker, hard cut instead
    if max_width < 4 {
        return text.chars().take(max_width).collect();
    }
    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{}...", kept)
}

/// Print a listing to stdout in the configured format, with an entry-count
/// trailer line
pub fn display_list(list: &KeyValueList, config: &Config) {
    if list.is_empty() && list.title().is_none() && !list.show_head() {
        let message = "No entries.";
        if config.display.use_color {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
        return;
    }

    let rendered = match config.display.format.as_str() {
        "pretty" => render_table(list, config.display.max_value_width),
        _ => render_plain(list),
    };
    println!("{}", rendered);

    let summary = format!("{} entries", list.len());
    if config.display.use_color {
        println!("{}", summary.green());
    } else {
        println!("{}", summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::value::Value;

    #[test]
    fn test_table_contains_entries_and_title() {
        let list = KeyValueList::from_pairs(vec![
            ("CHAINLINK_DEV", Value::Bool(true)),
            ("DATABASE_TIMEOUT", Value::Number(1000.0)),
        ])
        .with_title("Node Settings");

        let out = render_table(&list, 0);
        assert!(out.contains("Node Settings"));
        assert!(out.contains("CHAINLINK_DEV"));
        assert!(out.contains("true"));
        assert!(out.contains("DATABASE_TIMEOUT"));
        assert!(out.contains("1000"));
    }

    #[test]
    fn test_table_header_only_when_asked() {
        let list = KeyValueList::from_pairs(vec![("a", "1")]);
        let out = render_table(&list, 0);
        assert!(!out.contains(KEY_HEADER));
        assert!(!out.contains(VALUE_HEADER));

        let out = render_table(&list.with_head(true), 0);
        assert!(out.contains(KEY_HEADER));
        assert!(out.contains(VALUE_HEADER));
    }

    #[test]
    fn test_truncate_cell() {
        assert_eq!(truncate_cell("short", 10), "short");
        assert_eq!(
            truncate_cell("untouched when disabled", 0),
            "untouched when disabled"
        );
        assert_eq!(truncate_cell("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_cell_respects_tiny_widths() {
        assert_eq!(truncate_cell("abcdefgh", 2), "ab");
        assert_eq!(truncate_cell("abcdefgh", 3), "abc");
        for width in 1..=8 {
            let cell = truncate_cell("abcdefgh", width);
            assert!(
                cell.chars().count() <= width,
                "width {}: {:?}",
                width,
                cell
            );
        }
    }
}
