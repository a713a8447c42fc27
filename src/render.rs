use crate::data::list::KeyValueList;
use std::fmt::Write;

/// Header labels shown when a listing has its header row enabled. Every
/// renderer uses these and emits them only behind the `show_head` flag.
pub const KEY_HEADER: &str = "Key";
pub const VALUE_HEADER: &str = "Value";

/// Render a listing as plain aligned text
///
/// The output contains the title (when present and non-empty), then the
/// `Key`/`Value` header plus a dashed separator (only when `show_head` is
/// set, never otherwise), then one row per entry in input order. The key
/// column is padded so values line up. Pure: same input, same output.
pub fn render_plain(list: &KeyValueList) -> String {
    let mut out = String::new();

    let has_body = list.show_head() || !list.is_empty();
    if let Some(title) = list.title() {
        out.push_str(title);
        out.push('\n');
        if has_body {
            out.push('\n');
        }
    }

    if !has_body {
        return out;
    }

    let (key_width, value_width) = column_widths(list);

    if list.show_head() {
        push_row(&mut out, KEY_HEADER, VALUE_HEADER, key_width);
        push_row(
            &mut out,
            &"-".repeat(key_width),
            &"-".repeat(value_width),
            key_width,
        );
    }

    for entry in list {
        push_row(&mut out, entry.key(), &entry.value_text(), key_width);
    }

    out
}

/// Column widths in characters: widest key and widest value text, widened
/// to fit the header labels when the header row is shown
fn column_widths(list: &KeyValueList) -> (usize, usize) {
    let mut key_width = if list.show_head() {
        KEY_HEADER.chars().count()
    } else {
        0
    };
    let mut value_width = if list.show_head() {
        VALUE_HEADER.chars().count()
    } else {
        0
    };

    for entry in list {
        key_width = key_width.max(entry.key().chars().count());
        value_width = value_width.max(entry.value_text().chars().count());
    }

    (key_width, value_width)
}

fn push_row(out: &mut String, key: &str, value: &str, key_width: usize) {
    let mut line = String::new();
    let _ = write!(line, "{:<width$}  {}", key, value, width = key_width);
    out.push_str(line.trim_end());
    out.push('\n');
}
