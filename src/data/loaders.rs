use crate::data::entry::Entry;
use crate::data::list::KeyValueList;
use crate::data::value::Value;
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load a JSON file into a listing
///
/// Accepts two shapes: an object, whose members become entries in document
/// order, or an array of `[key, value]` pairs. Scalar values keep their
/// type; arrays and objects inside a value are kept as JSON text.
pub fn load_json_entries<P: AsRef<Path>>(path: P) -> Result<KeyValueList> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    let json: JsonValue =
        serde_json::from_reader(reader).with_context(|| "Failed to parse JSON file")?;

    entries_from_json(&json)
}

/// Convert parsed JSON into a listing (see `load_json_entries` for shapes)
pub fn entries_from_json(json: &JsonValue) -> Result<KeyValueList> {
    let mut list = KeyValueList::new();

    match json {
        JsonValue::Object(map) => {
            for (key, value) in map {
                list.push(Entry::new(key.clone(), Value::from_json(value)));
            }
            debug!("Loaded {} entries from JSON object", list.len());
        }
        JsonValue::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                let pair = item
                    .as_array()
                    .ok_or_else(|| anyhow!("JSON entry {}: expected a [key, value] pair", idx))?;
                if pair.len() != 2 {
                    return Err(anyhow!(
                        "JSON entry {}: pair has {} elements, expected 2",
                        idx,
                        pair.len()
                    ));
                }
                let key = pair[0]
                    .as_str()
                    .ok_or_else(|| anyhow!("JSON entry {}: key must be a string", idx))?;
                list.push(Entry::new(key, Value::from_json(&pair[1])));
            }
            debug!("Loaded {} entries from JSON pair array", list.len());
        }
        _ => {
            return Err(anyhow!(
                "JSON data must be an object or an array of [key, value] pairs"
            ))
        }
    }

    Ok(list)
}

/// Load a two-column CSV file into a listing
///
/// A leading `key,value` header row (any case) is skipped. With
/// `infer_types` set, cells go through `Value::infer`, otherwise they stay
/// text. Rows with a column count other than 2 are an error naming the row.
pub fn load_csv_entries<P: AsRef<Path>>(path: P, infer_types: bool) -> Result<KeyValueList> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut list = KeyValueList::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}: read failed", idx + 1))?;

        if idx == 0 && is_header_record(&record) {
            continue;
        }
        if record.len() != 2 {
            return Err(anyhow!(
                "CSV row {}: expected 2 columns (key,value), got {}",
                idx + 1,
                record.len()
            ));
        }

        let key = record.get(0).unwrap_or("");
        let cell = record.get(1).unwrap_or("");
        let value = if infer_types {
            Value::infer(cell)
        } else {
            Value::Text(cell.to_string())
        };
        list.push(Entry::new(key, value));
    }

    debug!("Loaded {} entries from CSV", list.len());
    Ok(list)
}

fn is_header_record(record: &csv::StringRecord) -> bool {
    record.len() == 2
        && record.get(0).is_some_and(|c| c.eq_ignore_ascii_case("key"))
        && record.get(1).is_some_and(|c| c.eq_ignore_ascii_case("value"))
}

/// Snapshot the process environment as a listing
///
/// The process environment has no meaningful order, so the snapshot is
/// sorted by key when `sort` is set. Values stay text.
pub fn env_entries(sort: bool) -> KeyValueList {
    let mut vars: Vec<(String, String)> = std::env::vars().collect();
    if sort {
        vars.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let mut list = KeyValueList::new();
    for (key, value) in vars {
        list.push(Entry::new(key, Value::Text(value)));
    }

    debug!("Captured {} environment variables", list.len());
    list
}
