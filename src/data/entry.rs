use crate::data::value::Value;
use serde::{Deserialize, Serialize};

/// One row of a key/value listing
///
/// Entries are kept in input order; nothing about a listing requires keys to
/// be unique, so two entries may carry the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse an env-style `KEY=VALUE` line
    ///
    /// Splits on the first `=`; the value side stays text, since env values
    /// carry no type information. Returns None for lines without `=` or with
    /// an empty key.
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Entry::new(key, Value::Text(value.to_string())))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The canonical text of this entry's value
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }
}
