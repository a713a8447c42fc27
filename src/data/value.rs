use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// The broad shape of a value, used for diagnostics and load summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Number,
    Bool,
    Null,
}

/// A single displayable value in a key/value listing
///
/// The variant set is closed on purpose: every value a listing can carry has
/// exactly one canonical textual form, produced by `Display`. All renderers
/// and exporters go through that conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Value {
    /// Infer a typed value from an untyped string (CSV cells, raw input)
    pub fn infer(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            return Value::Null;
        }

        if s.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if s.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }

        if let Ok(n) = s.parse::<f64>() {
            return Value::Number(n);
        }

        Value::Text(s.to_string())
    }

    /// Convert a JSON value to a listing value
    ///
    /// Scalars map to the matching variant. Arrays and objects have no
    /// variant of their own and are kept as their compact JSON text.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .unwrap_or_else(|| Value::Text(n.to_string())),
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => Value::Text(json.to_string()),
        }
    }

    /// Convert back to a JSON value (used by the JSON exporter)
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(n.to_string())),
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Null => JsonValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, ""),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_text_forms() {
        assert_eq!(Value::Text("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::Number(1000.0).to_string(), "1000");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_infer() {
        assert_eq!(Value::infer("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::infer("1000"), Value::Number(1000.0));
        assert_eq!(Value::infer("2.5"), Value::Number(2.5));
        assert_eq!(Value::infer("true"), Value::Bool(true));
        assert_eq!(Value::infer("FALSE"), Value::Bool(false));
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("null"), Value::Null);
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from_json(&json!(null)), Value::Null);
        assert_eq!(Value::from_json(&json!(true)), Value::Bool(true));
        assert_eq!(Value::from_json(&json!(1000)), Value::Number(1000.0));
        assert_eq!(
            Value::from_json(&json!("timeout")),
            Value::Text("timeout".to_string())
        );
    }

    #[test]
    fn test_from_json_compound_kept_as_text() {
        let value = Value::from_json(&json!({"a": 1}));
        assert_eq!(value, Value::Text("{\"a\":1}".to_string()));

        let value = Value::from_json(&json!([1, 2]));
        assert_eq!(value, Value::Text("[1,2]".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        assert_eq!(Value::Number(1000.0).to_json(), json!(1000.0));
        assert_eq!(Value::Bool(false).to_json(), json!(false));
        assert_eq!(Value::Null.to_json(), json!(null));
        assert_eq!(Value::Text("x".to_string()).to_json(), json!("x"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Text(String::new()).kind(), ValueKind::Text);
        assert_eq!(Value::Number(0.0).kind(), ValueKind::Number);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Null.kind(), ValueKind::Null);
    }
}
