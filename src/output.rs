//! Text rendering for resolved values.
//!
//! [`to_json()`] and [`to_json_pretty()`] render a [`Value`] as JSON with
//! object keys in insertion order, so a multi-column lookup result prints its
//! columns in the order they were requested. [`to_short()`] produces the
//! abbreviated form used inside error messages: strings are quoted and
//! truncated, collections are elided.
//!
//! # Examples
//!
//! ```
//! use lookup_resolver::Value;
//! use lookup_resolver::output::{to_json, to_short};
//!
//! let value = Value::from(vec!["Bob", "Eve"]);
//! assert_eq!(to_json(&value), r#"["Bob","Eve"]"#);
//! assert_eq!(to_short(&value), "[...]");
//! assert_eq!(to_short(&Value::from("abc")), "'abc'");
//! ```

use crate::value::Value;

/// Longest string rendered in full by [`to_short()`].
const SHORT_STRING_LEN: usize = 40;

/// Compact JSON, keys in insertion order.
pub fn to_json(value: &Value) -> String {
    serde_json::Value::from(value.clone()).to_string()
}

/// JSON with 2-space indentation, keys in insertion order.
pub fn to_json_pretty(value: &Value) -> String {
    format!("{:#}", serde_json::Value::from(value.clone()))
}

/// Abbreviated rendering for diagnostics.
pub fn to_short(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > SHORT_STRING_LEN => {
            let head: String = s.chars().take(SHORT_STRING_LEN).collect();
            format!("'{head}...'")
        }
        Value::String(s) => format!("'{s}'"),
        Value::Array(arr) if arr.is_empty() => "[]".to_string(),
        Value::Array(_) => "[...]".to_string(),
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        Value::Object(_) => "{...}".to_string(),
        scalar => to_json(scalar),
    }
}
