use std::{cmp::Ordering, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::numeric;

/// A value produced or consumed by resolution.
///
/// Cells read from delimited files are always [`Value::String`]; literals,
/// arithmetic results and aggregates produce the other variants.
///
/// # Loose semantics
///
/// Comparison operators, value filters, banding and min/max aggregates use
/// *loose* semantics so that the text `"150000"` in a file compares equal to
/// the number `150000` in an expression:
///
/// - numeric text takes part in numeric comparison and arithmetic
/// - booleans compare by truthiness
/// - null equals `""`, `0`, `false` and empty collections
///
/// # Examples
///
/// ```
/// use lookup_resolver::Value;
/// use std::cmp::Ordering;
///
/// assert!(Value::from("30").loose_eq(&Value::Integer(30)));
/// assert_eq!(Value::from("9").loose_cmp(&Value::from("10")), Some(Ordering::Less));
/// assert!(!Value::from("0").is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Null,

    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    Float(f64),

    String(String),

    Array(Vec<Value>),

    /// Object with string keys, in insertion order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Truthiness as used by `!` and by value filters: null, false, zero,
    /// `""`, `"0"` and empty collections are false.
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Integer(n) => *n != 0,
            Float(n) => *n != 0.0,
            String(s) => !s.is_empty() && s != "0",
            Array(arr) => !arr.is_empty(),
            Object(obj) => !obj.is_empty(),
        }
    }

    /// Integers, floats and numeric text.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Integer(_) | Value::Float(_) => true,
            Value::String(s) => numeric::is_numeric_str(s),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Members of an array or the values of an object.
    pub fn members(&self) -> Option<Vec<&Value>> {
        match self {
            Value::Array(arr) => Some(arr.iter().collect()),
            Value::Object(obj) => Some(obj.values().collect()),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Scalar rendered as text, as used when a number meets a non-numeric
    /// string.
    fn scalar_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Loose equality (`==`).
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Boolean(b), v) | (v, Boolean(b)) => *b == v.is_truthy(),
            (Null, String(s)) | (String(s), Null) => s.is_empty(),
            (Null, v) | (v, Null) => !v.is_truthy(),
            (String(a), String(b)) if !(self.is_numeric() && other.is_numeric()) => a == b,
            (Array(a), Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Object(a), Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, x)| b.get(k).is_some_and(|y| x.loose_eq(y)))
            }
            _ if self.is_numeric() && other.is_numeric() => {
                numeric::compare(self, other) == Some(Ordering::Equal)
            }
            _ => match (self.scalar_text(), other.scalar_text()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Loose ordering used by `<`, `<=`, `>`, `>=`, range filters and the
    /// min/max aggregates. `None` when the two values are not comparable.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Null, String(s)) => Some("".cmp(s.as_str())),
            (String(s), Null) => Some(s.as_str().cmp("")),
            (Null | Boolean(_), _) | (_, Null | Boolean(_)) => {
                Some(self.is_truthy().cmp(&other.is_truthy()))
            }
            (Array(a), Array(b)) => {
                if a.len() != b.len() {
                    return Some(a.len().cmp(&b.len()));
                }
                for (x, y) in a.iter().zip(b) {
                    match x.loose_cmp(y)? {
                        Ordering::Equal => continue,
                        ord => return Some(ord),
                    }
                }
                Some(Ordering::Equal)
            }
            _ if self.is_numeric() && other.is_numeric() => numeric::compare(self, other),
            _ => match (self.scalar_text(), other.scalar_text()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::to_json(self))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
