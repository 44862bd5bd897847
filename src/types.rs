//! Target types for [`Source::Value`](crate::Source::Value) definitions.
//!
//! A type either *coerces* a resolved value (converting text such as `"yes"`,
//! `"12.5%"` or a JSON document into the target shape) or *asserts* that a
//! value already has that shape. Both return `Ok(None)` when the input is a
//! recognised "empty" marker, such as `""` or `"null"` for strings and
//! numbers.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::{Resolution, ResolveError},
    numeric,
    output::to_short,
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Type {
    Boolean,
    Number,
    String,
    /// List whose items all have the inner type
    List { of: Box<Type> },
    /// Dictionary whose values all have the inner type
    Dict { of: Box<Type> },
}

impl Type {
    pub fn list_of(of: Type) -> Self {
        Type::List { of: Box::new(of) }
    }

    pub fn dict_of(of: Type) -> Self {
        Type::Dict { of: Box::new(of) }
    }

    /// Name used in coercion errors.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Boolean => "boolean",
            Type::Number => "numeric",
            Type::String => "string",
            Type::List { .. } => "list",
            Type::Dict { .. } => "dict",
        }
    }

    fn reject(&self, value: &Value) -> ResolveError {
        ResolveError::TypeCoercion {
            ty: self.name().to_string(),
            value: to_short(value),
        }
    }

    /// Converts `value` into this type.
    pub fn coerce(&self, value: &Value) -> Resolution {
        match self {
            Type::Boolean => match value {
                Value::Boolean(b) => Ok(Some(Value::Boolean(*b))),
                Value::Integer(1) => Ok(Some(Value::Boolean(true))),
                Value::Integer(0) | Value::Null => Ok(Some(Value::Boolean(false))),
                Value::String(s) => match s.as_str() {
                    "yes" | "on" | "1" | "true" | "TRUE" => Ok(Some(Value::Boolean(true))),
                    "no" | "off" | "0" | "false" | "FALSE" => Ok(Some(Value::Boolean(false))),
                    _ => Err(self.reject(value)),
                },
                _ => Err(self.reject(value)),
            },
            Type::Number => match value {
                Value::String(s) if s.is_empty() || s == "null" => Ok(None),
                Value::Integer(_) | Value::Float(_) => Ok(Some(value.clone())),
                Value::String(s) => {
                    if let Some(n) = numeric::parse_number(s) {
                        return Ok(Some(n));
                    }
                    // "12.5%" reads as a fraction
                    if let Some((head, _)) = s.split_once('%')
                        && let Some(n) = numeric::parse_number(head)
                        && let Some(fraction) = numeric::arithmetic(
                            crate::ast::BinOp::Divide,
                            &n,
                            &Value::Integer(100),
                        )
                    {
                        return Ok(Some(fraction));
                    }
                    Err(self.reject(value))
                }
                _ => Err(self.reject(value)),
            },
            Type::String => match value {
                Value::String(s) if s.is_empty() || s == "null" => Ok(None),
                Value::String(_) => Ok(Some(value.clone())),
                Value::Integer(n) => Ok(Some(Value::String(n.to_string()))),
                Value::Float(n) => Ok(Some(Value::String(n.to_string()))),
                _ => Err(self.reject(value)),
            },
            Type::List { of } => {
                let decoded = decode_json(value);
                let items = match decoded.as_ref().unwrap_or(value) {
                    Value::Array(items) => items.iter().collect::<Vec<_>>(),
                    Value::Object(obj) => obj.values().collect(),
                    _ => return Err(self.reject(value)),
                };
                let items = items
                    .into_iter()
                    .map(|item| required_item("List", of.coerce(item)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Value::Array(items)))
            }
            Type::Dict { of } => {
                let decoded = decode_json(value);
                let entries = dict_entries(decoded.as_ref().unwrap_or(value))
                    .ok_or_else(|| self.reject(value))?;
                if entries.is_empty() {
                    return Ok(None);
                }
                let dict = entries
                    .into_iter()
                    .map(|(k, item)| -> Result<(String, Value), ResolveError> {
                        Ok((k, required_item("Dict", of.coerce(item))?))
                    })
                    .collect::<Result<IndexMap<_, _>, _>>()?;
                Ok(Some(Value::Object(dict)))
            }
        }
    }

    /// Checks that `value` already is this type, without converting it.
    pub fn assert(&self, value: &Value) -> Resolution {
        match self {
            Type::Boolean => match value {
                Value::Boolean(_) => Ok(Some(value.clone())),
                _ => Err(self.reject(value)),
            },
            Type::Number => match value {
                Value::Integer(_) | Value::Float(_) => Ok(Some(value.clone())),
                _ => Err(self.reject(value)),
            },
            Type::String => match value {
                Value::String(s) if s.is_empty() || s == "null" => Ok(None),
                Value::String(_) => Ok(Some(value.clone())),
                _ => Err(self.reject(value)),
            },
            Type::List { of } => {
                let Value::Array(items) = value else {
                    return Err(self.reject(value));
                };
                let items = items
                    .iter()
                    .map(|item| required_item("List", of.assert(item)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Value::Array(items)))
            }
            Type::Dict { of } => {
                let entries = dict_entries(value).ok_or_else(|| self.reject(value))?;
                if entries.is_empty() {
                    return Ok(None);
                }
                let dict = entries
                    .into_iter()
                    .map(|(k, item)| -> Result<(String, Value), ResolveError> {
                        Ok((k, required_item("Dict", of.assert(item))?))
                    })
                    .collect::<Result<IndexMap<_, _>, _>>()?;
                Ok(Some(Value::Object(dict)))
            }
        }
    }
}

/// Decodes a string holding a non-empty JSON document.
fn decode_json(value: &Value) -> Option<Value> {
    let Value::String(s) = value else {
        return None;
    };
    let decoded: serde_json::Value = serde_json::from_str(s).ok()?;
    let decoded = Value::from(decoded);
    decoded.is_truthy().then_some(decoded)
}

/// Entries of a dict-like value: objects by key, arrays by position.
fn dict_entries(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Object(obj) => Some(obj.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => None,
    }
}

fn required_item(kind: &'static str, item: Resolution) -> Result<Value, ResolveError> {
    item?.ok_or(ResolveError::NoneItem(kind))
}
