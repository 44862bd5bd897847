use crate::{ast::BinOp, operators::OperatorOverloader, value::Value};

/// Text a scalar is compared by when sets meet. Collections have none.
fn set_key(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Boolean(false) => Some(String::new()),
        Value::Boolean(true) => Some("1".to_string()),
        Value::Integer(n) => Some(n.to_string()),
        Value::Float(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn set_contains(haystack: &[&Value], needle: &Value) -> bool {
    let Some(key) = set_key(needle) else {
        return false;
    };
    haystack.iter().any(|item| set_key(item).as_ref() == Some(&key))
}

/// `outer` holds `inner` as a loosely equal member, or as a subset by text
/// when `inner` is itself a collection.
fn holds(outer: &Value, inner: &Value) -> bool {
    let Some(members) = outer.members() else {
        return false;
    };
    match inner.members() {
        Some(subset) => subset.into_iter().all(|item| set_contains(&members, item)),
        None => members.iter().any(|item| item.loose_eq(inner)),
    }
}

/// `left has right`: left is a collection containing right, or a superset of
/// it.
pub struct HasOverloader;

impl OperatorOverloader for HasOverloader {
    fn supports(&self, left: &Value, _right: &Value, op: BinOp) -> bool {
        op == BinOp::Has && left.members().is_some()
    }

    fn evaluate(&self, left: &Value, right: &Value, _op: BinOp) -> Value {
        Value::Boolean(holds(left, right))
    }
}

/// `left in right`: the mirror of `has`.
pub struct InOverloader;

impl OperatorOverloader for InOverloader {
    fn supports(&self, _left: &Value, right: &Value, op: BinOp) -> bool {
        op == BinOp::In && right.members().is_some()
    }

    fn evaluate(&self, left: &Value, right: &Value, _op: BinOp) -> Value {
        Value::Boolean(holds(right, left))
    }
}

/// `left intersects right`: scalars act as singleton sets.
pub struct IntersectsOverloader;

impl OperatorOverloader for IntersectsOverloader {
    fn supports(&self, _left: &Value, _right: &Value, op: BinOp) -> bool {
        op == BinOp::Intersects
    }

    fn evaluate(&self, left: &Value, right: &Value, _op: BinOp) -> Value {
        let left = left.members().unwrap_or_else(|| vec![left]);
        let right = right.members().unwrap_or_else(|| vec![right]);
        Value::Boolean(left.iter().any(|item| set_contains(&right, item)))
    }
}
