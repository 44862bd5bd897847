use std::cmp::Ordering;

use crate::{ast::BinOp, operators::OperatorOverloader, value::Value};

/// `= == === != !== < <= > >=` over any operands.
///
/// `==` is loose equality, `===` requires the same variant and value.
/// Incomparable operands order as false.
pub struct ComparisonOverloader;

impl OperatorOverloader for ComparisonOverloader {
    fn supports(&self, _left: &Value, _right: &Value, op: BinOp) -> bool {
        matches!(
            op,
            BinOp::Equal
                | BinOp::StrictEqual
                | BinOp::NotEqual
                | BinOp::StrictNotEqual
                | BinOp::LessThan
                | BinOp::LessEqual
                | BinOp::GreaterThan
                | BinOp::GreaterEqual
        )
    }

    fn evaluate(&self, left: &Value, right: &Value, op: BinOp) -> Value {
        let ord = || left.loose_cmp(right);
        let result = match op {
            BinOp::Equal => left.loose_eq(right),
            BinOp::NotEqual => !left.loose_eq(right),
            BinOp::StrictEqual => left == right,
            BinOp::StrictNotEqual => left != right,
            BinOp::LessThan => ord() == Some(Ordering::Less),
            BinOp::LessEqual => matches!(ord(), Some(Ordering::Less | Ordering::Equal)),
            BinOp::GreaterThan => ord() == Some(Ordering::Greater),
            BinOp::GreaterEqual => matches!(ord(), Some(Ordering::Greater | Ordering::Equal)),
            _ => false,
        };
        Value::Boolean(result)
    }
}
