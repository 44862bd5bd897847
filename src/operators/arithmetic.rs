use crate::{ast::BinOp, numeric, operators::OperatorOverloader, value::Value};

/// `+ - * /` over numbers and numeric text.
///
/// Division by zero is not claimed, so it surfaces as an unsupported triple
/// rather than a panic inside `evaluate`.
pub struct ArithmeticOverloader;

impl OperatorOverloader for ArithmeticOverloader {
    fn supports(&self, left: &Value, right: &Value, op: BinOp) -> bool {
        matches!(op, BinOp::Add | BinOp::Subtract | BinOp::Multiply | BinOp::Divide)
            && numeric::arithmetic(op, left, right).is_some()
    }

    fn evaluate(&self, left: &Value, right: &Value, op: BinOp) -> Value {
        numeric::arithmetic(op, left, right).unwrap_or(Value::Null)
    }
}
