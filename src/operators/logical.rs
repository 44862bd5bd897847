use crate::{ast::BinOp, operators::OperatorOverloader, value::Value};

/// `&& || xor` over two booleans.
pub struct LogicalOverloader;

impl OperatorOverloader for LogicalOverloader {
    fn supports(&self, left: &Value, right: &Value, op: BinOp) -> bool {
        matches!(op, BinOp::And | BinOp::Or | BinOp::Xor)
            && matches!((left, right), (Value::Boolean(_), Value::Boolean(_)))
    }

    fn evaluate(&self, left: &Value, right: &Value, op: BinOp) -> Value {
        let (Value::Boolean(a), Value::Boolean(b)) = (left, right) else {
            return Value::Null;
        };
        let result = match op {
            BinOp::And => *a && *b,
            BinOp::Or => *a || *b,
            BinOp::Xor => a != b,
            _ => return Value::Null,
        };
        Value::Boolean(result)
    }
}
