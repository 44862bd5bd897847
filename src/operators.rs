//! Operator overloading.
//!
//! Binary operators are evaluated by an ordered chain of
//! [`OperatorOverloader`]s. Each overloader claims a family of
//! operator/operand combinations through [`supports`](OperatorOverloader::supports);
//! the [`OverloaderManager`] asks them in registration order and lets the
//! first one that claims the triple evaluate it.
//!
//! `supports` is load-bearing: an overloader must never fail inside
//! `evaluate` for a triple it accepted, which is why `evaluate` returns a bare
//! [`Value`].
//!
//! ```
//! use lookup_resolver::{BinOp, Value};
//! use lookup_resolver::operators::OverloaderManager;
//!
//! let ops = OverloaderManager::default();
//! let result = ops.evaluate(&Value::from("75000"), &Value::Integer(10000), BinOp::Add).unwrap();
//! assert_eq!(result, Value::Integer(85000));
//!
//! let allowed = Value::from(vec!["NYC", "LA"]);
//! assert_eq!(ops.evaluate(&Value::from("LA"), &allowed, BinOp::In).unwrap(), Value::Boolean(true));
//! ```

mod arithmetic;
mod collections;
mod comparison;
mod logical;

pub use arithmetic::ArithmeticOverloader;
pub use collections::{HasOverloader, InOverloader, IntersectsOverloader};
pub use comparison::ComparisonOverloader;
pub use logical::LogicalOverloader;

use crate::{ast::BinOp, error::ResolveError, output::to_short, value::Value};

/// One family of operator/operand combinations.
pub trait OperatorOverloader: Send + Sync {
    fn supports(&self, left: &Value, right: &Value, op: BinOp) -> bool;

    /// Only called for triples accepted by [`supports`](Self::supports).
    fn evaluate(&self, left: &Value, right: &Value, op: BinOp) -> Value;
}

/// Ordered chain of overloaders; the first that supports a triple wins.
pub struct OverloaderManager {
    overloaders: Vec<Box<dyn OperatorOverloader>>,
}

impl OverloaderManager {
    pub fn new(overloaders: Vec<Box<dyn OperatorOverloader>>) -> Self {
        OverloaderManager { overloaders }
    }

    fn find(&self, left: &Value, right: &Value, op: BinOp) -> Option<&dyn OperatorOverloader> {
        self.overloaders
            .iter()
            .map(|o| o.as_ref())
            .find(|o| o.supports(left, right, op))
    }

    pub fn supports(&self, left: &Value, right: &Value, op: BinOp) -> bool {
        self.find(left, right, op).is_some()
    }

    pub fn evaluate(&self, left: &Value, right: &Value, op: BinOp) -> Result<Value, ResolveError> {
        match self.find(left, right, op) {
            Some(overloader) => Ok(overloader.evaluate(left, right, op)),
            None => Err(ResolveError::NoOverloader {
                left: to_short(left),
                operator: op.symbol().to_string(),
                right: to_short(right),
            }),
        }
    }
}

impl Default for OverloaderManager {
    /// Arithmetic, comparison, `has`, `in`, logical, `intersects`.
    fn default() -> Self {
        OverloaderManager::new(vec![
            Box::new(ArithmeticOverloader),
            Box::new(ComparisonOverloader),
            Box::new(HasOverloader),
            Box::new(InOverloader),
            Box::new(LogicalOverloader),
            Box::new(IntersectsOverloader),
        ])
    }
}
