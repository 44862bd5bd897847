use crate::{
    ast::{Source, UnaryOp},
    error::{Resolution, ResolveError},
    operators::OverloaderManager,
    output::to_short,
    resolver::{Resolver, SourceResolver},
    value::Value,
};

/// Binary operators, evaluated through an [`OverloaderManager`]. A missing
/// operand takes part as `null`.
#[derive(Default)]
pub struct InfixResolver {
    overloaders: OverloaderManager,
}

impl InfixResolver {
    pub fn new(overloaders: OverloaderManager) -> Self {
        InfixResolver { overloaders }
    }
}

impl SourceResolver for InfixResolver {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution {
        let Source::Infix {
            left,
            operator,
            right,
        } = source
        else {
            return Ok(None);
        };
        let left = resolver.resolve(left)?.unwrap_or(Value::Null);
        let right = resolver.resolve(right)?.unwrap_or(Value::Null);

        let result = self.overloaders.evaluate(&left, &right, *operator)?;
        Ok((!result.is_null()).then_some(result))
    }
}

/// `!` and unary `-`. Nothing to apply when the operand has no value.
pub struct UnaryResolver;

impl SourceResolver for UnaryResolver {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution {
        let Source::Unary { operator, operand } = source else {
            return Ok(None);
        };
        let Some(value) = resolver.resolve(operand)? else {
            return Ok(None);
        };
        match operator {
            UnaryOp::Not => Ok(Some(Value::Boolean(!value.is_truthy()))),
            UnaryOp::Negate => negate(&value).map(Some),
        }
    }
}

fn negate(value: &Value) -> Result<Value, ResolveError> {
    match value {
        Value::Integer(n) => Ok(n
            .checked_neg()
            .map(Value::Integer)
            .unwrap_or(Value::Float(-(*n as f64)))),
        Value::Float(n) => Ok(Value::Float(-n)),
        other => Err(ResolveError::NotNumeric(to_short(other))),
    }
}
