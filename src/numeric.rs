//! Numeric text recognition and exact decimal arithmetic.
//!
//! Cells read from delimited files are always text, so every numeric
//! operation in the engine starts by deciding whether a string "looks like a
//! number". Arithmetic is carried out in [`Decimal`] so that business values
//! such as `0.1 + 0.2` or `999.99 * 3` come out exact; results that are whole
//! collapse back to [`Value::Integer`].

use std::{cmp::Ordering, ops::Add, str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::{ast::BinOp, value::Value};

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").expect("numeric pattern is valid")
});

static INTEGRAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("integral pattern is valid"));

/// Returns true when `s` is numeric text: optional surrounding whitespace,
/// sign, decimal point and exponent.
pub fn is_numeric_str(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Parses numeric text into an `Integer` when it is integral and fits, and a
/// `Float` otherwise.
pub fn parse_number(s: &str) -> Option<Value> {
    if !is_numeric_str(s) {
        return None;
    }
    let trimmed = s.trim();
    if INTEGRAL.is_match(trimmed)
        && let Ok(n) = trimmed.trim_start_matches('+').parse::<i64>()
    {
        return Some(Value::Integer(n));
    }
    trimmed.parse::<f64>().ok().map(Value::Float)
}

/// Parses numeric text into a [`Decimal`].
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    if !is_numeric_str(s) {
        return None;
    }
    let trimmed = s.trim().trim_start_matches('+');
    if let Ok(d) = Decimal::from_str(trimmed) {
        return Some(d);
    }
    if trimmed.contains(['e', 'E'])
        && let Ok(d) = Decimal::from_scientific(trimmed)
    {
        return Some(d);
    }
    trimmed.parse::<f64>().ok().and_then(Decimal::from_f64)
}

/// A parsed number: exact while it fits in a [`Decimal`], floating point once
/// it does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Exact(Decimal),
    Approx(f64),
}

impl Number {
    pub const ZERO: Number = Number::Exact(Decimal::ZERO);

    /// Parses numeric text. Text outside decimal range parses as floating point.
    pub fn parse(s: &str) -> Option<Number> {
        if let Some(d) = parse_decimal(s) {
            return Some(Number::Exact(d));
        }
        if !is_numeric_str(s) {
            return None;
        }
        s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Approx)
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Exact(d) => d.to_f64().unwrap_or(f64::NAN),
            Number::Approx(f) => f,
        }
    }

    /// Divides by a non-zero count.
    pub fn div_count(self, count: u64) -> Number {
        if let Number::Exact(a) = self
            && let Some(q) = a.checked_div(Decimal::from(count))
        {
            return Number::Exact(q);
        }
        Number::Approx(self.to_f64() / count as f64)
    }

    pub fn to_value(self) -> Value {
        match self {
            Number::Exact(d) => from_decimal(d),
            Number::Approx(f) => Value::Float(f),
        }
    }
}

/// Leaves decimal once the sum overflows it.
impl Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        if let (Number::Exact(a), Number::Exact(b)) = (self, other)
            && let Some(sum) = a.checked_add(b)
        {
            return Number::Exact(sum);
        }
        Number::Approx(self.to_f64() + other.to_f64())
    }
}

/// Numeric view of a value, if it has one. Booleans and null are not numbers.
pub fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Integer(n) => Some(Decimal::from(*n)),
        Value::Float(n) => Decimal::from_f64(*n),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

pub fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::String(s) if is_numeric_str(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Converts a decimal result back into a value, keeping whole numbers as
/// integers.
pub fn from_decimal(d: Decimal) -> Value {
    let d = d.normalize();
    if d.is_integer()
        && let Some(n) = d.to_i64()
    {
        return Value::Integer(n);
    }
    d.to_f64().map(Value::Float).unwrap_or(Value::Null)
}

/// Orders two numeric values. `None` when either side is not numeric.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (to_decimal(a), to_decimal(b)) {
        return Some(x.cmp(&y));
    }
    let (x, y) = (to_f64(a)?, to_f64(b)?);
    x.partial_cmp(&y)
}

/// Applies `+ - * /` to two numeric values.
///
/// Returns `None` when an operand is not numeric or the divisor is zero.
pub fn arithmetic(op: BinOp, a: &Value, b: &Value) -> Option<Value> {
    if let (Some(x), Some(y)) = (to_decimal(a), to_decimal(b)) {
        let exact = match op {
            BinOp::Add => x.checked_add(y),
            BinOp::Subtract => x.checked_sub(y),
            BinOp::Multiply => x.checked_mul(y),
            BinOp::Divide if y.is_zero() => return None,
            BinOp::Divide => x.checked_div(y),
            _ => return None,
        };
        if let Some(rd) = exact {
            return Some(from_decimal(rd));
        }
    }

    // Outside decimal range: fall back to floating point.
    let (x, y) = (to_f64(a)?, to_f64(b)?);
    let res = match op {
        BinOp::Add => x + y,
        BinOp::Subtract => x - y,
        BinOp::Multiply => x * y,
        BinOp::Divide if y == 0.0 => return None,
        BinOp::Divide => x / y,
        _ => return None,
    };
    Some(Value::Float(res))
}
