use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::ResolveError;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum BinOp {
    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,

    // Comparison
    /// Loose equality (`==` or `=`)
    #[default]
    Equal,
    /// Strict equality (`===`)
    StrictEqual,
    /// Loose inequality (`!=`)
    NotEqual,
    /// Strict inequality (`!==`)
    StrictNotEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Logical
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,
    /// Exclusive OR (`xor`)
    Xor,

    // Collections
    /// Left collection contains right value, or is a superset of it (`has`)
    Has,
    /// Left value is contained in, or is a subset of, right (`in`)
    In,
    /// Operands share at least one element (`intersects`)
    Intersects,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Equal => "==",
            BinOp::StrictEqual => "===",
            BinOp::NotEqual => "!=",
            BinOp::StrictNotEqual => "!==",
            BinOp::LessThan => "<",
            BinOp::LessEqual => "<=",
            BinOp::GreaterThan => ">",
            BinOp::GreaterEqual => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Xor => "xor",
            BinOp::Has => "has",
            BinOp::In => "in",
            BinOp::Intersects => "intersects",
        }
    }
}

impl FromStr for BinOp {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "+" => BinOp::Add,
            "-" => BinOp::Subtract,
            "*" => BinOp::Multiply,
            "/" => BinOp::Divide,
            "=" | "==" => BinOp::Equal,
            "===" => BinOp::StrictEqual,
            "!=" => BinOp::NotEqual,
            "!==" => BinOp::StrictNotEqual,
            "<" => BinOp::LessThan,
            "<=" => BinOp::LessEqual,
            ">" => BinOp::GreaterThan,
            ">=" => BinOp::GreaterEqual,
            "&&" => BinOp::And,
            "||" => BinOp::Or,
            "xor" => BinOp::Xor,
            "has" => BinOp::Has,
            "in" => BinOp::In,
            "intersects" => BinOp::Intersects,
            other => return Err(ResolveError::UnsupportedOperator(other.to_string())),
        };
        Ok(op)
    }
}

impl TryFrom<String> for BinOp {
    type Error = ResolveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum UnaryOp {
    /// Logical negation (`!`)
    Not,
    /// Arithmetic negation (`-`)
    Negate,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }
}

impl FromStr for UnaryOp {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "!" => Ok(UnaryOp::Not),
            "-" => Ok(UnaryOp::Negate),
            other => Err(ResolveError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for UnaryOp {
    type Error = ResolveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
