use serde::Deserialize;

use crate::{
    ast::{BinOp, LookupSource, UnaryOp},
    types::Type,
    value::Value,
};

/// One node of an expression tree.
///
/// Sources are built, never mutated, so a tree is acyclic by construction.
/// Indirection through [`Source::Symbol`] is the only way a definition can
/// refer back to itself, which the resolver guards with a depth limit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// Literal value. A `null` literal resolves to "no value".
    Static { value: Value },

    /// Reference to a source bound in the symbol registry
    Symbol {
        name: String,
        #[serde(default)]
        namespace: Option<String>,
    },

    /// Binary operator expression
    Infix {
        left: Box<Source>,
        operator: BinOp,
        right: Box<Source>,
    },

    /// Unary operator expression
    Unary {
        operator: UnaryOp,
        operand: Box<Source>,
    },

    /// Sub-resolution coerced to a target type
    Value {
        #[serde(rename = "type")]
        ty: Type,
        source: Box<Source>,
    },

    /// Tabular query against a delimited file
    Lookup(LookupSource),
}

/// Variant tag of a [`Source`], used to key the resolver map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Static,
    Symbol,
    Infix,
    Unary,
    Value,
    Lookup,
}

impl SourceKind {
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Static => "static",
            SourceKind::Symbol => "symbol",
            SourceKind::Infix => "infix",
            SourceKind::Unary => "unary",
            SourceKind::Value => "value",
            SourceKind::Lookup => "lookup",
        }
    }
}

impl Source {
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Static { .. } => SourceKind::Static,
            Source::Symbol { .. } => SourceKind::Symbol,
            Source::Infix { .. } => SourceKind::Infix,
            Source::Unary { .. } => SourceKind::Unary,
            Source::Value { .. } => SourceKind::Value,
            Source::Lookup(_) => SourceKind::Lookup,
        }
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Source::Static {
            value: value.into(),
        }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Source::Symbol {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Source::Symbol {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    pub fn infix(left: Source, operator: BinOp, right: Source) -> Self {
        Source::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOp, operand: Source) -> Self {
        Source::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn typed(ty: Type, source: Source) -> Self {
        Source::Value {
            ty,
            source: Box::new(source),
        }
    }

    /// Parses a source definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, crate::ResolveError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<LookupSource> for Source {
    fn from(lookup: LookupSource) -> Self {
        Source::Lookup(lookup)
    }
}
