use std::{io, path::PathBuf};

use thiserror::Error;

use crate::value::Value;

/// Outcome of resolving a [`Source`](crate::Source).
///
/// `Ok(None)` means "no value" (a lookup miss, an unbound symbol) and is
/// distinct from `Err`, which aborts every enclosing resolution.
pub type Resolution = Result<Option<Value>, ResolveError>;

/// Errors that can occur while resolving sources.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The dispatcher has no resolver registered for this kind of source
    #[error("No resolver found for source of type {0}")]
    NoResolverForSource(&'static str),

    /// Lookup names an aggregate that does not exist
    #[error("Unknown aggregate: {0}")]
    UnknownAggregate(String),

    /// Sum/avg/min/max configured without an aggregate column
    #[error("aggregateColumn is required when using '{0}' aggregate")]
    MissingAggregateColumn(&'static str),

    /// Operator symbol that no part of the engine understands
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// No overloader accepts this operator/operand combination
    #[error("No overloader found for [{left}] {operator} [{right}]")]
    NoOverloader {
        left: String,
        operator: String,
        right: String,
    },

    /// A value could not be converted into the requested type
    #[error("Unable to transform into [{ty}] from [{value}]")]
    TypeCoercion { ty: String, value: String },

    /// Collection items may not coerce to "no value"
    #[error("{0} item can not be a None")]
    NoneItem(&'static str),

    /// Arithmetic negation of a non-numeric operand
    #[error("not numeric: {0}")]
    NotNumeric(String),

    /// Backing file missing or unreadable
    #[error("Unable to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing file failed mid-stream
    #[error("Unable to read record from {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Lookup definition that can never be executed
    #[error("Invalid lookup: {0}")]
    InvalidLookup(String),

    /// Symbol table input contained something other than sources
    #[error("Invalid symbol table: {0}")]
    InvalidSymbolTable(String),

    /// Resolution nested deeper than the configured limit
    #[error("Maximum resolution depth of {depth} exceeded (cyclic symbol reference?)")]
    RecursionLimit { depth: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
