use std::{fmt, path::PathBuf};

use serde::Deserialize;

use crate::ast::{BinOp, Source};

/// A column addressed by header name or by zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Column {
    Index(usize),
    Name(String),
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Index(i) => write!(f, "{i}"),
            Column::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::Name(name)
    }
}

impl From<usize> for Column {
    fn from(index: usize) -> Self {
        Column::Index(index)
    }
}

/// Compares a column against a resolved value with an operator (default
/// `==`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueFilter {
    pub column: Column,
    pub value: Source,
    #[serde(default)]
    pub operator: BinOp,
}

/// Half-open banding: matches when `min_column <= value < max_column`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeFilter {
    pub min_column: Column,
    pub max_column: Column,
    pub value: Source,
}

/// Row predicate of a lookup. Its comparison value is a [`Source`] resolved
/// once per lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    Value(ValueFilter),
    Range(RangeFilter),
}

impl Filter {
    /// The source that provides this filter's comparison value.
    pub fn value(&self) -> &Source {
        match self {
            Filter::Value(f) => &f.value,
            Filter::Range(f) => &f.value,
        }
    }
}

/// Tabular query: filter the rows of a delimited file and reduce the matches
/// with an aggregate.
///
/// The aggregate is kept by name (`first`, `last`, `count`, `sum`, `avg`,
/// `min`, `max`, `all`) and validated when the lookup is resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupSource {
    pub path: PathBuf,
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Columns to extract; empty means the whole row
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default = "default_aggregate")]
    pub aggregate: String,
    #[serde(default)]
    pub aggregate_column: Option<Column>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_aggregate() -> String {
    "first".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_has_header() -> bool {
    true
}

impl LookupSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LookupSource {
            path: path.into(),
            filters: Vec::new(),
            columns: Vec::new(),
            aggregate: default_aggregate(),
            aggregate_column: None,
            delimiter: default_delimiter(),
            has_header: default_has_header(),
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds a `column == value` filter.
    pub fn where_eq(self, column: impl Into<Column>, value: Source) -> Self {
        self.where_op(column, BinOp::Equal, value)
    }

    pub fn where_op(self, column: impl Into<Column>, operator: BinOp, value: Source) -> Self {
        self.filter(Filter::Value(ValueFilter {
            column: column.into(),
            value,
            operator,
        }))
    }

    /// Adds a `[min_column, max_column)` banding filter.
    pub fn where_in_range(
        self,
        min_column: impl Into<Column>,
        max_column: impl Into<Column>,
        value: Source,
    ) -> Self {
        self.filter(Filter::Range(RangeFilter {
            min_column: min_column.into(),
            max_column: max_column.into(),
            value,
        }))
    }

    pub fn columns<C: Into<Column>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn aggregate(mut self, aggregate: impl Into<String>) -> Self {
        self.aggregate = aggregate.into();
        self
    }

    pub fn aggregate_column(mut self, column: impl Into<Column>) -> Self {
        self.aggregate_column = Some(column.into());
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }
}
