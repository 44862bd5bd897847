use std::sync::Arc;

use indexmap::IndexMap;
use crate::{ast::Column, numeric::Number, value::Value};

/// One decoded row.
///
/// Cells are raw text. Files with a header share one header row between all
/// their records; such records are addressable by name as well as by
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRecord {
    header: Option<Arc<[String]>>,
    cells: Vec<String>,
}

impl CsvRecord {
    pub fn new(header: Option<Arc<[String]>>, cells: Vec<String>) -> Self {
        CsvRecord { header, cells }
    }

    /// A record of a headerless file.
    pub fn positional<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        CsvRecord::new(None, cells.into_iter().map(Into::into).collect())
    }

    fn position(&self, column: &Column) -> Option<usize> {
        match column {
            Column::Index(i) => Some(*i),
            Column::Name(name) => self.header.as_ref()?.iter().position(|h| h == name),
        }
    }

    pub fn get(&self, column: &Column) -> Option<&str> {
        self.cells.get(self.position(column)?).map(String::as_str)
    }

    /// The cell as a number, if it holds numeric text.
    pub fn get_numeric(&self, column: &Column) -> Option<Number> {
        Number::parse(self.get(column)?)
    }

    pub fn has(&self, column: &Column) -> bool {
        self.get(column).is_some()
    }

    /// The cell as a string value, `Null` when the row has no such column.
    pub fn value(&self, column: &Column) -> Value {
        self.get(column).map(Value::from).unwrap_or(Value::Null)
    }

    /// Projects the record onto `columns`: the whole row when empty, the bare
    /// cell for a single column, and an ordered object otherwise. Missing
    /// columns are present as `null`.
    pub fn extract(&self, columns: &[Column]) -> Value {
        match columns {
            [] => self.to_value(),
            [column] => self.value(column),
            _ => Value::Object(
                columns
                    .iter()
                    .map(|column| (column.to_string(), self.value(column)))
                    .collect(),
            ),
        }
    }

    /// The whole row: an object keyed by header names, or an array of cells
    /// for headerless files.
    pub fn to_value(&self) -> Value {
        match &self.header {
            Some(header) => {
                let mut row = IndexMap::with_capacity(header.len());
                for (i, name) in header.iter().enumerate() {
                    let cell = self.cells.get(i).map(Value::from).unwrap_or(Value::Null);
                    row.insert(name.clone(), cell);
                }
                Value::Object(row)
            }
            None => Value::Array(self.cells.iter().map(Value::from).collect()),
        }
    }
}
