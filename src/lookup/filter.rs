use std::cmp::Ordering;

use crate::{
    ast::{Filter, RangeFilter, ValueFilter},
    error::ResolveError,
    lookup::CsvRecord,
    operators::OverloaderManager,
    value::Value,
};

impl Filter {
    /// Tests `record` against this filter's already resolved comparison value.
    pub fn matches(
        &self,
        record: &CsvRecord,
        value: &Value,
        overloaders: &OverloaderManager,
    ) -> Result<bool, ResolveError> {
        match self {
            Filter::Value(filter) => filter.matches(record, value, overloaders),
            Filter::Range(filter) => Ok(filter.matches(record, value)),
        }
    }
}

impl ValueFilter {
    /// Evaluates `cell <operator> value`; the row matches when the result is
    /// truthy. A missing cell takes part as `null`.
    pub fn matches(
        &self,
        record: &CsvRecord,
        value: &Value,
        overloaders: &OverloaderManager,
    ) -> Result<bool, ResolveError> {
        let cell = record.value(&self.column);
        Ok(overloaders.evaluate(&cell, value, self.operator)?.is_truthy())
    }
}

impl RangeFilter {
    /// `min <= value < max`. Rows missing either bound never match.
    pub fn matches(&self, record: &CsvRecord, value: &Value) -> bool {
        let (Some(min), Some(max)) = (record.get(&self.min_column), record.get(&self.max_column)) else {
            return false;
        };
        let above_min = matches!(
            value.loose_cmp(&Value::from(min)),
            Some(Ordering::Greater | Ordering::Equal)
        );
        above_min && value.loose_cmp(&Value::from(max)) == Some(Ordering::Less)
    }
}
