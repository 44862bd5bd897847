use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{
    ast::Column,
    error::ResolveError,
    lookup::CsvRecord,
    numeric::Number,
    value::Value,
};

/// Reduction applied to the rows a lookup matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    First,
    Last,
    Count,
    Sum,
    Avg,
    Min,
    Max,
    All,
}

impl Aggregate {
    pub fn name(self) -> &'static str {
        match self {
            Aggregate::First => "first",
            Aggregate::Last => "last",
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Avg => "avg",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::All => "all",
        }
    }

    /// Whether the aggregate reads an aggregate column.
    pub fn requires_column(self) -> bool {
        matches!(self, Aggregate::Sum | Aggregate::Avg | Aggregate::Min | Aggregate::Max)
    }

    pub fn initial(self) -> AggregateState {
        match self {
            Aggregate::First => AggregateState::First(None),
            Aggregate::Last => AggregateState::Last(None),
            Aggregate::Count => AggregateState::Count(0),
            Aggregate::Sum => AggregateState::Sum {
                total: Number::ZERO,
                seen: false,
            },
            Aggregate::Avg => AggregateState::Avg {
                total: Number::ZERO,
                count: 0,
            },
            Aggregate::Min => AggregateState::Min(None),
            Aggregate::Max => AggregateState::Max(None),
            Aggregate::All => AggregateState::All(Vec::new()),
        }
    }
}

impl FromStr for Aggregate {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "first" => Aggregate::First,
            "last" => Aggregate::Last,
            "count" => Aggregate::Count,
            "sum" => Aggregate::Sum,
            "avg" => Aggregate::Avg,
            "min" => Aggregate::Min,
            "max" => Aggregate::Max,
            "all" => Aggregate::All,
            other => return Err(ResolveError::UnknownAggregate(other.to_string())),
        })
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulator of one aggregate over the matched rows.
///
/// [`process`](Self::process) consumes the state and returns the next one.
/// Only `All` grows with the number of matches; `First`, `Last`, `Min` and
/// `Max` hold at most one record.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateState {
    First(Option<CsvRecord>),
    Last(Option<CsvRecord>),
    Count(i64),
    Sum { total: Number, seen: bool },
    Avg { total: Number, count: u64 },
    /// Best record so far and its aggregate-column value
    Min(Option<(CsvRecord, Value)>),
    Max(Option<(CsvRecord, Value)>),
    All(Vec<CsvRecord>),
}

impl AggregateState {
    pub fn aggregate(&self) -> Aggregate {
        match self {
            AggregateState::First(_) => Aggregate::First,
            AggregateState::Last(_) => Aggregate::Last,
            AggregateState::Count(_) => Aggregate::Count,
            AggregateState::Sum { .. } => Aggregate::Sum,
            AggregateState::Avg { .. } => Aggregate::Avg,
            AggregateState::Min(_) => Aggregate::Min,
            AggregateState::Max(_) => Aggregate::Max,
            AggregateState::All(_) => Aggregate::All,
        }
    }

    /// Feeds one matching record into the state.
    ///
    /// Sum and avg skip records whose aggregate column is not numeric; min and
    /// max skip records that lack the column or whose value does not compare.
    pub fn process(self, record: CsvRecord, column: Option<&Column>) -> Result<Self, ResolveError> {
        let aggregate = self.aggregate();
        if column.is_none() && aggregate.requires_column() {
            return Err(ResolveError::MissingAggregateColumn(aggregate.name()));
        }

        Ok(match (self, column) {
            (AggregateState::First(None), _) => AggregateState::First(Some(record)),
            (state @ AggregateState::First(Some(_)), _) => state,
            (AggregateState::Last(_), _) => AggregateState::Last(Some(record)),
            (AggregateState::Count(n), _) => AggregateState::Count(n.saturating_add(1)),
            (AggregateState::Sum { total, seen }, Some(column)) => match record.get_numeric(column) {
                Some(v) => AggregateState::Sum {
                    total: total + v,
                    seen: true,
                },
                None => AggregateState::Sum { total, seen },
            },
            (AggregateState::Avg { total, count }, Some(column)) => match record.get_numeric(column) {
                Some(v) => AggregateState::Avg {
                    total: total + v,
                    count: count + 1,
                },
                None => AggregateState::Avg { total, count },
            },
            (AggregateState::Min(best), Some(column)) => {
                AggregateState::Min(keep_best(best, record, column, Ordering::Less))
            }
            (AggregateState::Max(best), Some(column)) => {
                AggregateState::Max(keep_best(best, record, column, Ordering::Greater))
            }
            (AggregateState::All(mut records), _) => {
                records.push(record);
                AggregateState::All(records)
            }
            (state, None) => state,
        })
    }

    /// True once no further record can change the result.
    pub fn can_early_exit(&self) -> bool {
        matches!(self, AggregateState::First(Some(_)))
    }

    /// The aggregate's result, projected onto `columns` for the aggregates
    /// that produce records. `None` when nothing was aggregated.
    pub fn finalize(self, columns: &[Column]) -> Option<Value> {
        match self {
            AggregateState::First(record) | AggregateState::Last(record) => {
                record.map(|r| r.extract(columns))
            }
            AggregateState::Count(n) => (n > 0).then_some(Value::Integer(n)),
            AggregateState::Sum { total, seen } => seen.then(|| total.to_value()),
            AggregateState::Avg { total, count } => {
                (count > 0).then(|| total.div_count(count).to_value())
            }
            AggregateState::Min(best) | AggregateState::Max(best) => {
                best.map(|(record, _)| record.extract(columns))
            }
            AggregateState::All(records) => {
                (!records.is_empty()).then(|| Value::Array(records.iter().map(|r| r.extract(columns)).collect()))
            }
        }
    }
}

/// Replaces `best` with `record` when its value at `column` orders as
/// `wanted` against the current best. Ties keep the earlier record.
fn keep_best(
    best: Option<(CsvRecord, Value)>,
    record: CsvRecord,
    column: &Column,
    wanted: Ordering,
) -> Option<(CsvRecord, Value)> {
    let value = record.value(column);
    if value.is_null() {
        return best;
    }
    let better = match &best {
        Some((_, current)) => value.loose_cmp(current) == Some(wanted),
        None => true,
    };
    if better { Some((record, value)) } else { best }
}
