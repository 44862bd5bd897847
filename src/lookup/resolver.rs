use log::debug;

use crate::{
    ast::{LookupSource, Source},
    error::{Resolution, ResolveError},
    lookup::{Aggregate, Filesystem, LocalFilesystem, RowReader},
    operators::OverloaderManager,
    resolver::{Resolver, SourceResolver},
    value::Value,
};

/// Resolves [`Source::Lookup`] by scanning the lookup's file.
///
/// Filter values are resolved once, through the resolver handed in, before
/// the first row is read. Rows are streamed in file order; matching rows feed
/// the aggregate until it can exit early or the file ends.
pub struct LookupResolver {
    filesystem: Box<dyn Filesystem>,
    overloaders: OverloaderManager,
}

impl LookupResolver {
    pub fn new(filesystem: impl Filesystem + 'static) -> Self {
        LookupResolver {
            filesystem: Box::new(filesystem),
            overloaders: OverloaderManager::default(),
        }
    }

    pub fn lookup(&self, lookup: &LookupSource, resolver: &dyn Resolver) -> Resolution {
        let aggregate: Aggregate = lookup.aggregate.parse()?;
        if aggregate.requires_column() && lookup.aggregate_column.is_none() {
            return Err(ResolveError::MissingAggregateColumn(aggregate.name()));
        }

        let mut values = Vec::with_capacity(lookup.filters.len());
        for filter in &lookup.filters {
            let Some(value) = resolver.resolve(filter.value())? else {
                debug!(
                    "lookup {}: filter value resolved to nothing, skipping scan",
                    lookup.path.display()
                );
                return Ok(None);
            };
            values.push(value);
        }

        let rows = RowReader::open(
            self.filesystem.as_ref(),
            &lookup.path,
            lookup.delimiter,
            lookup.has_header,
        )?;

        let mut state = aggregate.initial();
        let (mut read, mut matched, mut early_exit) = (0usize, 0usize, false);
        for row in rows {
            let record = row?;
            read += 1;

            let mut keep = true;
            for (filter, value) in lookup.filters.iter().zip(&values) {
                if !filter.matches(&record, value, &self.overloaders)? {
                    keep = false;
                    break;
                }
            }
            if !keep {
                continue;
            }

            matched += 1;
            state = state.process(record, lookup.aggregate_column.as_ref())?;
            if state.can_early_exit() {
                early_exit = true;
                break;
            }
        }

        debug!(
            "lookup {} ({aggregate}): read {read} rows, matched {matched}, early exit: {early_exit}",
            lookup.path.display()
        );

        Ok(state.finalize(&lookup.columns).filter(|value| !is_empty(value)))
    }
}

impl Default for LookupResolver {
    fn default() -> Self {
        LookupResolver::new(LocalFilesystem::default())
    }
}

impl SourceResolver for LookupResolver {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution {
        let Source::Lookup(lookup) = source else {
            return Ok(None);
        };
        self.lookup(lookup, resolver)
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}
