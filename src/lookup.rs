//! # Lookups
//!
//! Streaming evaluation of [`LookupSource`](crate::LookupSource): rows of a
//! delimited file are decoded one at a time, tested against the lookup's
//! filters and reduced by an aggregate.
//!
//! - **[reader]** - [`Filesystem`] abstraction and the [`RowReader`] stream
//! - **[record]** - [`CsvRecord`], one decoded row
//! - **[filter]** - row predicates for value and range filters
//! - **[aggregate]** - [`Aggregate`] strategies and their [`AggregateState`]
//! - **[resolver]** - [`LookupResolver`], which ties the above together
//!
//! Only `all` keeps more than one row in memory; the other aggregates run in
//! constant space regardless of file size, and `first` stops reading at the
//! first match.
//!
//! ```
//! use lookup_resolver::{DelegatingResolver, LookupSource, Source, SourceKind, Value};
//! use lookup_resolver::lookup::{LookupResolver, MemoryFilesystem};
//! use lookup_resolver::resolver::StaticResolver;
//!
//! let files = MemoryFilesystem::new().with_file(
//!     "premium_bands.csv",
//!     "min_turnover,max_turnover,premium\n0,100000,10\n100000,200000,15\n",
//! );
//! let resolver = DelegatingResolver::new(32)
//!     .with_resolver(SourceKind::Static, StaticResolver)
//!     .with_resolver(SourceKind::Lookup, LookupResolver::new(files));
//!
//! let premium = LookupSource::new("premium_bands.csv")
//!     .where_in_range("min_turnover", "max_turnover", Source::literal(100000i64))
//!     .columns(["premium"]);
//! assert_eq!(resolver.resolve(&premium.into()).unwrap(), Some(Value::from("15")));
//! ```

pub mod aggregate;
pub mod filter;
pub mod reader;
pub mod record;
pub mod resolver;

pub use aggregate::{Aggregate, AggregateState};
pub use reader::{Filesystem, LocalFilesystem, MemoryFilesystem, RowReader};
pub use record::CsvRecord;
pub use resolver::LookupResolver;
