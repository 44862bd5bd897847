pub mod ast;
pub mod config;
pub mod error;
pub mod lookup;
pub mod numeric;
pub mod operators;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod value;

pub use ast::{BinOp, Column, Filter, LookupSource, RangeFilter, Source, SourceKind, UnaryOp, ValueFilter};
pub use config::EngineConfig;
pub use error::{Resolution, ResolveError};
pub use lookup::{Aggregate, AggregateState, CsvRecord, Filesystem, LookupResolver};
pub use operators::{OperatorOverloader, OverloaderManager};
pub use output::{to_json, to_json_pretty};
pub use registry::{SymbolEntry, SymbolRegistry};
pub use resolver::{DelegatingResolver, Resolver, SourceResolver};
pub use types::Type;
pub use value::Value;
