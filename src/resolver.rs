//! # Resolution
//!
//! A [`DelegatingResolver`] turns a [`Source`] into a [`Resolution`]. It holds
//! one [`SourceResolver`] per [`SourceKind`] and hands each node to the
//! resolver registered for its kind. Composite nodes (operators, typed values,
//! lookups) resolve their children through the [`Resolver`] handle they are
//! given, which routes back into the same dispatcher.
//!
//! ```
//! use lookup_resolver::{BinOp, DelegatingResolver, EngineConfig, Source, SymbolEntry, SymbolRegistry, Value};
//!
//! let registry = SymbolRegistry::new([
//!     ("turnover", SymbolEntry::from(Source::literal(150000i64))),
//! ]);
//! let resolver = DelegatingResolver::standard(registry, EngineConfig::default());
//!
//! let premium = Source::infix(Source::symbol("turnover"), BinOp::Multiply, Source::literal(0.015));
//! assert_eq!(resolver.resolve(&premium).unwrap(), Some(Value::Integer(2250)));
//!
//! // unbound symbols are "no value", not an error
//! assert_eq!(resolver.resolve(&Source::symbol("missing")).unwrap(), None);
//! ```
//!
//! The dispatcher itself is immutable once built; a recursion depth limit
//! stops symbols that refer back to themselves.

mod basic;
mod operator;

pub use basic::{StaticResolver, SymbolResolver, ValueResolver};
pub use operator::{InfixResolver, UnaryResolver};

use std::{collections::HashMap, sync::Arc};

use log::{trace, warn};

use crate::{
    ast::{Source, SourceKind},
    config::EngineConfig,
    error::{Resolution, ResolveError},
    lookup::{LocalFilesystem, LookupResolver},
    registry::SymbolRegistry,
};

/// Anything that can resolve a source. Handed to [`SourceResolver`]s for
/// their child sources.
pub trait Resolver {
    fn resolve(&self, source: &Source) -> Resolution;
}

/// Resolves one kind of source. Child sources go through `resolver`, never
/// through a fixed concrete resolver.
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution;
}

/// Dispatches each source to the resolver registered for its kind.
pub struct DelegatingResolver {
    resolvers: HashMap<SourceKind, Box<dyn SourceResolver>>,
    max_depth: usize,
}

impl DelegatingResolver {
    /// An empty dispatcher; every source fails with
    /// [`ResolveError::NoResolverForSource`] until resolvers are registered.
    pub fn new(max_depth: usize) -> Self {
        DelegatingResolver {
            resolvers: HashMap::new(),
            max_depth,
        }
    }

    /// Registers `resolver` for `kind`, replacing any previous one.
    pub fn with_resolver(mut self, kind: SourceKind, resolver: impl SourceResolver + 'static) -> Self {
        self.resolvers.insert(kind, Box::new(resolver));
        self
    }

    /// A dispatcher with a resolver for every kind of source. Lookup paths are
    /// read from the local filesystem, relative to `config.base_dir` when set.
    pub fn standard(registry: SymbolRegistry, config: EngineConfig) -> Self {
        let filesystem = match config.base_dir {
            Some(dir) => LocalFilesystem::rooted(dir),
            None => LocalFilesystem::default(),
        };
        DelegatingResolver::new(config.max_depth)
            .with_resolver(SourceKind::Static, StaticResolver)
            .with_resolver(SourceKind::Symbol, SymbolResolver::new(Arc::new(registry)))
            .with_resolver(SourceKind::Infix, InfixResolver::default())
            .with_resolver(SourceKind::Unary, UnaryResolver)
            .with_resolver(SourceKind::Value, ValueResolver)
            .with_resolver(SourceKind::Lookup, LookupResolver::new(filesystem))
    }

    /// Resolves a top-level source.
    pub fn resolve(&self, source: &Source) -> Resolution {
        self.dispatch(source, 0)
    }

    fn dispatch(&self, source: &Source, depth: usize) -> Resolution {
        if depth > self.max_depth {
            warn!("resolution exceeded depth {}", self.max_depth);
            return Err(ResolveError::RecursionLimit {
                depth: self.max_depth,
            });
        }

        let kind = source.kind();
        let Some(resolver) = self.resolvers.get(&kind) else {
            return Err(ResolveError::NoResolverForSource(kind.name()));
        };
        trace!("resolving {} source at depth {depth}", kind.name());
        resolver.resolve(source, &Frame { dispatcher: self, depth })
    }
}

impl Resolver for DelegatingResolver {
    fn resolve(&self, source: &Source) -> Resolution {
        DelegatingResolver::resolve(self, source)
    }
}

/// The dispatcher as seen from inside one resolution: children resolve one
/// level deeper than their parent.
struct Frame<'a> {
    dispatcher: &'a DelegatingResolver,
    depth: usize,
}

impl Resolver for Frame<'_> {
    fn resolve(&self, source: &Source) -> Resolution {
        self.dispatcher.dispatch(source, self.depth + 1)
    }
}
