use std::sync::Arc;

use crate::{
    ast::Source,
    error::Resolution,
    registry::SymbolRegistry,
    resolver::{Resolver, SourceResolver},
};

/// Literals. A null literal is "no value".
pub struct StaticResolver;

impl SourceResolver for StaticResolver {
    fn resolve(&self, source: &Source, _resolver: &dyn Resolver) -> Resolution {
        let Source::Static { value } = source else {
            return Ok(None);
        };
        Ok((!value.is_null()).then(|| value.clone()))
    }
}

/// Resolves a symbol to whatever its bound source resolves to. Unbound
/// symbols resolve to no value.
pub struct SymbolResolver {
    registry: Arc<SymbolRegistry>,
}

impl SymbolResolver {
    pub fn new(registry: Arc<SymbolRegistry>) -> Self {
        SymbolResolver { registry }
    }
}

impl SourceResolver for SymbolResolver {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution {
        let Source::Symbol { name, namespace } = source else {
            return Ok(None);
        };
        match self.registry.get(name, namespace.as_deref()) {
            Some(bound) => resolver.resolve(bound),
            None => Ok(None),
        }
    }
}

/// Coerces its sub-resolution into the declared type.
pub struct ValueResolver;

impl SourceResolver for ValueResolver {
    fn resolve(&self, source: &Source, resolver: &dyn Resolver) -> Resolution {
        let Source::Value { ty, source } = source else {
            return Ok(None);
        };
        match resolver.resolve(source)? {
            Some(value) => ty.coerce(&value),
            None => Ok(None),
        }
    }
}
