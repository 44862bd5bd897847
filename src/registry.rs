//! Named sources.
//!
//! A [`SymbolRegistry`] binds names, optionally inside a namespace, to
//! sources. It is built once and read-only afterwards, so it can be shared by
//! concurrent resolutions. Lookups are exact: a namespaced symbol is never
//! found without its namespace and vice versa.

use std::collections::HashMap;

use crate::{ast::Source, error::ResolveError};

/// Entry of the nested input a registry is built from: either a source bound
/// directly to the outer key, or a namespace of sources.
#[derive(Debug, Clone)]
pub enum SymbolEntry {
    Source(Source),
    Namespace(Vec<(String, Source)>),
}

impl From<Source> for SymbolEntry {
    fn from(source: Source) -> Self {
        SymbolEntry::Source(source)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    globals: HashMap<String, Source>,
    namespaces: HashMap<String, HashMap<String, Source>>,
}

impl SymbolRegistry {
    /// Builds a registry from `(key, entry)` pairs. A [`SymbolEntry::Source`]
    /// is bound without namespace; a [`SymbolEntry::Namespace`] binds each of
    /// its sources under the key as namespace.
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, SymbolEntry)>) -> Self {
        let mut registry = SymbolRegistry::default();
        for (key, entry) in entries {
            match entry {
                SymbolEntry::Source(source) => {
                    registry.globals.insert(key.into(), source);
                }
                SymbolEntry::Namespace(sources) => {
                    registry
                        .namespaces
                        .entry(key.into())
                        .or_default()
                        .extend(sources);
                }
            }
        }
        registry
    }

    /// Builds a registry from a JSON document.
    ///
    /// Top-level values are either a source definition (an object with a
    /// `kind` field) or an object mapping names to source definitions.
    ///
    /// ```
    /// use lookup_resolver::{SymbolRegistry, Source};
    ///
    /// let registry = SymbolRegistry::from_json(r#"{
    ///     "rate": {"kind": "static", "value": 0.015},
    ///     "quote": {
    ///         "turnover": {"kind": "static", "value": 150000}
    ///     }
    /// }"#).unwrap();
    ///
    /// assert_eq!(registry.get("rate", None), Some(&Source::literal(0.015)));
    /// assert_eq!(registry.get("turnover", Some("quote")), Some(&Source::literal(150000i64)));
    /// assert_eq!(registry.get("turnover", None), None);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(top) = doc else {
            return Err(ResolveError::InvalidSymbolTable(
                "symbol table must be an object".to_string(),
            ));
        };

        let mut entries = Vec::with_capacity(top.len());
        for (key, value) in top {
            let is_source =
                matches!(&value, serde_json::Value::Object(obj) if obj.contains_key("kind"));
            let entry = match value {
                def if is_source => SymbolEntry::Source(parse_source(&key, def)?),
                serde_json::Value::Object(obj) => {
                    let sources = obj
                        .into_iter()
                        .map(|(name, def)| {
                            let source = parse_source(&format!("{key}.{name}"), def)?;
                            Ok((name, source))
                        })
                        .collect::<Result<Vec<_>, ResolveError>>()?;
                    SymbolEntry::Namespace(sources)
                }
                other => {
                    return Err(ResolveError::InvalidSymbolTable(format!(
                        "symbol '{key}' must be a source or a map of sources, got {}",
                        crate::Value::from(other).type_name()
                    )));
                }
            };
            entries.push((key, entry));
        }
        Ok(SymbolRegistry::new(entries))
    }

    pub fn get(&self, name: &str, namespace: Option<&str>) -> Option<&Source> {
        match namespace {
            Some(ns) => self.namespaces.get(ns)?.get(name),
            None => self.globals.get(name),
        }
    }

    pub fn len(&self) -> usize {
        self.globals.len() + self.namespaces.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_source(path: &str, def: serde_json::Value) -> Result<Source, ResolveError> {
    serde_json::from_value(def)
        .map_err(|e| ResolveError::InvalidSymbolTable(format!("symbol '{path}' is not a source: {e}")))
}
