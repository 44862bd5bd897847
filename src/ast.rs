//! # Source definitions
//!
//! This module defines the expression tree that the resolver evaluates. Every
//! node is a [`Source`]: plain, immutable data with no resolved state, so the
//! same source always resolves to the same outcome given the same symbol
//! table and backing files.
//!
//! ## Architecture Overview
//!
//! - **[source]** - the [`Source`] sum type and its [`SourceKind`] tag
//! - **[operators]** - binary and unary operators and their textual symbols
//! - **[lookup]** - tabular lookups: [`LookupSource`], [`Filter`], [`Column`]
//!
//! ## Composition
//!
//! Operator, typed-value and lookup nodes hold child sources. A lookup's
//! filter value is itself a source, which is how a lookup can be driven by a
//! symbol, an arithmetic expression, or another lookup:
//!
//! ```
//! use lookup_resolver::{LookupSource, Source};
//!
//! let city_of_bob = LookupSource::new("users.csv")
//!     .where_eq("name", Source::literal("Bob"))
//!     .columns(["city"]);
//!
//! let neighbours = LookupSource::new("users.csv")
//!     .where_eq("city", city_of_bob.into())
//!     .columns(["name"])
//!     .aggregate("all");
//!
//! assert_eq!(Source::from(neighbours).kind().name(), "lookup");
//! ```
//!
//! ## JSON definitions
//!
//! Sources deserialize from JSON, tagged by `kind`:
//!
//! ```text
//! {"kind": "infix",
//!  "left": {"kind": "symbol", "name": "turnover", "namespace": "quote"},
//!  "operator": "*",
//!  "right": {"kind": "static", "value": 0.015}}
//! ```
pub mod lookup;
pub mod operators;
pub mod source;

pub use lookup::{Column, Filter, LookupSource, RangeFilter, ValueFilter};
pub use operators::{BinOp, UnaryOp};
pub use source::{Source, SourceKind};
