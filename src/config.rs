//! Engine configuration.
//!
//! All fields have defaults, so a configuration document only needs to name
//! what it changes:
//!
//! ```
//! use lookup_resolver::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{"base_dir": "/srv/rating-tables"}"#).unwrap();
//! assert_eq!(config.max_depth, 256);
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::ResolveError;

/// Default limit on nested resolutions.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory that relative lookup paths are resolved against
    pub base_dir: Option<PathBuf>,
    /// Maximum depth of nested resolutions before giving up; guards against
    /// symbols that refer back to themselves
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            base_dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
