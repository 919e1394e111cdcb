#![deny(missing_docs)]

//! # Configuration
//!
//! Optional YAML file overriding the naming tables and the rehydration targets.
//!
//! ```yaml
//! naming:
//!   singular_exceptions: [status, news, series, analysis]
//!   prefixes: { scm: Scm, mdm: Mdm, wms: WMS }
//! targets:
//!   - compiled: backend/dist/backend/src/modules/scm/foo/foo.service.js
//!     source: backend/src/modules/scm/foo/foo.service.ts
//!     symbol: FooService
//! ```
//!
//! Omitted sections fall back to the built-in defaults.

use crate::error::{AppError, AppResult};
use crate::naming::NamingRules;
use crate::rehydrate::{default_targets, RehydrateTarget};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemafixConfig {
    /// Naming tables for the schema normalizer.
    pub naming: NamingRules,
    /// Files handled by the rehydrator.
    pub targets: Vec<RehydrateTarget>,
}

impl Default for SchemafixConfig {
    fn default() -> Self {
        Self {
            naming: NamingRules::default(),
            targets: default_targets(),
        }
    }
}

impl SchemafixConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        // An empty file deserializes to `null`, not to the defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Reads and parses the YAML file at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
