#![deny(missing_docs)]

//! # Schemafix Core
//!
//! Core library for the build-pipeline text utilities: the Prisma schema
//! model-name normalizer and the compiled-output rehydrator.

/// Shared error types.
pub mod error;

/// Canonical model naming rules.
pub mod naming;

/// Whole-word identifier matching.
pub mod matcher;

/// Prisma schema normalization.
pub mod schema;

/// Source reconstruction from compiled output.
pub mod rehydrate;

/// YAML configuration.
pub mod config;

pub use config::SchemafixConfig;
pub use error::{AppError, AppResult};
pub use matcher::WordMatcher;
pub use naming::NamingRules;
pub use rehydrate::{default_targets, rehydrate, strip_compiled, RehydrateTarget};
pub use schema::{normalize, normalize_text, ModelMapping, Normalized};
