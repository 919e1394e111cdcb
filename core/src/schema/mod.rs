#![deny(missing_docs)]

//! # Schema Normalization
//!
//! Rewrites Prisma-style `model <name> { ... }` declarations so each model
//! carries a singular PascalCase name and a `@@map("<table>")` annotation
//! pointing back at the original table name.
//!
//! - **blocks**: Locating headers and brace-delimited model bodies.
//! - **mapping**: The raw -> canonical table and the rename ordering policy.
//! - **normalize**: The full scan -> map -> rename -> annotate pipeline.
//!
//! This is a best-effort text transform, not a Prisma parser.

/// Header scanning and block location.
pub mod blocks;

/// Raw -> canonical name table.
pub mod mapping;

/// The normalization pipeline.
pub mod normalize;

pub use blocks::{find_block, model_names, Block};
pub use mapping::ModelMapping;
pub use normalize::{map_annotation, normalize, normalize_text, Normalized, Rename, MAP_DIRECTIVE};
