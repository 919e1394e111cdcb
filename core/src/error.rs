//! # Errors
//!
//! Failures surfaced by the schemafix tools: file access while reading a
//! schema or writing a rehydrated source, and malformed YAML configuration.

use derive_more::{Display, From};

/// Why a normalize or rehydrate run stopped.
///
/// Text transforms never fail; errors only come from the filesystem and
/// from loading configuration. `From<String>` produces `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Reading a schema or compiled file, or writing a source file, failed.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The YAML config could not be parsed.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Any other failure, e.g. an unknown `--symbol`.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Result of a schemafix operation.
pub type AppResult<T> = Result<T, AppError>;
