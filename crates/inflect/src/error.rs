//! Error types for the inflect library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for inflection operations.
#[derive(Debug, Error)]
pub enum InflectError {
    /// A registered pattern could not be compiled.
    ///
    /// Patterns are not checked when registered, so this only appears the
    /// first time the offending rule is evaluated against a word.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error reading a rule configuration file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for inflect operations.
pub type Result<T> = std::result::Result<T, InflectError>;
