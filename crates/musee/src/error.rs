//! Error types for the musee library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for musee operations.
///
/// Catalog queries never produce one of these: a lookup miss is `None` and an
/// empty filter result is an empty `Vec`. Only loading and the assistant
/// providers fail.
#[derive(Debug, Error)]
pub enum MuseeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog source is not valid JSON at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog source is JSON but does not have the expected shape.
    #[error("Malformed catalog '{origin}': {message}")]
    Malformed { origin: String, message: String },

    /// A record has no usable French translation.
    #[error("Artwork '{id}' (index {index}) has no French translation title")]
    MissingTranslation { index: usize, id: String },

    /// A required string field is empty.
    #[error("Artwork at index {index} has an empty '{field}' field")]
    EmptyField { index: usize, field: &'static str },

    /// Two records share an identifier.
    #[error("Duplicate artwork id '{id}' at indices {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// Two records share a scan code.
    #[error("Duplicate scan code '{code}' at indices {first} and {second}")]
    DuplicateScanCode {
        code: String,
        first: usize,
        second: usize,
    },

    /// The catalog source contains no records.
    #[error("Empty catalog: {0}")]
    EmptyCatalog(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An assistant provider call failed.
    #[error("Assistant error ({provider}): {message}")]
    Assistant { provider: String, message: String },

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl MuseeError {
    /// Build an assistant error for the named provider.
    pub(crate) fn assistant(provider: &str, message: impl Into<String>) -> Self {
        MuseeError::Assistant {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for musee operations.
pub type Result<T> = std::result::Result<T, MuseeError>;
