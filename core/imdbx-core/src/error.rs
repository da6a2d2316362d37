//! Error types for imdbx loaders.
//!
//! All public APIs return `ImdbxResult<T>`; no panics in library code.
//! Every ingestion error is fatal to the load that raised it; a lookup that finds
//! nothing is `None`, never an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::FieldError;

/// Unified error type for all imdbx operations.
#[derive(Debug, Error)]
pub enum ImdbxError {
    /// File could not be opened, the gzip stream is corrupt, or a read failed
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header missing or not recognized, or a row with the wrong field count
    #[error("format error in '{}': {message}", .path.display())]
    Format { path: PathBuf, message: String },

    /// A field value could not be converted to its column type
    #[error("value error in '{}' at line {line}: {source}", .path.display())]
    Value {
        path: PathBuf,
        line: u64,
        #[source]
        source: FieldError,
    },

    /// A key (or key pair) appeared twice in one file
    #[error("duplicate key in '{}': {key}", .path.display())]
    DuplicateKey { path: PathBuf, key: String },

    /// Invalid configuration value or unreadable configuration file
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for all imdbx operations.
pub type ImdbxResult<T> = Result<T, ImdbxError>;

impl ImdbxError {
    /// Path of the file whose ingestion failed, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ImdbxError::Io { path, .. }
            | ImdbxError::Format { path, .. }
            | ImdbxError::Value { path, .. }
            | ImdbxError::DuplicateKey { path, .. } => Some(path.as_path()),
            ImdbxError::Config(_) => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImdbxError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImdbxError::Format {
            path: path.into(),
            message: message.into(),
        }
    }
}
