//! Error types for ContentHash
//!
//! All fallible operations in the crate return [`Result`], carrying a
//! [`HashError`] with the offending path where one is known.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ContentHash operations
#[derive(Error, Debug)]
pub enum HashError {
    /// I/O error while opening or reading a byte source
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Expected digest could not be parsed
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// Hash verification failed
    #[error("Integrity check failed for '{path}': expected {expected}, got {actual}")]
    IntegrityMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HashError {
    /// Create an I/O error with path context.
    ///
    /// A `NotFound` I/O error becomes [`HashError::NotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path);
        }
        Self::Io { path, source }
    }

    /// Create an integrity mismatch error
    pub fn integrity_mismatch(
        path: impl Into<PathBuf>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::IntegrityMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. }
            | Self::NotFound(path)
            | Self::IntegrityMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for ContentHash operations
pub type Result<T> = std::result::Result<T, HashError>;

impl From<serde_json::Error> for HashError {
    fn from(err: serde_json::Error) -> Self {
        HashError::Serialization(err.to_string())
    }
}

impl From<hex::FromHexError> for HashError {
    fn from(err: hex::FromHexError) -> Self {
        HashError::InvalidDigest(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| HashError::io(path, e))
    }
}
