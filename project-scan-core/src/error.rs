//! Error types for the scan pipeline
//!
//! Only the file-system collaborators and configuration produce errors.
//! Extraction, merging and scoring are infallible: a category that matches
//! nothing simply yields an empty field.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scan operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// A single document could not be read. Non-fatal: the document is skipped.
    #[error("Unreadable document {path:?}: {source}")]
    UnreadableDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A listed project has no directory under the scan root. Non-fatal:
    /// the project is omitted from the report.
    #[error("Project directory not found for '{project}': {path:?}")]
    MissingProjectDirectory { project: String, path: PathBuf },

    /// Configuration file could not be read or parsed
    #[error("Configuration error in {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    /// Persisted record set could not be read or written
    #[error("Persistence error for {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule pattern failed to compile
    #[error("Invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScanError {
    /// Whether the scan should carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnreadableDocument { .. } | Self::MissingProjectDirectory { .. })
    }
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
