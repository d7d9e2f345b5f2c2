//! # Report Errors
//!
//! Errors of the batch driver itself. Failures of individual input files are
//! not errors here; they are collected as [`FileError`](crate::FileError)s.

use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that abort report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid batch settings.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
