//! # Parse Errors
//!
//! Error types for the OFF parser. Every variant is fatal to the file being
//! parsed; no partial mesh survives a failure.
//!
//! ## Example
//!
//! ```rust
//! use off_parser::ParseError;
//!
//! let error = ParseError::bad_vertex(4, "'x' is not a real number");
//! assert_eq!(error.line(), Some(4));
//! assert!(error.to_string().contains("line 4"));
//! ```

use std::path::PathBuf;

use config::constants::{COUNTS_LINE, HEADER_LINE};
use thiserror::Error;

/// Result type for OFF parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while reading and validating an OFF file.
///
/// Messages never include the file path; callers that report per-file
/// failures attach it themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The source path does not exist or is not a regular file.
    #[error("file does not exist")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("file could not be read: {reason}")]
    Unreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O or decoding failure.
        reason: String,
    },

    /// The file exceeds the configured size limit.
    #[error("file is too large: {size} bytes (max: {max})")]
    TooLarge {
        /// Size of the file on disk.
        size: u64,
        /// Configured limit.
        max: usize,
    },

    /// The first line is not the `OFF` magic token.
    #[error("file is not an OFF file: first line is '{found}'")]
    BadHeader {
        /// Trimmed first line (empty when the file is empty).
        found: String,
    },

    /// The counts line is missing, has the wrong number of fields, or a
    /// field is not a non-negative integer.
    #[error("bad counts on line {}: {reason}", COUNTS_LINE)]
    BadCounts {
        /// What was wrong with the line.
        reason: String,
    },

    /// A vertex line is missing, short, or holds a non-numeric token.
    #[error("bad vertex on line {line}: {reason}")]
    BadVertex {
        /// 1-based source line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A face line's arity, index, or color token failed to parse, or an
    /// index points past the vertex list.
    #[error("bad face on line {line}: {reason}")]
    BadFace {
        /// 1-based source line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The counts line declares zero vertices.
    #[error("mesh declares no vertices")]
    EmptyMesh,
}

impl ParseError {
    /// Creates a counts-line error.
    pub fn bad_counts(reason: impl Into<String>) -> Self {
        Self::BadCounts {
            reason: reason.into(),
        }
    }

    /// Creates a vertex-line error.
    pub fn bad_vertex(line: usize, reason: impl Into<String>) -> Self {
        Self::BadVertex {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a face-line error.
    pub fn bad_face(line: usize, reason: impl Into<String>) -> Self {
        Self::BadFace {
            line,
            reason: reason.into(),
        }
    }

    /// Returns the 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::BadCounts { .. } => Some(COUNTS_LINE),
            Self::BadVertex { line, .. } | Self::BadFace { line, .. } => Some(*line),
            Self::BadHeader { .. } => Some(HEADER_LINE),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
