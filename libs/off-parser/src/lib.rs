//! # OFF Parser
//!
//! Strict parser for OFF (Object File Format) meshes with line-accurate
//! errors.
//!
//! ## Architecture
//!
//! ```text
//! File → read_source → LineReader → parser → Mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use off_parser::{parse_str, ParseError};
//!
//! let mesh = parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
//! assert_eq!(mesh.face_count(), 1);
//!
//! let err = parse_str("XOFF\n").unwrap_err();
//! assert!(matches!(err, ParseError::BadHeader { .. }));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! off-parser → off-geometry → off-report
//! ```

pub mod error;
pub mod mesh;
pub mod name;
pub mod parser;
pub mod reader;

use std::fs;
use std::io;
use std::path::Path;

use config::constants::MAX_FILE_SIZE;

// Re-export public API
pub use error::{ParseError, ParseResult};
pub use mesh::{Face, Mesh};
pub use name::name_from_path;
pub use parser::parse_str;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Read and parse an OFF file.
///
/// Files larger than [`MAX_FILE_SIZE`] are rejected; use
/// [`parse_file_with_limit`] to choose another limit.
///
/// ## Example
///
/// ```rust
/// use off_parser::{parse_file, ParseError};
///
/// let err = parse_file("does/not/exist.off").unwrap_err();
/// assert!(matches!(err, ParseError::NotFound { .. }));
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Mesh> {
    parse_file_with_limit(path, MAX_FILE_SIZE)
}

/// Read and parse an OFF file no larger than `max_size` bytes.
pub fn parse_file_with_limit(path: impl AsRef<Path>, max_size: usize) -> ParseResult<Mesh> {
    let path = path.as_ref();
    let source = read_source(path, max_size)?;
    parse_str(&source)
}

/// Loads the file as text after the existence and size checks.
fn read_source(path: &Path, max_size: usize) -> ParseResult<String> {
    let metadata = fs::metadata(path).map_err(|err| io_error(path, &err))?;
    if !metadata.is_file() {
        return Err(ParseError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() > max_size as u64 {
        return Err(ParseError::TooLarge {
            size: metadata.len(),
            max: max_size,
        });
    }

    let bytes = fs::read(path).map_err(|err| io_error(path, &err))?;
    String::from_utf8(bytes).map_err(|err| ParseError::Unreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

fn io_error(path: &Path, err: &io::Error) -> ParseError {
    match err.kind() {
        io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}
