//! # Configuration Constants
//!
//! Centralized constants for the OFF pipeline.
//!
//! ## Categories
//!
//! - **Format**: Tokens and field counts of the OFF grammar
//! - **Geometry**: Supported face arities and the unsupported-area sentinel
//! - **Report**: Number formatting of written reports
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Magic token that must make up the whole first line of an OFF file.
///
/// Compared after trimming surrounding whitespace, case-sensitive.
///
/// # Example
///
/// ```rust
/// use config::constants::OFF_HEADER;
///
/// assert_eq!(" OFF \r".trim(), OFF_HEADER);
/// assert_ne!("off", OFF_HEADER);
/// ```
pub const OFF_HEADER: &str = "OFF";

/// Number of integer fields on the counts line (vertices, faces, edges).
pub const COUNT_FIELDS: usize = 3;

/// Number of leading components of a vertex line that form the point.
///
/// Further tokens on the line are validated as reals and then ignored.
pub const VERTEX_COMPONENTS: usize = 3;

/// 1-based source line of the header.
pub const HEADER_LINE: usize = 1;

/// 1-based source line of the counts line.
pub const COUNTS_LINE: usize = 2;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Arity of a triangular face.
pub const TRIANGLE_ARITY: i64 = 3;

/// Arity of a quadrilateral face, split into two triangles for area.
pub const QUAD_ARITY: i64 = 4;

/// Area reported for meshes containing a face that is neither a triangle
/// nor a quadrilateral.
///
/// # Example
///
/// ```rust
/// use config::constants::UNSUPPORTED_AREA;
///
/// // Sorts before every real surface area.
/// assert!(UNSUPPORTED_AREA < 0.0);
/// ```
pub const UNSUPPORTED_AREA: f64 = -1.0;

// =============================================================================
// REPORT CONSTANTS
// =============================================================================

/// Significant digits kept when a report prints a real value.
///
/// Rounding to this precision hides binary representation noise, so
/// `0.1 + 0.2` is reported as `0.3`.
pub const REPORT_SIGNIFICANT_DIGITS: usize = 15;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum size of an OFF file accepted by the parser (in bytes).
///
/// Prevents loading extremely large files that could cause memory issues.
/// 100 MB default.
pub const MAX_FILE_SIZE: usize = 100 * 1024 * 1024;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true for arities the area computation knows how to triangulate.
///
/// Arities are signed: a face line may declare a negative vertex count, which
/// parses but has no area.
///
/// # Example
///
/// ```rust
/// use config::constants::is_supported_arity;
///
/// assert!(is_supported_arity(3));
/// assert!(is_supported_arity(4));
/// assert!(!is_supported_arity(5));
/// assert!(!is_supported_arity(-1));
/// ```
#[inline]
pub fn is_supported_arity(arity: i64) -> bool {
    arity == TRIANGLE_ARITY || arity == QUAD_ARITY
}
