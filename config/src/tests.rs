//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and the batch settings builder.

use crate::batch::*;
use crate::constants::*;

// =============================================================================
// FORMAT TESTS
// =============================================================================

#[test]
fn test_header_is_case_sensitive_token() {
    assert_eq!(OFF_HEADER, "OFF");
    assert_ne!(OFF_HEADER.to_lowercase(), OFF_HEADER);
}

#[test]
fn test_counts_line_follows_header() {
    assert_eq!(COUNTS_LINE, HEADER_LINE + 1);
    assert_eq!(COUNT_FIELDS, 3);
    assert_eq!(VERTEX_COMPONENTS, 3);
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_supported_arities() {
    assert!(is_supported_arity(TRIANGLE_ARITY));
    assert!(is_supported_arity(QUAD_ARITY));
    assert!(!is_supported_arity(0));
    assert!(!is_supported_arity(2));
    assert!(!is_supported_arity(5));
    assert!(!is_supported_arity(-1));
}

#[test]
fn test_unsupported_area_sorts_first() {
    assert!(UNSUPPORTED_AREA < 0.0);
    assert_eq!(UNSUPPORTED_AREA, -1.0);
}

// =============================================================================
// REPORT TESTS
// =============================================================================

#[test]
fn test_report_precision_fits_f64() {
    // f64 carries 15 to 17 significant decimal digits
    assert!(REPORT_SIGNIFICANT_DIGITS > 0);
    assert!(REPORT_SIGNIFICANT_DIGITS <= 15);
}

// =============================================================================
// BATCH CONFIG TESTS
// =============================================================================

#[test]
fn test_default_batch_config_is_sequential() {
    let cfg = BatchConfig::default();
    assert!(!cfg.parallel);
    assert_eq!(cfg.max_file_size, MAX_FILE_SIZE);
}

#[test]
fn test_batch_config_rejects_zero_limit() {
    assert_eq!(
        BatchConfig::new(false, 0).unwrap_err(),
        ConfigError::InvalidFileSizeLimit(0)
    );
}

#[test]
fn test_batch_config_with_parallel() {
    let cfg = BatchConfig::new(false, 64).unwrap().with_parallel(true);
    assert!(cfg.parallel);
    assert_eq!(cfg.max_file_size, 64);
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidFileSizeLimit(0).to_string();
    assert!(msg.contains("max_file_size"));
}
