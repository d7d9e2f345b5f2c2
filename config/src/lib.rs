//! # Config Crate
//!
//! Centralized configuration for the OFF mesh surveyor.
//! Format tokens, report precision, and batch settings are defined here so
//! the parser, analyzer, and report crates agree on every literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{is_supported_arity, OFF_HEADER, UNSUPPORTED_AREA};
//!
//! assert_eq!(OFF_HEADER, "OFF");
//! assert!(UNSUPPORTED_AREA < 0.0);
//! assert!(is_supported_arity(4));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Settings**: Runtime settings are built through checked constructors
//! - **No Dependencies**: Pure Rust, no external crates

pub mod batch;
pub mod constants;

pub use batch::{BatchConfig, ConfigError};

#[cfg(test)]
mod tests;
