//! # OFF Report
//!
//! Batch driver for the OFF pipeline: parses and analyzes a list of files,
//! sorts the results by surface area, and renders a report.
//!
//! ## Architecture
//!
//! ```text
//! paths → off-parser → off-geometry → ParsedObject / FileError → report
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::BatchConfig;
//! use off_report::{process_files, write_report, ReportFormat};
//!
//! let outcome = process_files(&["models/cube.off"], &BatchConfig::default());
//! write_report(&outcome, "report.txt", ReportFormat::Text)?;
//! # Ok::<(), off_report::ReportError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod render;

pub use batch::{process_file, process_files, sort_by_area, BatchOutcome, FileError, ParsedObject};
pub use error::{ReportError, ReportResult};
pub use render::{render_json, render_text, write_report, ReportFormat};
