//! Command-line arguments of the `off-report` binary.

use std::path::PathBuf;

use clap::Parser;
use config::constants::MAX_FILE_SIZE;
use config::BatchConfig;

use crate::batch::{process_files, BatchOutcome};
use crate::error::ReportResult;
use crate::render::{write_report, ReportFormat};

/// Surface area and minimum spanning box report for OFF meshes.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "off-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Surface area and bounding box report for OFF meshes", long_about = None)]
pub struct Cli {
    /// Report destination (created or overwritten)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Process input files concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Reject input files larger than this many bytes
    #[arg(long, default_value_t = MAX_FILE_SIZE)]
    pub max_size: usize,

    /// OFF files to analyze, reported in order of surface area
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Report format selected by `--json`.
    pub fn format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }

    /// Validated batch settings.
    pub fn batch_config(&self) -> ReportResult<BatchConfig> {
        Ok(BatchConfig::new(self.parallel, self.max_size)?)
    }
}

/// Processes the inputs and writes the report.
///
/// Individual file failures end up in the report, not in the returned error.
pub fn run(cli: &Cli) -> ReportResult<BatchOutcome> {
    let config = cli.batch_config()?;
    let outcome = process_files(&cli.inputs, &config);
    write_report(&outcome, &cli.output, cli.format())?;
    Ok(outcome)
}

// =============================================================================
// TESTS
// =============================================================================
