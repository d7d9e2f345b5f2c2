//! # Report Rendering
//!
//! Text and JSON renderings of a [`BatchOutcome`], and writing them to disk.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use config::constants::REPORT_SIGNIFICANT_DIGITS;
use serde::Serialize;

use crate::batch::{BatchOutcome, ParsedObject};
use crate::error::ReportResult;

/// Output format of a written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Tab-aligned text blocks, one per object, followed by the errors.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Renders the text report.
///
/// Each object is a block of labelled lines followed by a blank line; each
/// error is its message, its path, and a blank line.
///
/// ## Example
///
/// ```rust
/// use off_report::{render_text, BatchOutcome};
///
/// assert_eq!(render_text(&BatchOutcome::default()), "");
/// ```
pub fn render_text(outcome: &BatchOutcome) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails.
    let _ = write_text(&mut out, outcome);
    out
}

fn write_text(out: &mut String, outcome: &BatchOutcome) -> fmt::Result {
    for object in &outcome.objects {
        write_object(out, object)?;
    }
    for error in &outcome.errors {
        writeln!(out, "{error}\n")?;
    }
    Ok(())
}

fn write_object(out: &mut String, object: &ParsedObject) -> fmt::Result {
    let [dx, dy, dz] = object.analysis.bounding_dimensions.map(format_number);
    writeln!(out, "Name:\t\t\t\t{}", object.name.as_deref().unwrap_or(""))?;
    writeln!(out, "File address:\t\t\t{}", object.source_path.display())?;
    writeln!(out, "Number of points:\t\t{}", object.vertex_count)?;
    writeln!(out, "Number of faces:\t\t{}", object.face_count)?;
    writeln!(out, "Dimensions of spanning box:\t{dx} {dy} {dz}")?;
    writeln!(
        out,
        "Volume of spanning box:\t\t{}",
        format_number(object.analysis.bounding_volume)
    )?;
    writeln!(out, "Total surface area:\t\t{}\n", format_number(object.area()))
}

/// Shortest decimal form after rounding to [`REPORT_SIGNIFICANT_DIGITS`].
///
/// Hides accumulation noise such as `0.30000000000000004`.
fn format_number(value: f64) -> String {
    format!("{:.*e}", REPORT_SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
        .to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    objects: &'a [ParsedObject],
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    path: &'a Path,
    message: String,
    line: Option<usize>,
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(outcome: &BatchOutcome) -> ReportResult<String> {
    let report = JsonReport {
        objects: &outcome.objects,
        errors: outcome
            .errors
            .iter()
            .map(|err| JsonError {
                path: &err.path,
                message: err.error.to_string(),
                line: err.error.line(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders the report and writes it to `path`, replacing any existing file.
pub fn write_report(
    outcome: &BatchOutcome,
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> ReportResult<()> {
    let contents = match format {
        ReportFormat::Text => render_text(outcome),
        ReportFormat::Json => render_json(outcome)?,
    };
    fs::write(path.as_ref(), contents)?;
    log::info!(
        "wrote {} object(s) and {} error(s) to {}",
        outcome.objects.len(),
        outcome.errors.len(),
        path.as_ref().display()
    );
    Ok(())
}
