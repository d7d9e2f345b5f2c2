//! # Batch Processing
//!
//! Runs parse-then-analyze over a list of files. Each file is independent:
//! a failure is recorded and processing moves on.

use std::fmt;
use std::path::{Path, PathBuf};

use config::BatchConfig;
use off_geometry::{analyze, AnalysisResult};
use off_parser::{name_from_path, parse_file_with_limit, ParseError};
use rayon::prelude::*;
use serde::Serialize;

/// A successfully parsed and analyzed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedObject {
    /// Name taken from the file name, if the path has one.
    pub name: Option<String>,
    /// Path the mesh was read from.
    pub source_path: PathBuf,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of faces.
    pub face_count: usize,
    /// Whether any face carried trailing colour components.
    pub has_colors: bool,
    /// Area and minimum spanning box.
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

impl ParsedObject {
    /// Area used for ordering and reports; `-1` when undefined.
    pub fn area(&self) -> f64 {
        self.analysis.area.value()
    }
}

/// A file that could not be parsed.
///
/// Displays as `"<message>\n<path>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileError {
    /// Path that failed.
    pub path: PathBuf,
    /// Why it failed.
    pub error: ParseError,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.error, self.path.display())
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Everything a batch run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Successes, sorted by ascending area.
    pub objects: Vec<ParsedObject>,
    /// Failures, in input order.
    pub errors: Vec<FileError>,
}

/// Parses and analyzes one file with the default size limit.
pub fn process_file(path: impl AsRef<Path>) -> Result<ParsedObject, FileError> {
    process_file_with(path.as_ref(), &BatchConfig::default())
}

fn process_file_with(path: &Path, config: &BatchConfig) -> Result<ParsedObject, FileError> {
    let mesh = parse_file_with_limit(path, config.max_file_size).map_err(|error| FileError {
        path: path.to_path_buf(),
        error,
    })?;

    let analysis = analyze(&mesh);
    log::debug!(
        "{}: area {}, box {:?}",
        path.display(),
        analysis.area.value(),
        analysis.bounding_dimensions
    );

    Ok(ParsedObject {
        name: name_from_path(path),
        source_path: path.to_path_buf(),
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        has_colors: mesh.has_colors(),
        analysis,
    })
}

/// Processes every path and sorts the successes by area.
///
/// With `config.parallel` the files are handled on the rayon pool; results
/// are gathered in input order first, so the outcome is the same either way.
pub fn process_files<P>(paths: &[P], config: &BatchConfig) -> BatchOutcome
where
    P: AsRef<Path> + Sync,
{
    log::info!(
        "processing {} file(s){}",
        paths.len(),
        if config.parallel { " in parallel" } else { "" }
    );

    let results: Vec<Result<ParsedObject, FileError>> = if config.parallel {
        paths
            .par_iter()
            .map(|path| process_file_with(path.as_ref(), config))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| process_file_with(path.as_ref(), config))
            .collect()
    };

    let mut outcome = BatchOutcome::default();
    for result in results {
        match result {
            Ok(object) => outcome.objects.push(object),
            Err(err) => {
                log::warn!("skipping {}: {}", err.path.display(), err.error);
                outcome.errors.push(err);
            }
        }
    }

    sort_by_area(&mut outcome.objects);
    outcome
}

/// Stable ascending sort by area; unsupported-area objects come first.
pub fn sort_by_area(objects: &mut [ParsedObject]) {
    objects.sort_by(|a, b| a.area().total_cmp(&b.area()));
}
