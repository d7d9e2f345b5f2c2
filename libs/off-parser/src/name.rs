//! Display names derived from file paths.

use std::path::Path;

/// Extracts the object name from a path: the text between the last path
/// separator and the last `.` of the file name.
///
/// Both `/` and `\` count as separators. Returns `None` when the path has no
/// `.` or no separator before it.
///
/// # Examples
/// ```
/// use off_parser::name_from_path;
/// assert_eq!(name_from_path("/a/b/cube.off").as_deref(), Some("cube"));
/// assert_eq!(name_from_path(r"C:\models\tetra.off").as_deref(), Some("tetra"));
/// assert_eq!(name_from_path("/a/b/cube"), None);
/// ```
pub fn name_from_path(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref().to_string_lossy();
    let dot = path.rfind('.')?;
    let start = path[..dot].rfind(['/', '\\'])? + 1;
    Some(path[start..dot].to_string())
}
