//! # Mesh Analysis
//!
//! Combines surface area and the minimum spanning box into one result.

use off_parser::Mesh;
use serde::Serialize;

use crate::area::{surface_area, SurfaceArea};
use crate::bounds::bounding_box;

/// Derived geometric properties of one mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Total surface area, or the face that made it undefined.
    pub area: SurfaceArea,
    /// Minimum spanning box edge lengths `[dx, dy, dz]`, each `>= 0`.
    pub bounding_dimensions: [f64; 3],
    /// `dx * dy * dz`.
    pub bounding_volume: f64,
}

/// Analyzes a mesh.
///
/// Pure function of its input: calling it twice on the same mesh yields
/// bit-identical results.
///
/// # Example
///
/// ```rust
/// use off_geometry::analyze;
/// use off_parser::parse_str;
///
/// let mesh = parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
/// let result = analyze(&mesh);
/// assert_eq!(result.area.value(), 0.5);
/// assert_eq!(result.bounding_dimensions, [1.0, 1.0, 0.0]);
/// assert_eq!(result.bounding_volume, 0.0);
/// ```
pub fn analyze(mesh: &Mesh) -> AnalysisResult {
    let bbox = bounding_box(mesh);
    AnalysisResult {
        area: surface_area(mesh),
        bounding_dimensions: bbox.dimensions(),
        bounding_volume: bbox.volume(),
    }
}
