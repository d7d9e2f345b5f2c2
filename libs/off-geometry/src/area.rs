//! # Surface Area
//!
//! Sums face areas in listed order. Triangles use half the cross-product
//! magnitude; quads are split along the `i2 - i0` diagonal into two triangles.
//! A face of any other arity stops the sum and makes the total undefined.

use config::constants::{is_supported_arity, TRIANGLE_ARITY, UNSUPPORTED_AREA};
use glam::DVec3;
use off_parser::Mesh;
use serde::Serialize;

/// Total surface area of a mesh, or the reason it has none.
///
/// # Example
///
/// ```rust
/// use off_geometry::SurfaceArea;
///
/// assert_eq!(SurfaceArea::Total(6.0).value(), 6.0);
/// assert_eq!(SurfaceArea::Unsupported { face: 2, arity: 5 }.value(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceArea {
    /// Sum of all face areas.
    Total(f64),
    /// The first face that is neither a triangle nor a quad.
    Unsupported {
        /// Zero-based face index.
        face: usize,
        /// Declared arity of that face.
        arity: i64,
    },
}

impl SurfaceArea {
    /// Area as a plain number, with [`UNSUPPORTED_AREA`] standing in for an
    /// undefined total. This is the value results are sorted and reported by.
    pub fn value(&self) -> f64 {
        match self {
            Self::Total(area) => *area,
            Self::Unsupported { .. } => UNSUPPORTED_AREA,
        }
    }
}

/// Area of the triangle `abc`.
///
/// ```rust
/// use glam::DVec3;
/// use off_geometry::triangle_area;
///
/// assert_eq!(triangle_area(DVec3::ZERO, DVec3::X, DVec3::Y), 0.5);
/// ```
#[inline]
pub fn triangle_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    (b - a).cross(c - a).length() / 2.0
}

/// Area of the quad `abcd` as triangles `abc` and `cda`.
///
/// Exact for planar convex quads; non-planar or non-convex input gives a
/// deterministic approximation.
#[inline]
pub fn quad_area(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> f64 {
    triangle_area(a, b, c) + triangle_area(c, d, a)
}

/// Computes the total surface area of `mesh`.
pub fn surface_area(mesh: &Mesh) -> SurfaceArea {
    let mut total = 0.0;

    for (face_index, face) in mesh.faces().iter().enumerate() {
        if !is_supported_arity(face.arity()) {
            return SurfaceArea::Unsupported {
                face: face_index,
                arity: face.arity(),
            };
        }

        let v = |i: usize| mesh.vertex(face.indices()[i]);
        total += if face.arity() == TRIANGLE_ARITY {
            triangle_area(v(0), v(1), v(2))
        } else {
            quad_area(v(0), v(1), v(2), v(3))
        };
    }

    SurfaceArea::Total(total)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use off_parser::Face;

    fn mesh(vertices: Vec<DVec3>, faces: Vec<Vec<usize>>) -> Mesh {
        Mesh::new(vertices, faces.into_iter().map(Face::new).collect(), 0).unwrap()
    }

    #[test]
    fn test_unit_right_triangle() {
        assert_eq!(triangle_area(DVec3::ZERO, DVec3::X, DVec3::Y), 0.5);
    }

    #[test]
    fn test_triangle_area_ignores_winding() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 0.0, 1.0);
        let c = DVec3::new(-2.0, 5.0, 0.5);
        assert_relative_eq!(triangle_area(a, b, c), triangle_area(a, c, b));
    }

    #[test]
    fn test_degenerate_triangle_has_zero_area() {
        assert_eq!(triangle_area(DVec3::ZERO, DVec3::X, DVec3::X * 2.0), 0.0);
    }

    #[test]
    fn test_unit_square_quad() {
        let area = quad_area(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y);
        assert_relative_eq!(area, 1.0);
    }

    #[test]
    fn test_tilted_rectangle_quad() {
        // 2 x sqrt(2) rectangle leaning at 45 degrees
        let area = quad_area(
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        );
        assert_relative_eq!(area, 2.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_faces_sum() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y];
        let m = mesh(vertices, vec![vec![0, 1, 2], vec![0, 1, 2, 3]]);
        assert_relative_eq!(surface_area(&m).value(), 1.5);
    }

    #[test]
    fn test_no_faces_is_zero() {
        let m = mesh(vec![DVec3::ONE], Vec::new());
        assert_eq!(surface_area(&m), SurfaceArea::Total(0.0));
    }

    #[test]
    fn test_pentagon_anywhere_is_unsupported() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y, DVec3::Z];
        let m = mesh(vertices, vec![vec![0, 1, 2], vec![0, 1, 2, 3, 4], vec![0, 1, 3]]);
        let area = surface_area(&m);
        assert_eq!(area, SurfaceArea::Unsupported { face: 1, arity: 5 });
        assert_eq!(area.value(), -1.0);
    }

    #[test]
    fn test_first_unsupported_face_is_reported() {
        let m = mesh(vec![DVec3::ZERO, DVec3::X], vec![vec![0, 1], vec![0]]);
        assert_eq!(surface_area(&m), SurfaceArea::Unsupported { face: 0, arity: 2 });
    }
}
