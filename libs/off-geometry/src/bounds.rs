//! # Minimum Spanning Box
//!
//! Axis-aligned bounding box of a mesh's vertices.

use glam::DVec3;
use off_parser::Mesh;
use serde::Serialize;

/// Axis-aligned box spanned by a set of points.
///
/// `max` is never below `min` on any axis, so dimensions are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Degenerate box around a single point.
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    #[inline]
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Edge lengths along x, y, and z.
    pub fn dimensions(&self) -> [f64; 3] {
        (self.max - self.min).to_array()
    }

    /// Product of the three dimensions.
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use off_geometry::BoundingBox;
    ///
    /// let mut bbox = BoundingBox::from_point(DVec3::ZERO);
    /// bbox.include(DVec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(bbox.volume(), 24.0);
    /// ```
    pub fn volume(&self) -> f64 {
        let [dx, dy, dz] = self.dimensions();
        dx * dy * dz
    }
}

/// Computes the minimum spanning box of the mesh's vertices in one pass.
pub fn bounding_box(mesh: &Mesh) -> BoundingBox {
    let mut vertices = mesh.vertices().iter().copied();
    // Mesh guarantees at least one vertex.
    let first = vertices.next().unwrap_or(DVec3::ZERO);

    vertices.fold(BoundingBox::from_point(first), |mut bbox, vertex| {
        bbox.include(vertex);
        bbox
    })
}

// =============================================================================
// TESTS
// =============================================================================
