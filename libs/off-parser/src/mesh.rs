//! # Mesh Data Structure
//!
//! Immutable OFF mesh: vertex positions, polygonal faces, and optional
//! per-face colors.

use config::constants::COUNTS_LINE;
use glam::DVec3;

use crate::error::{ParseError, ParseResult};

/// One polygonal face of an OFF mesh.
///
/// The arity is the vertex count declared on the face line. For a
/// non-negative arity it equals the number of indices; a negative arity
/// leaves the face without vertices. Faces of any arity are representable,
/// only area computation restricts them to triangles and quads.
///
/// # Example
///
/// ```rust
/// use off_parser::Face;
///
/// let face = Face::new(vec![0, 1, 2]).with_color(vec![1.0, 0.0, 0.0]);
/// assert_eq!(face.arity(), 3);
/// assert_eq!(face.color(), Some(&[1.0, 0.0, 0.0][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    arity: i64,
    indices: Vec<usize>,
    color: Option<Vec<f64>>,
}

impl Face {
    /// Creates an uncolored face from vertex indices in listed order.
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            arity: indices.len() as i64,
            indices,
            color: None,
        }
    }

    /// Creates a vertexless face whose line declared a negative arity.
    pub(crate) fn with_negative_arity(arity: i64) -> Self {
        debug_assert!(arity < 0);
        Self {
            arity,
            indices: Vec::new(),
            color: None,
        }
    }

    /// Attaches color components (RGB or RGBA as written in the file).
    pub fn with_color(mut self, color: Vec<f64>) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the declared number of vertices composing the face.
    #[inline]
    pub fn arity(&self) -> i64 {
        self.arity
    }

    /// Returns the vertex indices in listed order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the color components, if the source line carried any.
    pub fn color(&self) -> Option<&[f64]> {
        self.color.as_deref()
    }
}

/// A polygon mesh read from an OFF file.
///
/// A `Mesh` always has at least one vertex and every face index is in range;
/// both are checked by [`Mesh::new`], which is the only way to build one.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use off_parser::{Face, Mesh};
///
/// let mesh = Mesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![Face::new(vec![0, 1, 2])],
///     3,
/// )
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    faces: Vec<Face>,
    /// Declared on the counts line; never cross-checked against the faces.
    edge_count: usize,
}

impl Mesh {
    /// Builds a mesh, enforcing the non-empty and index-range invariants.
    ///
    /// Out-of-range indices are reported as [`ParseError::BadFace`] on the
    /// line the face occupies in an OFF listing of this mesh.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<Face>, edge_count: usize) -> ParseResult<Self> {
        if vertices.is_empty() {
            return Err(ParseError::EmptyMesh);
        }

        for (face_index, face) in faces.iter().enumerate() {
            let line = face_line(vertices.len(), face_index);
            check_indices(face.indices(), vertices.len(), line)?;
        }

        Ok(Self {
            vertices,
            faces,
            edge_count,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the edge count declared by the file.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    ///
    /// Indices taken from this mesh's faces are always valid.
    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        self.vertices[index]
    }

    /// Returns true if any face carries color components.
    pub fn has_colors(&self) -> bool {
        self.faces.iter().any(|face| face.color().is_some())
    }
}

/// 1-based source line of face `face_index` in a file with `vertex_count`
/// vertices.
pub(crate) fn face_line(vertex_count: usize, face_index: usize) -> usize {
    COUNTS_LINE + vertex_count + face_index + 1
}

/// Fails with `BadFace` on the first index that is not below `vertex_count`.
pub(crate) fn check_indices(
    indices: &[usize],
    vertex_count: usize,
    line: usize,
) -> ParseResult<()> {
    match indices.iter().find(|&&index| index >= vertex_count) {
        Some(index) => Err(ParseError::bad_face(
            line,
            format!("vertex index {index} out of range (mesh has {vertex_count} vertices)"),
        )),
        None => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_vertices() -> Vec<DVec3> {
        vec![DVec3::ZERO, DVec3::X, DVec3::Y]
    }

    #[test]
    fn test_new_rejects_empty_vertices() {
        let err = Mesh::new(Vec::new(), Vec::new(), 0).unwrap_err();
        assert_eq!(err, ParseError::EmptyMesh);
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let faces = vec![Face::new(vec![0, 1, 2]), Face::new(vec![0, 1, 3])];
        let err = Mesh::new(triangle_vertices(), faces, 0).unwrap_err();
        // header, counts, 3 vertex lines, first face on line 6
        assert_eq!(err.line(), Some(7));
        assert!(matches!(err, ParseError::BadFace { .. }));
    }

    #[test]
    fn test_counts_follow_contents() {
        let faces = vec![Face::new(vec![0, 1, 2]), Face::new(vec![2, 1, 0])];
        let mesh = Mesh::new(triangle_vertices(), faces, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.edge_count(), 3);
        assert_eq!(mesh.vertex(1), DVec3::X);
    }

    #[test]
    fn test_has_colors() {
        let face = Face::new(vec![0, 1, 2]);
        let plain = Mesh::new(triangle_vertices(), vec![face], 0).unwrap();
        assert!(!plain.has_colors());

        let colored = Face::new(vec![0, 1, 2]).with_color(vec![0.2, 0.4, 0.6, 1.0]);
        let mesh = Mesh::new(triangle_vertices(), vec![colored], 0).unwrap();
        assert!(mesh.has_colors());
        assert_eq!(mesh.faces()[0].color().map(<[f64]>::len), Some(4));
    }

    #[test]
    fn test_face_allows_any_arity() {
        let face = Face::new(vec![0, 1, 2, 0, 1]);
        let mesh = Mesh::new(triangle_vertices(), vec![face], 0).unwrap();
        assert_eq!(mesh.faces()[0].arity(), 5);
    }

    #[test]
    fn test_negative_arity_face_has_no_indices() {
        let face = Face::with_negative_arity(-2);
        assert_eq!(face.arity(), -2);
        assert!(face.indices().is_empty());
        assert!(Mesh::new(triangle_vertices(), vec![face], 0).is_ok());
    }
}
