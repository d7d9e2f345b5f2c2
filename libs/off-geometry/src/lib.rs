//! # OFF Geometry
//!
//! Surface area and minimum spanning box of parsed OFF meshes.
//!
//! ## Architecture
//!
//! ```text
//! off-parser (Mesh) → off-geometry (AnalysisResult)
//! ```
//!
//! ## Algorithms
//!
//! - **Area**: triangles by cross product, quads split into two triangles;
//!   any other arity yields [`SurfaceArea::Unsupported`]
//! - **Bounding box**: single pass per-axis min/max over all vertices
//!
//! ## Usage
//!
//! ```rust
//! use off_geometry::{analyze, SurfaceArea};
//! use off_parser::parse_str;
//!
//! let mesh = parse_str("OFF\n4 1 0\n0 0 0\n2 0 0\n2 3 0\n0 3 0\n4 0 1 2 3\n").unwrap();
//! let result = analyze(&mesh);
//! assert_eq!(result.area, SurfaceArea::Total(6.0));
//! ```

pub mod analysis;
pub mod area;
pub mod bounds;

pub use analysis::{analyze, AnalysisResult};
pub use area::{quad_area, surface_area, triangle_area, SurfaceArea};
pub use bounds::{bounding_box, BoundingBox};
