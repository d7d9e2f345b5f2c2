//! End-to-end properties of parse-then-analyze.

use approx::assert_relative_eq;
use off_geometry::{analyze, SurfaceArea};
use off_parser::parse_str;

const UNIT_CUBE: &str = "OFF
8 6 12
0 0 0
1 0 0
1 1 0
0 1 0
0 0 1
1 0 1
1 1 1
0 1 1
4 0 3 2 1
4 4 5 6 7
4 0 1 5 4
4 1 2 6 5
4 2 3 7 6
4 3 0 4 7
";

const TETRAHEDRON: &str = "OFF
4 4 6
0 0 0
1 0 0
0 1 0
0 0 1
3 0 2 1
3 0 1 3
3 0 3 2
3 1 2 3
";

#[test]
fn unit_cube_area_and_box() {
    let result = analyze(&parse_str(UNIT_CUBE).unwrap());
    assert_relative_eq!(result.area.value(), 6.0);
    assert_eq!(result.bounding_dimensions, [1.0, 1.0, 1.0]);
    assert_eq!(result.bounding_volume, 1.0);
}

#[test]
fn tetrahedron_area() {
    let result = analyze(&parse_str(TETRAHEDRON).unwrap());
    // three right triangles plus an equilateral face of side sqrt(2)
    let expected = 1.5 + 3.0_f64.sqrt() / 2.0;
    assert_relative_eq!(result.area.value(), expected, epsilon = 1e-12);
}

#[test]
fn colored_faces_do_not_change_area() {
    let colored = UNIT_CUBE.replace("4 0 3 2 1", "4 0 3 2 1 255 0 0");
    let plain = analyze(&parse_str(UNIT_CUBE).unwrap());
    assert_eq!(analyze(&parse_str(&colored).unwrap()), plain);
}

#[test]
fn pentagon_forces_sentinel_area() {
    let source = "OFF\n5 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n0 2 1\n3 0 1 2\n5 0 1 2 3 4\n";
    let result = analyze(&parse_str(source).unwrap());
    assert_eq!(result.area, SurfaceArea::Unsupported { face: 1, arity: 5 });
    assert_eq!(result.area.value(), -1.0);
    // The box is still computed.
    assert_eq!(result.bounding_dimensions, [1.0, 2.0, 1.0]);
}

#[test]
fn negative_arity_forces_sentinel_area() {
    let source = "OFF\n3 2 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n-1 0 1 2\n";
    let result = analyze(&parse_str(source).unwrap());
    assert_eq!(result.area, SurfaceArea::Unsupported { face: 1, arity: -1 });
    assert_eq!(result.area.value(), -1.0);
}

#[test]
fn volume_is_product_of_dimensions() {
    let source = "OFF\n3 1 0\n-2.5 4 1e-1\n3 -1 2\n0.5 0.5 -0.25\n3 0 1 2\n";
    let result = analyze(&parse_str(source).unwrap());
    let [dx, dy, dz] = result.bounding_dimensions;
    assert!(dx >= 0.0 && dy >= 0.0 && dz >= 0.0);
    assert_eq!(result.bounding_volume, dx * dy * dz);
}

#[test]
fn analyze_is_idempotent() {
    let mesh = parse_str(TETRAHEDRON).unwrap();
    let first = analyze(&mesh);
    let second = analyze(&mesh);
    assert_eq!(first.area.value().to_bits(), second.area.value().to_bits());
    assert_eq!(first, second);
}
