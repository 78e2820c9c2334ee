// Host-side tests for the primitive mesh generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;

fn assert_indices_in_bounds(mesh: &MeshData) {
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {} out of bounds ({} vertices)", i, n);
    }
}

fn assert_unit_normals(mesh: &MeshData, eps: f32) {
    for v in &mesh.vertices {
        let [x, y, z] = v.normal;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < eps, "normal length {}", len);
    }
}

#[test]
fn sphere_has_expected_grid_counts() {
    let mesh = sphere(1.0, 32, 32);
    assert_eq!(mesh.vertices.len(), 33 * 33);
    assert_eq!(mesh.indices.len(), 32 * 32 * 6);
    assert_eq!(mesh.indices.len() % 3, 0);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh, 1e-4);
}

#[test]
fn sphere_vertices_lie_on_the_radius() {
    let mesh = sphere(1.0, 16, 16);
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        let r = (x * x + y * y + z * z).sqrt();
        assert!((r - 1.0).abs() < 1e-4);
    }
}

#[test]
fn cone_spans_its_height_and_radius() {
    let mesh = cone(1.5, 2.0, 4);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh, 1e-4);

    let mut y_min = f32::MAX;
    let mut y_max = f32::MIN;
    let mut r_max: f32 = 0.0;
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        y_min = y_min.min(y);
        y_max = y_max.max(y);
        r_max = r_max.max((x * x + z * z).sqrt());
    }
    assert_eq!(y_min, -1.0);
    assert_eq!(y_max, 1.0);
    assert!((r_max - 1.5).abs() < 1e-4);
}

#[test]
fn cone_base_cap_faces_down() {
    let mesh = cone(1.5, 2.0, 4);
    let down = mesh
        .vertices
        .iter()
        .filter(|v| v.normal == [0.0, -1.0, 0.0])
        .count();
    // Cap center plus its ring
    assert_eq!(down, 1 + 5);
}

#[test]
fn torus_knot_has_expected_grid_counts() {
    let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    assert_eq!(mesh.vertices.len(), 101 * 17);
    assert_eq!(mesh.indices.len(), 100 * 16 * 6);
    assert_indices_in_bounds(&mesh);
    assert_unit_normals(&mesh, 1e-3);
}

#[test]
fn torus_knot_stays_within_its_envelope() {
    let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    // Curve radius tops out at (2 + 1) * 0.5 * radius, plus the tube
    let bound = 3.0 * 0.5 * 0.8 + 0.35 + 1e-3;
    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        let r = (x * x + y * y + z * z).sqrt();
        assert!(r <= bound, "vertex at radius {}", r);
    }
}

#[test]
fn section_geometries_build_nonempty_meshes() {
    for kind in [
        GeometryKind::Sphere,
        GeometryKind::Cone,
        GeometryKind::TorusKnot,
    ] {
        let mesh = kind.build();
        assert!(!mesh.vertices.is_empty());
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_indices_in_bounds(&mesh);
    }
}
