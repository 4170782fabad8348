//! Brute-force mesh intersector.
//!
//! Linearly scans every face of the mesh. No preprocessing, O(faces) per
//! ray — the right choice below [`crate::SMALL_MESH_FACES`] faces, and the
//! reference the spatial index is cross-validated against.

use raymesh_mesh::TriangleMesh;

use crate::triangle::{intersect_triangle_ray, DEFAULT_EPSILON};
use crate::{Hit, Ray};

/// All intersections of a ray with the mesh, sorted ascending by `t`.
pub fn intersect_all(mesh: &TriangleMesh, ray: &Ray) -> Vec<Hit> {
    intersect_all_with_epsilon(mesh, ray, DEFAULT_EPSILON)
}

/// All intersections with an explicit parallel-rejection epsilon.
pub fn intersect_all_with_epsilon(mesh: &TriangleMesh, ray: &Ray, eps: f64) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (face, _) in mesh.faces.iter().enumerate() {
        let [v0, v1, v2] = mesh.face_vertices(face);
        if let Some((t, u, v)) = intersect_triangle_ray(ray, &v0, &v1, &v2, eps) {
            hits.push(Hit::new(face as u32, u, v, t));
        }
    }
    hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
    hits
}

/// First (nearest) intersection of a ray with the mesh.
pub fn intersect_first(mesh: &TriangleMesh, ray: &Ray) -> Option<Hit> {
    intersect_first_with_epsilon(mesh, ray, DEFAULT_EPSILON)
}

/// First intersection with an explicit parallel-rejection epsilon.
pub fn intersect_first_with_epsilon(mesh: &TriangleMesh, ray: &Ray, eps: f64) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    let mut clipped = *ray;
    for (face, _) in mesh.faces.iter().enumerate() {
        let [v0, v1, v2] = mesh.face_vertices(face);
        if let Some((t, u, v)) = intersect_triangle_ray(&clipped, &v0, &v1, &v2, eps) {
            clipped.t_far = t;
            best = Some(Hit::new(face as u32, u, v, t));
        }
    }
    best
}
