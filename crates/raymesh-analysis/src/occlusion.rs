//! Ambient occlusion over a ray oracle.

use raymesh_math::{Point3, Vec3};
use raymesh_mesh::TriangleMesh;

use crate::oracle::RayOracle;
use crate::parallel::parallel_map_indexed;

/// Hemisphere occlusion fraction for each query point.
///
/// Every sample direction is flipped into the hemisphere of the point's
/// normal, the ray starts at `point + dir * offset` to escape the surface
/// the point sits on, and the result is `hits / samples`: 0 is fully open,
/// 1 fully occluded. `points` and `normals` must have equal length.
pub fn ambient_occlusion<O: RayOracle + ?Sized>(
    oracle: &O,
    points: &[Point3],
    normals: &[Vec3],
    dirs: &[Vec3],
    offset: f64,
) -> Vec<f64> {
    assert_eq!(points.len(), normals.len());
    if dirs.is_empty() {
        return vec![0.0; points.len()];
    }
    parallel_map_indexed(points.len(), |i| {
        occlusion_at(oracle, &points[i], &normals[i], dirs, offset)
    })
}

fn occlusion_at<O: RayOracle + ?Sized>(
    oracle: &O,
    point: &Point3,
    normal: &Vec3,
    dirs: &[Vec3],
    offset: f64,
) -> f64 {
    let mut hits = 0usize;
    for d in dirs {
        let d = if d.dot(normal) < 0.0 { -d } else { *d };
        let origin = point + d * offset;
        if oracle.shoot(&origin, &d).is_some() {
            hits += 1;
        }
    }
    hits as f64 / dirs.len() as f64
}

/// Ambient occlusion at every vertex, using area-weighted vertex normals.
pub fn vertex_ambient_occlusion<O: RayOracle + ?Sized>(
    oracle: &O,
    mesh: &TriangleMesh,
    dirs: &[Vec3],
    offset: f64,
) -> Vec<f64> {
    let normals = mesh.vertex_normals();
    ambient_occlusion(oracle, &mesh.positions, &normals, dirs, offset)
}

/// Ambient occlusion at every face centroid, using face normals.
pub fn face_ambient_occlusion<O: RayOracle + ?Sized>(
    oracle: &O,
    mesh: &TriangleMesh,
    dirs: &[Vec3],
    offset: f64,
) -> Vec<f64> {
    let points: Vec<Point3> = (0..mesh.num_faces()).map(|f| mesh.face_centroid(f)).collect();
    let normals: Vec<Vec3> = (0..mesh.num_faces()).map(|f| mesh.face_normal(f)).collect();
    ambient_occlusion(oracle, &points, &normals, dirs, offset)
}
