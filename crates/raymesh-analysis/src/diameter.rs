//! Shape diameter function over a ray oracle.

use raymesh_math::{Point3, Vec3};
use raymesh_mesh::TriangleMesh;

use crate::oracle::RayOracle;
use crate::parallel::parallel_map_indexed;

/// Local thickness of the solid at each query point.
///
/// Sample directions are flipped into the hemisphere opposite the normal
/// (into the solid), rays start at `point + dir * offset`, and the value is
/// the mean hit distance over the samples that hit. A point whose samples
/// all miss gets `f64::NAN`, never zero: zero is a legitimate thickness and
/// must stay distinguishable from "no data".
pub fn shape_diameter<O: RayOracle + ?Sized>(
    oracle: &O,
    points: &[Point3],
    normals: &[Vec3],
    dirs: &[Vec3],
    offset: f64,
) -> Vec<f64> {
    assert_eq!(points.len(), normals.len());
    parallel_map_indexed(points.len(), |i| {
        diameter_at(oracle, &points[i], &normals[i], dirs, offset)
    })
}

fn diameter_at<O: RayOracle + ?Sized>(
    oracle: &O,
    point: &Point3,
    normal: &Vec3,
    dirs: &[Vec3],
    offset: f64,
) -> f64 {
    let mut sum = 0.0;
    let mut hits = 0usize;
    for d in dirs {
        let d = if d.dot(normal) > 0.0 { -d } else { *d };
        let origin = point + d * offset;
        if let Some(t) = oracle.shoot(&origin, &d) {
            sum += t;
            hits += 1;
        }
    }
    if hits == 0 {
        f64::NAN
    } else {
        sum / hits as f64
    }
}

/// Shape diameter at every face centroid, using face normals.
pub fn face_shape_diameter<O: RayOracle + ?Sized>(
    oracle: &O,
    mesh: &TriangleMesh,
    dirs: &[Vec3],
    offset: f64,
) -> Vec<f64> {
    let points: Vec<Point3> = (0..mesh.num_faces()).map(|f| mesh.face_centroid(f)).collect();
    let normals: Vec<Vec3> = (0..mesh.num_faces()).map(|f| mesh.face_normal(f)).collect();
    shape_diameter(oracle, &points, &normals, dirs, offset)
}
