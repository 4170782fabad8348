//! Ray-triangle primitive test.
//!
//! Möller-Trumbore solve of the 3x3 system relating the barycentric
//! coordinates and the ray parameter. The test is two-sided: both windings
//! are accepted, with the determinant sign deciding which branch scales the
//! barycentric bounds.

use raymesh_math::{Aabb, Point3, Vec3};

use crate::Ray;

/// Default epsilon for the parallel-ray rejection, suitable for geometry of
/// roughly unit scale. See [`triangle_test_epsilon`] for scaled scenes.
pub const DEFAULT_EPSILON: f64 = 1.0e-6;

/// Epsilon for the ray-triangle test scaled to a scene bounding box.
///
/// The determinant the parallel check compares against zero grows with the
/// square of the scene scale, so the threshold shrinks accordingly.
pub fn triangle_test_epsilon(bbox: &Aabb) -> f64 {
    let l = bbox.diagonal().amax();
    if l > 0.0 {
        DEFAULT_EPSILON / (l * l)
    } else {
        DEFAULT_EPSILON
    }
}

/// Intersect a ray with a single triangle.
///
/// Returns `Some((t, u, v))` when the ray crosses the triangle, with `t` in
/// units of `dir` and `(u, v)` the barycentric weights of `v1` and `v2`.
/// Returns `None` when the ray is parallel to the triangle's plane
/// (`|det| <= eps`) or the crossing falls outside the triangle. No interval
/// check is applied here; see [`intersect_triangle_ray`].
pub fn intersect_triangle(
    origin: &Point3,
    dir: &Vec3,
    v0: &Point3,
    v1: &Point3,
    v2: &Point3,
    eps: f64,
) -> Option<(f64, f64, f64)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    // The determinant doubles as the scale of the U parameter.
    let pvec = dir.cross(&edge2);
    let det = edge1.dot(&pvec);

    let (u, v, qvec) = if det > eps {
        let tvec = origin - v0;
        let u = tvec.dot(&pvec);
        if u < 0.0 || u > det {
            return None;
        }
        let qvec = tvec.cross(&edge1);
        let v = dir.dot(&qvec);
        if v < 0.0 || u + v > det {
            return None;
        }
        (u, v, qvec)
    } else if det < -eps {
        let tvec = origin - v0;
        let u = tvec.dot(&pvec);
        if u > 0.0 || u < det {
            return None;
        }
        let qvec = tvec.cross(&edge1);
        let v = dir.dot(&qvec);
        if v > 0.0 || u + v < det {
            return None;
        }
        (u, v, qvec)
    } else {
        // Ray is parallel to the plane of the triangle.
        return None;
    };

    let inv_det = 1.0 / det;
    Some((edge2.dot(&qvec) * inv_det, u * inv_det, v * inv_det))
}

/// Intersect a ray with a triangle, accepting only hits inside the ray's
/// `(t_near, t_far)` interval.
pub fn intersect_triangle_ray(
    ray: &Ray,
    v0: &Point3,
    v1: &Point3,
    v2: &Point3,
    eps: f64,
) -> Option<(f64, f64, f64)> {
    intersect_triangle(&ray.origin, &ray.dir, v0, v1, v2, eps)
        .filter(|&(t, _, _)| t > ray.t_near && t < ray.t_far)
}
