//! Spatial triangle-triangle overlap and intersection tests.
//!
//! Guigue-Devillers sign-table formulation: each triangle's vertices are
//! classified by signed distance to the other's supporting plane, a
//! canonical vertex permutation reduces the configuration space, and a pair
//! of signed-volume orientation tests decides overlap. The intersection
//! variant additionally constructs the 3D segment where both triangles
//! cross each other's plane.

use raymesh_math::{Point2, Point3, Precision, Vec3};

use crate::tri2d::tri_tri_overlap_2d;

/// Outcome of the segment-constructing triangle-triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriTriIntersection {
    /// The triangles do not touch.
    Disjoint,
    /// The triangles cross; the intersection is the segment from `source`
    /// to `target`. Contact at a single point yields `source == target`.
    Segment {
        /// One endpoint of the intersection segment.
        source: Point3,
        /// The other endpoint of the intersection segment.
        target: Point3,
    },
    /// The triangles lie in a common plane; `overlap` is the planar test's
    /// verdict. No segment is constructed for this case.
    Coplanar {
        /// Whether the coplanar triangles overlap in their common plane.
        overlap: bool,
    },
}

impl TriTriIntersection {
    /// True for every outcome except [`TriTriIntersection::Disjoint`] and a
    /// coplanar pair that misses.
    pub fn is_hit(&self) -> bool {
        match self {
            TriTriIntersection::Disjoint => false,
            TriTriIntersection::Segment { .. } => true,
            TriTriIntersection::Coplanar { overlap } => *overlap,
        }
    }
}

/// Orientation pair deciding interval overlap on the line of plane
/// intersection, after both triangles are in canonical form.
fn check_min_max(
    p1: &Point3,
    q1: &Point3,
    r1: &Point3,
    p2: &Point3,
    q2: &Point3,
    r2: &Point3,
) -> bool {
    let n = (p2 - q1).cross(&(p1 - q1));
    if (q2 - q1).dot(&n) > 0.0 {
        return false;
    }
    let n = (p2 - p1).cross(&(r1 - p1));
    (r2 - p1).dot(&n) <= 0.0
}

/// Coplanar pair: project both triangles onto the coordinate plane that
/// maximizes the projected area (drop the normal's dominant axis, keeping
/// the component order that preserves orientation) and run the planar test.
fn coplanar_tri_tri_3d(
    p1: &Point3,
    q1: &Point3,
    r1: &Point3,
    p2: &Point3,
    q2: &Point3,
    r2: &Point3,
    normal_1: &Vec3,
) -> bool {
    let n_x = normal_1.x.abs();
    let n_y = normal_1.y.abs();
    let n_z = normal_1.z.abs();

    let (t1, t2) = if n_x > n_z && n_x >= n_y {
        // Project onto plane YZ.
        (
            [
                Point2::new(q1.z, q1.y),
                Point2::new(p1.z, p1.y),
                Point2::new(r1.z, r1.y),
            ],
            [
                Point2::new(q2.z, q2.y),
                Point2::new(p2.z, p2.y),
                Point2::new(r2.z, r2.y),
            ],
        )
    } else if n_y > n_z && n_y >= n_x {
        // Project onto plane XZ.
        (
            [
                Point2::new(q1.x, q1.z),
                Point2::new(p1.x, p1.z),
                Point2::new(r1.x, r1.z),
            ],
            [
                Point2::new(q2.x, q2.z),
                Point2::new(p2.x, p2.z),
                Point2::new(r2.x, r2.z),
            ],
        )
    } else {
        // Project onto plane XY.
        (
            [
                Point2::new(p1.x, p1.y),
                Point2::new(q1.x, q1.y),
                Point2::new(r1.x, r1.y),
            ],
            [
                Point2::new(p2.x, p2.y),
                Point2::new(q2.x, q2.y),
                Point2::new(r2.x, r2.y),
            ],
        )
    };

    tri_tri_overlap_2d(&t1, &t2)
}

/// Canonical permutation of the second triangle for the overlap test, keyed
/// by the signs of its three plane distances.
#[allow(clippy::too_many_arguments)]
fn overlap_permute_t2(
    p1: &Point3,
    q1: &Point3,
    r1: &Point3,
    p2: &Point3,
    q2: &Point3,
    r2: &Point3,
    dp2: f64,
    dq2: f64,
    dr2: f64,
    n1: &Vec3,
) -> bool {
    if dp2 > 0.0 {
        if dq2 > 0.0 {
            check_min_max(p1, r1, q1, r2, p2, q2)
        } else if dr2 > 0.0 {
            check_min_max(p1, r1, q1, q2, r2, p2)
        } else {
            check_min_max(p1, q1, r1, p2, q2, r2)
        }
    } else if dp2 < 0.0 {
        if dq2 < 0.0 {
            check_min_max(p1, q1, r1, r2, p2, q2)
        } else if dr2 < 0.0 {
            check_min_max(p1, q1, r1, q2, r2, p2)
        } else {
            check_min_max(p1, r1, q1, p2, q2, r2)
        }
    } else if dq2 < 0.0 {
        if dr2 >= 0.0 {
            check_min_max(p1, r1, q1, q2, r2, p2)
        } else {
            check_min_max(p1, q1, r1, p2, q2, r2)
        }
    } else if dq2 > 0.0 {
        if dr2 > 0.0 {
            check_min_max(p1, r1, q1, p2, q2, r2)
        } else {
            check_min_max(p1, q1, r1, q2, r2, p2)
        }
    } else if dr2 > 0.0 {
        check_min_max(p1, q1, r1, r2, p2, q2)
    } else if dr2 < 0.0 {
        check_min_max(p1, r1, q1, r2, p2, q2)
    } else {
        coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, n1)
    }
}

/// Test whether two 3D triangles intersect, boundaries included.
///
/// `precision` selects the threshold under which all six signed plane
/// distances are treated as zero and the pair is handled as coplanar.
pub fn tri_tri_overlap_3d(t1: &[Point3; 3], t2: &[Point3; 3], precision: Precision) -> bool {
    let [p1, q1, r1] = t1;
    let [p2, q2, r2] = t2;

    // Signed distances of triangle 1's vertices to the plane of triangle 2.
    let n2 = (p2 - r2).cross(&(q2 - r2));
    let dp1 = (p1 - r2).dot(&n2);
    let dq1 = (q1 - r2).dot(&n2);
    let dr1 = (r1 - r2).dot(&n2);

    if dp1 * dq1 > 0.0 && dp1 * dr1 > 0.0 {
        return false;
    }

    // Signed distances of triangle 2's vertices to the plane of triangle 1.
    let n1 = (q1 - p1).cross(&(r1 - p1));
    let dp2 = (p2 - r1).dot(&n1);
    let dq2 = (q2 - r1).dot(&n1);
    let dr2 = (r2 - r1).dot(&n1);

    if dp2 * dq2 > 0.0 && dp2 * dr2 > 0.0 {
        return false;
    }

    let eps = precision.eps();
    if dp1.abs() < eps
        && dq1.abs() < eps
        && dr1.abs() < eps
        && dp2.abs() < eps
        && dq2.abs() < eps
        && dr2.abs() < eps
    {
        return coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, &n1);
    }

    // Canonical permutation of triangle 1's vertices.
    if dp1 > 0.0 {
        if dq1 > 0.0 {
            overlap_permute_t2(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2, &n1)
        } else if dr1 > 0.0 {
            overlap_permute_t2(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2, &n1)
        } else {
            overlap_permute_t2(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2, &n1)
        }
    } else if dp1 < 0.0 {
        if dq1 < 0.0 {
            overlap_permute_t2(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2, &n1)
        } else if dr1 < 0.0 {
            overlap_permute_t2(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2, &n1)
        } else {
            overlap_permute_t2(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2, &n1)
        }
    } else if dq1 < 0.0 {
        if dr1 >= 0.0 {
            overlap_permute_t2(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2, &n1)
        } else {
            overlap_permute_t2(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2, &n1)
        }
    } else if dq1 > 0.0 {
        if dr1 > 0.0 {
            overlap_permute_t2(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2, &n1)
        } else {
            overlap_permute_t2(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2, &n1)
        }
    } else if dr1 > 0.0 {
        overlap_permute_t2(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2, &n1)
    } else if dr1 < 0.0 {
        overlap_permute_t2(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2, &n1)
    } else {
        coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, &n1)
    }
}

/// Build the intersection segment once both triangles are in canonical
/// form and known to straddle each other's plane.
///
/// Each endpoint is a separating edge of one triangle clipped against the
/// other's plane; which edge supplies which endpoint falls out of four
/// signed-volume orientation tests. Returns `None` when the two plane
/// intervals miss each other.
#[allow(clippy::too_many_arguments)]
fn construct_intersection(
    p1: &Point3,
    q1: &Point3,
    r1: &Point3,
    p2: &Point3,
    q2: &Point3,
    r2: &Point3,
    n1: &Vec3,
    n2: &Vec3,
) -> Option<(Point3, Point3)> {
    let v1 = q1 - p1;
    let v2 = r2 - p1;
    let n = v1.cross(&v2);
    let v = p2 - p1;

    if v.dot(&n) > 0.0 {
        let v1 = r1 - p1;
        let n = v1.cross(&v2);
        if v.dot(&n) > 0.0 {
            return None;
        }
        let v2 = q2 - p1;
        let n = v1.cross(&v2);
        if v.dot(&n) > 0.0 {
            let alpha = (p1 - p2).dot(n2) / (p1 - r1).dot(n2);
            let source = p1 - (p1 - r1) * alpha;
            let alpha = (p2 - p1).dot(n1) / (p2 - r2).dot(n1);
            let target = p2 - (p2 - r2) * alpha;
            Some((source, target))
        } else {
            let alpha = (p2 - p1).dot(n1) / (p2 - q2).dot(n1);
            let source = p2 - (p2 - q2) * alpha;
            let alpha = (p2 - p1).dot(n1) / (p2 - r2).dot(n1);
            let target = p2 - (p2 - r2) * alpha;
            Some((source, target))
        }
    } else {
        let v2 = q2 - p1;
        let n = v1.cross(&v2);
        if v.dot(&n) < 0.0 {
            return None;
        }
        let v1 = r1 - p1;
        let n = v1.cross(&v2);
        if v.dot(&n) >= 0.0 {
            let alpha = (p1 - p2).dot(n2) / (p1 - r1).dot(n2);
            let source = p1 - (p1 - r1) * alpha;
            let alpha = (p1 - p2).dot(n2) / (p1 - q1).dot(n2);
            let target = p1 - (p1 - q1) * alpha;
            Some((source, target))
        } else {
            let alpha = (p2 - p1).dot(n1) / (p2 - q2).dot(n1);
            let source = p2 - (p2 - q2) * alpha;
            let alpha = (p1 - p2).dot(n2) / (p1 - q1).dot(n2);
            let target = p1 - (p1 - q1) * alpha;
            Some((source, target))
        }
    }
}

/// Canonical permutation of the second triangle for the segment test; same
/// sign table as [`overlap_permute_t2`], each arm constructing the segment.
#[allow(clippy::too_many_arguments)]
fn intersection_permute_t2(
    p1: &Point3,
    q1: &Point3,
    r1: &Point3,
    p2: &Point3,
    q2: &Point3,
    r2: &Point3,
    dp2: f64,
    dq2: f64,
    dr2: f64,
    n1: &Vec3,
    n2: &Vec3,
) -> TriTriIntersection {
    let segment = |s: Option<(Point3, Point3)>| match s {
        Some((source, target)) => TriTriIntersection::Segment { source, target },
        None => TriTriIntersection::Disjoint,
    };

    if dp2 > 0.0 {
        if dq2 > 0.0 {
            segment(construct_intersection(p1, r1, q1, r2, p2, q2, n1, n2))
        } else if dr2 > 0.0 {
            segment(construct_intersection(p1, r1, q1, q2, r2, p2, n1, n2))
        } else {
            segment(construct_intersection(p1, q1, r1, p2, q2, r2, n1, n2))
        }
    } else if dp2 < 0.0 {
        if dq2 < 0.0 {
            segment(construct_intersection(p1, q1, r1, r2, p2, q2, n1, n2))
        } else if dr2 < 0.0 {
            segment(construct_intersection(p1, q1, r1, q2, r2, p2, n1, n2))
        } else {
            segment(construct_intersection(p1, r1, q1, p2, q2, r2, n1, n2))
        }
    } else if dq2 < 0.0 {
        if dr2 >= 0.0 {
            segment(construct_intersection(p1, r1, q1, q2, r2, p2, n1, n2))
        } else {
            segment(construct_intersection(p1, q1, r1, p2, q2, r2, n1, n2))
        }
    } else if dq2 > 0.0 {
        if dr2 > 0.0 {
            segment(construct_intersection(p1, r1, q1, p2, q2, r2, n1, n2))
        } else {
            segment(construct_intersection(p1, q1, r1, q2, r2, p2, n1, n2))
        }
    } else if dr2 > 0.0 {
        segment(construct_intersection(p1, q1, r1, r2, p2, q2, n1, n2))
    } else if dr2 < 0.0 {
        segment(construct_intersection(p1, r1, q1, r2, p2, q2, n1, n2))
    } else {
        TriTriIntersection::Coplanar {
            overlap: coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, n1),
        }
    }
}

/// Intersect two 3D triangles, returning the intersection segment when the
/// pair crosses and is not coplanar.
///
/// Shares the sign tables with [`tri_tri_overlap_3d`] and the same
/// coplanarity threshold: all six signed distances below
/// `precision.eps()` dispatch to the planar overlap test.
pub fn tri_tri_intersection_3d(
    t1: &[Point3; 3],
    t2: &[Point3; 3],
    precision: Precision,
) -> TriTriIntersection {
    let [p1, q1, r1] = t1;
    let [p2, q2, r2] = t2;

    let n2 = (p2 - r2).cross(&(q2 - r2));
    let dp1 = (p1 - r2).dot(&n2);
    let dq1 = (q1 - r2).dot(&n2);
    let dr1 = (r1 - r2).dot(&n2);

    if dp1 * dq1 > 0.0 && dp1 * dr1 > 0.0 {
        return TriTriIntersection::Disjoint;
    }

    let n1 = (q1 - p1).cross(&(r1 - p1));
    let dp2 = (p2 - r1).dot(&n1);
    let dq2 = (q2 - r1).dot(&n1);
    let dr2 = (r2 - r1).dot(&n1);

    if dp2 * dq2 > 0.0 && dp2 * dr2 > 0.0 {
        return TriTriIntersection::Disjoint;
    }

    let eps = precision.eps();
    if dp1.abs() < eps
        && dq1.abs() < eps
        && dr1.abs() < eps
        && dp2.abs() < eps
        && dq2.abs() < eps
        && dr2.abs() < eps
    {
        return TriTriIntersection::Coplanar {
            overlap: coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, &n1),
        };
    }

    if dp1 > 0.0 {
        if dq1 > 0.0 {
            intersection_permute_t2(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
        } else if dr1 > 0.0 {
            intersection_permute_t2(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
        } else {
            intersection_permute_t2(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
        }
    } else if dp1 < 0.0 {
        if dq1 < 0.0 {
            intersection_permute_t2(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
        } else if dr1 < 0.0 {
            intersection_permute_t2(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
        } else {
            intersection_permute_t2(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
        }
    } else if dq1 < 0.0 {
        if dr1 >= 0.0 {
            intersection_permute_t2(q1, r1, p1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
        } else {
            intersection_permute_t2(p1, q1, r1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
        }
    } else if dq1 > 0.0 {
        if dr1 > 0.0 {
            intersection_permute_t2(p1, q1, r1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
        } else {
            intersection_permute_t2(q1, r1, p1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
        }
    } else if dr1 > 0.0 {
        intersection_permute_t2(r1, p1, q1, p2, q2, r2, dp2, dq2, dr2, &n1, &n2)
    } else if dr1 < 0.0 {
        intersection_permute_t2(r1, p1, q1, p2, r2, q2, dp2, dr2, dq2, &n1, &n2)
    } else {
        TriTriIntersection::Coplanar {
            overlap: coplanar_tri_tri_3d(p1, q1, r1, p2, q2, r2, &n1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn tri(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64)) -> [Point3; 3] {
        [
            Point3::new(a.0, a.1, a.2),
            Point3::new(b.0, b.1, b.2),
            Point3::new(c.0, c.1, c.2),
        ]
    }

    #[test]
    fn test_self_overlap() {
        let t = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
        assert!(tri_tri_overlap_3d(&t, &t, Precision::Double));
    }

    #[test]
    fn test_crossing_pair() {
        let t1 = tri((0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0));
        let t2 = tri((1.0, 1.0, -1.0), (2.0, 1.0, -1.0), (1.5, 1.0, 2.0));
        assert!(tri_tri_overlap_3d(&t1, &t2, Precision::Double));
        assert!(tri_tri_overlap_3d(&t2, &t1, Precision::Double));
        assert!(tri_tri_intersection_3d(&t1, &t2, Precision::Double).is_hit());
    }

    #[test]
    fn test_parallel_separated() {
        let t1 = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
        let t2 = tri((0.0, 0.0, 1.0), (1.0, 0.0, 1.0), (0.0, 1.0, 1.0));
        assert!(!tri_tri_overlap_3d(&t1, &t2, Precision::Double));
        assert_eq!(
            tri_tri_intersection_3d(&t1, &t2, Precision::Double),
            TriTriIntersection::Disjoint
        );
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (
                tri((0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0)),
                tri((1.0, 1.0, -1.0), (2.0, 1.0, -1.0), (1.5, 1.0, 2.0)),
            ),
            (
                tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
                tri((5.0, 5.0, 5.0), (6.0, 5.0, 5.0), (5.0, 6.0, 5.0)),
            ),
            (
                tri((0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0)),
                tri((0.0, 0.0, 0.0), (1.0, 0.0, 2.0), (-1.0, 0.0, 2.0)),
            ),
        ];
        for (t1, t2) in &pairs {
            assert_eq!(
                tri_tri_overlap_3d(t1, t2, Precision::Double),
                tri_tri_overlap_3d(t2, t1, Precision::Double),
            );
        }
    }

    #[test]
    fn test_intersection_segment_endpoints() {
        // Vertical triangle punches through a horizontal one; the segment
        // lies in both planes: z = 0, y = 1, x in [7/6, 11/6].
        let t1 = tri((0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0));
        let t2 = tri((1.0, 1.0, -1.0), (2.0, 1.0, -1.0), (1.5, 1.0, 2.0));
        match tri_tri_intersection_3d(&t1, &t2, Precision::Double) {
            TriTriIntersection::Segment { source, target } => {
                for p in [&source, &target] {
                    assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
                    assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
                }
                let (lo, hi) = if source.x <= target.x {
                    (source.x, target.x)
                } else {
                    (target.x, source.x)
                };
                assert_abs_diff_eq!(lo, 7.0 / 6.0, epsilon = 1e-9);
                assert_abs_diff_eq!(hi, 11.0 / 6.0, epsilon = 1e-9);
            }
            other => panic!("expected a segment, got {other:?}"),
        }
    }

    #[test]
    fn test_shared_vertex_degenerate_segment() {
        // Contact at exactly one point yields a zero-length segment there.
        let t1 = tri((0.0, 0.0, 0.0), (2.0, 0.0, 0.0), (0.0, 2.0, 0.0));
        let t2 = tri((0.0, 0.0, 0.0), (1.0, 0.0, 2.0), (-1.0, 0.0, 2.0));
        assert!(tri_tri_overlap_3d(&t1, &t2, Precision::Double));
        match tri_tri_intersection_3d(&t1, &t2, Precision::Double) {
            TriTriIntersection::Segment { source, target } => {
                assert!((source - target).norm() < 1e-9);
                assert!(source.coords.norm() < 1e-9);
            }
            other => panic!("expected a degenerate segment, got {other:?}"),
        }
    }

    #[test]
    fn test_coplanar_disjoint() {
        let t1 = tri((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
        let t2 = tri((2.0, 2.0, 0.0), (3.0, 2.0, 0.0), (2.0, 3.0, 0.0));
        assert!(!tri_tri_overlap_3d(&t1, &t2, Precision::Double));
        let result = tri_tri_intersection_3d(&t1, &t2, Precision::Double);
        assert_eq!(result, TriTriIntersection::Coplanar { overlap: false });
        assert!(!result.is_hit());
    }

    #[test]
    fn test_coplanar_nested() {
        let outer = tri((0.0, 0.0, 0.0), (10.0, 0.0, 0.0), (0.0, 10.0, 0.0));
        let inner = tri((1.0, 1.0, 0.0), (2.0, 1.0, 0.0), (1.0, 2.0, 0.0));
        assert!(tri_tri_overlap_3d(&outer, &inner, Precision::Double));
        assert_eq!(
            tri_tri_intersection_3d(&outer, &inner, Precision::Double),
            TriTriIntersection::Coplanar { overlap: true }
        );
    }

    #[test]
    fn test_coplanar_off_axis_plane() {
        // Common plane with a general normal exercises the projection
        // swizzle rather than the trivial XY drop.
        // Both triangles lie in the plane z = x + y.
        let t1 = tri((0.0, 0.0, 0.0), (2.0, 0.0, 2.0), (0.0, 2.0, 2.0));
        let t2 = tri((0.5, 0.5, 1.0), (1.5, 0.5, 2.0), (0.5, 1.5, 2.0));
        assert!(tri_tri_overlap_3d(&t1, &t2, Precision::Double));
    }

    #[test]
    fn test_precision_selects_coplanar_branch() {
        // Distances around 1e-8: below the single-precision threshold,
        // far above the double-precision one.
        let t1 = tri((0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 0.0));
        let t2 = tri((0.0, 0.0, 1.0e-9), (4.0, 0.0, -1.0e-9), (0.0, 4.0, 0.0));
        match tri_tri_intersection_3d(&t1, &t2, Precision::Single) {
            TriTriIntersection::Coplanar { overlap } => assert!(overlap),
            other => panic!("expected coplanar at single precision, got {other:?}"),
        }
        match tri_tri_intersection_3d(&t1, &t2, Precision::Double) {
            TriTriIntersection::Segment { .. } => {}
            other => panic!("expected a segment at double precision, got {other:?}"),
        }
    }
}
