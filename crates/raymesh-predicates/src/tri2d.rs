//! Planar triangle-triangle overlap test.
//!
//! Guigue-Devillers decision tables over the 2D orientation predicate. The
//! entry point reorients both triangles counter-clockwise and dispatches to
//! the CCW-only test, which classifies the position of `p1` against the
//! three half-planes of the second triangle and runs the matching vertex or
//! edge sub-test. Boundary contact counts as overlap throughout.

use raymesh_math::Point2;

/// Signed doubled area of the triangle `(a, b, c)`.
///
/// Positive for counter-clockwise order, negative for clockwise, zero for
/// collinear points.
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x)
}

/// Sub-test for the configuration where `p1` sees the vertex region of
/// triangle 2.
fn intersection_test_vertex(
    p1: &Point2,
    q1: &Point2,
    r1: &Point2,
    p2: &Point2,
    q2: &Point2,
    r2: &Point2,
) -> bool {
    if orient_2d(r2, p2, q1) >= 0.0 {
        if orient_2d(r2, q2, q1) <= 0.0 {
            if orient_2d(p1, p2, q1) > 0.0 {
                orient_2d(p1, q2, q1) <= 0.0
            } else if orient_2d(p1, p2, r1) >= 0.0 {
                orient_2d(q1, r1, p2) >= 0.0
            } else {
                false
            }
        } else if orient_2d(p1, q2, q1) <= 0.0 {
            if orient_2d(r2, q2, r1) <= 0.0 {
                orient_2d(q1, r1, q2) >= 0.0
            } else {
                false
            }
        } else {
            false
        }
    } else if orient_2d(r2, p2, r1) >= 0.0 {
        if orient_2d(q1, r1, r2) >= 0.0 {
            orient_2d(p1, p2, r1) >= 0.0
        } else if orient_2d(q1, r1, q2) >= 0.0 {
            orient_2d(r2, r1, q2) >= 0.0
        } else {
            false
        }
    } else {
        false
    }
}

/// Sub-test for the configuration where `p1` sees the edge region of
/// triangle 2.
fn intersection_test_edge(
    p1: &Point2,
    q1: &Point2,
    r1: &Point2,
    p2: &Point2,
    r2: &Point2,
) -> bool {
    if orient_2d(r2, p2, q1) >= 0.0 {
        if orient_2d(p1, p2, q1) >= 0.0 {
            orient_2d(p1, q1, r2) >= 0.0
        } else if orient_2d(q1, r1, p2) >= 0.0 {
            orient_2d(r1, p1, p2) >= 0.0
        } else {
            false
        }
    } else if orient_2d(r2, p2, r1) >= 0.0 {
        if orient_2d(p1, p2, r1) >= 0.0 {
            if orient_2d(p1, r1, r2) >= 0.0 {
                true
            } else {
                orient_2d(q1, r1, r2) >= 0.0
            }
        } else {
            false
        }
    } else {
        false
    }
}

/// Overlap test for two triangles already in counter-clockwise order.
fn ccw_tri_tri_intersection_2d(
    p1: &Point2,
    q1: &Point2,
    r1: &Point2,
    p2: &Point2,
    q2: &Point2,
    r2: &Point2,
) -> bool {
    if orient_2d(p2, q2, p1) >= 0.0 {
        if orient_2d(q2, r2, p1) >= 0.0 {
            if orient_2d(r2, p2, p1) >= 0.0 {
                // p1 is inside triangle 2.
                true
            } else {
                intersection_test_edge(p1, q1, r1, p2, r2)
            }
        } else if orient_2d(r2, p2, p1) >= 0.0 {
            intersection_test_edge(p1, q1, r1, r2, q2)
        } else {
            intersection_test_vertex(p1, q1, r1, p2, q2, r2)
        }
    } else if orient_2d(q2, r2, p1) >= 0.0 {
        if orient_2d(r2, p2, p1) >= 0.0 {
            intersection_test_edge(p1, q1, r1, q2, p2)
        } else {
            intersection_test_vertex(p1, q1, r1, q2, r2, p2)
        }
    } else {
        intersection_test_vertex(p1, q1, r1, r2, p2, q2)
    }
}

/// Test whether two 2D triangles overlap, boundaries included.
///
/// Vertex order of either triangle may be clockwise or counter-clockwise;
/// each is reoriented before the CCW-only test runs.
pub fn tri_tri_overlap_2d(t1: &[Point2; 3], t2: &[Point2; 3]) -> bool {
    let [p1, q1, r1] = t1;
    let [p2, q2, r2] = t2;
    if orient_2d(p1, q1, r1) < 0.0 {
        if orient_2d(p2, q2, r2) < 0.0 {
            ccw_tri_tri_intersection_2d(p1, r1, q1, p2, r2, q2)
        } else {
            ccw_tri_tri_intersection_2d(p1, r1, q1, p2, q2, r2)
        }
    } else if orient_2d(p2, q2, r2) < 0.0 {
        ccw_tri_tri_intersection_2d(p1, q1, r1, p2, r2, q2)
    } else {
        ccw_tri_tri_intersection_2d(p1, q1, r1, p2, q2, r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> [Point2; 3] {
        [
            Point2::new(a.0, a.1),
            Point2::new(b.0, b.1),
            Point2::new(c.0, c.1),
        ]
    }

    #[test]
    fn test_orient_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(orient_2d(&a, &b, &c) > 0.0);
        assert!(orient_2d(&a, &c, &b) < 0.0);
        let m = Point2::new(0.5, 0.0);
        assert_eq!(orient_2d(&a, &b, &m), 0.0);
    }

    #[test]
    fn test_self_overlap() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert!(tri_tri_overlap_2d(&t, &t));
    }

    #[test]
    fn test_crossing_pair() {
        let t1 = tri((0.0, 0.0), (2.0, 0.0), (0.0, 2.0));
        let t2 = tri((1.0, -1.0), (1.0, 3.0), (3.0, 1.0));
        assert!(tri_tri_overlap_2d(&t1, &t2));
        assert!(tri_tri_overlap_2d(&t2, &t1));
    }

    #[test]
    fn test_disjoint_pair() {
        let t1 = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let t2 = tri((5.0, 5.0), (6.0, 5.0), (5.0, 6.0));
        assert!(!tri_tri_overlap_2d(&t1, &t2));
        assert!(!tri_tri_overlap_2d(&t2, &t1));
    }

    #[test]
    fn test_shared_edge_counts_as_overlap() {
        let t1 = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let t2 = tri((1.0, 0.0), (0.0, 1.0), (1.0, 1.0));
        assert!(tri_tri_overlap_2d(&t1, &t2));
    }

    #[test]
    fn test_shared_vertex_counts_as_overlap() {
        let t1 = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let t2 = tri((1.0, 0.0), (2.0, 0.0), (1.0, -1.0));
        assert!(tri_tri_overlap_2d(&t1, &t2));
    }

    #[test]
    fn test_nested_pair() {
        let outer = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let inner = tri((1.0, 1.0), (2.0, 1.0), (1.0, 2.0));
        assert!(tri_tri_overlap_2d(&outer, &inner));
        assert!(tri_tri_overlap_2d(&inner, &outer));
    }

    #[test]
    fn test_clockwise_inputs() {
        // Same pair as the crossing test, one triangle reversed.
        let t1 = tri((0.0, 0.0), (0.0, 2.0), (2.0, 0.0));
        let t2 = tri((1.0, -1.0), (1.0, 3.0), (3.0, 1.0));
        assert!(tri_tri_overlap_2d(&t1, &t2));
    }
}
