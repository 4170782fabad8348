#![warn(missing_docs)]

//! Math types for the raymesh geometry crates.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! triangle-mesh geometry: points, vectors, axis-aligned boxes, and the
//! epsilon constants used by the geometric predicates.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Precision class of the scalar data a geometric predicate operates on.
///
/// Meshes arriving from file loaders are frequently single-precision even
/// though all arithmetic here runs in `f64`; sign tests on accumulated
/// products need a looser threshold for such data. Each variant maps to the
/// epsilon appropriate for its source precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Input coordinates originated as `f32`.
    Single,
    /// Input coordinates are genuine `f64`.
    Double,
}

impl Precision {
    /// Epsilon for comparing signed distances and determinants against zero.
    pub const fn eps(self) -> f64 {
        match self {
            Precision::Single => 1.0e-7,
            Precision::Double => 1.0e-14,
        }
    }

    /// Squared epsilon, for thresholds on products of two distances.
    pub const fn eps_sq(self) -> f64 {
        match self {
            Precision::Single => 1.0e-14,
            Precision::Double => 1.0e-28,
        }
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Expand this AABB to include another box.
    pub fn extend(&mut self, other: &Aabb) {
        self.include_point(&other.min);
        self.include_point(&other.max);
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Expand the AABB by a tolerance in all directions.
    pub fn expand(&mut self, tol: f64) {
        self.min.x -= tol;
        self.min.y -= tol;
        self.min.z -= tol;
        self.max.x += tol;
        self.max.y += tol;
        self.max.z += tol;
    }

    /// Diagonal vector from min to max corner.
    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }

    /// Index (0 = x, 1 = y, 2 = z) of the longest extent.
    pub fn longest_axis(&self) -> usize {
        let d = self.diagonal();
        if d.x >= d.y && d.x >= d.z {
            0
        } else if d.y >= d.z {
            1
        } else {
            2
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(15.0, 15.0, 15.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Aabb::new(Point3::new(20.0, 20.0, 20.0), Point3::new(30.0, 30.0, 30.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_touching() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb::new(Point3::new(10.0, 0.0, 0.0), Point3::new(20.0, 10.0, 10.0));
        assert!(a.overlaps(&b)); // touching counts
    }

    #[test]
    fn test_empty_extend() {
        let mut a = Aabb::empty();
        a.include_point(&Point3::new(1.0, 2.0, 3.0));
        a.include_point(&Point3::new(-1.0, 0.0, 5.0));
        assert!((a.min.x - -1.0).abs() < 1e-12);
        assert!((a.max.z - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_longest_axis() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 3.0, 2.0));
        assert_eq!(a.longest_axis(), 1);
    }

    #[test]
    fn test_center_and_diagonal() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));
        let c = a.center();
        assert!((c - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
        assert!((a.diagonal() - Vec3::new(2.0, 4.0, 6.0)).norm() < 1e-12);
    }

    #[test]
    fn test_precision_eps() {
        assert!(Precision::Single.eps() > Precision::Double.eps());
        assert!((Precision::Single.eps_sq() - Precision::Single.eps() * Precision::Single.eps()).abs() < 1e-20);
    }
}
