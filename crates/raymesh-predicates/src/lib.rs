#![warn(missing_docs)]

//! Robust triangle-triangle overlap and intersection predicates.
//!
//! Implements the Guigue-Devillers orientation-predicate formulation: 2D
//! and 3D overlap tests plus a 3D variant that constructs the intersection
//! segment. All tests treat boundary contact as intersection and classify
//! coplanar pairs explicitly instead of relying on sign noise.

mod tri2d;
mod tri3d;

pub use tri2d::{orient_2d, tri_tri_overlap_2d};
pub use tri3d::{tri_tri_intersection_3d, tri_tri_overlap_3d, TriTriIntersection};
