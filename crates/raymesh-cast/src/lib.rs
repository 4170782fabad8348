#![warn(missing_docs)]

//! Ray casting against indexed triangle meshes.
//!
//! Two interchangeable intersectors over a [`raymesh_mesh::TriangleMesh`]:
//!
//! - [`brute`] — O(faces) linear scan, the right tool for meshes of a few
//!   dozen triangles and the ground truth the index is validated against.
//! - [`Tree`] — a bounding-volume hierarchy bringing first-hit queries to
//!   roughly O(log faces). Built once from a mesh snapshot, immutable and
//!   safe to query from many threads afterwards.
//!
//! Both produce [`Hit`] records carrying the hit face, barycentric `(u, v)`
//! and the ray parameter `t` measured in units of the (possibly
//! unnormalized) ray direction.

mod error;
mod ray;
mod tree;

pub mod brute;
pub mod triangle;

pub use error::CastError;
pub use ray::{Hit, Ray};
pub use tree::{Tree, MAX_CROSSING_HITS};

/// Face count below which a linear scan beats building a spatial index.
pub const SMALL_MESH_FACES: usize = 64;
