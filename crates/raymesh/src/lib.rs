#![warn(missing_docs)]

//! Mesh ray-casting, robust triangle predicates, and ray-based analysis.
//!
//! Facade crate re-exporting the workspace members: math types and epsilon
//! policy, the indexed triangle mesh, brute-force and BVH intersectors,
//! Guigue-Devillers triangle-triangle predicates, and the oracle-driven
//! analyzers (ambient occlusion, shape diameter).
//!
//! # Example
//!
//! ```
//! use raymesh::cast::{Ray, Tree};
//! use raymesh::math::{Point3, Vec3};
//! use raymesh::mesh::TriangleMesh;
//!
//! // Two triangles spanning the unit square in the z = 0 plane.
//! let mesh = TriangleMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! );
//!
//! let tree = Tree::build(&mesh);
//! let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = tree.first_hit(&mesh, &ray).unwrap();
//! assert!((hit.t - 1.0).abs() < 1e-12);
//! ```

pub use raymesh_analysis as analysis;
pub use raymesh_cast as cast;
pub use raymesh_math as math;
pub use raymesh_mesh as mesh;
pub use raymesh_predicates as predicates;
