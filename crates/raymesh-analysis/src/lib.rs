#![warn(missing_docs)]

//! Mesh analysis built on ray queries.
//!
//! An oracle trait abstracts "distance to the first surface along a ray";
//! the analyzers — ambient occlusion and the shape diameter function —
//! shoot stratified direction bundles through it and are parallelized over
//! query points. Any intersector backend, including ones outside this
//! workspace, plugs in through [`RayOracle`].

mod diameter;
mod occlusion;
mod oracle;
mod parallel;
mod sampling;

pub use diameter::{face_shape_diameter, shape_diameter};
pub use occlusion::{ambient_occlusion, face_ambient_occlusion, vertex_ambient_occlusion};
pub use oracle::{BruteForceOracle, MeshIntersector, RayOracle, TreeOracle};
pub use parallel::{parallel_map_indexed, PARALLEL_MIN_ITEMS};
pub use sampling::sample_directions;
