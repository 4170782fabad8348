#![warn(missing_docs)]

//! Indexed triangle set for the raymesh crates.
//!
//! A [`TriangleMesh`] is a read-only snapshot of vertex positions and
//! triangular faces. Any spatial index built over a mesh is tied to that
//! snapshot; changing vertices or topology requires a rebuild.

use raymesh_math::{Aabb, Point3, Vec3};
use thiserror::Error;

/// Errors for malformed mesh input.
///
/// Out-of-range indices are a caller contract violation; they are caught at
/// the input boundary by [`TriangleMesh::validate`] so that the query code
/// can index vertices without per-access checks.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A face references a vertex index past the end of the position array.
    #[error("face {face} references vertex {index} but the mesh has {num_vertices} vertices")]
    IndexOutOfRange {
        /// Offending face index.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
}

/// An indexed triangle set: vertex positions plus faces of three indices.
///
/// Faces keep their winding order; barycentric coordinates produced by the
/// intersection routines refer to the face's vertices in this order.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Triangular faces, three indices into `positions` each.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a mesh from positions and faces.
    pub fn new(positions: Vec<Point3>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Number of triangles.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Check that every face index points at an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        let n = self.positions.len();
        for (f, face) in self.faces.iter().enumerate() {
            for &i in face {
                if i as usize >= n {
                    return Err(MeshError::IndexOutOfRange {
                        face: f,
                        index: i,
                        num_vertices: n,
                    });
                }
            }
        }
        Ok(())
    }

    /// The three corner positions of a face, in winding order.
    #[inline]
    pub fn face_vertices(&self, face: usize) -> [Point3; 3] {
        let [a, b, c] = self.faces[face];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// Un-normalized face normal (cross product of the edge vectors).
    ///
    /// Its length is twice the face area, so degenerate faces yield the zero
    /// vector rather than NaN.
    #[inline]
    pub fn face_normal_raw(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.face_vertices(face);
        (b - a).cross(&(c - a))
    }

    /// Unit face normal, or the zero vector for a degenerate face.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let n = self.face_normal_raw(face);
        let len = n.norm();
        if len > 0.0 {
            n / len
        } else {
            Vec3::zeros()
        }
    }

    /// Centroid of a face.
    pub fn face_centroid(&self, face: usize) -> Point3 {
        let [a, b, c] = self.face_vertices(face);
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Area-weighted per-vertex normals.
    ///
    /// Accumulates each face's raw (area-scaled) normal onto its three
    /// vertices, then normalizes. Vertices referenced by no face, or only by
    /// degenerate faces, get the zero vector.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::zeros(); self.positions.len()];
        for f in 0..self.faces.len() {
            let n = self.face_normal_raw(f);
            for &i in &self.faces[f] {
                normals[i as usize] += n;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > 0.0 {
                *n /= len;
            }
        }
        normals
    }

    /// Bounding box over all vertices.
    pub fn bounding_box(&self) -> Aabb {
        let mut bbox = Aabb::empty();
        for p in &self.positions {
            bbox.include_point(p);
        }
        bbox
    }
}
