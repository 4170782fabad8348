//! Ray and hit-record types.

use raymesh_math::{Aabb, Point3, Vec3};
use raymesh_mesh::TriangleMesh;

/// A ray in 3D space with a parameter interval.
///
/// The direction is used as given, without normalization: the hit parameter
/// `t` is measured in units of `dir`, so callers working with unnormalized
/// directions get distances in those units.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (not necessarily unit length).
    pub dir: Vec3,
    /// Lower bound of the accepted parameter interval (exclusive).
    pub t_near: f64,
    /// Upper bound of the accepted parameter interval.
    pub t_far: f64,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    inv_dir: Vec3,
    /// Sign of direction components (0 if positive, 1 if negative).
    sign: [usize; 3],
}

impl Ray {
    /// Create a ray accepting hits in `(0, +inf)`.
    pub fn new(origin: Point3, dir: Vec3) -> Self {
        Self::with_range(origin, dir, 0.0, f64::INFINITY)
    }

    /// Create a ray accepting hits in `(t_near, t_far)`.
    pub fn with_range(origin: Point3, dir: Vec3, t_near: f64, t_far: f64) -> Self {
        let inv_dir = Vec3::new(1.0 / dir.x, 1.0 / dir.y, 1.0 / dir.z);
        let sign = [
            if inv_dir.x < 0.0 { 1 } else { 0 },
            if inv_dir.y < 0.0 { 1 } else { 0 },
            if inv_dir.z < 0.0 { 1 } else { 0 },
        ];
        Self {
            origin,
            dir,
            t_near,
            t_far,
            inv_dir,
            sign,
        }
    }

    /// Copy of this ray with the near bound advanced to `t_near`.
    pub fn clipped(&self, t_near: f64) -> Self {
        Self { t_near, ..*self }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * dir`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.dir
    }

    /// True if the direction has zero length.
    ///
    /// Such a ray is a caller error; the oracle layer rejects it before any
    /// query reaches the intersectors.
    pub fn is_degenerate(&self) -> bool {
        self.dir == Vec3::zeros()
    }

    /// Test ray-AABB intersection with the slab method, clipped to
    /// `[t_near, t_far]`.
    ///
    /// Returns `Some((t_min, t_max))` with the entry and exit parameters if
    /// the box overlaps the interval.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb, t_near: f64, t_far: f64) -> Option<(f64, f64)> {
        let bounds = [aabb.min, aabb.max];

        let mut t_min = (bounds[self.sign[0]].x - self.origin.x) * self.inv_dir.x;
        let mut t_max = (bounds[1 - self.sign[0]].x - self.origin.x) * self.inv_dir.x;

        let ty_min = (bounds[self.sign[1]].y - self.origin.y) * self.inv_dir.y;
        let ty_max = (bounds[1 - self.sign[1]].y - self.origin.y) * self.inv_dir.y;

        t_min = t_min.max(ty_min);
        t_max = t_max.min(ty_max);

        let tz_min = (bounds[self.sign[2]].z - self.origin.z) * self.inv_dir.z;
        let tz_max = (bounds[1 - self.sign[2]].z - self.origin.z) * self.inv_dir.z;

        t_min = t_min.max(tz_min);
        t_max = t_max.min(tz_max);

        if t_min <= t_max && t_min < t_far && t_max > t_near {
            Some((t_min, t_max))
        } else {
            None
        }
    }
}

/// Result of a ray-triangle intersection query.
///
/// The hit point equals `origin + t * dir` and also
/// `(1-u-v)*V0 + u*V1 + v*V2` for the face's vertices in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the hit face in the mesh.
    pub face: u32,
    /// Geometry id, for callers tracing against several meshes. Zero unless
    /// assigned by the caller.
    pub geometry: u32,
    /// First barycentric coordinate (weight of the face's second vertex).
    pub u: f64,
    /// Second barycentric coordinate (weight of the face's third vertex).
    pub v: f64,
    /// Ray parameter of the hit, in units of the ray direction.
    pub t: f64,
}

impl Hit {
    /// Create a hit with geometry id zero.
    pub fn new(face: u32, u: f64, v: f64, t: f64) -> Self {
        Self {
            face,
            geometry: 0,
            u,
            v,
            t,
        }
    }

    /// Same hit tagged with a geometry id.
    pub fn with_geometry(mut self, geometry: u32) -> Self {
        self.geometry = geometry;
        self
    }

    /// Hit point reconstructed from the ray parameter.
    pub fn point_on_ray(&self, ray: &Ray) -> Point3 {
        ray.at(self.t)
    }

    /// Hit point reconstructed from the barycentric coordinates.
    pub fn point_on_face(&self, mesh: &TriangleMesh) -> Point3 {
        let [a, b, c] = mesh.face_vertices(self.face as usize);
        Point3::from((1.0 - self.u - self.v) * a.coords + self.u * b.coords + self.v * c.coords)
    }
}
