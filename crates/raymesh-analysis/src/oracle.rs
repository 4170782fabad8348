//! Ray oracle abstraction over the intersector backends.

use raymesh_cast::{brute, Ray, Tree, SMALL_MESH_FACES};
use raymesh_math::{Point3, Vec3};
use raymesh_mesh::TriangleMesh;

/// Answers nearest-hit ray queries against some geometry.
///
/// The analyzers only ever need the distance to the first surface along a
/// ray, so this is the whole interface; external accelerators (hardware
/// tracers, foreign BVH libraries) plug in by implementing it. A
/// zero-length direction is a caller error and yields `None` from every
/// implementation here rather than reaching an intersector.
pub trait RayOracle: Sync {
    /// Nearest-hit parameter along `origin + t * dir`, in units of `dir`,
    /// or `None` when nothing is hit.
    fn shoot(&self, origin: &Point3, dir: &Vec3) -> Option<f64>;
}

/// Oracle scanning every face of a mesh per query.
pub struct BruteForceOracle<'a> {
    mesh: &'a TriangleMesh,
}

impl<'a> BruteForceOracle<'a> {
    /// Wrap a mesh without any preprocessing.
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self { mesh }
    }
}

impl RayOracle for BruteForceOracle<'_> {
    fn shoot(&self, origin: &Point3, dir: &Vec3) -> Option<f64> {
        let ray = Ray::new(*origin, *dir);
        if ray.is_degenerate() {
            return None;
        }
        brute::intersect_first(self.mesh, &ray).map(|hit| hit.t)
    }
}

/// Oracle answering queries through a prebuilt spatial index.
pub struct TreeOracle<'a> {
    mesh: &'a TriangleMesh,
    tree: Tree,
}

impl<'a> TreeOracle<'a> {
    /// Build the index over the mesh and wrap both.
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self {
            mesh,
            tree: Tree::build(mesh),
        }
    }

    /// Wrap a mesh and an index already built over it.
    pub fn with_tree(mesh: &'a TriangleMesh, tree: Tree) -> Self {
        Self { mesh, tree }
    }
}

impl RayOracle for TreeOracle<'_> {
    fn shoot(&self, origin: &Point3, dir: &Vec3) -> Option<f64> {
        let ray = Ray::new(*origin, *dir);
        if ray.is_degenerate() {
            return None;
        }
        self.tree.first_hit(self.mesh, &ray).map(|hit| hit.t)
    }
}

/// Oracle choosing its backend by mesh size.
///
/// Below [`SMALL_MESH_FACES`] faces the linear scan beats paying for a tree
/// build, so no index is constructed.
pub enum MeshIntersector<'a> {
    /// Linear-scan backend for small meshes.
    Brute(BruteForceOracle<'a>),
    /// Indexed backend for everything else.
    Tree(TreeOracle<'a>),
}

impl<'a> MeshIntersector<'a> {
    /// Pick a backend for the mesh.
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        if mesh.num_faces() < SMALL_MESH_FACES {
            MeshIntersector::Brute(BruteForceOracle::new(mesh))
        } else {
            MeshIntersector::Tree(TreeOracle::new(mesh))
        }
    }
}

impl RayOracle for MeshIntersector<'_> {
    fn shoot(&self, origin: &Point3, dir: &Vec3) -> Option<f64> {
        match self {
            MeshIntersector::Brute(oracle) => oracle.shoot(origin, dir),
            MeshIntersector::Tree(oracle) => oracle.shoot(origin, dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Axis-aligned cube `[0,1]^3`, 12 triangles, outward winding.
    fn unit_cube() -> TriangleMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let faces = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [2, 3, 7],
            [2, 7, 6],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        TriangleMesh::new(positions, faces)
    }

    #[test]
    fn test_backends_agree() {
        let mesh = unit_cube();
        let brute = BruteForceOracle::new(&mesh);
        let tree = TreeOracle::new(&mesh);
        for i in 0..20 {
            for j in 0..20 {
                let origin = Point3::new(0.05 * i as f64, 0.05 * j as f64 + 0.01, -1.0);
                let dir = Vec3::new(0.01 * i as f64, -0.01 * j as f64, 1.0);
                let a = brute.shoot(&origin, &dir);
                let b = tree.shoot(&origin, &dir);
                match (a, b) {
                    (None, None) => {}
                    (Some(ta), Some(tb)) => assert!((ta - tb).abs() < 1e-10),
                    other => panic!("backends disagree: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_zero_direction_rejected() {
        let mesh = unit_cube();
        let origin = Point3::new(0.5, 0.5, -1.0);
        let zero = Vec3::zeros();
        assert!(BruteForceOracle::new(&mesh).shoot(&origin, &zero).is_none());
        assert!(TreeOracle::new(&mesh).shoot(&origin, &zero).is_none());
        assert!(MeshIntersector::new(&mesh).shoot(&origin, &zero).is_none());
    }

    #[test]
    fn test_auto_backend_selection() {
        let small = unit_cube();
        assert!(matches!(
            MeshIntersector::new(&small),
            MeshIntersector::Brute(_)
        ));

        // Tile enough copies of a triangle to cross the threshold.
        let mut positions = Vec::new();
        let mut faces = Vec::new();
        for i in 0..100u32 {
            let x = i as f64;
            let base = positions.len() as u32;
            positions.push(Point3::new(x, 0.0, 0.0));
            positions.push(Point3::new(x + 0.5, 0.0, 0.0));
            positions.push(Point3::new(x, 0.5, 0.0));
            faces.push([base, base + 1, base + 2]);
        }
        let large = TriangleMesh::new(positions, faces);
        assert!(matches!(
            MeshIntersector::new(&large),
            MeshIntersector::Tree(_)
        ));
    }

    #[test]
    fn test_distance_in_direction_units() {
        let mesh = unit_cube();
        let oracle = MeshIntersector::new(&mesh);
        let origin = Point3::new(0.5, 0.5, -1.0);
        let unit = oracle.shoot(&origin, &Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let double = oracle.shoot(&origin, &Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert!((unit - 1.0).abs() < 1e-10);
        assert!((double - 0.5).abs() < 1e-10);
    }
}
