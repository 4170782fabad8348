//! Bounding-volume hierarchy over mesh triangles.
//!
//! The tree is an arena of nodes in a single `Vec`: node 0 is the root and
//! children are referenced by integer index, so a finished tree is immutable
//! and freely shared across query threads. Construction splits the face set
//! at the median centroid along the axis of greatest centroid spread, which
//! keeps the depth near log2(faces) regardless of face distribution.

use raymesh_math::{Aabb, Point3};
use raymesh_mesh::TriangleMesh;

use crate::triangle::{intersect_triangle_ray, triangle_test_epsilon, DEFAULT_EPSILON};
use crate::{CastError, Hit, Ray};

/// Cap on hits accumulated by [`Tree::crossings`] before the scan is
/// declared degenerate.
pub const MAX_CROSSING_HITS: usize = 1000;

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    /// Leaf holding a single face index.
    Leaf { face: u32 },
    /// Internal node with two children in the arena.
    Inner { left: u32, right: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Node {
    /// Union of the boxes of everything in this subtree.
    aabb: Aabb,
    kind: NodeKind,
}

/// Face index plus precomputed box and centroid, consumed by the build.
struct BuildItem {
    face: u32,
    aabb: Aabb,
    centroid: Point3,
}

/// Static BVH over a mesh snapshot.
///
/// Build once, query many: the mesh must not change while the tree is in
/// use, and there is no API to mutate a built tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    /// Parallel-rejection epsilon scaled to the root box.
    eps: f64,
    /// Base step for the crossing scan's self-hit escape.
    advance_eps: f64,
}

impl Tree {
    /// Build a tree over every face of the mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        Self::build_with_epsilon(mesh, 0.0)
    }

    /// Build with face boxes inflated by `box_eps` to absorb numeric
    /// rounding during traversal.
    pub fn build_with_epsilon(mesh: &TriangleMesh, box_eps: f64) -> Self {
        let mut items: Vec<BuildItem> = (0..mesh.num_faces())
            .map(|face| {
                let [a, b, c] = mesh.face_vertices(face);
                let mut aabb = Aabb::empty();
                aabb.include_point(&a);
                aabb.include_point(&b);
                aabb.include_point(&c);
                if box_eps > 0.0 {
                    aabb.expand(box_eps);
                }
                let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
                BuildItem {
                    face: face as u32,
                    aabb,
                    centroid,
                }
            })
            .collect();

        let mut nodes = Vec::with_capacity(items.len().saturating_mul(2));
        if !items.is_empty() {
            build_node(&mut items, &mut nodes);
        }

        let (eps, advance_eps) = match nodes.first() {
            Some(root) => {
                let diag = root.aabb.diagonal().norm();
                (
                    triangle_test_epsilon(&root.aabb),
                    if diag > 0.0 { 1.0e-9 * diag } else { 1.0e-9 },
                )
            }
            None => (DEFAULT_EPSILON, 1.0e-9),
        };

        Self {
            nodes,
            eps,
            advance_eps,
        }
    }

    /// True if the tree was built over an empty mesh.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// First (nearest) intersection of a ray with the indexed mesh.
    ///
    /// `mesh` must be the mesh the tree was built from.
    pub fn first_hit(&self, mesh: &TriangleMesh, ray: &Ray) -> Option<Hit> {
        let root = self.nodes.first()?;
        let mut best = None;
        let mut best_t = ray.t_far;
        if ray.intersect_aabb(&root.aabb, ray.t_near, best_t).is_some() {
            self.first_hit_node(mesh, ray, 0, &mut best_t, &mut best);
        }
        best
    }

    fn first_hit_node(
        &self,
        mesh: &TriangleMesh,
        ray: &Ray,
        idx: usize,
        best_t: &mut f64,
        best: &mut Option<Hit>,
    ) {
        match self.nodes[idx].kind {
            NodeKind::Leaf { face } => {
                let [v0, v1, v2] = mesh.face_vertices(face as usize);
                if let Some((t, u, v)) = intersect_triangle_ray(ray, &v0, &v1, &v2, self.eps) {
                    if t < *best_t {
                        *best_t = t;
                        *best = Some(Hit::new(face, u, v, t));
                    }
                }
            }
            NodeKind::Inner { left, right } => {
                let entry = |child: u32, best_t: f64| {
                    ray.intersect_aabb(&self.nodes[child as usize].aabb, ray.t_near, best_t)
                        .map(|(t_min, _)| t_min)
                };
                match (entry(left, *best_t), entry(right, *best_t)) {
                    (Some(lt), Some(rt)) => {
                        // Nearer-entry child first, so best_t tightens before
                        // the farther box is reconsidered.
                        let (near, far, far_entry) = if lt <= rt {
                            (left, right, rt)
                        } else {
                            (right, left, lt)
                        };
                        self.first_hit_node(mesh, ray, near as usize, best_t, best);
                        if far_entry < *best_t {
                            self.first_hit_node(mesh, ray, far as usize, best_t, best);
                        }
                    }
                    (Some(_), None) => self.first_hit_node(mesh, ray, left as usize, best_t, best),
                    (None, Some(_)) => self.first_hit_node(mesh, ray, right as usize, best_t, best),
                    (None, None) => {}
                }
            }
        }
    }

    /// All intersections of a ray with the indexed mesh, sorted by `t`.
    ///
    /// A ray crossing a shared edge of two faces reports a hit for each.
    pub fn all_hits(&self, mesh: &TriangleMesh, ray: &Ray) -> Vec<Hit> {
        let mut hits = Vec::new();
        if let Some(root) = self.nodes.first() {
            if ray.intersect_aabb(&root.aabb, ray.t_near, ray.t_far).is_some() {
                self.all_hits_node(mesh, ray, 0, &mut hits);
            }
        }
        hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
        hits
    }

    fn all_hits_node(&self, mesh: &TriangleMesh, ray: &Ray, idx: usize, hits: &mut Vec<Hit>) {
        match self.nodes[idx].kind {
            NodeKind::Leaf { face } => {
                let [v0, v1, v2] = mesh.face_vertices(face as usize);
                if let Some((t, u, v)) = intersect_triangle_ray(ray, &v0, &v1, &v2, self.eps) {
                    hits.push(Hit::new(face, u, v, t));
                }
            }
            NodeKind::Inner { left, right } => {
                for child in [left, right] {
                    let aabb = &self.nodes[child as usize].aabb;
                    if ray.intersect_aabb(aabb, ray.t_near, ray.t_far).is_some() {
                        self.all_hits_node(mesh, ray, child as usize, hits);
                    }
                }
            }
        }
    }

    /// Enumerate the crossings of a ray through the mesh surface, in order
    /// of increasing `t`.
    ///
    /// Repeated calls to [`Tree::first_hit`] with an advancing near bound.
    /// When the same face comes back at numerically the same `t` (grazing or
    /// coincident geometry), the near bound advances by a geometrically
    /// growing step — `eps * 2^k` over `k` consecutive repeats, with `k`
    /// reset on each genuinely new hit — instead of perturbing the origin.
    /// Accumulating more than [`MAX_CROSSING_HITS`] aborts with
    /// [`CastError::ExcessiveHits`].
    pub fn crossings(&self, mesh: &TriangleMesh, ray: &Ray) -> Result<Vec<Hit>, CastError> {
        let mut hits: Vec<Hit> = Vec::new();
        let mut k: i32 = 0;
        let mut t_near = ray.t_near;
        loop {
            let probe = ray.clipped(t_near);
            let Some(hit) = self.first_hit(mesh, &probe) else {
                break;
            };
            let repeated = hits
                .last()
                .is_some_and(|prev| prev.face == hit.face && (hit.t - prev.t).abs() <= self.advance_eps);
            if repeated {
                k += 1;
            } else {
                hits.push(hit);
                if hits.len() > MAX_CROSSING_HITS {
                    return Err(CastError::ExcessiveHits { count: hits.len() });
                }
                k = 0;
            }
            t_near = hit.t + self.advance_eps * f64::powi(2.0, k);
        }
        Ok(hits)
    }
}

/// Recursively build the subtree over `items`, returning its arena index.
fn build_node(items: &mut [BuildItem], nodes: &mut Vec<Node>) -> u32 {
    let mut bbox = Aabb::empty();
    for item in items.iter() {
        bbox.extend(&item.aabb);
    }

    if let [item] = items {
        let idx = nodes.len() as u32;
        nodes.push(Node {
            aabb: bbox,
            kind: NodeKind::Leaf { face: item.face },
        });
        return idx;
    }

    // Split at the median centroid along the axis of greatest centroid
    // spread; quickselect keeps the build O(n log n) overall.
    let mut centroid_bounds = Aabb::empty();
    for item in items.iter() {
        centroid_bounds.include_point(&item.centroid);
    }
    let axis = centroid_bounds.longest_axis();

    let mid = items.len() / 2;
    items.select_nth_unstable_by(mid, |a, b| {
        a.centroid[axis].partial_cmp(&b.centroid[axis]).unwrap()
    });

    let idx = nodes.len() as u32;
    nodes.push(Node {
        aabb: bbox,
        kind: NodeKind::Inner { left: 0, right: 0 },
    });

    let (left_items, right_items) = items.split_at_mut(mid);
    let left = build_node(left_items, nodes);
    let right = build_node(right_items, nodes);
    nodes[idx as usize].kind = NodeKind::Inner { left, right };

    idx
}
