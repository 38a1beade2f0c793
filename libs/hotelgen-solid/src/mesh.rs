//! # Triangle Mesh
//!
//! Shared-vertex triangle mesh produced by [`crate::Solid::to_mesh`].
//! All geometry calculations use f64 internally.

use std::collections::HashMap;

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// # Example
///
/// ```rust
/// use hotelgen_solid::TriangleMesh;
/// use glam::DVec3;
///
/// let mut mesh = TriangleMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Signed volume via the divergence theorem.
    pub fn volume(&self) -> f64 {
        let mut total = 0.0;
        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            total += v0.dot(v1.cross(v2));
        }
        total / 6.0
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }
    }

    /// Validates index bounds and rejects degenerate triangles.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }

    /// Checks two-manifold closure by edge pairing.
    ///
    /// Vertices are welded within `VERTEX_MERGE_EPSILON` first, then every
    /// directed edge must be matched by its reverse. Used by the strict
    /// validation path; routine builds trust the boolean kernel's closure
    /// invariant instead.
    pub fn is_watertight(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let welded = self.weld_indices();

        let mut edges: HashMap<(u32, u32), i64> = HashMap::new();
        for tri in &self.triangles {
            let ids = [
                welded[tri[0] as usize],
                welded[tri[1] as usize],
                welded[tri[2] as usize],
            ];
            if ids[0] == ids[1] || ids[1] == ids[2] || ids[0] == ids[2] {
                continue; // collapsed by welding
            }
            for k in 0..3 {
                let a = ids[k];
                let b = ids[(k + 1) % 3];
                // Count +1 for the canonical direction, -1 for the reverse.
                if a < b {
                    *edges.entry((a, b)).or_insert(0) += 1;
                } else {
                    *edges.entry((b, a)).or_insert(0) -= 1;
                }
            }
        }

        edges.values().all(|&count| count == 0)
    }

    /// Maps each vertex index to a welded representative index.
    fn weld_indices(&self) -> Vec<u32> {
        let scale = 1.0 / VERTEX_MERGE_EPSILON;
        let mut buckets: HashMap<(i64, i64, i64), u32> = HashMap::new();
        let mut mapped = Vec::with_capacity(self.vertices.len());

        for (i, v) in self.vertices.iter().enumerate() {
            let key = (
                (v.x * scale).round() as i64,
                (v.y * scale).round() as i64,
                (v.z * scale).round() as i64,
            );
            let id = *buckets.entry(key).or_insert(i as u32);
            mapped.push(id);
        }

        mapped
    }
}
