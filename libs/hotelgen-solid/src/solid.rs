//! # Solid
//!
//! Opaque watertight-solid value type. Solids are produced only by the
//! primitive constructors, transforms, and boolean operations, and are never
//! mutated in place — every operation returns a new value.

use glam::{DMat4, DVec3};

use crate::bsp::Polygon;
use crate::mesh::TriangleMesh;

/// An opaque manifold solid.
///
/// Invariant: a `Solid` is either empty or bounds a closed region with
/// consistently outward-facing polygons. Consumers observe it only through
/// [`Solid::volume`], [`Solid::bounding_box`], [`Solid::to_mesh`] and the
/// boolean/transform operations.
///
/// # Example
///
/// ```rust
/// use hotelgen_solid::primitives::cuboid;
///
/// let solid = cuboid(2.0, 3.0, 4.0).unwrap();
/// assert!((solid.volume() - 24.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Returns the canonical empty solid.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub(crate) fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub(crate) fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Returns true if this solid contains no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Number of triangles a mesh conversion would produce.
    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.vertices().len().saturating_sub(2))
            .sum()
    }

    /// Enclosed volume via signed tetrahedra.
    pub fn volume(&self) -> f64 {
        let mut total = 0.0;
        for poly in &self.polygons {
            let verts = poly.vertices();
            let v0 = verts[0];
            for i in 1..verts.len() - 1 {
                total += v0.dot(verts[i].cross(verts[i + 1]));
            }
        }
        total / 6.0
    }

    /// Axis-aligned bounding box as (min, max); zero vectors when empty.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut iter = self.polygons.iter().flat_map(|p| p.vertices().iter());
        let Some(&first) = iter.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        let mut min = first;
        let mut max = first;
        for &v in iter {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Converts to a triangle mesh by fan-triangulating each face.
    ///
    /// The conversion is lossless for geometry: every face vertex is
    /// emitted, no welding or simplification happens here.
    pub fn to_mesh(&self) -> TriangleMesh {
        let vertex_count: usize = self.polygons.iter().map(|p| p.vertices().len()).sum();
        let mut mesh = TriangleMesh::with_capacity(vertex_count, self.triangle_count());

        for poly in &self.polygons {
            let verts = poly.vertices();
            let base = mesh.vertex_count() as u32;
            for &v in verts {
                mesh.add_vertex(v);
            }
            for i in 1..verts.len() - 1 {
                mesh.add_triangle(base, base + i as u32, base + i as u32 + 1);
            }
        }

        mesh
    }

    /// Applies an affine transform, returning a new solid.
    ///
    /// Reflections (negative determinant) reverse every polygon's winding so
    /// faces keep pointing outward. Polygons collapsed to zero area by the
    /// transform are dropped; a transform that collapses everything yields
    /// the empty solid rather than a corrupt one.
    pub(crate) fn transformed(&self, matrix: &DMat4) -> Solid {
        let flips = matrix.determinant() < 0.0;

        let polygons = self
            .polygons
            .iter()
            .filter_map(|poly| {
                let mut verts: Vec<DVec3> = poly
                    .vertices()
                    .iter()
                    .map(|&v| matrix.transform_point3(v))
                    .collect();
                if flips {
                    verts.reverse();
                }
                Polygon::new(verts)
            })
            .collect();

        Solid::from_polygons(polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;

    #[test]
    fn test_empty_solid() {
        let solid = Solid::empty();
        assert!(solid.is_empty());
        assert_eq!(solid.triangle_count(), 0);
        assert_eq!(solid.volume(), 0.0);
        assert_eq!(solid.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_cuboid_mesh_is_closed() {
        let mesh = cuboid(2.0, 2.0, 2.0).unwrap().to_mesh();
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate());
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_mesh_volume_matches_solid_volume() {
        let solid = cuboid(2.0, 3.0, 4.0).unwrap();
        let mesh = solid.to_mesh();
        assert!((solid.volume() - mesh.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_mirror_transform_keeps_positive_volume() {
        let solid = cuboid(2.0, 3.0, 4.0).unwrap();
        let mirrored = solid.transformed(&DMat4::from_scale(glam::DVec3::new(-1.0, 1.0, 1.0)));
        assert!((mirrored.volume() - 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_collapsing_transform_yields_empty() {
        let solid = cuboid(1.0, 1.0, 1.0).unwrap();
        let collapsed = solid.transformed(&DMat4::from_scale(glam::DVec3::ZERO));
        assert!(collapsed.is_empty());
    }
}
