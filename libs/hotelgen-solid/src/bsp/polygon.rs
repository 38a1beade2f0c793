//! Convex polygon with plane-splitting support for CSG clipping.

use glam::DVec3;

use super::plane::{Plane, Side};

/// A planar convex polygon, vertices in counter-clockwise order when viewed
/// from the front side of its plane.
#[derive(Debug, Clone)]
pub(crate) struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from vertices.
    ///
    /// The plane is computed with Newell's method so near-degenerate slivers
    /// from earlier splits still get a stable normal. Returns None when no
    /// plane can be derived (fewer than 3 vertices or zero area).
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let mut normal = DVec3::ZERO;
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            normal += DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            );
        }
        let length = normal.length();
        if length < 1e-12 {
            return None;
        }
        let normal = normal / length;
        let w = normal.dot(vertices[0]);

        Some(Self {
            vertices,
            plane: Plane { normal, w },
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and flips the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Splits this polygon by a plane, csg.js style.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` depending
    /// on facing; spanning polygons are cut along the plane and both halves
    /// distributed.
    pub fn split(
        &self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let sides: Vec<Side> = self
            .vertices
            .iter()
            .map(|&v| plane.classify_point(v))
            .collect();

        let has_front = sides.iter().any(|&s| s == Side::Front);
        let has_back = sides.iter().any(|&s| s == Side::Back);

        let class = match (has_front, has_back) {
            (true, true) => Side::Spanning,
            (true, false) => Side::Front,
            (false, true) => Side::Back,
            (false, false) => Side::Coplanar,
        };

        match class {
            Side::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Side::Front => front.push(self.clone()),
            Side::Back => back.push(self.clone()),
            Side::Spanning => {
                let mut front_verts = Vec::with_capacity(self.vertices.len() + 1);
                let mut back_verts = Vec::with_capacity(self.vertices.len() + 1);

                for i in 0..self.vertices.len() {
                    let j = (i + 1) % self.vertices.len();
                    let vi = self.vertices[i];
                    let vj = self.vertices[j];
                    let si = sides[i];
                    let sj = sides[j];

                    if si != Side::Back {
                        front_verts.push(vi);
                    }
                    if si != Side::Front {
                        back_verts.push(vi);
                    }

                    if (si == Side::Front && sj == Side::Back)
                        || (si == Side::Back && sj == Side::Front)
                    {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let cut = vi.lerp(vj, t);
                        front_verts.push(cut);
                        back_verts.push(cut);
                    }
                }

                if front_verts.len() >= 3 {
                    if let Some(poly) = Polygon::new(front_verts) {
                        front.push(poly);
                    }
                }
                if back_verts.len() >= 3 {
                    if let Some(poly) = Polygon::new(back_verts) {
                        back.push(poly);
                    }
                }
            }
        }
    }
}
