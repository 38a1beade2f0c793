//! Plane representation with point classification for CSG clipping.

use glam::DVec3;

/// Epsilon for plane-side classification.
pub(crate) const PLANE_EPSILON: f64 = 1e-5;

/// Side of a plane a point or polygon lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Positive half-space
    Front,
    /// Negative half-space
    Back,
    /// Within epsilon of the plane
    Coplanar,
    /// Polygon has vertices on both sides
    Spanning,
}

/// A plane defined by unit normal and distance from the origin.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

impl Plane {
    /// Builds the plane through three points given in counter-clockwise
    /// order. Returns None for (near-)collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length() < PLANE_EPSILON * PLANE_EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Flips the plane orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from a point; positive is in front.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point against this plane.
    pub fn classify_point(&self, point: DVec3) -> Side {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Side::Front
        } else if dist < -PLANE_EPSILON {
            Side::Back
        } else {
            Side::Coplanar
        }
    }
}
