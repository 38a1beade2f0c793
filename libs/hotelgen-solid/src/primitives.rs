//! # Geometry Primitives
//!
//! Primitive solid constructors with dimension guards. This is the single
//! place input sanitization happens: every primitive validates its own
//! dimensions and fails fast with [`GeometryError`], so downstream
//! components can assume valid geometry in, valid geometry out.
//!
//! Positioning convention: centered on X/Y, base at Z=0, extending upward.

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use crate::bsp::Polygon;
use crate::error::{check_positive, GeometryError};
use crate::solid::Solid;

/// Creates a box centered on X/Y with its base at Z=0.
///
/// # Arguments
///
/// * `width` - Size along X (mm)
/// * `depth` - Size along Y (mm)
/// * `height` - Size along Z (mm)
///
/// # Example
///
/// ```rust
/// use hotelgen_solid::primitives::cuboid;
///
/// let solid = cuboid(30.0, 25.0, 20.0).unwrap();
/// let (min, max) = solid.bounding_box();
/// assert!(min.z.abs() < 1e-9);
/// assert!((max.z - 20.0).abs() < 1e-9);
/// ```
pub fn cuboid(width: f64, depth: f64, height: f64) -> Result<Solid, GeometryError> {
    check_positive(width, "width")?;
    check_positive(depth, "depth")?;
    check_positive(height, "height")?;

    let hw = width / 2.0;
    let hd = depth / 2.0;

    let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
    let corners = [
        p(-hw, -hd, 0.0),
        p(hw, -hd, 0.0),
        p(hw, hd, 0.0),
        p(-hw, hd, 0.0),
        p(-hw, -hd, height),
        p(hw, -hd, height),
        p(hw, hd, height),
        p(-hw, hd, height),
    ];

    // Outward-facing quads
    let faces: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom (-Z)
        [4, 5, 6, 7], // top (+Z)
        [0, 1, 5, 4], // front (-Y)
        [3, 7, 6, 2], // back (+Y)
        [0, 4, 7, 3], // left (-X)
        [1, 2, 6, 5], // right (+X)
    ];

    let polygons = faces
        .iter()
        .filter_map(|face| Polygon::new(face.iter().map(|&i| corners[i]).collect()))
        .collect();

    Ok(Solid::from_polygons(polygons))
}

/// Creates a cylinder centered on X/Y with its base at Z=0.
pub fn cylinder(radius: f64, height: f64, segments: u32) -> Result<Solid, GeometryError> {
    cone(radius, radius, height, segments)
}

/// Creates a tapered cylinder (cone/frustum) centered on X/Y, base at Z=0.
///
/// `r_top` may be 0 for a true cone; `r_bottom` must be positive.
pub fn cone(
    r_bottom: f64,
    r_top: f64,
    height: f64,
    segments: u32,
) -> Result<Solid, GeometryError> {
    check_positive(r_bottom, "r_bottom")?;
    if r_top < 0.0 {
        return Err(GeometryError::degenerate(format!(
            "r_top must be non-negative, got {r_top}"
        )));
    }
    check_positive(height, "height")?;
    if segments < 3 {
        return Err(GeometryError::degenerate(format!(
            "segments must be at least 3, got {segments}"
        )));
    }

    let ring = |radius: f64, z: f64| -> Vec<DVec3> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                DVec3::new(radius * theta.cos(), radius * theta.sin(), z)
            })
            .collect()
    };

    let bottom = ring(r_bottom, 0.0);
    let mut polygons = Vec::with_capacity(segments as usize + 2);

    // Bottom cap: clockwise seen from above, so the face points down.
    polygons.extend(Polygon::new(bottom.iter().rev().copied().collect()));

    if r_top > 0.0 {
        let top = ring(r_top, height);
        // Side quads between the rings.
        for j in 0..segments as usize {
            let j1 = (j + 1) % segments as usize;
            polygons.extend(Polygon::new(vec![bottom[j], bottom[j1], top[j1], top[j]]));
        }
        polygons.extend(Polygon::new(top));
    } else {
        // True cone: side triangles up to the apex.
        let apex = DVec3::new(0.0, 0.0, height);
        for j in 0..segments as usize {
            let j1 = (j + 1) % segments as usize;
            polygons.extend(Polygon::new(vec![bottom[j], bottom[j1], apex]));
        }
    }

    Ok(Solid::from_polygons(polygons))
}

/// Extrudes a convex 2D polygon along Z.
///
/// Points may be given in either winding; they are normalized to
/// counter-clockwise. Concave or self-intersecting profiles are rejected —
/// every caller in this pipeline extrudes triangles or rectangles.
pub fn extrude_polygon(points: &[DVec2], height: f64) -> Result<Solid, GeometryError> {
    check_positive(height, "height")?;
    if points.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "polygon needs at least 3 points, got {}",
            points.len()
        )));
    }

    let area = signed_area(points);
    if area.abs() < config::constants::EPSILON {
        return Err(GeometryError::degenerate(
            "polygon has zero area".to_string(),
        ));
    }
    let ccw: Vec<DVec2> = if area > 0.0 {
        points.to_vec()
    } else {
        points.iter().rev().copied().collect()
    };

    if !is_convex(&ccw) {
        return Err(GeometryError::degenerate(
            "extrusion profile must be convex".to_string(),
        ));
    }

    let n = ccw.len();
    let bottom: Vec<DVec3> = ccw.iter().map(|p| DVec3::new(p.x, p.y, 0.0)).collect();
    let top: Vec<DVec3> = ccw.iter().map(|p| DVec3::new(p.x, p.y, height)).collect();

    let mut polygons = Vec::with_capacity(n + 2);
    polygons.extend(Polygon::new(bottom.iter().rev().copied().collect()));
    polygons.extend(Polygon::new(top.clone()));
    for i in 0..n {
        let j = (i + 1) % n;
        polygons.extend(Polygon::new(vec![bottom[i], bottom[j], top[j], top[i]]));
    }

    let solid = Solid::from_polygons(polygons);
    if solid.is_empty() {
        return Err(GeometryError::empty_result("extrude_polygon"));
    }
    Ok(solid)
}

/// Revolves a 2D profile around the Z axis.
///
/// The profile is given as (radius, height) points forming a closed polygon
/// with radius >= 0. A full 360-degree revolution needs no end caps and
/// accepts any simple profile (the onion-dome bulge profile is concave);
/// partial revolutions cap both ends and therefore require a convex profile.
pub fn revolve_profile(
    points: &[DVec2],
    segments: u32,
    degrees: f64,
) -> Result<Solid, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::degenerate(format!(
            "profile needs at least 3 points, got {}",
            points.len()
        )));
    }
    check_positive(degrees, "degrees")?;
    if degrees > 360.0 {
        return Err(GeometryError::degenerate(format!(
            "revolve angle must be at most 360 degrees, got {degrees}"
        )));
    }
    if segments < 3 {
        return Err(GeometryError::degenerate(format!(
            "segments must be at least 3, got {segments}"
        )));
    }
    for p in points {
        if p.x < -config::constants::EPSILON {
            return Err(GeometryError::degenerate(
                "revolve profile requires radius >= 0".to_string(),
            ));
        }
    }

    let area = signed_area(points);
    if area.abs() < config::constants::EPSILON {
        return Err(GeometryError::degenerate("profile has zero area".to_string()));
    }
    let ccw: Vec<DVec2> = if area > 0.0 {
        points.to_vec()
    } else {
        points.iter().rev().copied().collect()
    };

    let full_turn = (degrees - 360.0).abs() < 1e-9;
    if !full_turn && !is_convex(&ccw) {
        return Err(GeometryError::degenerate(
            "partial revolve requires a convex profile".to_string(),
        ));
    }

    let angle = degrees.to_radians();
    let steps = segments as usize;
    let rings: Vec<Vec<DVec3>> = (0..=steps)
        .map(|step| {
            let theta = angle * step as f64 / steps as f64;
            let (sin, cos) = theta.sin_cos();
            ccw.iter()
                .map(|p| DVec3::new(p.x * cos, p.x * sin, p.y))
                .collect()
        })
        .collect();

    let n = ccw.len();
    let mut polygons = Vec::with_capacity(n * steps + 2);

    for step in 0..steps {
        let ring_a = &rings[step];
        let ring_b = if full_turn && step == steps - 1 {
            &rings[0]
        } else {
            &rings[step + 1]
        };
        for i in 0..n {
            let j = (i + 1) % n;
            // Quad ordering keeps normals outward for a CCW profile.
            polygons.extend(Polygon::new(vec![ring_a[i], ring_b[i], ring_b[j], ring_a[j]]));
        }
    }

    if !full_turn {
        // Start cap at theta=0 faces -Y; end cap faces the swept direction.
        polygons.extend(Polygon::new(rings[0].clone()));
        polygons.extend(Polygon::new(rings[steps].iter().rev().copied().collect()));
    }

    let solid = Solid::from_polygons(polygons);
    if solid.is_empty() {
        return Err(GeometryError::empty_result("revolve_profile"));
    }
    Ok(solid)
}

fn signed_area(points: &[DVec2]) -> f64 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

fn is_convex(ccw: &[DVec2]) -> bool {
    let n = ccw.len();
    for i in 0..n {
        let a = ccw[i];
        let b = ccw[(i + 1) % n];
        let c = ccw[(i + 2) % n];
        let cross = (b - a).perp_dot(c - b);
        if cross < -config::constants::EPSILON {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_volume_and_centering() {
        let solid = cuboid(4.0, 6.0, 2.0).unwrap();
        assert!((solid.volume() - 48.0).abs() < 1e-9);
        let (min, max) = solid.bounding_box();
        assert!((min.x + 2.0).abs() < 1e-9 && (max.x - 2.0).abs() < 1e-9);
        assert!((min.y + 3.0).abs() < 1e-9 && (max.y - 3.0).abs() < 1e-9);
        assert!(min.z.abs() < 1e-9 && (max.z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_cuboid_rejects_non_positive() {
        assert!(cuboid(0.0, 1.0, 1.0).is_err());
        assert!(cuboid(1.0, -2.0, 1.0).is_err());
        assert!(cuboid(1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_cylinder_volume_approaches_pi_r2_h() {
        let solid = cylinder(2.0, 5.0, 64).unwrap();
        let exact = PI * 4.0 * 5.0;
        // Inscribed polygon volume is slightly below the analytic value.
        assert!(solid.volume() < exact);
        assert!(solid.volume() > exact * 0.98);
    }

    #[test]
    fn test_cylinder_base_at_z0() {
        let (min, max) = cylinder(1.0, 3.0, 16).unwrap().bounding_box();
        assert!(min.z.abs() < 1e-9);
        assert!((max.z - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cylinder_rejects_bad_inputs() {
        assert!(cylinder(0.0, 1.0, 16).is_err());
        assert!(cylinder(1.0, 0.0, 16).is_err());
        assert!(cylinder(1.0, 1.0, 2).is_err());
    }

    #[test]
    fn test_cone_to_apex_is_watertight() {
        let solid = cone(2.0, 0.0, 3.0, 24).unwrap();
        assert!(solid.to_mesh().is_watertight());
        let exact = PI * 4.0 * 3.0 / 3.0;
        assert!(solid.volume() > exact * 0.95 && solid.volume() < exact);
    }

    #[test]
    fn test_cone_frustum() {
        let solid = cone(2.0, 1.0, 3.0, 32).unwrap();
        assert!(!solid.is_empty());
        assert!(solid.to_mesh().is_watertight());
    }

    #[test]
    fn test_cone_rejects_negative_top_radius() {
        assert!(cone(1.0, -0.5, 1.0, 16).is_err());
    }

    #[test]
    fn test_extrude_triangle() {
        let points = [
            DVec2::new(-1.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 2.0),
        ];
        let solid = extrude_polygon(&points, 5.0).unwrap();
        // Triangle area 2.0, height 5.0
        assert!((solid.volume() - 10.0).abs() < 1e-9);
        assert!(solid.to_mesh().is_watertight());
    }

    #[test]
    fn test_extrude_accepts_clockwise_input() {
        let cw = [
            DVec2::new(0.0, 2.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(-1.0, 0.0),
        ];
        let solid = extrude_polygon(&cw, 1.0).unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_extrude_rejects_degenerate() {
        assert!(extrude_polygon(&[DVec2::ZERO, DVec2::X], 1.0).is_err());
        let collinear = [DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)];
        assert!(extrude_polygon(&collinear, 1.0).is_err());
        let tri = [DVec2::ZERO, DVec2::X, DVec2::Y];
        assert!(extrude_polygon(&tri, 0.0).is_err());
    }

    #[test]
    fn test_revolve_rectangle_makes_washer() {
        // Rectangle from r=2 to r=3, z=0 to z=1: a washer-like ring.
        let profile = [
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 1.0),
            DVec2::new(2.0, 1.0),
        ];
        let solid = revolve_profile(&profile, 48, 360.0).unwrap();
        let exact = PI * (9.0 - 4.0) * 1.0;
        assert!(solid.volume() > exact * 0.97 && solid.volume() < exact);
        assert!(solid.to_mesh().is_watertight());
    }

    #[test]
    fn test_revolve_partial_has_caps() {
        let profile = [
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
        ];
        let solid = revolve_profile(&profile, 16, 180.0).unwrap();
        assert!(solid.to_mesh().is_watertight());
        let full = revolve_profile(&profile, 16, 360.0).unwrap();
        assert!((solid.volume() - full.volume() / 2.0).abs() < full.volume() * 0.02);
    }

    #[test]
    fn test_revolve_rejects_bad_inputs() {
        let profile = [DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0), DVec2::new(2.0, 1.0)];
        assert!(revolve_profile(&profile, 16, 0.0).is_err());
        assert!(revolve_profile(&profile, 16, 400.0).is_err());
        assert!(revolve_profile(&profile[..2], 16, 360.0).is_err());
        let negative = [
            DVec2::new(-1.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        assert!(revolve_profile(&negative, 16, 360.0).is_err());
    }
}
