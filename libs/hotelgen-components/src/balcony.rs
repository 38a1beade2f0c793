//! Balcony component with slab, railing, and optional print support.

use glam::DVec2;
use hotelgen_solid::primitives::{cuboid, extrude_polygon};
use hotelgen_solid::{rotate_y, translate, union_all, GeometryError, Solid};

/// Creates a balcony with slab, railing, and optional support wedge.
///
/// Centered on X; the slab extends from Y=0 (wall face) to Y=depth with its
/// base at Z=0.
///
/// # Arguments
///
/// * `use_solid_railing` - true: solid three-sided wall (FDM);
///   false: front rail only (resin, finer railings come from balusters)
/// * `add_support` - adds a 45-degree wedge underneath for FDM printing
pub fn balcony(
    width: f64,
    depth: f64,
    slab_thickness: f64,
    railing_height: f64,
    railing_thickness: f64,
    use_solid_railing: bool,
    add_support: bool,
) -> Result<Solid, GeometryError> {
    let mut parts = Vec::new();

    let slab = translate(&cuboid(width, depth, slab_thickness)?, 0.0, depth / 2.0, 0.0);
    parts.push(slab);

    // Front rail; side rails only for the solid (FDM) variant.
    let front = translate(
        &cuboid(width, railing_thickness, railing_height)?,
        0.0,
        depth - railing_thickness / 2.0,
        slab_thickness,
    );
    parts.push(front);

    if use_solid_railing {
        let left = translate(
            &cuboid(railing_thickness, depth, railing_height)?,
            -width / 2.0 + railing_thickness / 2.0,
            depth / 2.0,
            slab_thickness,
        );
        let right = translate(
            &cuboid(railing_thickness, depth, railing_height)?,
            width / 2.0 - railing_thickness / 2.0,
            depth / 2.0,
            slab_thickness,
        );
        parts.push(left);
        parts.push(right);
    }

    if add_support {
        // 45-degree wedge under the slab, full balcony depth.
        let profile = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, depth),
            DVec2::new(depth, 0.0),
        ];
        let wedge = extrude_polygon(&profile, width)?;
        let wedge = translate(&rotate_y(&wedge, 90.0), -width / 2.0, 0.0, 0.0);
        parts.push(wedge);
    }

    Ok(union_all(&parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balcony_extends_forward() {
        let b = balcony(4.0, 1.5, 0.2, 0.5, 0.2, true, false).unwrap();
        let (min, max) = b.bounding_box();
        assert!(min.y.abs() < 1e-9);
        assert!((max.y - 1.5).abs() < 1e-9);
        assert!((max.z - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_solid_railing_has_more_volume() {
        let open = balcony(4.0, 1.5, 0.2, 0.5, 0.2, false, false).unwrap();
        let solid = balcony(4.0, 1.5, 0.2, 0.5, 0.2, true, false).unwrap();
        assert!(solid.volume() > open.volume());
    }

    #[test]
    fn test_support_wedge_hangs_below_slab() {
        let b = balcony(4.0, 1.5, 0.2, 0.5, 0.2, true, true).unwrap();
        let (min, _) = b.bounding_box();
        assert!((min.z + 1.5).abs() < 1e-9);
    }
}
