//! Base/pedestal slab with chamfer for bed adhesion and stability.

use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{difference_all, rotate_x, rotate_y, translate, GeometryError, Solid};

/// Creates a base slab with a 45-degree chamfer on every bottom edge.
///
/// The slab is centered on X/Y with its top face at Z=0 and bottom at
/// Z=-thickness, so building walls sit directly on top.
///
/// # Arguments
///
/// * `width` / `depth` - Total slab footprint including overhang (mm)
/// * `thickness` - Slab thickness (mm)
/// * `chamfer` - Chamfer size on the bottom edges (mm); 0 disables it
pub fn base_slab(
    width: f64,
    depth: f64,
    thickness: f64,
    chamfer: f64,
) -> Result<Solid, GeometryError> {
    let slab = translate(&cuboid(width, depth, thickness)?, 0.0, 0.0, -thickness);

    if chamfer <= 0.0 {
        return Ok(slab);
    }

    // Each cutter is a box turned 45 degrees about the edge it chamfers; the
    // diamond cross-section reaches `chamfer` up the side face and in along
    // the bottom face.
    let diag = chamfer * std::f64::consts::SQRT_2;
    let mut cuts = Vec::with_capacity(4);

    for y_sign in [-1.0, 1.0] {
        let cutter = cuboid(width + 0.2, diag, diag)?;
        let cutter = translate(&cutter, 0.0, 0.0, -diag / 2.0);
        let cutter = rotate_x(&cutter, 45.0);
        cuts.push(translate(&cutter, 0.0, y_sign * depth / 2.0, -thickness));
    }
    for x_sign in [-1.0, 1.0] {
        let cutter = cuboid(diag, depth + 0.2, diag)?;
        let cutter = translate(&cutter, 0.0, 0.0, -diag / 2.0);
        let cutter = rotate_y(&cutter, 45.0);
        cuts.push(translate(&cutter, x_sign * width / 2.0, 0.0, -thickness));
    }

    difference_all(&slab, &cuts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_slab_top_at_z0() {
        let slab = base_slab(20.0, 15.0, 2.5, 0.5).unwrap();
        let (min, max) = slab.bounding_box();
        assert!(max.z.abs() < 1e-6);
        assert!((min.z + 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_chamfer_removes_material() {
        let chamfered = base_slab(20.0, 15.0, 2.5, 0.5).unwrap();
        let square = base_slab(20.0, 15.0, 2.5, 0.0).unwrap();
        assert!(chamfered.volume() < square.volume());
        // Four edge wedges of cross-section chamfer^2/2
        let expected_cut = 0.5 * 0.5 / 2.0 * (2.0 * 20.0 + 2.0 * 15.0);
        let removed = square.volume() - chamfered.volume();
        assert!((removed - expected_cut).abs() < expected_cut * 0.1);
    }

    #[test]
    fn test_zero_chamfer_is_plain_slab() {
        let slab = base_slab(10.0, 10.0, 2.0, 0.0).unwrap();
        assert!((slab.volume() - 200.0).abs() < 1e-6);
    }
}
