//! Door cutout and canopy components.

use config::constants::BOOLEAN_OVERSHOOT;
use glam::DVec2;
use hotelgen_solid::primitives::{cuboid, extrude_polygon};
use hotelgen_solid::{rotate_y, translate, union_all, GeometryError, Solid};

/// Creates a door cutout that overshoots the wall.
///
/// Centered on X/Y, base at Z=0.
pub fn door_cutout(width: f64, height: f64, wall_thickness: f64) -> Result<Solid, GeometryError> {
    cuboid(width, wall_thickness + 2.0 * BOOLEAN_OVERSHOOT, height)
}

/// Creates a door canopy with a 45-degree underside support wedge.
///
/// The slab is centered on X, attaches at Y=0, and extends forward to
/// Y=depth with its top at Z=`thickness`; the wedge hangs below Z=0 at the
/// wall side so the printed overhang never exceeds `support_angle`.
pub fn door_canopy(
    width: f64,
    depth: f64,
    thickness: f64,
    support_angle: f64,
) -> Result<Solid, GeometryError> {
    let slab = translate(&cuboid(width, depth, thickness)?, 0.0, depth / 2.0, 0.0);

    let wedge_height = depth * support_angle.to_radians().tan();

    // Support cross-section in the (y, z) plane: flush under the slab from
    // the wall out to `depth`, dropping to -wedge_height at the wall.
    // extrude_polygon runs along Z; profile (a, b) lands at (y=b, z=-a)
    // after the quarter turn about Y.
    let profile = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, depth),
        DVec2::new(wedge_height, 0.0),
    ];
    let wedge = extrude_polygon(&profile, width)?;
    let wedge = rotate_y(&wedge, 90.0);
    let wedge = translate(&wedge, -width / 2.0, 0.0, 0.0);

    Ok(union_all(&[slab, wedge]))
}
