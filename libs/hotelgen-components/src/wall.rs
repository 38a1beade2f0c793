//! Wall panel component.

use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, GeometryError, Solid};

/// Creates a wall panel centered on X with its front face at Y=0.
///
/// Base at Z=0, extends upward by `height`.
pub fn wall(width: f64, height: f64, thickness: f64) -> Result<Solid, GeometryError> {
    Ok(translate(
        &cuboid(width, thickness, height)?,
        0.0,
        -thickness / 2.0,
        0.0,
    ))
}
