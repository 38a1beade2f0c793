//! Column and pilaster components.

use hotelgen_solid::primitives::{cuboid, cylinder};
use hotelgen_solid::{GeometryError, Solid};

/// Creates a round column centered on X/Y, base at Z=0.
pub fn round_column(radius: f64, height: f64, segments: u32) -> Result<Solid, GeometryError> {
    cylinder(radius, height, segments)
}

/// Creates a square column centered on X/Y, base at Z=0.
///
/// Square columns print more reliably on FDM at small sizes.
pub fn square_column(width: f64, height: f64) -> Result<Solid, GeometryError> {
    cuboid(width, width, height)
}

/// Creates a pilaster (flat column projecting from a wall).
///
/// Centered on X/Y, base at Z=0; the caller positions it against the wall.
pub fn pilaster(width: f64, depth: f64, height: f64) -> Result<Solid, GeometryError> {
    cuboid(width, depth, height)
}
