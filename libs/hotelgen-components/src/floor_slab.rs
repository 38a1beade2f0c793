//! Floor slab (horizontal divider between floors).

use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{GeometryError, Solid};

/// Creates a horizontal floor slab. Centered on X/Y, base at Z=0.
///
/// `overhang` extends the slab past the walls on each side, e.g. for
/// exposed slab edges between curtain-wall floors.
pub fn floor_slab(
    width: f64,
    depth: f64,
    thickness: f64,
    overhang: f64,
) -> Result<Solid, GeometryError> {
    cuboid(width + 2.0 * overhang, depth + 2.0 * overhang, thickness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_slab_overhang() {
        let slab = floor_slab(10.0, 8.0, 0.15, 0.5).unwrap();
        let (min, max) = slab.bounding_box();
        assert!(((max.x - min.x) - 11.0).abs() < 1e-9);
        assert!(((max.y - min.y) - 9.0).abs() < 1e-9);
    }
}
