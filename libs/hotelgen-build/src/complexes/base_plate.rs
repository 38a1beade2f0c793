//! Shared base plate for building complexes.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::base::base_slab;
use hotelgen_core::BuildingPlacement;
use hotelgen_layout::placement_footprint;
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{difference_all, translate, GeometryError, Solid};

/// Generates a shared base plate for a complex.
///
/// The plate is a chamfered slab with a shallow alignment recess cut at each
/// building's footprint, so separately printed buildings register onto it.
pub fn complex_base_plate(
    lot_width: f64,
    lot_depth: f64,
    thickness: f64,
    chamfer: f64,
    placements: &[BuildingPlacement],
    recess_depth: f64,
) -> Result<Solid, GeometryError> {
    let plate = base_slab(lot_width, lot_depth, thickness, chamfer)?;

    if placements.is_empty() || recess_depth <= 0.0 {
        return Ok(plate);
    }

    let mut recesses = Vec::with_capacity(placements.len());
    for p in placements {
        let footprint = placement_footprint(p);
        let recess = cuboid(
            footprint.width() + 0.2,
            footprint.depth() + 0.2,
            recess_depth + BOOLEAN_EMBED,
        )?;
        recesses.push(translate(
            &recess,
            footprint.center_x(),
            footprint.center_y(),
            -recess_depth,
        ));
    }

    difference_all(&plate, &recesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelgen_core::Role;

    #[test]
    fn test_plate_without_placements_is_solid_slab() {
        let plate = complex_base_plate(50.0, 40.0, 2.5, 0.0, &[], 0.3).unwrap();
        assert!((plate.volume() - 50.0 * 40.0 * 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_recesses_remove_material() {
        let placement = BuildingPlacement {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            width: 20.0,
            depth: 15.0,
            num_floors: 4,
            floor_height: 5.0,
            role: Role::Main,
        };
        let plain = complex_base_plate(50.0, 40.0, 2.5, 0.0, &[], 0.3).unwrap();
        let recessed =
            complex_base_plate(50.0, 40.0, 2.5, 0.0, std::slice::from_ref(&placement), 0.3)
                .unwrap();
        let removed = plain.volume() - recessed.volume();
        let expected = 20.2 * 15.2 * 0.3;
        assert!((removed - expected).abs() < expected * 0.05);
    }

    #[test]
    fn test_recess_respects_rotation() {
        let placement = BuildingPlacement {
            x: 10.0,
            y: 0.0,
            rotation: 90.0,
            width: 20.0,
            depth: 10.0,
            num_floors: 4,
            floor_height: 5.0,
            role: Role::Wing,
        };
        // Rotated building footprint is 10 wide, 20 deep; must still fit the
        // 45x45 plate and cut a rotated recess.
        let plate = complex_base_plate(45.0, 45.0, 2.5, 0.0, &[placement], 0.3).unwrap();
        assert!(plate.volume() < 45.0 * 45.0 * 2.5);
    }
}
