//! Victorian style: asymmetric L-plan, turret, bay windows, gabled roofline.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::l_shape_mass;
use hotelgen_components::roof::gabled_roof;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::{cone, cuboid, cylinder};
use hotelgen_solid::{rotate_z, translate, Solid};

use crate::common::front_back_cutouts;
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PathStyle, PoolSize, TreeKind};

/// Asymmetric L-plan with a round corner turret.
pub struct VictorianStyle;

impl HotelStyle for VictorianStyle {
    fn name(&self) -> &'static str {
        "victorian"
    }

    fn display_name(&self) -> &'static str {
        "Victorian"
    }

    fn description(&self) -> &'static str {
        "Asymmetric L-plan with round turret, bay windows, and complex gabled roofline"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.6,
            pool_shape: None,
            pool_size: PoolSize::Small,
            hedge_style: HedgeStyle::Formal,
            path_style: PathStyle::Curved,
            ..GardenTheme::default()
        }
    }

    fn generate(
        &self,
        params: &BuildingParams,
        profile: &ManufacturingProfile,
    ) -> Result<Solid, GenError> {
        let w = params.width;
        let d = params.depth;
        let num_floors = params.num_floors.max(3);
        let fh = params.floor_height;
        let wall_t = profile.min_wall_thickness;
        let total_h = num_floors as f64 * fh;

        let sc = ScaleContext::new(w, d, fh, num_floors, profile);

        let wing_w = w * 0.45;
        let wing_d = d * 0.55;
        let shell = l_shape_mass(w, d, total_h, Some(wing_w), Some(wing_d))?;

        let mut cutouts = Vec::new();
        let grid = WindowGrid::new(w, wall_t, num_floors, fh).windows(
            sc.windows_per_floor(w),
            sc.window_width(),
            sc.window_height(),
        );
        cutouts.extend(front_back_cutouts(&grid, d / 2.0)?);

        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();

        // Round turret at the L junction, taller than the main block
        let turret_r = sc.turret_radius();
        let turret_h = total_h + fh * 0.8;
        let turret_x = w / 2.0 - wing_w / 2.0;
        let turret_y = d / 2.0 - wing_d * 0.1;
        let turret = cylinder(turret_r, turret_h, profile.segments_for_radius(turret_r))?;
        additions.push(translate(&turret, turret_x, turret_y, 0.0));

        // Conical turret cap
        let cap_r = turret_r + sc.roof_overhang() * 0.5;
        let cap = cone(cap_r, 0.0, fh * 1.2, profile.segments_for_radius(cap_r))?;
        additions.push(translate(&cap, turret_x, turret_y, turret_h - BOOLEAN_EMBED));

        // Main gabled roof
        let ovh = sc.roof_overhang();
        let roof = gabled_roof(w + 2.0 * ovh, d + 2.0 * ovh, fh * 0.8)?;
        additions.push(translate(&roof, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Perpendicular wing roof
        let wing_roof = gabled_roof(wing_d + 2.0 * ovh, wing_w + 2.0 * ovh, fh * 0.7)?;
        let wing_roof = rotate_z(&wing_roof, 90.0);
        additions.push(translate(
            &wing_roof,
            (w - wing_w) / 2.0,
            (d + wing_d) / 2.0 - wing_d * 0.3,
            total_h - BOOLEAN_EMBED,
        ));

        // Bay window on the front facade, upper floors
        let bay_w = w * 0.2;
        let bay_d = sc.bay_depth();
        let bay = cuboid(bay_w, bay_d, fh * (num_floors - 1) as f64)?;
        additions.push(translate(
            &bay,
            -w / 4.0,
            -d / 2.0 - bay_d / 2.0 + BOOLEAN_EMBED,
            fh,
        ));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victorian_generates() {
        let params = BuildingParams::for_style("victorian");
        let solid = VictorianStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_victorian_turret_tops_the_roofline() {
        let params = BuildingParams::for_style("victorian");
        let solid = VictorianStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (_, max) = solid.bounding_box();
        // Turret (total + 0.8 fh) plus the conical cap (1.2 fh)
        assert!(max.z > 7.0 * 5.0 + 5.0 * 1.5);
    }

    #[test]
    fn test_victorian_enforces_minimum_floors() {
        let mut params = BuildingParams::for_style("victorian");
        params.num_floors = 1;
        let solid = VictorianStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (_, max) = solid.bounding_box();
        assert!(max.z >= 3.0 * 5.0);
    }
}
