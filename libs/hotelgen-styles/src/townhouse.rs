//! Townhouse style: narrow and tall, mansard roof, stoop, bay window.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::rect_mass;
use hotelgen_components::roof::mansard_roof;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, Solid};

use crate::common::front_back_cutouts;
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolSize, TreeKind};

/// Narrow rectangle with mansard roof and front stoop.
pub struct TownhouseStyle;

impl HotelStyle for TownhouseStyle {
    fn name(&self) -> &'static str {
        "townhouse"
    }

    fn display_name(&self) -> &'static str {
        "Townhouse"
    }

    fn description(&self) -> &'static str {
        "Narrow and tall with mansard roof, front stoop, and bay window"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.35,
            pool_shape: None,
            pool_size: PoolSize::Small,
            hedge_style: HedgeStyle::Border,
            has_terrace: false,
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

        let shell = rect_mass(w, d, total_h)?;

        let mut cutouts = Vec::new();
        let grid = WindowGrid::new(w, wall_t, num_floors, fh).windows(
            sc.windows_per_floor(w),
            sc.window_width(),
            sc.window_height(),
        );
        cutouts.extend(front_back_cutouts(&grid, d / 2.0)?);

        // Door off-center, stoop in front of it
        let door_w = sc.door_width();
        let door = door_cutout(door_w, sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, -w / 4.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();

        // Mansard roof
        let ovh = sc.roof_overhang();
        let roof = mansard_roof(
            w + 2.0 * ovh,
            d + 2.0 * ovh,
            fh * 0.6,
            fh * 0.4,
            sc.mansard_inset(),
        )?;
        additions.push(translate(&roof, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Front stoop steps descending from the door
        let num_steps = 3;
        let step_h = sc.stoop_step_height();
        let step_d = sc.stoop_step_depth();
        let stoop_w = door_w + sc.column_width() * 2.0;
        for i in 0..num_steps {
            let step = cuboid(stoop_w, step_d, step_h)?;
            additions.push(translate(
                &step,
                -w / 4.0,
                -d / 2.0 - step_d * (i as f64 + 0.5) + BOOLEAN_EMBED,
                -step_h * i as f64,
            ));
        }

        // Bay window on the other half of the facade, upper floors
        let bay_w = w * 0.35;
        let bay_d = sc.bay_depth();
        let bay = cuboid(bay_w, bay_d, fh * (num_floors - 1) as f64)?;
        additions.push(translate(
            &bay,
            w / 4.0,
            -d / 2.0 - bay_d / 2.0 + BOOLEAN_EMBED,
            fh,
        ));

        // Cornice at the roofline
        let cornice_h = sc.cornice_height();
        let cornice = cuboid(w + 2.0 * ovh, d + 2.0 * ovh, cornice_h)?;
        additions.push(translate(&cornice, 0.0, 0.0, total_h - cornice_h * 0.5));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_townhouse_generates() {
        let params = BuildingParams::for_style("townhouse");
        let solid = TownhouseStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_townhouse_stoop_descends_below_ground() {
        let params = BuildingParams::for_style("townhouse");
        let solid = TownhouseStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (min, _) = solid.bounding_box();
        // Two steps below the door sill
        assert!(min.z < -1e-6);
    }

    #[test]
    fn test_townhouse_prefers_row_layout() {
        assert_eq!(TownhouseStyle.preferred_layout_strategy(), "row");
    }
}
