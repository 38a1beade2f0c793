//! Mediterranean style: barrel roof, deep eaves, ground-floor loggia.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::rect_mass;
use hotelgen_components::roof::barrel_roof;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, Solid};

use crate::common::front_back_cutouts;
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolShape, PoolSize, TreeKind};

/// Barrel roof with deep eaves and thick walls.
pub struct MediterraneanStyle;

impl HotelStyle for MediterraneanStyle {
    fn name(&self) -> &'static str {
        "mediterranean"
    }

    fn display_name(&self) -> &'static str {
        "Mediterranean"
    }

    fn description(&self) -> &'static str {
        "Barrel or hip roof with deep eaves, thick walls, and arched windows"
    }

    fn preferred_layout_strategy(&self) -> &'static str {
        "courtyard"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Conifer,
            tree_density: 0.45,
            pool_shape: Some(PoolShape::Kidney),
            pool_size: PoolSize::Medium,
            hedge_style: HedgeStyle::Border,
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
        let num_floors = params.num_floors.max(4);
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

        // Arched entrance
        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();

        // Barrel roof with deep eaves
        let eave = sc.eave_overhang();
        let roof_w = w + 2.0 * eave;
        let roof = barrel_roof(
            roof_w,
            d + 2.0 * eave,
            fh * 0.8,
            profile.segments_for_radius(roof_w / 2.0),
        )?;
        additions.push(translate(&roof, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Loggia band over the ground floor entrance
        let loggia_d = sc.loggia_depth();
        let loggia_h = sc.cornice_height();
        let loggia = cuboid(w * 0.5, loggia_d, loggia_h)?;
        additions.push(translate(
            &loggia,
            0.0,
            -d / 2.0 - loggia_d / 2.0 + BOOLEAN_EMBED,
            fh - loggia_h,
        ));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mediterranean_generates() {
        let params = BuildingParams::for_style("mediterranean");
        let solid = MediterraneanStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_mediterranean_roof_wider_than_walls() {
        let params = BuildingParams::for_style("mediterranean");
        let solid = MediterraneanStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (min, max) = solid.bounding_box();
        // Eaves overhang the 30mm footprint
        assert!(max.x - min.x > 30.0);
    }
}
