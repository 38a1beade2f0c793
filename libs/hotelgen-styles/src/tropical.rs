//! Tropical style: stilts, deep overhanging eaves, multi-tier hipped roof.

use config::constants::BOOLEAN_EMBED;
use glam::DVec2;
use hotelgen_components::column::square_column;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::rect_mass;
use hotelgen_components::roof::hipped_roof;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::extrude_polygon;
use hotelgen_solid::{rotate_y, translate, Solid};

use crate::common::front_back_cutouts;
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolShape, PoolSize, TreeKind};

/// Raised on stilts with deep eaves and stacked hipped roofs.
pub struct TropicalStyle;

impl HotelStyle for TropicalStyle {
    fn name(&self) -> &'static str {
        "tropical"
    }

    fn display_name(&self) -> &'static str {
        "Tropical"
    }

    fn description(&self) -> &'static str {
        "Deep overhanging eaves with supports, raised on stilts, multi-tier roof"
    }

    fn preferred_layout_strategy(&self) -> &'static str {
        "cluster"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Palm,
            tree_density: 0.7,
            pool_shape: Some(PoolShape::Kidney),
            pool_size: PoolSize::Large,
            hedge_style: HedgeStyle::Sparse,
            has_terrace: true,
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

        let sc = ScaleContext::new(w, d, fh, num_floors, profile);

        // Ground level is open: one floor of stilts, body above
        let stilt_h = fh;
        let building_floors = num_floors - 1;
        let building_h = building_floors as f64 * fh;
        let total_h = stilt_h + building_h;

        let shell = translate(&rect_mass(w, d, building_h)?, 0.0, 0.0, stilt_h);

        let mut cutouts = Vec::new();
        let grid = WindowGrid::new(w, wall_t, building_floors, fh)
            .windows(sc.windows_per_floor(w), sc.window_width(), sc.window_height())
            .keep_ground_floor();
        for c in front_back_cutouts(&grid, d / 2.0)? {
            cutouts.push(translate(&c, 0.0, 0.0, stilt_h));
        }

        let mut additions = Vec::new();

        // Stilts at the corners and facade midpoints
        let col_w = sc.column_width();
        let stilt_positions = [
            (-w / 2.0 + col_w, -d / 2.0 + col_w),
            (w / 2.0 - col_w, -d / 2.0 + col_w),
            (-w / 2.0 + col_w, d / 2.0 - col_w),
            (w / 2.0 - col_w, d / 2.0 - col_w),
            (0.0, -d / 2.0 + col_w),
            (0.0, d / 2.0 - col_w),
        ];
        for (x, y) in stilt_positions {
            let stilt = square_column(col_w, stilt_h + BOOLEAN_EMBED)?;
            additions.push(translate(&stilt, x, y, 0.0));
        }

        // Main hipped roof with deep overhang
        let overhang = sc.eave_overhang() * 1.5;
        let roof_h = fh;
        let roof = hipped_roof(w + 2.0 * overhang, d + 2.0 * overhang, roof_h)?;
        additions.push(translate(&roof, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Smaller second roof tier
        let tier2 = hipped_roof(w * 0.6 + overhang, d * 0.6 + overhang, fh * 0.6)?;
        additions.push(translate(&tier2, 0.0, 0.0, total_h + roof_h * 0.5));

        // Eave support brackets along the front, 45 degrees
        let bracket = sc.eave_overhang() * 1.5 * 0.7;
        let bracket_t = sc.fin_thickness();
        for x_offset in [-w / 3.0, 0.0, w / 3.0] {
            // Cross-section in (y, z): attached at the wall, sloping down.
            let profile_pts = [
                DVec2::new(0.0, 0.0),
                DVec2::new(bracket, 0.0),
                DVec2::new(0.0, -bracket),
            ];
            let wedge = extrude_polygon(&profile_pts, bracket_t)?;
            let wedge = rotate_y(&wedge, 90.0);
            additions.push(translate(
                &wedge,
                x_offset - bracket_t / 2.0,
                -d / 2.0 + BOOLEAN_EMBED,
                total_h,
            ));
        }

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tropical_generates() {
        let params = BuildingParams::for_style("tropical");
        let solid = TropicalStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_tropical_stilts_reach_ground() {
        let params = BuildingParams::for_style("tropical");
        let solid = TropicalStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (min, _) = solid.bounding_box();
        assert!(min.z.abs() < 1e-6);
    }

    #[test]
    fn test_tropical_roof_overhangs_walls() {
        let params = BuildingParams::for_style("tropical");
        let solid = TropicalStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (min, max) = solid.bounding_box();
        assert!(max.x - min.x > 30.0);
        assert!(max.y - min.y > 25.0);
    }
}
