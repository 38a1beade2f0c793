//! Skyscraper style: podium + slender tower, curtain-wall grid, crown.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::podium_tower_mass;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, Solid};

use crate::common::{front_back_cutouts, side_cutouts};
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolShape, PoolSize, TreeKind};

/// Tall slender tower on a wider podium base.
pub struct SkyscraperStyle;

impl HotelStyle for SkyscraperStyle {
    fn name(&self) -> &'static str {
        "skyscraper"
    }

    fn display_name(&self) -> &'static str {
        "Skyscraper"
    }

    fn description(&self) -> &'static str {
        "Tall slender tower on a wider podium base with crown element"
    }

    fn preferred_layout_strategy(&self) -> &'static str {
        "hierarchical"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.2,
            pool_shape: Some(PoolShape::Rectangular),
            pool_size: PoolSize::Small,
            hedge_style: HedgeStyle::Sparse,
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
        // Skyscrapers need real height
        let num_floors = params.num_floors.max(8);
        let fh = params.floor_height;
        let wall_t = profile.min_wall_thickness;

        let sc = ScaleContext::new(w, d, fh, num_floors, profile);

        let podium_floors: u32 = 2;
        let podium_h = podium_floors as f64 * fh;

        let tower_w = w * 0.45;
        let tower_d = d * 0.50;
        let tower_floors = num_floors - podium_floors;
        let tower_h = tower_floors as f64 * fh;

        let shell = podium_tower_mass(w, d, podium_h, tower_w, tower_d, tower_h)?;

        let mut cutouts = Vec::new();
        let win_w = sc.window_width();
        let win_h = sc.window_height();

        // Podium windows, all four facades
        let podium_grid =
            WindowGrid::new(w, wall_t, podium_floors, fh).windows(sc.windows_per_floor(w), win_w, win_h);
        cutouts.extend(front_back_cutouts(&podium_grid, d / 2.0)?);
        let podium_side_grid = WindowGrid::new(d, wall_t, podium_floors, fh).windows(
            sc.windows_per_floor(d),
            win_w,
            win_h,
        );
        cutouts.extend(side_cutouts(&podium_side_grid, w / 2.0)?);

        // Tower curtain wall: dense narrow strips on all facades
        let tower_sc = ScaleContext::new(tower_w, tower_d, fh, tower_floors, profile);
        let strip_w = win_w * 0.6;
        let tower_grid = WindowGrid::new(tower_w, wall_t, tower_floors, fh)
            .windows(tower_sc.windows_per_floor(tower_w), strip_w, win_h)
            .keep_ground_floor();
        for c in front_back_cutouts(&tower_grid, tower_d / 2.0)? {
            cutouts.push(translate(&c, 0.0, 0.0, podium_h));
        }
        let tower_side_grid = WindowGrid::new(tower_d, wall_t, tower_floors, fh)
            .windows(tower_sc.windows_per_floor(tower_d), strip_w, win_h)
            .keep_ground_floor();
        for c in side_cutouts(&tower_side_grid, tower_w / 2.0)? {
            cutouts.push(translate(&c, 0.0, 0.0, podium_h));
        }

        // Entrance on the podium
        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();
        let total_h = podium_h + tower_h;

        // Stepped-back crown
        let crown_w = tower_w * 0.65;
        let crown_d = tower_d * 0.65;
        let crown_h = fh * 0.8;
        let crown = cuboid(crown_w, crown_d, crown_h)?;
        additions.push(translate(&crown, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Antenna spire
        let spire_w = crown_w * 0.15;
        let spire = cuboid(spire_w, spire_w, fh * 2.0)?;
        additions.push(translate(&spire, 0.0, 0.0, total_h + crown_h - BOOLEAN_EMBED));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skyscraper_generates() {
        let params = BuildingParams::for_style("skyscraper");
        let solid = SkyscraperStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_skyscraper_enforces_minimum_floors() {
        let mut params = BuildingParams::for_style("skyscraper");
        params.num_floors = 4;
        let solid = SkyscraperStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (_, max) = solid.bounding_box();
        // 8 floors plus crown and spire
        assert!(max.z > 8.0 * 5.0);
    }

    #[test]
    fn test_skyscraper_tower_narrower_than_podium() {
        let params = BuildingParams::for_style("skyscraper");
        let solid = SkyscraperStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let mesh = solid.to_mesh();
        // Max X extent at podium level exceeds max X extent at tower level
        let mut podium_max_x: f64 = 0.0;
        let mut tower_max_x: f64 = 0.0;
        for v in mesh.vertices() {
            if v.z < 10.0 {
                podium_max_x = podium_max_x.max(v.x);
            } else if v.z > 15.0 && v.z < 40.0 {
                tower_max_x = tower_max_x.max(v.x);
            }
        }
        assert!(podium_max_x > tower_max_x);
    }
}
