//! Art Deco style: stepped ziggurat, vertical fins, geometric crown.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::{window_grid_cutouts, WindowGrid};
use hotelgen_components::massing::stepped_mass;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, Solid};

use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolShape, PoolSize, TreeKind};

/// Stepped ziggurat with fins and crown.
pub struct ArtDecoStyle;

impl HotelStyle for ArtDecoStyle {
    fn name(&self) -> &'static str {
        "art_deco"
    }

    fn display_name(&self) -> &'static str {
        "Art Deco"
    }

    fn description(&self) -> &'static str {
        "Stepped ziggurat profile with vertical fins and geometric crown"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Conifer,
            tree_density: 0.25,
            pool_shape: Some(PoolShape::Rectangular),
            pool_size: PoolSize::Small,
            hedge_style: HedgeStyle::Formal,
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
        let num_floors = params.num_floors;
        let fh = params.floor_height;
        let wall_t = profile.min_wall_thickness;

        let sc = ScaleContext::new(w, d, fh, num_floors, profile);

        // Three setback tiers
        let num_tiers: u32 = 3;
        let tier_floors = (num_floors / num_tiers).max(1);
        let tier_h = tier_floors as f64 * fh;
        let setback = sc.setback();

        let shell = stepped_mass(w, d, num_tiers, tier_h, setback)?;

        // Windows per tier, on the tier's own facades
        let mut cutouts = Vec::new();
        let win_w = sc.window_width();
        let win_h = sc.window_height();

        for tier in 0..num_tiers {
            let tier_w = w - 2.0 * setback * tier as f64;
            let tier_d = d - 2.0 * setback * tier as f64;
            if tier_w <= 0.0 || tier_d <= 0.0 {
                break;
            }
            let tier_base_z = tier as f64 * tier_h;

            let mut grid = WindowGrid::new(tier_w, wall_t, tier_floors, fh).windows(
                sc.windows_per_floor(tier_w),
                win_w,
                win_h,
            );
            if tier > 0 {
                grid = grid.keep_ground_floor();
            }
            for y_sign in [-1.0, 1.0] {
                for c in window_grid_cutouts(&grid)? {
                    cutouts.push(translate(&c, 0.0, y_sign * tier_d / 2.0, tier_base_z));
                }
            }
        }

        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();
        let total_h = num_tiers as f64 * tier_h;

        // Vertical fins on the front facade of the base tier
        let fin_t = sc.fin_thickness();
        let fin_d = sc.fin_depth();
        let num_fins = 4;
        let fin_spacing = w / (num_fins + 1) as f64;
        for i in 0..num_fins {
            let fin = cuboid(fin_t, fin_d, total_h * 0.7)?;
            let x_pos = -w / 2.0 + fin_spacing * (i + 1) as f64;
            additions.push(translate(
                &fin,
                x_pos,
                -d / 2.0 - fin_d / 2.0 + BOOLEAN_EMBED,
                0.0,
            ));
        }

        // Geometric crown and spire
        let crown_w = (w - 2.0 * setback * (num_tiers - 1) as f64) * 0.5;
        let crown_d = (d - 2.0 * setback * (num_tiers - 1) as f64) * 0.5;
        let crown_h = fh * 0.5;
        let crown = cuboid(crown_w, crown_d, crown_h)?;
        additions.push(translate(&crown, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        let spire_w = crown_w * 0.3;
        let spire = cuboid(spire_w, spire_w, fh * 0.6)?;
        additions.push(translate(&spire, 0.0, 0.0, total_h + crown_h - BOOLEAN_EMBED));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_deco_generates() {
        let params = BuildingParams::for_style("art_deco");
        let solid = ArtDecoStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
    }

    #[test]
    fn test_art_deco_tiers_narrow_with_height() {
        let params = BuildingParams::for_style("art_deco");
        let solid = ArtDecoStyle
            .generate(&params, &ManufacturingProfile::resin())
            .unwrap();
        let (min, max) = solid.bounding_box();
        // Crown+spire above the three tiers
        let tier_h = (7 / 3) as f64 * 5.0;
        assert!(max.z > 3.0 * tier_h);
        assert!(min.z.abs() < 1e-6);
    }
}
