//! Modern style: flat roof, grid windows, optional penthouse and cantilever.

use config::constants::BOOLEAN_EMBED;
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::rect_mass;
use hotelgen_components::roof::flat_roof;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile, StyleParams};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, Solid};
use serde_json::json;

use crate::common::{bool_param, front_back_cutouts, side_cutouts, with_defaults};
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PathStyle, PoolShape, PoolSize, TreeKind};

/// Clean lines, flat roof, horizontal window bands.
pub struct ModernStyle;

impl HotelStyle for ModernStyle {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn display_name(&self) -> &'static str {
        "Modern"
    }

    fn description(&self) -> &'static str {
        "Clean rectangular geometry with flat roof, horizontal window bands, and optional penthouse"
    }

    fn preferred_layout_strategy(&self) -> &'static str {
        "campus"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.3,
            pool_shape: Some(PoolShape::Rectangular),
            pool_size: PoolSize::Medium,
            has_hedges: true,
            hedge_style: HedgeStyle::Sparse,
            has_terrace: true,
            path_style: PathStyle::Straight,
        }
    }

    fn style_params_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "has_penthouse": {
                    "type": "boolean",
                    "default": true,
                    "description": "Add a setback penthouse on top",
                },
                "has_cantilever": {
                    "type": "boolean",
                    "default": false,
                    "description": "Add a cantilevered upper section",
                },
                "window_style": {
                    "type": "string",
                    "enum": ["grid", "band"],
                    "default": "grid",
                    "description": "Window layout style",
                },
            },
        })
    }

    fn validate_style_params(&self, params: &StyleParams) -> Result<StyleParams, GenError> {
        let merged = with_defaults(
            params,
            &[
                ("has_penthouse", json!(true)),
                ("has_cantilever", json!(false)),
                ("window_style", json!("grid")),
            ],
        );
        let window_style = merged
            .get("window_style")
            .and_then(|v| v.as_str())
            .unwrap_or("grid");
        if window_style != "grid" && window_style != "band" {
            return Err(GenError::invalid_params(format!(
                "window_style must be 'grid' or 'band', got '{window_style}'"
            )));
        }
        Ok(merged)
    }

    fn generate(
        &self,
        params: &BuildingParams,
        profile: &ManufacturingProfile,
    ) -> Result<Solid, GenError> {
        let style_p = self.validate_style_params(&params.style_params)?;
        let has_penthouse = bool_param(&style_p, "has_penthouse", true);
        let has_cantilever = bool_param(&style_p, "has_cantilever", false);

        let w = params.width;
        let d = params.depth;
        let num_floors = params.num_floors.max(5);
        let fh = params.floor_height;
        let wall_t = profile.min_wall_thickness;

        let sc = ScaleContext::new(w, d, fh, num_floors, profile);
        let total_h = num_floors as f64 * fh;

        let shell = rect_mass(w, d, total_h)?;

        // Window grids on all four facades
        let win_w = sc.window_width();
        let win_h = sc.window_height();
        let mut cutouts = Vec::new();

        let grid = WindowGrid::new(w, wall_t, num_floors, fh).windows(
            sc.windows_per_floor(w),
            win_w,
            win_h,
        );
        cutouts.extend(front_back_cutouts(&grid, d / 2.0)?);

        let side_grid = WindowGrid::new(d, wall_t, num_floors, fh).windows(
            sc.windows_per_floor(d),
            win_w,
            win_h,
        );
        cutouts.extend(side_cutouts(&side_grid, w / 2.0)?);

        // Entrance on the front facade
        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();

        // Flat roof with parapet
        let ovh = sc.roof_overhang();
        let roof = flat_roof(
            w + 2.0 * ovh,
            d + 2.0 * ovh,
            sc.parapet_height(),
            sc.roof_slab_thickness(),
            Some(sc.parapet_wall_thickness()),
        )?;
        additions.push(translate(&roof, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        if has_penthouse {
            let ph_w = w * 0.6;
            let ph_d = d * 0.6;
            let ph_h = fh * 0.8;
            let penthouse = cuboid(ph_w, ph_d, ph_h)?;
            additions.push(translate(
                &penthouse,
                0.0,
                0.0,
                total_h + sc.roof_slab_thickness() - BOOLEAN_EMBED,
            ));

            let ph_roof = flat_roof(
                ph_w + ovh,
                ph_d + ovh,
                sc.parapet_height() * 0.5,
                sc.roof_slab_thickness() * 0.75,
                Some(sc.parapet_wall_thickness()),
            )?;
            additions.push(translate(
                &ph_roof,
                0.0,
                0.0,
                total_h + sc.roof_slab_thickness() + ph_h - BOOLEAN_EMBED,
            ));
        }

        if has_cantilever {
            let cant_h = fh * 2.0;
            let cant_d = d * 0.15;
            let cantilever = cuboid(w, cant_d, cant_h)?;
            additions.push(translate(
                &cantilever,
                0.0,
                -d / 2.0 - cant_d / 2.0 + BOOLEAN_EMBED,
                total_h - cant_h,
            ));
        }

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_generates_positive_volume() {
        let params = BuildingParams::for_style("modern");
        let solid = ModernStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        assert!(solid.volume() > 0.0);
        let (_, max) = solid.bounding_box();
        // Roof parapet sits above the top floor
        assert!(max.z > 7.0 * 5.0);
    }

    #[test]
    fn test_modern_rejects_bad_window_style() {
        let mut params = BuildingParams::for_style("modern");
        params
            .style_params
            .insert("window_style".into(), json!("diagonal"));
        assert!(ModernStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .is_err());
    }

    #[test]
    fn test_modern_penthouse_adds_height() {
        let mut with_ph = BuildingParams::for_style("modern");
        with_ph.style_params.insert("has_penthouse".into(), json!(true));
        let mut without_ph = with_ph.clone();
        without_ph
            .style_params
            .insert("has_penthouse".into(), json!(false));

        let profile = ManufacturingProfile::fdm();
        let tall = ModernStyle.generate(&with_ph, &profile).unwrap();
        let short = ModernStyle.generate(&without_ph, &profile).unwrap();
        assert!(tall.bounding_box().1.z > short.bounding_box().1.z);
    }
}
