//! Classical style: columns, pediment, symmetric facade.

use config::constants::BOOLEAN_EMBED;
use glam::DVec2;
use hotelgen_components::column::{round_column, square_column};
use hotelgen_components::door::door_cutout;
use hotelgen_components::facade::WindowGrid;
use hotelgen_components::massing::rect_mass;
use hotelgen_components::ScaleContext;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile};
use hotelgen_solid::primitives::{cuboid, extrude_polygon};
use hotelgen_solid::{rotate_x, translate, Solid};

use crate::common::front_back_cutouts;
use crate::style::{assemble_building, HotelStyle};
use crate::theme::{GardenTheme, HedgeStyle, PoolShape, PoolSize, TreeKind};

/// Symmetric facade with portico, columns, and pediment.
pub struct ClassicalStyle;

impl HotelStyle for ClassicalStyle {
    fn name(&self) -> &'static str {
        "classical"
    }

    fn display_name(&self) -> &'static str {
        "Classical"
    }

    fn description(&self) -> &'static str {
        "Symmetric facade with columns, entablature, and triangular pediment"
    }

    fn garden_theme(&self) -> GardenTheme {
        GardenTheme {
            tree_kind: TreeKind::Deciduous,
            tree_density: 0.4,
            pool_shape: Some(PoolShape::Rectangular),
            pool_size: PoolSize::Large,
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

        // Grand entrance
        let door = door_cutout(sc.door_width(), sc.door_height(), wall_t)?;
        cutouts.push(translate(&door, 0.0, -d / 2.0, 0.0));

        let mut additions = Vec::new();

        let col_w = sc.column_width();
        let num_cols = 4;
        let col_spacing = w / (num_cols + 1) as f64;
        let col_standoff = col_w * 0.8;

        // Entablature across the top
        let ent_h = sc.entablature_height();
        let ent_ovh = sc.roof_overhang();
        let entablature = cuboid(w + 2.0 * ent_ovh, d + 2.0 * ent_ovh, ent_h)?;
        additions.push(translate(&entablature, 0.0, 0.0, total_h - BOOLEAN_EMBED));

        // Triangular pediment over the portico
        let pediment_h = fh;
        let half_w = (w + 2.0 * ent_ovh) / 2.0;
        let pediment_profile = [
            DVec2::new(-half_w, 0.0),
            DVec2::new(half_w, 0.0),
            DVec2::new(0.0, pediment_h),
        ];
        let pediment_depth = col_w * 0.8 + col_standoff + BOOLEAN_EMBED * 2.0;
        // After the quarter turn the prism spans y in [-pediment_depth, 0];
        // embed it into the facade and the entablature so it never floats.
        let pediment = extrude_polygon(&pediment_profile, pediment_depth)?;
        let pediment = rotate_x(&pediment, 90.0);
        additions.push(translate(
            &pediment,
            0.0,
            -d / 2.0 + BOOLEAN_EMBED,
            total_h + ent_h - 2.0 * BOOLEAN_EMBED,
        ));

        // Front columns, standing proud of the wall
        for i in 0..num_cols {
            let x_pos = -w / 2.0 + col_spacing * (i + 1) as f64;
            let col = if profile.use_window_frames {
                round_column(col_w / 2.0, total_h, profile.segments_for_radius(col_w / 2.0))?
            } else {
                square_column(col_w, total_h)?
            };
            additions.push(translate(&col, x_pos, -d / 2.0 - col_standoff, 0.0));
        }

        // Portico floor slab connecting columns to the building
        let portico_d = col_standoff + col_w / 2.0 + BOOLEAN_EMBED;
        let portico = cuboid(w * 0.9, portico_d, sc.cornice_height())?;
        additions.push(translate(
            &portico,
            0.0,
            -d / 2.0 - portico_d / 2.0 + BOOLEAN_EMBED,
            0.0,
        ));

        // Cornice band at the roofline
        let cornice_h = sc.cornice_height();
        let cornice = cuboid(w + 2.0 * ent_ovh, d + 2.0 * ent_ovh, cornice_h)?;
        additions.push(translate(
            &cornice,
            0.0,
            0.0,
            total_h + ent_h - BOOLEAN_EMBED - cornice_h * 0.3,
        ));

        Ok(assemble_building(shell, &cutouts, &additions, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_generates_on_both_profiles() {
        let params = BuildingParams::for_style("classical");
        for profile in [ManufacturingProfile::fdm(), ManufacturingProfile::resin()] {
            let solid = ClassicalStyle.generate(&params, &profile).unwrap();
            assert!(solid.volume() > 0.0);
        }
    }

    #[test]
    fn test_classical_portico_extends_forward() {
        let params = BuildingParams::for_style("classical");
        let solid = ClassicalStyle
            .generate(&params, &ManufacturingProfile::fdm())
            .unwrap();
        let (min, _) = solid.bounding_box();
        // Columns stand in front of the -Y facade
        assert!(min.y < -12.5);
    }
}
