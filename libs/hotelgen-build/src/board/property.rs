//! Property plate orchestrator: base + road strip + complex + garden.

use std::time::Instant;

use hotelgen_components::base::base_slab;
use hotelgen_components::landscape::{
    conifer_tree, deciduous_tree, garden_path, hedge_row, palm_tree, swimming_pool, terrace,
};
use hotelgen_core::{BuildingPlacement, ComplexParams, GenError, ManufacturingProfile, Settings};
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{difference_all, rotate_z, translate, union_all, Solid};
use hotelgen_styles::TreeKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::debug;

use super::config::{GardenFeature, GardenPlacement, PropertyParams};
use super::garden::GardenLayoutEngine;
use super::{CURB_HEIGHT, CURB_WIDTH, ROAD_RECESS};
use crate::building::{BuildResult, Metadata};
use crate::complexes::ComplexBuilder;

/// Result of building one property plate.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Combined plate: base + road + buildings + garden
    pub plate: Solid,
    /// Base plate with road strip, before buildings and garden
    pub base_plate: Solid,
    pub buildings: Vec<BuildResult>,
    /// All garden geometry combined (empty when the garden is disabled)
    pub garden_features: Solid,
    pub placements: Vec<BuildingPlacement>,
    pub garden_placements: Vec<GardenPlacement>,
    pub lot_width: f64,
    pub lot_depth: f64,
    pub metadata: Metadata,
}

/// Generates a single property plate.
///
/// Coordinate system: lot centered on X, extending from y=0 to y=lot_depth,
/// road strip along the south edge (y in [0, road_width]), buildings in the
/// center zone, garden in the remaining space. Plates for other road edges
/// are rotated by the caller.
pub struct PropertyBuilder {
    complex_builder: ComplexBuilder,
    garden_engine: GardenLayoutEngine,
}

enum GardenGeometry {
    Additive(Solid),
    Pool { rim: Solid, recess: Solid },
}

impl PropertyBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            complex_builder: ComplexBuilder::new(settings),
            garden_engine: GardenLayoutEngine,
        }
    }

    pub fn complex_builder(&self) -> &ComplexBuilder {
        &self.complex_builder
    }

    /// Builds a property plate.
    pub fn build(&self, params: &PropertyParams) -> Result<PropertyResult, GenError> {
        let start = Instant::now();
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let profile = ManufacturingProfile::from_type(&params.printer_type)?;

        let lot_w = params.lot_width;
        let lot_d = params.lot_depth;
        let road_w = params.road_width;

        // Base plate shifted into the canonical frame: x centered, y in
        // [0, lot_depth].
        let plate = base_slab(lot_w, lot_d, profile.base_thickness, profile.base_chamfer)?;
        let plate = translate(&plate, 0.0, lot_d / 2.0, 0.0);

        let (road_curbs, road_recess) = make_road_strip(lot_w, road_w)?;

        // Building complex, auto-sized by its own layout strategy.
        let complex_result = self.complex_builder.build(&ComplexParams {
            style_name: params.style_name.clone(),
            num_buildings: params.num_buildings,
            printer_type: params.printer_type.clone(),
            seed: params.seed,
            max_triangles: params.max_triangles,
            style_params: params.style_params.clone(),
            building_spacing: params.building_spacing,
            preset: params.preset.clone(),
            ..ComplexParams::default()
        })?;

        // Shift the origin-centered complex into the building zone between
        // the road and the far edge.
        let available_depth = lot_d - road_w - 4.0;
        let zone_y = road_w + 2.0 + available_depth / 2.0;

        let mut positioned = Vec::with_capacity(complex_result.buildings.len());
        let mut placements = Vec::with_capacity(complex_result.placements.len());
        for (building, placement) in complex_result
            .buildings
            .iter()
            .zip(&complex_result.placements)
        {
            let mut adjusted = placement.clone();
            adjusted.y += zone_y;
            placements.push(adjusted);

            let mut solid = building.solid.clone();
            if placement.rotation != 0.0 {
                solid = rotate_z(&solid, placement.rotation);
            }
            positioned.push(translate(&solid, placement.x, placement.y + zone_y, 0.0));
        }

        // Garden layout and geometry.
        let mut garden_placements = Vec::new();
        let mut garden_parts: Vec<Solid> = Vec::new();
        let mut pool_recesses: Vec<Solid> = Vec::new();

        if params.garden_enabled {
            let style_name = match &params.preset {
                Some(preset) => self.complex_builder.presets().get(preset)?.style_name,
                None => params.style_name.as_str(),
            };
            let theme = self.complex_builder.registry().get(style_name)?.garden_theme();

            garden_placements = self.garden_engine.compute_layout(
                lot_w,
                lot_d,
                road_w,
                &placements,
                &theme,
                &mut rng,
            );
            debug!(
                features = garden_placements.len(),
                style = style_name,
                "garden layout computed"
            );

            for gp in &garden_placements {
                match garden_feature_geometry(gp, &profile, &mut rng)? {
                    GardenGeometry::Additive(solid) => {
                        if !solid.is_empty() {
                            garden_parts.push(solid);
                        }
                    }
                    GardenGeometry::Pool { rim, recess } => {
                        if !rim.is_empty() {
                            garden_parts.push(rim);
                        }
                        if !recess.is_empty() {
                            pool_recesses.push(recess);
                        }
                    }
                }
            }
        }

        // Recesses must come out of the plate before anything is unioned on;
        // cutting afterwards would carve through building and garden
        // geometry standing over the recess outlines.
        let mut recess_cuts = vec![road_recess];
        recess_cuts.extend(pool_recesses);
        let plate = difference_all(&plate, &recess_cuts)?;
        let base_plate = union_all(&[plate, road_curbs]);

        let garden_solid = union_all(&garden_parts);
        let mut all_parts = vec![base_plate.clone()];
        all_parts.extend(positioned);
        if !garden_solid.is_empty() {
            all_parts.push(garden_solid.clone());
        }
        let combined = union_all(&all_parts);

        let mut metadata = Metadata::new();
        metadata.insert("style".into(), json!(params.style_name));
        metadata.insert("preset".into(), json!(params.preset));
        metadata.insert("road_edge".into(), json!(params.road_edge));
        metadata.insert("num_buildings".into(), json!(placements.len()));
        metadata.insert("num_garden_features".into(), json!(garden_placements.len()));
        metadata.insert("seed".into(), json!(params.seed));
        metadata.insert(
            "generation_time_ms".into(),
            json!(start.elapsed().as_millis() as u64),
        );

        Ok(PropertyResult {
            plate: combined,
            base_plate,
            buildings: complex_result.buildings,
            garden_features: garden_solid,
            placements,
            garden_placements,
            lot_width: lot_w,
            lot_depth: lot_d,
            metadata,
        })
    }
}

/// Road strip along the south edge: returns `(curbs, recess)`.
///
/// The recess is cut from the plate so the road surface sits below the
/// plate top; the curbs are raised lines at both road edges. Frame pieces
/// reproduce the same dimensions so seams align across plates.
pub(crate) fn make_road_strip(lot_width: f64, road_width: f64) -> Result<(Solid, Solid), GenError> {
    let recess = cuboid(
        lot_width - 1.0,
        road_width - 2.0 * CURB_WIDTH,
        ROAD_RECESS + config::constants::BOOLEAN_OVERSHOOT,
    )?;
    let recess = translate(&recess, 0.0, road_width / 2.0, -ROAD_RECESS);

    let curb_near = translate(
        &cuboid(lot_width - 1.0, CURB_WIDTH, CURB_HEIGHT)?,
        0.0,
        CURB_WIDTH / 2.0,
        0.0,
    );
    let curb_far = translate(
        &cuboid(lot_width - 1.0, CURB_WIDTH, CURB_HEIGHT)?,
        0.0,
        road_width - CURB_WIDTH / 2.0,
        0.0,
    );

    Ok((union_all(&[curb_near, curb_far]), recess))
}

/// Generates positioned geometry for one garden feature.
fn garden_feature_geometry(
    gp: &GardenPlacement,
    profile: &ManufacturingProfile,
    rng: &mut StdRng,
) -> Result<GardenGeometry, GenError> {
    let trunk_radius = (profile.min_wall_thickness / 2.0).max(0.4);

    match &gp.feature {
        GardenFeature::Tree { kind, height } => {
            let tree = match kind {
                TreeKind::Deciduous => deciduous_tree(*height, 1.5, trunk_radius, Some(rng))?,
                TreeKind::Conifer => conifer_tree(*height, 1.2, trunk_radius, Some(rng))?,
                TreeKind::Palm => palm_tree(*height, trunk_radius, 1.5, Some(rng))?,
            };
            Ok(GardenGeometry::Additive(translate(&tree, gp.x, gp.y, 0.0)))
        }
        GardenFeature::Hedge {
            length,
            height,
            width,
        } => {
            let mut hedge = hedge_row(*length, *height, width.max(profile.min_wall_thickness))?;
            if gp.rotation != 0.0 {
                hedge = rotate_z(&hedge, gp.rotation);
            }
            Ok(GardenGeometry::Additive(translate(&hedge, gp.x, gp.y, 0.0)))
        }
        GardenFeature::Pool {
            width,
            depth,
            shape,
        } => {
            let (rim, recess) = swimming_pool(
                *width,
                *depth,
                0.5,
                profile.min_wall_thickness.max(0.8),
                0.2,
                *shape,
            )?;
            Ok(GardenGeometry::Pool {
                rim: translate(&rim, gp.x, gp.y, 0.0),
                recess: translate(&recess, gp.x, gp.y, 0.0),
            })
        }
        GardenFeature::Path {
            points,
            width,
            height,
        } => {
            if points.len() < 2 {
                return Ok(GardenGeometry::Additive(Solid::empty()));
            }
            Ok(GardenGeometry::Additive(garden_path(
                points, *width, *height,
            )?))
        }
        GardenFeature::Terrace {
            width,
            depth,
            height,
        } => {
            let t = terrace(*width, *depth, *height)?;
            Ok(GardenGeometry::Additive(translate(&t, gp.x, gp.y, 0.0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_strip_curbs_and_recess() {
        let (curbs, recess) = make_road_strip(100.0, 8.0).unwrap();
        let (curb_min, curb_max) = curbs.bounding_box();
        assert!(curb_min.z.abs() < 1e-9);
        assert!((curb_max.z - CURB_HEIGHT).abs() < 1e-9);
        assert!(curb_min.y.abs() < 1e-9);
        assert!((curb_max.y - 8.0).abs() < 1e-9);

        let (rec_min, rec_max) = recess.bounding_box();
        assert!((rec_min.z + ROAD_RECESS).abs() < 1e-9);
        assert!(rec_max.z > 0.0);
        // Recess sits between the curbs
        assert!(rec_min.y > curb_min.y);
        assert!(rec_max.y < curb_max.y);
    }

    #[test]
    fn test_property_build_default() {
        let builder = PropertyBuilder::new(Settings::default());
        let mut params = PropertyParams::default();
        params.num_buildings = 1;
        params.garden_enabled = false;
        let result = builder.build(&params).unwrap();
        assert!(result.plate.volume() > 0.0);
        assert_eq!(result.buildings.len(), 1);
        // Buildings are shifted past the road strip
        assert!(result.placements[0].y > params.road_width);
    }

    #[test]
    fn test_property_garden_enabled_adds_features() {
        let builder = PropertyBuilder::new(Settings::default());
        let mut params = PropertyParams::default();
        params.num_buildings = 1;
        let result = builder.build(&params).unwrap();
        assert!(!result.garden_placements.is_empty());
        assert!(result.garden_features.volume() > 0.0);
        assert!(result.plate.volume() > result.base_plate.volume());
    }

    #[test]
    fn test_property_rejects_tiny_lot() {
        let builder = PropertyBuilder::new(Settings::default());
        let mut params = PropertyParams::default();
        params.lot_depth = 20.0;
        assert!(builder.build(&params).is_err());
    }
}
