//! Multi-building complex orchestrator.

use std::time::Instant;

use hotelgen_core::{
    BuildingParams, BuildingPlacement, ComplexParams, GenError, ManufacturingProfile, Role,
    Settings,
};
use hotelgen_layout::{compute_lot_bounds, LayoutEngine, SizeHints};
use hotelgen_solid::{rotate_z, translate, union_all, Solid};
use hotelgen_styles::StyleRegistry;
use serde_json::json;
use tracing::debug;

use super::base_plate::complex_base_plate;
use super::presets::PresetRegistry;
use crate::building::{BuildResult, HotelBuilder, Metadata};

/// Depth of the alignment recesses cut into the shared plate.
const ALIGNMENT_RECESS_DEPTH: f64 = 0.3;

/// Result of building a complex.
#[derive(Debug, Clone)]
pub struct ComplexResult {
    pub buildings: Vec<BuildResult>,
    pub base_plate: Solid,
    pub combined: Solid,
    pub placements: Vec<BuildingPlacement>,
    pub lot_width: f64,
    pub lot_depth: f64,
    pub metadata: Metadata,
}

/// Orchestrates generation of multi-building complexes.
pub struct ComplexBuilder {
    hotel_builder: HotelBuilder,
    layout_engine: LayoutEngine,
    presets: PresetRegistry,
}

impl ComplexBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            hotel_builder: HotelBuilder::new(settings),
            layout_engine: LayoutEngine,
            presets: PresetRegistry::new(),
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        self.hotel_builder.registry()
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Builds a complex: layout, per-building generation, shared plate.
    pub fn build(&self, params: &ComplexParams) -> Result<ComplexResult, GenError> {
        let start = Instant::now();
        params.validate()?;

        // Preset resolution overrides style, count, roles, and sizing.
        let mut style_name = params.style_name.clone();
        let mut num_buildings = params.num_buildings;
        let mut roles: Option<Vec<Role>> = None;
        let mut size_hints: Option<SizeHints> = None;
        let mut layout_override: Option<&str> = None;
        let mut bend_angle = 0.0;

        if let Some(preset_name) = &params.preset {
            let preset = self.presets.get(preset_name)?;
            style_name = preset.style_name.to_string();
            num_buildings = preset.num_buildings;
            roles = Some(preset.building_roles.clone());
            size_hints = Some(preset.size_hints.clone());
            layout_override = preset.layout_override;
            bend_angle = preset.bend_angle;
        }

        let style = self.registry().get(&style_name)?;
        let profile = ManufacturingProfile::from_type(&params.printer_type)?;
        let strategy = layout_override.unwrap_or_else(|| style.preferred_layout_strategy());

        let layout_params = ComplexParams {
            style_name: style_name.clone(),
            num_buildings,
            ..params.clone()
        };
        let placements = self.layout_engine.compute_layout(
            &layout_params,
            Some(strategy),
            roles.as_deref(),
            size_hints.as_ref(),
        )?;

        debug!(
            style = %style_name,
            strategy,
            num_buildings = placements.len(),
            "complex layout computed"
        );

        // Generate each building without its own base; the plate is shared.
        let per_building_tris = params.max_triangles / num_buildings.max(1) as usize;
        let mut buildings = Vec::with_capacity(placements.len());
        let mut positioned = Vec::with_capacity(placements.len());

        for (i, placement) in placements.iter().enumerate() {
            let building_params = BuildingParams {
                style_name: style_name.clone(),
                width: placement.width,
                depth: placement.depth,
                num_floors: placement.num_floors,
                floor_height: placement.floor_height,
                printer_type: params.printer_type.clone(),
                seed: params.seed + i as u64,
                max_triangles: per_building_tris,
                style_params: params.style_params.clone(),
            };

            let result = self.hotel_builder.build_with(&building_params, true)?;

            let mut solid = result.solid.clone();
            if placement.rotation != 0.0 {
                solid = rotate_z(&solid, placement.rotation);
            }
            positioned.push(translate(&solid, placement.x, placement.y, 0.0));
            buildings.push(result);
        }

        // Shared plate sized to the computed footprint or the caller's lot.
        let (mut lot_width, mut lot_depth) =
            compute_lot_bounds(&placements, profile.base_thickness);
        if let Some(min_width) = params.lot_width {
            lot_width = lot_width.max(min_width);
        }
        if let Some(min_depth) = params.lot_depth {
            lot_depth = lot_depth.max(min_depth);
        }

        let base_plate = complex_base_plate(
            lot_width,
            lot_depth,
            profile.base_thickness,
            profile.base_chamfer,
            &placements,
            ALIGNMENT_RECESS_DEPTH,
        )?;

        let mut all_parts = positioned;
        all_parts.push(base_plate.clone());
        let combined = union_all(&all_parts);

        let mut metadata = Metadata::new();
        metadata.insert("style".into(), json!(style_name));
        metadata.insert("num_buildings".into(), json!(buildings.len()));
        metadata.insert("printer_type".into(), json!(params.printer_type));
        metadata.insert("seed".into(), json!(params.seed));
        metadata.insert("strategy".into(), json!(strategy));
        if let Some(preset_name) = &params.preset {
            metadata.insert("preset".into(), json!(preset_name));
            metadata.insert("bend_angle".into(), json!(bend_angle));
        }
        metadata.insert(
            "generation_time_ms".into(),
            json!(start.elapsed().as_millis() as u64),
        );

        Ok(ComplexResult {
            buildings,
            base_plate,
            combined,
            placements,
            lot_width,
            lot_depth,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_build_three_buildings() {
        let builder = ComplexBuilder::new(Settings::default());
        let mut params = ComplexParams::for_style("modern");
        params.num_buildings = 3;
        params.seed = 1;
        let result = builder.build(&params).unwrap();
        assert_eq!(result.buildings.len(), 3);
        assert!(result.buildings.iter().all(|b| b.is_watertight));
        assert!(result.combined.volume() > 0.0);
        assert!(result.lot_width > 0.0 && result.lot_depth > 0.0);
    }

    #[test]
    fn test_complex_rejects_bad_count() {
        let builder = ComplexBuilder::new(Settings::default());
        let mut params = ComplexParams::for_style("modern");
        params.num_buildings = 9;
        assert!(builder.build(&params).is_err());
    }

    #[test]
    fn test_complex_preset_overrides_style_and_count() {
        let builder = ComplexBuilder::new(Settings::default());
        let mut params = ComplexParams::for_style("modern");
        params.preset = Some("safari".to_string());
        let result = builder.build(&params).unwrap();
        assert_eq!(result.buildings.len(), 3);
        assert_eq!(result.metadata["style"], json!("mediterranean"));
    }

    #[test]
    fn test_complex_honors_minimum_lot_size() {
        let builder = ComplexBuilder::new(Settings::default());
        let mut params = ComplexParams::for_style("townhouse");
        params.num_buildings = 1;
        params.lot_width = Some(400.0);
        params.lot_depth = Some(300.0);
        let result = builder.build(&params).unwrap();
        assert!((result.lot_width - 400.0).abs() < 1e-9);
        assert!((result.lot_depth - 300.0).abs() < 1e-9);
    }
}
