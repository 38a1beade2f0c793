//! Single-building orchestrator.

use std::collections::BTreeMap;
use std::time::Instant;

use glam::DVec3;
use hotelgen_components::base::base_slab;
use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile, Settings};
use hotelgen_solid::{union_all, GeometryError, Solid};
use hotelgen_styles::StyleRegistry;
use serde_json::json;
use tracing::{debug, error, warn};

/// Free-form result metadata, directly serializable.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Result of building one hotel.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub solid: Solid,
    pub triangle_count: usize,
    pub bounding_box: (DVec3, DVec3),
    pub is_watertight: bool,
    pub warnings: Vec<String>,
    pub metadata: Metadata,
}

/// Orchestrator that builds hotels from parameters.
///
/// Responsibility: resolve the profile, look up the style, call generate,
/// add the base, check budgets. It does no geometry construction of its own.
pub struct HotelBuilder {
    registry: StyleRegistry,
    settings: Settings,
}

impl HotelBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            registry: StyleRegistry::new(),
            settings,
        }
    }

    /// The style registry this builder dispatches through.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds a hotel with its base pedestal.
    pub fn build(&self, params: &BuildingParams) -> Result<BuildResult, GenError> {
        self.build_with(params, false)
    }

    /// Builds a hotel, optionally skipping the individual base slab.
    ///
    /// Complexes share one plate, so their buildings are generated with
    /// `skip_base = true`.
    pub fn build_with(&self, params: &BuildingParams, skip_base: bool) -> Result<BuildResult, GenError> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        params.validate()?;
        let profile = ManufacturingProfile::from_type(&params.printer_type)?;
        let style = self.registry.get(&params.style_name)?;
        style.validate_style_params(&params.style_params)?;

        debug!(style = %params.style_name, seed = params.seed, "generating building");
        let building = style.generate(params, &profile).map_err(|err| {
            error!(style = %params.style_name, %err, "style generation failed");
            err
        })?;

        if building.is_empty() {
            return Err(GeometryError::empty_result(format!(
                "style '{}'",
                params.style_name
            ))
            .into());
        }

        let building = if skip_base {
            building
        } else {
            // Base extends slightly beyond the building on each side.
            let overhang = 0.5;
            let base = base_slab(
                params.width + 2.0 * overhang,
                params.depth + 2.0 * overhang,
                profile.base_thickness,
                profile.base_chamfer,
            )?;
            let combined = union_all(&[building, base]);
            if combined.is_empty() {
                return Err(GeometryError::empty_result("adding base").into());
            }
            combined
        };

        // One mesh conversion for the triangle budget check.
        let mesh = building.to_mesh();
        let triangle_count = mesh.triangle_count();
        let max_triangles = params.max_triangles.min(self.settings.max_triangles);
        if triangle_count > max_triangles {
            // Budget overage warns without simplifying; decimation would
            // change the output geometry for a given seed.
            warn!(
                style = %params.style_name,
                triangle_count, max_triangles, "triangle budget exceeded"
            );
            warnings.push(format!(
                "Triangle count {triangle_count} exceeds budget {max_triangles}"
            ));
        }

        let bounding_box = building.bounding_box();
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let mut metadata = Metadata::new();
        metadata.insert("style".into(), json!(params.style_name));
        metadata.insert("printer_type".into(), json!(params.printer_type));
        metadata.insert("seed".into(), json!(params.seed));
        metadata.insert("generation_time_ms".into(), json!(elapsed_ms));

        Ok(BuildResult {
            solid: building,
            triangle_count,
            bounding_box,
            // Boolean kernel invariant: every operation yields a closed
            // solid or fails before this point.
            is_watertight: true,
            warnings,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> HotelBuilder {
        HotelBuilder::new(Settings::default())
    }

    #[test]
    fn test_build_unknown_style() {
        let params = BuildingParams::for_style("bauhaus");
        let err = builder().build(&params).unwrap_err();
        assert!(matches!(err, GenError::InvalidParams(_)));
    }

    #[test]
    fn test_build_includes_base_below_z0() {
        let mut params = BuildingParams::for_style("modern");
        params.num_floors = 4;
        let result = builder().build(&params).unwrap();
        assert!(result.bounding_box.0.z < 0.0);
        assert!(result.triangle_count > 0);
        assert!(result.is_watertight);
    }

    #[test]
    fn test_build_skip_base_stays_above_ground() {
        let mut params = BuildingParams::for_style("modern");
        params.num_floors = 4;
        let result = builder().build_with(&params, true).unwrap();
        assert!(result.bounding_box.0.z >= -1e-6);
    }

    #[test]
    fn test_triangle_budget_warns_only() {
        let mut params = BuildingParams::for_style("modern");
        params.max_triangles = 10;
        let result = builder().build(&params).unwrap();
        assert!(!result.warnings.is_empty());
        assert!(result.triangle_count > 10);
    }

    #[test]
    fn test_metadata_records_style_and_seed() {
        let params = BuildingParams::for_style("townhouse");
        let result = builder().build(&params).unwrap();
        assert_eq!(result.metadata["style"], json!("townhouse"));
        assert_eq!(result.metadata["seed"], json!(42));
    }
}
