//! # Parameter Records
//!
//! Validated input records for single-building and multi-building
//! generation, plus the metadata records the serving layer lists.
//!
//! Validation lives in explicit `validate()` methods so deserialized
//! requests are checked exactly once at the orchestrator boundary; every
//! cross-field invariant failure is an [`GenError::InvalidParams`] naming
//! the offending value.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::error::GenError;

/// Maximum building height : narrow-plan-side aspect ratio.
const MAX_ASPECT_RATIO: f64 = 15.0;

/// Open style-specific parameter map.
pub type StyleParams = Map<String, serde_json::Value>;

/// Role of a building within a complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Main,
    Wing,
    Annex,
    Tower,
    Pavilion,
}

impl Role {
    /// Machine name, as used in preset definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Main => "main",
            Role::Wing => "wing",
            Role::Annex => "annex",
            Role::Tower => "tower",
            Role::Pavilion => "pavilion",
        }
    }
}

/// Parameters for generating one building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingParams {
    pub style_name: String,
    pub width: f64,
    pub depth: f64,
    pub num_floors: u32,
    pub floor_height: f64,
    pub printer_type: String,
    pub seed: u64,
    pub max_triangles: usize,
    pub style_params: StyleParams,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            style_name: String::new(),
            width: 30.0,
            depth: 25.0,
            num_floors: 7,
            floor_height: 5.0,
            printer_type: "fdm".to_string(),
            seed: 42,
            max_triangles: 100_000,
            style_params: StyleParams::new(),
        }
    }
}

impl BuildingParams {
    /// Convenience constructor with defaults for everything but the style.
    pub fn for_style(style_name: &str) -> Self {
        Self {
            style_name: style_name.to_string(),
            ..Self::default()
        }
    }

    /// Checks cross-field invariants.
    pub fn validate(&self) -> Result<(), GenError> {
        check_printer_type(&self.printer_type)?;

        let total_height = self.num_floors as f64 * self.floor_height;
        let min_base = self.width.min(self.depth);
        if min_base > 0.0 && total_height / min_base > MAX_ASPECT_RATIO {
            return Err(GenError::invalid_params(format!(
                "Aspect ratio {:.1}:1 exceeds maximum {MAX_ASPECT_RATIO:.0}:1",
                total_height / min_base
            )));
        }
        if self.width <= 0.0 || self.depth <= 0.0 || self.floor_height <= 0.0 {
            return Err(GenError::invalid_params(format!(
                "building dimensions must be positive, got {}x{} at {} per floor",
                self.width, self.depth, self.floor_height
            )));
        }
        if self.num_floors == 0 {
            return Err(GenError::invalid_params("num_floors must be at least 1"));
        }
        Ok(())
    }
}

/// Position and size of a single building within a complex.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingPlacement {
    pub x: f64,
    pub y: f64,
    /// Rotation around Z in degrees; one of 0/90/180/270.
    pub rotation: f64,
    pub width: f64,
    pub depth: f64,
    pub num_floors: u32,
    pub floor_height: f64,
    pub role: Role,
}

impl Default for BuildingPlacement {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            width: 30.0,
            depth: 25.0,
            num_floors: 7,
            floor_height: 5.0,
            role: Role::Main,
        }
    }
}

/// Parameters for generating a building complex (1-6 buildings).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexParams {
    pub style_name: String,
    pub num_buildings: u32,
    pub printer_type: String,
    pub seed: u64,
    pub max_triangles: usize,
    pub style_params: StyleParams,
    pub lot_width: Option<f64>,
    pub lot_depth: Option<f64>,
    pub building_spacing: f64,
    pub placements: Option<Vec<BuildingPlacement>>,
    pub preset: Option<String>,
}

impl Default for ComplexParams {
    fn default() -> Self {
        Self {
            style_name: String::new(),
            num_buildings: 3,
            printer_type: "fdm".to_string(),
            seed: 42,
            max_triangles: 200_000,
            style_params: StyleParams::new(),
            lot_width: None,
            lot_depth: None,
            building_spacing: 5.0,
            placements: None,
            preset: None,
        }
    }
}

impl ComplexParams {
    /// Convenience constructor with defaults for everything but the style.
    pub fn for_style(style_name: &str) -> Self {
        Self {
            style_name: style_name.to_string(),
            ..Self::default()
        }
    }

    /// Checks cross-field invariants.
    pub fn validate(&self) -> Result<(), GenError> {
        check_printer_type(&self.printer_type)?;

        if !(1..=6).contains(&self.num_buildings) {
            return Err(GenError::invalid_params(format!(
                "num_buildings must be 1-6, got {}",
                self.num_buildings
            )));
        }
        if self.building_spacing < 2.0 {
            return Err(GenError::invalid_params(format!(
                "building_spacing must be >= 2.0mm, got {}",
                self.building_spacing
            )));
        }
        if let Some(placements) = &self.placements {
            if placements.len() != self.num_buildings as usize {
                return Err(GenError::invalid_params(format!(
                    "placements has {} entries but num_buildings is {}",
                    placements.len(),
                    self.num_buildings
                )));
            }
        }
        Ok(())
    }
}

/// Style metadata for listing surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub params_schema: serde_json::Value,
}

/// Preset metadata for listing surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub style_name: String,
    pub num_buildings: u32,
    pub building_roles: Vec<Role>,
}

fn check_printer_type(printer_type: &str) -> Result<(), GenError> {
    if printer_type != "fdm" && printer_type != "resin" {
        return Err(GenError::invalid_params(format!(
            "printer_type must be 'fdm' or 'resin', got '{printer_type}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_building_params_validate() {
        let mut params = BuildingParams::default();
        params.style_name = "modern".to_string();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_aspect_ratio_gate_rejects_20_to_1() {
        let params = BuildingParams {
            num_floors: 20,
            floor_height: 5.0,
            width: 5.0,
            depth: 5.0,
            ..BuildingParams::for_style("modern")
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, GenError::InvalidParams(_)));
        assert!(err.to_string().contains("Aspect ratio"));
    }

    #[test]
    fn test_aspect_ratio_gate_accepts_wide_building() {
        let params = BuildingParams {
            num_floors: 4,
            floor_height: 5.0,
            width: 30.0,
            depth: 25.0,
            ..BuildingParams::for_style("modern")
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_bad_printer_type_rejected() {
        let params = BuildingParams {
            printer_type: "sla".to_string(),
            ..BuildingParams::for_style("modern")
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_complex_params_building_count_bounds() {
        let mut params = ComplexParams::for_style("modern");
        params.num_buildings = 0;
        assert!(params.validate().is_err());
        params.num_buildings = 7;
        assert!(params.validate().is_err());
        params.num_buildings = 6;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_complex_params_spacing_minimum() {
        let mut params = ComplexParams::for_style("modern");
        params.building_spacing = 1.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_complex_params_placement_count_must_match() {
        let mut params = ComplexParams::for_style("modern");
        params.num_buildings = 2;
        params.placements = Some(vec![BuildingPlacement::default()]);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_role_serde_round_trip() {
        let json = serde_json::to_string(&Role::Pavilion).unwrap();
        assert_eq!(json, "\"pavilion\"");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Pavilion);
    }
}
