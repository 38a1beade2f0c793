//! Parameter and placement records for board-level generation.

use glam::DVec2;
use hotelgen_core::{GenError, StyleParams};
use hotelgen_styles::{PoolShape, TreeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which side of a property faces the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadEdge {
    South,
    North,
    East,
    West,
}

/// Road topology for a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadShape {
    Loop,
    Serpentine,
    Linear,
}

/// Preset cycle used when the caller doesn't assign properties explicitly.
pub const DEFAULT_PRESET_ASSIGNMENTS: [&str; 8] = [
    "royal",
    "fujiyama",
    "waikiki",
    "president",
    "safari",
    "taj_mahal",
    "letoile",
    "boomerang",
];

/// One landscape feature placed by the garden layout engine.
#[derive(Debug, Clone)]
pub struct GardenPlacement {
    pub x: f64,
    pub y: f64,
    /// Rotation around Z in degrees
    pub rotation: f64,
    pub feature: GardenFeature,
}

/// A landscape feature with its resolved dimensions.
#[derive(Debug, Clone)]
pub enum GardenFeature {
    Tree { kind: TreeKind, height: f64 },
    Hedge { length: f64, height: f64, width: f64 },
    Pool { width: f64, depth: f64, shape: PoolShape },
    Path { points: Vec<DVec2>, width: f64, height: f64 },
    Terrace { width: f64, depth: f64, height: f64 },
}

impl GardenFeature {
    /// Short type tag for metadata and reproducibility checks.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GardenFeature::Tree { .. } => "tree",
            GardenFeature::Hedge { .. } => "hedge",
            GardenFeature::Pool { .. } => "pool",
            GardenFeature::Path { .. } => "path",
            GardenFeature::Terrace { .. } => "terrace",
        }
    }
}

/// Parameters for generating one property plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyParams {
    /// Use an existing complex preset (royal, waikiki, ...)
    pub preset: Option<String>,
    pub style_name: String,
    pub num_buildings: u32,
    /// Total property plate width (mm)
    pub lot_width: f64,
    /// Total property plate depth (mm)
    pub lot_depth: f64,
    pub road_edge: RoadEdge,
    /// Width of the road strip (mm)
    pub road_width: f64,
    pub garden_enabled: bool,
    pub printer_type: String,
    pub seed: u64,
    pub style_params: StyleParams,
    pub building_spacing: f64,
    pub max_triangles: usize,
}

impl Default for PropertyParams {
    fn default() -> Self {
        Self {
            preset: None,
            style_name: "modern".to_string(),
            num_buildings: 3,
            lot_width: 100.0,
            lot_depth: 80.0,
            road_edge: RoadEdge::South,
            road_width: 8.0,
            garden_enabled: true,
            printer_type: "fdm".to_string(),
            seed: 42,
            style_params: StyleParams::new(),
            building_spacing: 5.0,
            max_triangles: 300_000,
        }
    }
}

impl PropertyParams {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.printer_type != "fdm" && self.printer_type != "resin" {
            return Err(GenError::invalid_params(format!(
                "printer_type must be 'fdm' or 'resin', got '{}'",
                self.printer_type
            )));
        }
        if self.lot_width < 40.0 || self.lot_depth < 30.0 {
            return Err(GenError::invalid_params(format!(
                "lot must be at least 40x30mm, got {}x{}",
                self.lot_width, self.lot_depth
            )));
        }
        if self.road_width <= 0.0 || self.road_width >= self.lot_depth {
            return Err(GenError::invalid_params(format!(
                "road_width must be positive and smaller than the lot depth, got {}",
                self.road_width
            )));
        }
        Ok(())
    }
}

/// Outer frame configuration for a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameParams {
    pub enabled: bool,
    /// Width of the perimeter rails (mm)
    pub frame_width: f64,
    /// Height of the retaining lip above the plate surface (mm)
    pub lip_height: f64,
    pub lip_thickness: f64,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_width: 6.0,
            lip_height: 2.0,
            lip_thickness: 1.2,
        }
    }
}

/// Parameters for generating a full game board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardParams {
    pub road_shape: RoadShape,
    pub num_properties: u32,
    /// Per-property plate width (mm)
    pub property_width: f64,
    /// Per-property plate depth (mm)
    pub property_depth: f64,
    pub road_width: f64,
    pub printer_type: String,
    pub seed: u64,
    pub max_triangles_per_property: usize,
    /// index -> preset name; auto-assigned from the default cycle if None
    pub style_assignments: Option<BTreeMap<u32, String>>,
    pub frame: FrameParams,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            road_shape: RoadShape::Loop,
            num_properties: 8,
            property_width: 100.0,
            property_depth: 80.0,
            road_width: 8.0,
            printer_type: "fdm".to_string(),
            seed: 42,
            max_triangles_per_property: 300_000,
            style_assignments: None,
            frame: FrameParams::default(),
        }
    }
}

impl BoardParams {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.printer_type != "fdm" && self.printer_type != "resin" {
            return Err(GenError::invalid_params(format!(
                "printer_type must be 'fdm' or 'resin', got '{}'",
                self.printer_type
            )));
        }
        if !(1..=12).contains(&self.num_properties) {
            return Err(GenError::invalid_params(format!(
                "num_properties must be 1-12, got {}",
                self.num_properties
            )));
        }
        Ok(())
    }
}

/// A slot for one property along the road.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySlot {
    pub index: u32,
    /// Property center in board coordinates
    pub center_x: f64,
    pub center_y: f64,
    pub road_edge: RoadEdge,
    pub assigned_preset: String,
}
