//! Full-board orchestrator: all property plates plus frame pieces.

use std::time::Instant;

use hotelgen_core::{GenError, ManufacturingProfile, Settings};
use serde_json::json;
use tracing::{debug, info};

use super::config::{BoardParams, PropertyParams, PropertySlot};
use super::frame::{generate_frame, FrameResult};
use super::property::{PropertyBuilder, PropertyResult};
use super::road::generate_road_layout;
use crate::building::Metadata;

/// Result of building a full game board.
#[derive(Debug, Clone)]
pub struct BoardResult {
    pub properties: Vec<PropertyResult>,
    pub property_slots: Vec<PropertySlot>,
    pub frame: FrameResult,
    pub metadata: Metadata,
}

/// Generates all property plates and connector pieces for a game board.
pub struct BoardBuilder {
    property_builder: PropertyBuilder,
}

impl BoardBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            property_builder: PropertyBuilder::new(settings),
        }
    }

    pub fn property_builder(&self) -> &PropertyBuilder {
        &self.property_builder
    }

    /// Builds a full board.
    ///
    /// 1. Road layout: slot positions and preset assignments
    /// 2. One property plate per slot, seeded per slot index
    /// 3. Frame pieces derived from the slot geometry
    pub fn build(&self, params: &BoardParams) -> Result<BoardResult, GenError> {
        let start = Instant::now();
        params.validate()?;

        let profile = ManufacturingProfile::from_type(&params.printer_type)?;

        let slots = generate_road_layout(
            params.road_shape,
            params.num_properties,
            params.property_width,
            params.property_depth,
            params.road_width,
            params.style_assignments.as_ref(),
        );
        debug!(slots = slots.len(), shape = ?params.road_shape, "road layout computed");

        let mut properties = Vec::with_capacity(slots.len());
        for slot in &slots {
            let property_params = PropertyParams {
                preset: Some(slot.assigned_preset.clone()),
                lot_width: params.property_width,
                lot_depth: params.property_depth,
                road_edge: slot.road_edge,
                road_width: params.road_width,
                printer_type: params.printer_type.clone(),
                seed: params.seed + slot.index as u64 * 100,
                max_triangles: params.max_triangles_per_property,
                ..PropertyParams::default()
            };
            let result = self.property_builder.build(&property_params)?;
            info!(
                index = slot.index,
                preset = %slot.assigned_preset,
                "property plate generated"
            );
            properties.push(result);
        }

        let frame = generate_frame(&slots, params, profile.base_thickness)?;

        let mut metadata = Metadata::new();
        metadata.insert("num_properties".into(), json!(properties.len()));
        metadata.insert("road_shape".into(), json!(params.road_shape));
        metadata.insert("num_frame_pieces".into(), json!(frame.piece_count()));
        metadata.insert("seed".into(), json!(params.seed));
        metadata.insert(
            "generation_time_ms".into(),
            json!(start.elapsed().as_millis() as u64),
        );

        Ok(BoardResult {
            properties,
            property_slots: slots,
            frame,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::config::RoadShape;

    #[test]
    fn test_board_rejects_bad_property_count() {
        let builder = BoardBuilder::new(Settings::default());
        let mut params = BoardParams::default();
        params.num_properties = 0;
        assert!(builder.build(&params).is_err());
    }

    #[test]
    fn test_board_small_linear() {
        let builder = BoardBuilder::new(Settings::default());
        let params = BoardParams {
            road_shape: RoadShape::Linear,
            num_properties: 2,
            ..BoardParams::default()
        };
        let result = builder.build(&params).unwrap();
        assert_eq!(result.properties.len(), 2);
        assert_eq!(result.property_slots.len(), 2);
        // Two facing properties share one road filler plus perimeter rails
        assert!(!result.frame.road_fillers.is_empty());
        assert_eq!(result.properties[0].metadata["preset"], json!("royal"));
        assert_eq!(result.properties[1].metadata["preset"], json!("fujiyama"));
    }
}
