//! Board-level generation: property plates, gardens, roads, and frames.

pub mod builder;
pub mod config;
pub mod frame;
pub mod garden;
pub mod property;
pub mod road;

pub use builder::{BoardBuilder, BoardResult};
pub use config::{
    BoardParams, FrameParams, GardenFeature, GardenPlacement, PropertyParams, PropertySlot,
    RoadEdge, RoadShape,
};
pub use frame::{generate_frame, FramePiece, FrameResult};
pub use garden::GardenLayoutEngine;
pub use property::{PropertyBuilder, PropertyResult};
pub use road::generate_road_layout;

/// Road surface depth below the plate top (mm).
///
/// Shared by the property road strip and the frame fillers so seams align.
pub(crate) const ROAD_RECESS: f64 = 0.2;

/// Curb height above the plate top (mm).
pub(crate) const CURB_HEIGHT: f64 = 0.3;

/// Curb line width (mm).
pub(crate) const CURB_WIDTH: f64 = 0.8;
