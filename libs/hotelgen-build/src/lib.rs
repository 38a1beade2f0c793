//! # hotelgen-build
//!
//! Assembly orchestrators, composed from the layers below:
//!
//! - [`HotelBuilder`]: one building plus its base pedestal
//! - [`ComplexBuilder`]: multi-building layout plus a shared plate
//! - [`PropertyBuilder`]: a complex plus garden and road strip on one lot
//! - [`BoardBuilder`]: multiple properties plus road network and frame
//!
//! plus the post-generation validation checklist. Every `build` call is a
//! pure pipeline over its own inputs and one seeded rng; the only shared
//! state is the read-only style and preset registries built at startup.

pub mod board;
pub mod building;
pub mod complexes;
pub mod validation;

pub use board::{
    BoardBuilder, BoardParams, BoardResult, FrameParams, FrameResult, GardenFeature,
    GardenLayoutEngine, GardenPlacement, PropertyBuilder, PropertyParams, PropertyResult,
    PropertySlot, RoadEdge, RoadShape,
};
pub use building::{BuildResult, HotelBuilder, Metadata};
pub use complexes::{ComplexBuilder, ComplexResult, HotelPreset, PresetRegistry};
pub use validation::{validate_solid, ValidationReport};
