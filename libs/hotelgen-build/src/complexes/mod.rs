//! Complex-level generation: shared plates, presets, and the builder.

pub mod base_plate;
pub mod builder;
pub mod presets;

pub use builder::{ComplexBuilder, ComplexResult};
pub use presets::{HotelPreset, PresetRegistry};
