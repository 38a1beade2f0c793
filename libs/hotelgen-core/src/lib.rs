//! # hotelgen-core
//!
//! Shared foundation for the generation pipeline: the three-category error
//! taxonomy, manufacturing constraint profiles, validated parameter records,
//! and runtime settings.

pub mod error;
pub mod params;
pub mod profile;
pub mod settings;

pub use error::GenError;
pub use params::{
    BuildingParams, BuildingPlacement, ComplexParams, PresetInfo, Role, StyleInfo, StyleParams,
};
pub use profile::ManufacturingProfile;
pub use settings::Settings;
