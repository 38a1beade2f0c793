//! # Config Crate
//!
//! Centralized configuration constants for the hotel-model generation
//! pipeline. All magic numbers and tunable parameters are defined here to
//! ensure consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BOOLEAN_OVERSHOOT, EPSILON};
//!
//! // Cutouts overshoot the surface they pierce
//! let wall_thickness = 0.8;
//! let cutout_depth = wall_thickness + 2.0 * BOOLEAN_OVERSHOOT;
//! assert!(cutout_depth > wall_thickness + EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No dependencies**: pure constants, usable from every crate

pub mod constants;
