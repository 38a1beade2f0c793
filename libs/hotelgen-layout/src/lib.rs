//! # hotelgen-layout
//!
//! Placement strategies for multi-building complexes: six layout shapes,
//! role-based sizing, rotation-aware overlap detection, and the engine that
//! dispatches and validates them.

pub mod engine;
pub mod placement;
pub mod strategies;

pub use engine::LayoutEngine;
pub use placement::{
    any_overlaps, compute_lot_bounds, footprints_fit_lot, footprints_overlap, placement_footprint,
    Footprint,
};
pub use strategies::{strategy_by_name, RoleSize, SizeHints, StrategyInput, STRATEGY_NAMES};
