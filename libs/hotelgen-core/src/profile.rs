//! # Manufacturing Profiles
//!
//! Printer-class constraint records. Constructed once per build request from
//! a printer-type string and read-only thereafter.

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Constraint profile for a specific printer class.
///
/// All linear dimensions are millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingProfile {
    // Minimum dimensions
    pub min_wall_thickness: f64,
    pub min_feature_size: f64,
    pub min_hole_size: f64,
    pub min_column_diameter: f64,
    pub min_column_width: f64,
    pub min_emboss_width: f64,
    pub min_emboss_height: f64,
    pub min_engrave_width: f64,
    pub min_engrave_depth: f64,

    // Structural limits
    pub max_overhang_angle: f64,
    pub max_bridge_span: f64,
    pub max_aspect_ratio: f64,

    // Base slab
    pub base_thickness: f64,
    pub base_chamfer: f64,

    // Circular tessellation
    pub cylinder_segments_per_mm: u32,
    pub min_cylinder_segments: u32,
    pub max_cylinder_segments: u32,

    // Feature gating
    pub use_window_frames: bool,
    pub use_individual_balusters: bool,
    pub use_arched_windows: bool,
    pub use_dormers: bool,
}

impl Default for ManufacturingProfile {
    fn default() -> Self {
        Self::fdm()
    }
}

impl ManufacturingProfile {
    /// FDM printer profile for hotel-scale pieces (conservative).
    pub fn fdm() -> Self {
        Self {
            min_wall_thickness: 0.8,
            min_feature_size: 0.6,
            min_hole_size: 0.6,
            min_column_diameter: 0.8,
            min_column_width: 0.6,
            min_emboss_width: 0.5,
            min_emboss_height: 0.2,
            min_engrave_width: 0.4,
            min_engrave_depth: 0.2,
            max_overhang_angle: 45.0,
            max_bridge_span: 6.0,
            max_aspect_ratio: 6.0,
            base_thickness: 2.5,
            base_chamfer: 0.5,
            cylinder_segments_per_mm: 8,
            min_cylinder_segments: 8,
            max_cylinder_segments: 48,
            use_window_frames: true,
            use_individual_balusters: false,
            use_arched_windows: false,
            use_dormers: true,
        }
    }

    /// Legacy FDM profile for Monopoly-scale pieces.
    pub fn monopoly_fdm() -> Self {
        Self {
            base_thickness: 1.2,
            base_chamfer: 0.3,
            use_window_frames: false,
            use_dormers: false,
            ..Self::fdm()
        }
    }

    /// Resin printer profile (fine detail).
    pub fn resin() -> Self {
        Self {
            min_wall_thickness: 0.5,
            min_feature_size: 0.2,
            min_hole_size: 0.3,
            min_column_diameter: 0.4,
            min_column_width: 0.4,
            min_emboss_width: 0.2,
            min_emboss_height: 0.1,
            min_engrave_width: 0.2,
            min_engrave_depth: 0.1,
            max_overhang_angle: 55.0,
            max_bridge_span: 999.0,
            max_aspect_ratio: 10.0,
            base_thickness: 2.0,
            base_chamfer: 0.3,
            cylinder_segments_per_mm: 12,
            min_cylinder_segments: 12,
            max_cylinder_segments: 64,
            use_window_frames: true,
            use_individual_balusters: true,
            use_arched_windows: true,
            use_dormers: true,
        }
    }

    /// Resolves a profile from a printer-type string.
    pub fn from_type(printer_type: &str) -> Result<Self, GenError> {
        match printer_type {
            "fdm" => Ok(Self::fdm()),
            "resin" => Ok(Self::resin()),
            other => Err(GenError::invalid_params(format!(
                "Unknown printer type: {other}"
            ))),
        }
    }

    /// Segment count for a circular feature of the given radius.
    pub fn segments_for_radius(&self, radius: f64) -> u32 {
        config::constants::segments_for_radius(
            radius,
            self.cylinder_segments_per_mm,
            self.min_cylinder_segments,
            self.max_cylinder_segments,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_known() {
        assert_eq!(ManufacturingProfile::from_type("fdm").unwrap(), ManufacturingProfile::fdm());
        assert_eq!(
            ManufacturingProfile::from_type("resin").unwrap(),
            ManufacturingProfile::resin()
        );
    }

    #[test]
    fn test_from_type_unknown_is_invalid_params() {
        let err = ManufacturingProfile::from_type("sls").unwrap_err();
        assert!(matches!(err, GenError::InvalidParams(_)));
        assert!(err.to_string().contains("sls"));
    }

    #[test]
    fn test_resin_is_finer_than_fdm() {
        let fdm = ManufacturingProfile::fdm();
        let resin = ManufacturingProfile::resin();
        assert!(resin.min_wall_thickness < fdm.min_wall_thickness);
        assert!(resin.min_feature_size < fdm.min_feature_size);
        assert!(resin.max_cylinder_segments > fdm.max_cylinder_segments);
        assert!(resin.use_arched_windows && !fdm.use_arched_windows);
    }

    #[test]
    fn test_monopoly_profile_thinner_base() {
        let monopoly = ManufacturingProfile::monopoly_fdm();
        assert!(monopoly.base_thickness < ManufacturingProfile::fdm().base_thickness);
        assert!(!monopoly.use_window_frames);
    }

    #[test]
    fn test_segments_for_radius_bounds() {
        let fdm = ManufacturingProfile::fdm();
        assert_eq!(fdm.segments_for_radius(0.1), 8);
        assert_eq!(fdm.segments_for_radius(100.0), 48);
    }
}
