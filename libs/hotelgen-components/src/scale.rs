//! # Scale Context
//!
//! Scale-aware feature dimensions for architectural components.
//!
//! `ScaleContext` computes proportional dimensions from building parameters,
//! replacing hardcoded absolute values that only look correct at one
//! physical scale. Styles construct one at the top of `generate` and use its
//! accessors instead of magic numbers; the same style then reads plausibly
//! at Monopoly-piece scale and at larger hotel-model scale.
//!
//! Every accessor follows the pattern
//! `clamp(proportional_formula, profile_minimum, proportional_upper_bound)`,
//! which makes each dimension monotonically non-decreasing in floor height
//! and never below the printer's minimum-feature constraint.

use hotelgen_core::ManufacturingProfile;

/// Reference floor height of the original Monopoly-scale pieces (mm).
const REF_FLOOR_HEIGHT: f64 = 0.8;

/// Clamps with the lower bound winning when the bounds cross.
fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.min(high).max(low)
}

/// Derived feature dimensions for one building.
///
/// Created fresh per generation call; parameters vary per request so nothing
/// here is cached across calls.
#[derive(Debug, Clone)]
pub struct ScaleContext {
    width: f64,
    depth: f64,
    floor_height: f64,
    #[allow(dead_code)]
    num_floors: u32,
    profile: ManufacturingProfile,
}

impl ScaleContext {
    pub fn new(
        width: f64,
        depth: f64,
        floor_height: f64,
        num_floors: u32,
        profile: &ManufacturingProfile,
    ) -> Self {
        Self {
            width,
            depth,
            floor_height,
            num_floors,
            profile: profile.clone(),
        }
    }

    /// Overall scale factor relative to the Monopoly reference.
    pub fn scale_factor(&self) -> f64 {
        self.floor_height / REF_FLOOR_HEIGHT
    }

    // --- Window dimensions ---

    pub fn window_width(&self) -> f64 {
        clamp(
            self.floor_height * 0.5,
            self.profile.min_feature_size,
            self.floor_height * 0.7,
        )
    }

    pub fn window_height(&self) -> f64 {
        clamp(
            self.floor_height * 0.65,
            self.profile.min_feature_size,
            self.floor_height * 0.85,
        )
    }

    /// Window count for a wall of the given width.
    ///
    /// One window plus a gap on each side packs into 2.5 window widths;
    /// every facade gets at least two.
    pub fn windows_per_floor(&self, wall_width: f64) -> u32 {
        let spacing = self.window_width() * 2.5;
        ((wall_width / spacing) as u32).max(2)
    }

    // --- Door dimensions ---

    pub fn door_width(&self) -> f64 {
        clamp(
            self.floor_height,
            self.profile.min_feature_size * 2.0,
            self.width * 0.2,
        )
    }

    pub fn door_height(&self) -> f64 {
        self.floor_height * 0.85
    }

    // --- Roof and parapet ---

    pub fn roof_overhang(&self) -> f64 {
        clamp(self.width * 0.03, 0.1, self.width * 0.08)
    }

    pub fn parapet_height(&self) -> f64 {
        clamp(self.floor_height * 0.35, 0.15, self.floor_height * 0.6)
    }

    pub fn parapet_wall_thickness(&self) -> f64 {
        (self.floor_height * 0.15).max(self.profile.min_wall_thickness)
    }

    pub fn roof_slab_thickness(&self) -> f64 {
        clamp(self.floor_height * 0.2, 0.1, self.floor_height * 0.4)
    }

    // --- Structural elements ---

    pub fn column_width(&self) -> f64 {
        (self.floor_height * 0.3).max(self.profile.min_column_width)
    }

    pub fn wall_thickness(&self) -> f64 {
        (self.floor_height * 0.15).max(self.profile.min_wall_thickness)
    }

    // --- Decorative elements ---

    pub fn cornice_height(&self) -> f64 {
        clamp(
            self.floor_height * 0.15,
            self.profile.min_emboss_height,
            self.floor_height * 0.3,
        )
    }

    pub fn entablature_height(&self) -> f64 {
        self.floor_height * 0.3
    }

    pub fn fin_thickness(&self) -> f64 {
        (self.floor_height * 0.15).max(self.profile.min_feature_size)
    }

    pub fn fin_depth(&self) -> f64 {
        clamp(self.floor_height * 0.1, 0.1, self.floor_height * 0.2)
    }

    /// Ziggurat setback per tier.
    pub fn setback(&self) -> f64 {
        clamp(self.width * 0.08, 0.3, self.width * 0.12)
    }

    // --- Protrusions ---

    pub fn bay_depth(&self) -> f64 {
        clamp(self.depth * 0.08, 0.3, self.depth * 0.15)
    }

    pub fn stoop_step_height(&self) -> f64 {
        clamp(self.floor_height * 0.08, 0.2, self.floor_height * 0.15)
    }

    pub fn stoop_step_depth(&self) -> f64 {
        clamp(self.floor_height * 0.1, 0.2, self.floor_height * 0.2)
    }

    pub fn eave_overhang(&self) -> f64 {
        clamp(self.width * 0.06, 0.3, self.width * 0.12)
    }

    pub fn loggia_depth(&self) -> f64 {
        clamp(self.depth * 0.06, 0.2, self.depth * 0.12)
    }

    pub fn mansard_inset(&self) -> f64 {
        clamp(self.width * 0.08, 0.3, self.width * 0.15)
    }

    // --- Turret ---

    pub fn turret_radius(&self) -> f64 {
        (self.width * 0.12).max(self.profile.min_column_diameter)
    }
}
