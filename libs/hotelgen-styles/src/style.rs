//! # Style Interface and Shared Assembly
//!
//! Eight styles implement one trait; they share no state, only this
//! contract, and are dispatched through [`crate::StyleRegistry`]. The
//! three-phase assembly protocol is one ordinary function, not a builder
//! hierarchy.

use hotelgen_core::{BuildingParams, GenError, ManufacturingProfile, StyleParams};
use hotelgen_solid::{difference_all, union_all, GeometryError, Solid};

use crate::theme::GardenTheme;

/// An architectural style: a deterministic function from parameters and a
/// manufacturing profile to a single assembled solid.
pub trait HotelStyle {
    /// Machine name (e.g. "modern").
    fn name(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// Short description for listing surfaces.
    fn description(&self) -> &'static str;

    /// Generates the building geometry.
    ///
    /// Must be a pure function of `(params, profile)`: identical inputs
    /// (including `params.seed`) reproduce identical proportions.
    fn generate(
        &self,
        params: &BuildingParams,
        profile: &ManufacturingProfile,
    ) -> Result<Solid, GenError>;

    /// JSON Schema describing the style-specific parameters.
    fn style_params_schema(&self) -> serde_json::Value {
        serde_json::json!({})
    }

    /// Validates and completes style-specific parameters.
    ///
    /// The default passes the map through unchanged; styles with parameters
    /// merge defaults and reject bad enum values with `InvalidParams`.
    fn validate_style_params(&self, params: &StyleParams) -> Result<StyleParams, GenError> {
        Ok(params.clone())
    }

    /// Layout strategy this style prefers for multi-building complexes.
    fn preferred_layout_strategy(&self) -> &'static str {
        "row"
    }

    /// Garden aesthetics for this style's grounds.
    fn garden_theme(&self) -> GardenTheme {
        GardenTheme::default()
    }
}

/// Shared three-phase CSG assembly.
///
/// 1. shell − union(cutouts)   (windows, doors)
/// 2. + union(additions)       (roof, columns, balconies)
/// 3. − union(cleanup_cuts)    (final trims)
///
/// An empty intermediate after any phase raises immediately; an empty or
/// invalid solid must never travel further down the pipeline.
pub fn assemble_building(
    shell: Solid,
    cutouts: &[Solid],
    additions: &[Solid],
    cleanup_cuts: &[Solid],
) -> Result<Solid, GeometryError> {
    if shell.is_empty() {
        return Err(GeometryError::degenerate(
            "shell is empty before assembly",
        ));
    }

    let mut result = shell;

    if !cutouts.is_empty() {
        result = difference_all(&result, cutouts)?;
        if result.is_empty() {
            return Err(GeometryError::empty_result(
                "subtracting cutouts (cutouts may be larger than the shell)",
            ));
        }
    }

    let additions: Vec<Solid> = additions.iter().filter(|a| !a.is_empty()).cloned().collect();
    if !additions.is_empty() {
        let mut parts = Vec::with_capacity(additions.len() + 1);
        parts.push(result);
        parts.extend(additions);
        result = union_all(&parts);
        if result.is_empty() {
            return Err(GeometryError::empty_result("adding features"));
        }
    }

    if !cleanup_cuts.is_empty() {
        result = difference_all(&result, cleanup_cuts)?;
        if result.is_empty() {
            return Err(GeometryError::empty_result("cleanup cuts"));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelgen_solid::primitives::cuboid;
    use hotelgen_solid::translate;

    #[test]
    fn test_assemble_empty_shell_rejected() {
        let result = assemble_building(Solid::empty(), &[], &[], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_assemble_plain_shell_passes_through() {
        let shell = cuboid(10.0, 10.0, 10.0).unwrap();
        let result = assemble_building(shell.clone(), &[], &[], &[]).unwrap();
        assert!((result.volume() - shell.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_cutouts_reduce_volume() {
        let shell = cuboid(10.0, 10.0, 10.0).unwrap();
        let cut = translate(&cuboid(2.0, 12.0, 2.0).unwrap(), 0.0, 0.0, 4.0);
        let result = assemble_building(shell.clone(), &[cut], &[], &[]).unwrap();
        assert!(result.volume() < shell.volume());
    }

    #[test]
    fn test_assemble_oversized_cutout_is_error() {
        let shell = cuboid(5.0, 5.0, 5.0).unwrap();
        let cut = translate(&cuboid(20.0, 20.0, 20.0).unwrap(), 0.0, 0.0, -5.0);
        let result = assemble_building(shell, &[cut], &[], &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_assemble_additions_increase_volume() {
        let shell = cuboid(10.0, 10.0, 10.0).unwrap();
        let crown = translate(&cuboid(4.0, 4.0, 2.0).unwrap(), 0.0, 0.0, 9.9);
        let result = assemble_building(shell.clone(), &[], &[crown], &[]).unwrap();
        assert!(result.volume() > shell.volume());
    }

    #[test]
    fn test_assemble_cleanup_cut_applies_last() {
        let shell = cuboid(10.0, 10.0, 10.0).unwrap();
        let crown = translate(&cuboid(4.0, 4.0, 2.0).unwrap(), 0.0, 0.0, 9.9);
        let trim = translate(&cuboid(12.0, 12.0, 1.0).unwrap(), 0.0, 0.0, 11.5);
        let with_crown = assemble_building(shell.clone(), &[], &[crown.clone()], &[]).unwrap();
        let trimmed = assemble_building(shell, &[], &[crown], &[trim]).unwrap();
        assert!(trimmed.volume() < with_crown.volume());
    }
}
