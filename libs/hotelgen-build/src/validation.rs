//! Post-generation validation checks.
//!
//! The strict quality gate: unlike the builders, which trust the kernel's
//! closure invariant, this path measures the mesh directly.

use config::constants::{EPSILON, MAX_PRINT_SIZE, MAX_TRIANGLES};
use hotelgen_solid::Solid;

/// Smallest meaningful triangle count (a closed tetrahedron).
const MIN_TRIANGLES: usize = 4;

/// Minimum printable extent required in at least two axes (mm).
const MIN_EXTENT: f64 = 5.0;

/// Base slabs may dip this far below Z=0 (mm).
const BASE_ALLOWANCE: f64 = 2.0;

/// Results of the validation checklist.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_watertight: bool,
    pub volume: f64,
    pub positive_volume: bool,
    pub base_at_z0: bool,
    pub reasonable_size: bool,
    pub not_too_small: bool,
    pub triangle_count: usize,
    pub triangle_count_ok: bool,
    pub no_degenerate_triangles: bool,
    /// Overall pass over the critical subset
    pub pass: bool,
}

/// Runs the validation checklist on a generated solid.
pub fn validate_solid(solid: &Solid) -> ValidationReport {
    let mesh = solid.to_mesh();

    let is_watertight = mesh.is_watertight();
    let volume = mesh.volume();
    let positive_volume = volume > 0.0;

    let (min, max) = mesh.bounding_box();
    let size = max - min;

    let base_at_z0 = min.z >= -BASE_ALLOWANCE - EPSILON;
    let reasonable_size =
        size.x <= MAX_PRINT_SIZE && size.y <= MAX_PRINT_SIZE && size.z <= MAX_PRINT_SIZE;
    let large_axes = [size.x, size.y, size.z]
        .iter()
        .filter(|&&s| s >= MIN_EXTENT)
        .count();
    let not_too_small = large_axes >= 2;

    let triangle_count = mesh.triangle_count();
    let triangle_count_ok = (MIN_TRIANGLES..=MAX_TRIANGLES).contains(&triangle_count);
    let no_degenerate_triangles = mesh.validate();

    let pass = is_watertight && positive_volume && reasonable_size && triangle_count_ok;

    ValidationReport {
        is_watertight,
        volume,
        positive_volume,
        base_at_z0,
        reasonable_size,
        not_too_small,
        triangle_count,
        triangle_count_ok,
        no_degenerate_triangles,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelgen_solid::primitives::cuboid;
    use hotelgen_solid::translate;

    #[test]
    fn test_simple_box_passes() {
        let solid = cuboid(20.0, 15.0, 10.0).unwrap();
        let report = validate_solid(&solid);
        assert!(report.pass);
        assert!(report.is_watertight);
        assert!(report.positive_volume);
        assert!(report.base_at_z0);
        assert!(report.no_degenerate_triangles);
    }

    #[test]
    fn test_oversized_solid_fails_size_check() {
        let solid = cuboid(150.0, 20.0, 10.0).unwrap();
        let report = validate_solid(&solid);
        assert!(!report.reasonable_size);
        assert!(!report.pass);
    }

    #[test]
    fn test_tiny_sliver_flagged_small() {
        let solid = cuboid(2.0, 2.0, 40.0).unwrap();
        let report = validate_solid(&solid);
        assert!(!report.not_too_small);
    }

    #[test]
    fn test_sunken_solid_fails_base_check() {
        let solid = translate(&cuboid(20.0, 20.0, 10.0).unwrap(), 0.0, 0.0, -8.0);
        let report = validate_solid(&solid);
        assert!(!report.base_at_z0);
    }

    #[test]
    fn test_empty_solid_fails() {
        let report = validate_solid(&Solid::empty());
        assert!(!report.pass);
        assert!(!report.is_watertight);
        assert!(!report.triangle_count_ok);
    }
}
