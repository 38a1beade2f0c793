//! Shared facade plumbing for the style implementations.

use hotelgen_components::facade::{window_grid_cutouts, WindowGrid};
use hotelgen_solid::{rotate_z, translate, GeometryError, Solid};

use hotelgen_core::StyleParams;

/// Window cutouts for the front (-Y) and back (+Y) facades.
pub(crate) fn front_back_cutouts(
    grid: &WindowGrid,
    half_depth: f64,
) -> Result<Vec<Solid>, GeometryError> {
    let mut cuts = Vec::new();
    for y_sign in [-1.0, 1.0] {
        for c in window_grid_cutouts(grid)? {
            cuts.push(translate(&c, 0.0, y_sign * half_depth, 0.0));
        }
    }
    Ok(cuts)
}

/// Window cutouts for the left (-X) and right (+X) facades.
pub(crate) fn side_cutouts(
    grid: &WindowGrid,
    half_width: f64,
) -> Result<Vec<Solid>, GeometryError> {
    let mut cuts = Vec::new();
    for x_sign in [-1.0, 1.0] {
        for c in window_grid_cutouts(grid)? {
            cuts.push(translate(&rotate_z(&c, 90.0), x_sign * half_width, 0.0, 0.0));
        }
    }
    Ok(cuts)
}

/// Reads a boolean style parameter with a default.
pub(crate) fn bool_param(params: &StyleParams, key: &str, default: bool) -> bool {
    params.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

/// Merges defaults under the caller's values.
pub(crate) fn with_defaults(
    params: &StyleParams,
    defaults: &[(&str, serde_json::Value)],
) -> StyleParams {
    let mut merged = StyleParams::new();
    for (key, value) in defaults {
        merged.insert((*key).to_string(), value.clone());
    }
    for (key, value) in params {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
