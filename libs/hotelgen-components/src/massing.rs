//! Floor-plan massing shapes for the different architectural styles.

use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{translate, union_all, GeometryError, Solid};

/// Simple rectangular massing. Base at Z=0.
pub fn rect_mass(width: f64, depth: f64, height: f64) -> Result<Solid, GeometryError> {
    cuboid(width, depth, height)
}

/// L-shaped plan (main block + perpendicular wing). Base at Z=0.
///
/// The main block is centered; the wing extends from one corner.
pub fn l_shape_mass(
    width: f64,
    depth: f64,
    height: f64,
    wing_width: Option<f64>,
    wing_depth: Option<f64>,
) -> Result<Solid, GeometryError> {
    let ww = wing_width.unwrap_or(width * 0.5);
    let wd = wing_depth.unwrap_or(depth * 0.6);

    let main = cuboid(width, depth, height)?;
    let wing = cuboid(ww, wd, height)?;
    let wing = translate(&wing, (width - ww) / 2.0, (depth + wd) / 2.0 - wd * 0.3, 0.0);
    Ok(union_all(&[main, wing]))
}

/// U-shaped plan (three sides around a courtyard). Base at Z=0.
pub fn u_shape_mass(
    width: f64,
    depth: f64,
    height: f64,
    courtyard_width: Option<f64>,
    courtyard_depth: Option<f64>,
) -> Result<Solid, GeometryError> {
    let cw = courtyard_width.unwrap_or(width * 0.5);
    let cd = courtyard_depth.unwrap_or(depth * 0.5);
    let wall_w = (width - cw) / 2.0;

    // Back wall spans the full width
    let back = cuboid(width, depth - cd, height)?;
    let back = translate(&back, 0.0, cd / 2.0, 0.0);

    let left = cuboid(wall_w, depth, height)?;
    let left = translate(&left, -(width - wall_w) / 2.0, 0.0, 0.0);

    let right = cuboid(wall_w, depth, height)?;
    let right = translate(&right, (width - wall_w) / 2.0, 0.0, 0.0);

    Ok(union_all(&[back, left, right]))
}

/// T-shaped plan (main block with a wider top bar). Base at Z=0.
pub fn t_shape_mass(
    width: f64,
    depth: f64,
    height: f64,
    top_width: Option<f64>,
    top_depth: Option<f64>,
) -> Result<Solid, GeometryError> {
    let tw = top_width.unwrap_or(width * 1.3);
    let td = top_depth.unwrap_or(depth * 0.4);

    let main = cuboid(width, depth, height)?;
    let top = cuboid(tw, td, height)?;
    let top = translate(&top, 0.0, (depth + td) / 2.0 - td * 0.2, 0.0);
    Ok(union_all(&[main, top]))
}

/// Podium + tower massing for skyscrapers. Base at Z=0.
pub fn podium_tower_mass(
    podium_width: f64,
    podium_depth: f64,
    podium_height: f64,
    tower_width: f64,
    tower_depth: f64,
    tower_height: f64,
) -> Result<Solid, GeometryError> {
    let podium = cuboid(podium_width, podium_depth, podium_height)?;
    let tower = cuboid(tower_width, tower_depth, tower_height)?;
    let tower = translate(&tower, 0.0, 0.0, podium_height);
    Ok(union_all(&[podium, tower]))
}

/// Stepped/ziggurat massing. Base at Z=0.
///
/// Each tier shrinks by `setback` on each side; tiers that would go
/// non-positive are simply not built.
pub fn stepped_mass(
    base_width: f64,
    base_depth: f64,
    num_tiers: u32,
    tier_height: f64,
    setback: f64,
) -> Result<Solid, GeometryError> {
    let mut tiers = Vec::new();
    for i in 0..num_tiers {
        let w = base_width - 2.0 * setback * i as f64;
        let d = base_depth - 2.0 * setback * i as f64;
        if w <= 0.0 || d <= 0.0 {
            break;
        }
        let tier = cuboid(w, d, tier_height)?;
        tiers.push(translate(&tier, 0.0, 0.0, i as f64 * tier_height));
    }
    Ok(union_all(&tiers))
}
