//! Landscape components for garden/leisure areas.
//!
//! Trees, hedges, swimming pools, paths, and terraces that can be placed on
//! property base plates. All geometry follows the standard conventions:
//! centered on X/Y, base at Z=0.
//!
//! Pools are the one two-part component: they return a `(rim, recess)` pair
//! where the recess must be subtracted from the base plate *before* the rim
//! is unioned on. The caller owns that ordering.

use config::constants::{BOOLEAN_EMBED, BOOLEAN_OVERSHOOT};
use glam::DVec2;
use hotelgen_solid::primitives::{cone, cuboid, cylinder};
use hotelgen_solid::{
    difference, rotate_z, scale_xyz, translate, union_all, GeometryError, Solid,
};
use rand::rngs::StdRng;
use rand::Rng;

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// Deciduous tree: cylindrical trunk + oblate spherical canopy.
///
/// The rng, when given, jitters height and canopy radius slightly so groves
/// don't read as copy-pasted.
pub fn deciduous_tree(
    height: f64,
    canopy_radius: f64,
    trunk_radius: f64,
    rng: Option<&mut StdRng>,
) -> Result<Solid, GeometryError> {
    let (height, canopy_radius) = jitter(height, canopy_radius, rng);

    let trunk_height = height * 0.45;
    let trunk = cylinder(trunk_radius, trunk_height, 8)?;

    // Oblate "sphere": a short wide cylinder squashed in Z. More robust at
    // small radii than a revolved profile.
    let canopy = cylinder(canopy_radius, canopy_radius * 2.0, 12)?;
    let canopy = scale_xyz(&canopy, 1.0, 1.0, 0.7);
    let canopy = translate(&canopy, 0.0, 0.0, trunk_height - BOOLEAN_EMBED);

    Ok(union_all(&[trunk, canopy]))
}

/// Conifer tree: cylindrical trunk + cone canopy.
pub fn conifer_tree(
    height: f64,
    canopy_radius: f64,
    trunk_radius: f64,
    rng: Option<&mut StdRng>,
) -> Result<Solid, GeometryError> {
    let (height, canopy_radius) = jitter(height, canopy_radius, rng);

    let trunk_height = height * 0.3;
    let canopy_height = height - trunk_height + BOOLEAN_EMBED;

    let trunk = cylinder(trunk_radius, trunk_height, 8)?;
    let canopy = cone(canopy_radius, 0.0, canopy_height, 12)?;
    let canopy = translate(&canopy, 0.0, 0.0, trunk_height - BOOLEAN_EMBED);

    Ok(union_all(&[trunk, canopy]))
}

/// Palm tree: tall tapered trunk with a flared parasol canopy.
pub fn palm_tree(
    height: f64,
    trunk_radius: f64,
    canopy_radius: f64,
    rng: Option<&mut StdRng>,
) -> Result<Solid, GeometryError> {
    let (height, canopy_radius) = match rng {
        Some(rng) => (
            height * rng.random_range(0.9..1.1),
            canopy_radius * rng.random_range(0.9..1.1),
        ),
        None => (height, canopy_radius),
    };

    let trunk_height = height * 0.75;
    let canopy_height = height - trunk_height + BOOLEAN_EMBED;

    let trunk = cone(trunk_radius, trunk_radius * 0.7, trunk_height, 8)?;
    // Inverted cone reads as drooping fronds at miniature scale.
    let canopy = cone(canopy_radius, trunk_radius * 0.5, canopy_height, 10)?;
    let canopy = translate(&canopy, 0.0, 0.0, trunk_height - BOOLEAN_EMBED);

    Ok(union_all(&[trunk, canopy]))
}

fn jitter(height: f64, canopy_radius: f64, rng: Option<&mut StdRng>) -> (f64, f64) {
    match rng {
        Some(rng) => (
            height * rng.random_range(0.85..1.15),
            canopy_radius * rng.random_range(0.9..1.1),
        ),
        None => (height, canopy_radius),
    }
}

// ---------------------------------------------------------------------------
// Hedges
// ---------------------------------------------------------------------------

/// Hedge row: elongated box aligned along X, centered on X/Y, base at Z=0.
pub fn hedge_row(length: f64, height: f64, width: f64) -> Result<Solid, GeometryError> {
    cuboid(length, width, height)
}

// ---------------------------------------------------------------------------
// Swimming pools
// ---------------------------------------------------------------------------

/// Pool footprint shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolShape {
    Rectangular,
    Kidney,
    LShaped,
}

impl PoolShape {
    pub fn parse(name: &str) -> Result<Self, GeometryError> {
        match name {
            "rectangular" => Ok(Self::Rectangular),
            "kidney" => Ok(Self::Kidney),
            "l_shaped" => Ok(Self::LShaped),
            other => Err(GeometryError::unsupported(format!(
                "Unknown pool shape: {other}"
            ))),
        }
    }
}

/// Swimming pool: returns `(rim, recess)`.
///
/// The rim is unioned onto the base plate surface; the recess is subtracted
/// from the plate to create the pool depression. Both are centered on X/Y
/// with the plate surface at Z=0.
pub fn swimming_pool(
    width: f64,
    depth: f64,
    pool_depth: f64,
    rim_width: f64,
    rim_height: f64,
    shape: PoolShape,
) -> Result<(Solid, Solid), GeometryError> {
    match shape {
        PoolShape::Rectangular => rectangular_pool(width, depth, pool_depth, rim_width, rim_height),
        PoolShape::Kidney => kidney_pool(width, depth, pool_depth, rim_width, rim_height),
        PoolShape::LShaped => l_shaped_pool(width, depth, pool_depth, rim_width, rim_height),
    }
}

fn rectangular_pool(
    width: f64,
    depth: f64,
    pool_depth: f64,
    rim_width: f64,
    rim_height: f64,
) -> Result<(Solid, Solid), GeometryError> {
    let recess = cuboid(width, depth, pool_depth + BOOLEAN_OVERSHOOT)?;
    let recess = translate(&recess, 0.0, 0.0, -pool_depth);

    let rim_outer = cuboid(width + 2.0 * rim_width, depth + 2.0 * rim_width, rim_height)?;
    let rim_cut = cuboid(width, depth, rim_height + 2.0 * BOOLEAN_OVERSHOOT)?;
    let rim_cut = translate(&rim_cut, 0.0, 0.0, -BOOLEAN_OVERSHOOT);
    let rim = difference(&rim_outer, &rim_cut);

    Ok((rim, recess))
}

fn kidney_pool(
    width: f64,
    depth: f64,
    pool_depth: f64,
    rim_width: f64,
    rim_height: f64,
) -> Result<(Solid, Solid), GeometryError> {
    // Two overlapping circles of different sizes.
    let r_large = width.min(depth) * 0.4;
    let r_small = r_large * 0.7;
    let offset = r_large * 0.5;
    let (large_x, small_x, small_y) = (-offset * 0.3, offset * 0.7, offset * 0.3);

    let c1 = cylinder(r_large, pool_depth + BOOLEAN_OVERSHOOT, 16)?;
    let c1 = translate(&c1, large_x, 0.0, -pool_depth);
    let c2 = cylinder(r_small, pool_depth + BOOLEAN_OVERSHOOT, 16)?;
    let c2 = translate(&c2, small_x, small_y, -pool_depth);
    let recess = union_all(&[c1, c2]);

    let c1_rim = translate(&cylinder(r_large + rim_width, rim_height, 16)?, large_x, 0.0, 0.0);
    let c2_rim = translate(
        &cylinder(r_small + rim_width, rim_height, 16)?,
        small_x,
        small_y,
        0.0,
    );
    let rim_outer = union_all(&[c1_rim, c2_rim]);

    let c1_cut = translate(
        &cylinder(r_large, rim_height + 2.0 * BOOLEAN_OVERSHOOT, 16)?,
        large_x,
        0.0,
        -BOOLEAN_OVERSHOOT,
    );
    let c2_cut = translate(
        &cylinder(r_small, rim_height + 2.0 * BOOLEAN_OVERSHOOT, 16)?,
        small_x,
        small_y,
        -BOOLEAN_OVERSHOOT,
    );
    let rim_cut = union_all(&[c1_cut, c2_cut]);

    Ok((difference(&rim_outer, &rim_cut), recess))
}

fn l_shaped_pool(
    width: f64,
    depth: f64,
    pool_depth: f64,
    rim_width: f64,
    rim_height: f64,
) -> Result<(Solid, Solid), GeometryError> {
    // Two overlapping rectangles: full-width arm + full-depth arm.
    let (w1, d1) = (width, depth * 0.5);
    let (w2, d2) = (width * 0.5, depth);

    let r1 = translate(
        &cuboid(w1, d1, pool_depth + BOOLEAN_OVERSHOOT)?,
        0.0,
        -depth * 0.25,
        -pool_depth,
    );
    let r2 = translate(
        &cuboid(w2, d2, pool_depth + BOOLEAN_OVERSHOOT)?,
        -width * 0.25,
        0.0,
        -pool_depth,
    );
    let recess = union_all(&[r1, r2]);

    let r1_outer = translate(
        &cuboid(w1 + 2.0 * rim_width, d1 + 2.0 * rim_width, rim_height)?,
        0.0,
        -depth * 0.25,
        0.0,
    );
    let r2_outer = translate(
        &cuboid(w2 + 2.0 * rim_width, d2 + 2.0 * rim_width, rim_height)?,
        -width * 0.25,
        0.0,
        0.0,
    );
    let rim_outer = union_all(&[r1_outer, r2_outer]);

    let r1_cut = translate(
        &cuboid(w1, d1, rim_height + 2.0 * BOOLEAN_OVERSHOOT)?,
        0.0,
        -depth * 0.25,
        -BOOLEAN_OVERSHOOT,
    );
    let r2_cut = translate(
        &cuboid(w2, d2, rim_height + 2.0 * BOOLEAN_OVERSHOOT)?,
        -width * 0.25,
        0.0,
        -BOOLEAN_OVERSHOOT,
    );
    let rim_cut = union_all(&[r1_cut, r2_cut]);

    Ok((difference(&rim_outer, &rim_cut), recess))
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// Garden path: slightly raised strip connecting waypoints.
///
/// Built as a union of box segments, one per consecutive waypoint pair, each
/// rotated into the segment direction. Segments overlap by `BOOLEAN_EMBED`
/// so corners stay closed.
pub fn garden_path(points: &[DVec2], width: f64, height: f64) -> Result<Solid, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::degenerate("Path needs at least 2 points"));
    }

    let mut segments = Vec::new();
    for pair in points.windows(2) {
        let delta = pair[1] - pair[0];
        let length = delta.length();
        if length < 0.01 {
            continue;
        }
        let angle = delta.y.atan2(delta.x).to_degrees();
        let mid = (pair[0] + pair[1]) / 2.0;

        let seg = cuboid(length + BOOLEAN_EMBED, width, height)?;
        let seg = rotate_z(&seg, angle);
        segments.push(translate(&seg, mid.x, mid.y, 0.0));
    }

    if segments.is_empty() {
        return Err(GeometryError::degenerate("Path produced no valid segments"));
    }
    Ok(union_all(&segments))
}

// ---------------------------------------------------------------------------
// Terraces
// ---------------------------------------------------------------------------

/// Flat raised platform, e.g. a patio or entrance plaza.
pub fn terrace(width: f64, depth: f64, height: f64) -> Result<Solid, GeometryError> {
    cuboid(width, depth, height)
}
