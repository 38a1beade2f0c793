//! Roof generators: flat, gabled, hipped, mansard, barrel, pagoda, onion dome.

use std::f64::consts::PI;

use glam::DVec2;
use hotelgen_solid::primitives::{cone, cuboid, cylinder, extrude_polygon, revolve_profile};
use hotelgen_solid::{
    difference, intersection, rotate_x, rotate_z, scale_xyz, translate, union_all, GeometryError,
    Solid,
};

/// Flat roof with optional parapet. Base at Z=0.
///
/// # Arguments
///
/// * `width` / `depth` - Roof footprint (mm)
/// * `parapet_height` - Parapet wall height above the slab; 0 disables it
/// * `slab_thickness` - Roof slab thickness (mm)
/// * `parapet_wall_thickness` - None derives it from the width
pub fn flat_roof(
    width: f64,
    depth: f64,
    parapet_height: f64,
    slab_thickness: f64,
    parapet_wall_thickness: Option<f64>,
) -> Result<Solid, GeometryError> {
    let slab = cuboid(width, depth, slab_thickness)?;

    if parapet_height <= 0.0 {
        return Ok(slab);
    }

    let pw = parapet_wall_thickness.unwrap_or((width * 0.02).max(0.3));
    let wall_h = parapet_height + slab_thickness;

    let front = translate(&cuboid(width, pw, wall_h)?, 0.0, -depth / 2.0 + pw / 2.0, 0.0);
    let back = translate(&cuboid(width, pw, wall_h)?, 0.0, depth / 2.0 - pw / 2.0, 0.0);
    let left = translate(&cuboid(pw, depth, wall_h)?, -width / 2.0 + pw / 2.0, 0.0, 0.0);
    let right = translate(&cuboid(pw, depth, wall_h)?, width / 2.0 - pw / 2.0, 0.0, 0.0);

    Ok(union_all(&[slab, front, back, left, right]))
}

/// Gabled (triangular prism) roof. Base at Z=0, ridge along Y.
pub fn gabled_roof(width: f64, depth: f64, peak_height: f64) -> Result<Solid, GeometryError> {
    let half_w = width / 2.0;
    let profile = [
        DVec2::new(-half_w, 0.0),
        DVec2::new(half_w, 0.0),
        DVec2::new(0.0, peak_height),
    ];
    // Extrude along Z, then stand the prism up so the ridge runs along Y.
    let prism = extrude_polygon(&profile, depth)?;
    let prism = rotate_x(&prism, 90.0);
    Ok(translate(&prism, 0.0, depth / 2.0, 0.0))
}

/// Hipped roof (all four sides slope inward). Base at Z=0.
///
/// Built as the intersection of two oversized perpendicular gables, not a
/// native hip primitive. Falls back to a plain gable if the intersection
/// comes back empty.
pub fn hipped_roof(width: f64, depth: f64, peak_height: f64) -> Result<Solid, GeometryError> {
    let gable_y = gabled_roof(width, depth + width * 2.0, peak_height)?;
    let gable_x = rotate_z(&gabled_roof(depth, width + depth * 2.0, peak_height)?, 90.0);

    let result = intersection(&gable_y, &gable_x);
    if result.is_empty() {
        return gabled_roof(width, depth, peak_height);
    }
    Ok(result)
}

/// Mansard roof (steep lower slope + shallow upper section). Base at Z=0.
pub fn mansard_roof(
    width: f64,
    depth: f64,
    lower_height: f64,
    upper_height: f64,
    inset: f64,
) -> Result<Solid, GeometryError> {
    // Steep lower portion: a tall hip clipped at lower_height.
    let hip = hipped_roof(width, depth, lower_height + upper_height + 1.0)?;
    let clip = cuboid(width + 1.0, depth + 1.0, lower_height)?;
    let lower = intersection(&hip, &clip);

    let upper_w = width - 2.0 * inset;
    let upper_d = depth - 2.0 * inset;
    if upper_w <= 0.0 || upper_d <= 0.0 {
        return Err(GeometryError::degenerate(format!(
            "mansard inset {inset} consumes the whole footprint {width}x{depth}"
        )));
    }
    let upper = translate(&cuboid(upper_w, upper_d, upper_height)?, 0.0, 0.0, lower_height);

    Ok(union_all(&[lower, upper]))
}

/// Barrel (half-cylinder) roof. Base at Z=0, curve running along Y.
///
/// `height` is the peak rise; when it differs from the half-width the
/// barrel is scaled vertically to match.
pub fn barrel_roof(
    width: f64,
    depth: f64,
    height: f64,
    segments: u32,
) -> Result<Solid, GeometryError> {
    let radius = width / 2.0;
    let cyl = cylinder(radius, depth, segments)?;
    // Axis along Z by default; lay it down along Y.
    let cyl = rotate_x(&cyl, 90.0);
    let cyl = translate(&cyl, 0.0, depth / 2.0, 0.0);

    // Keep only the top half.
    let cutter = translate(
        &cuboid(width + 1.0, depth + 1.0, radius + 1.0)?,
        0.0,
        0.0,
        -(radius + 1.0),
    );
    let mut half = difference(&cyl, &cutter);

    if (height - radius).abs() > 0.01 && radius > 0.0 {
        half = scale_xyz(&half, 1.0, 1.0, height / radius);
    }

    Ok(half)
}

/// Multi-tiered pagoda roof. Base at Z=0.
///
/// Each tier is a hipped roof overshooting the footprint (eave overhang),
/// stacked with 0.65 overlap and separated by thin slabs, topped with a
/// slender cylindrical finial when it clears the minimum printable radius.
pub fn pagoda_roof(
    width: f64,
    depth: f64,
    tier_height: f64,
    num_tiers: u32,
    overhang: Option<f64>,
    tier_shrink: f64,
) -> Result<Solid, GeometryError> {
    let mut ovh = overhang.unwrap_or(width * 0.12);
    let mut parts = Vec::new();
    let mut z = 0.0;
    let (mut tw, mut td) = (width, depth);

    for i in 0..num_tiers {
        let tier = hipped_roof(tw + 2.0 * ovh, td + 2.0 * ovh, tier_height)?;
        parts.push(translate(&tier, 0.0, 0.0, z));

        if i < num_tiers - 1 {
            let slab = cuboid(tw * 0.85, td * 0.85, tier_height * 0.15)?;
            parts.push(translate(&slab, 0.0, 0.0, z + tier_height * 0.6));
        }

        z += tier_height * 0.65;
        tw *= tier_shrink;
        td *= tier_shrink;
        ovh *= tier_shrink;
    }

    let finial_r = tw.min(td) * 0.15;
    if finial_r > 0.2 {
        let finial = cylinder(finial_r, tier_height * 0.8, 12)?;
        parts.push(translate(&finial, 0.0, 0.0, z - tier_height * 0.1));
    }

    Ok(union_all(&parts))
}

/// Onion/bulbous dome. Base at Z=0.
///
/// Revolves a hand-specified profile with three transition zones: a flared
/// neck below t=0.1, an outward bulge via sine easing to t=0.45, then a
/// pointed taper via cosine easing. The curve is an approximate, tunable
/// stand-in for true dome geometry; radius is floored at 0.05mm so the tip
/// never degenerates.
pub fn onion_dome(radius: f64, height: f64, segments: u32) -> Result<Solid, GeometryError> {
    if radius <= 0.0 {
        return Err(GeometryError::NonPositive {
            name: "radius",
            value: radius,
        });
    }
    if height <= 0.0 {
        return Err(GeometryError::NonPositive {
            name: "height",
            value: height,
        });
    }

    const PROFILE_POINTS: usize = 20;
    let mut profile = Vec::with_capacity(PROFILE_POINTS + 1);
    for i in 0..=PROFILE_POINTS {
        let t = i as f64 / PROFILE_POINTS as f64;
        let z = t * height;
        let r = if t < 0.1 {
            radius * 0.65 * (t / 0.1)
        } else if t < 0.45 {
            let frac = (t - 0.1) / 0.35;
            radius * (0.65 + 0.35 * (frac * PI / 2.0).sin())
        } else {
            let frac = (t - 0.45) / 0.55;
            radius * (frac * PI / 2.0).cos()
        };
        profile.push(DVec2::new(r.max(0.05), z));
    }

    revolve_profile(&profile, segments, 360.0)
}
