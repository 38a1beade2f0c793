//! Window cutout and frame components.

use config::constants::BOOLEAN_OVERSHOOT;
use hotelgen_solid::primitives::{cuboid, cylinder};
use hotelgen_solid::{difference, rotate_x, translate, union_all, GeometryError, Solid};

/// Creates a rectangular window cutout that overshoots the wall.
///
/// Centered on X/Y, base at Z=0. The cutout extends `BOOLEAN_OVERSHOOT`
/// past the wall on both sides along Y.
pub fn window_cutout(
    width: f64,
    height: f64,
    wall_thickness: f64,
) -> Result<Solid, GeometryError> {
    cuboid(width, wall_thickness + 2.0 * BOOLEAN_OVERSHOOT, height)
}

/// Creates an arched window cutout (resin profiles only).
///
/// Rectangle with a semicircular top. Centered on X/Y, base at Z=0.
pub fn arched_window_cutout(
    width: f64,
    height: f64,
    wall_thickness: f64,
    segments: u32,
) -> Result<Solid, GeometryError> {
    let depth = wall_thickness + 2.0 * BOOLEAN_OVERSHOOT;
    let mut radius = width / 2.0;

    let mut rect_height = height - radius;
    if rect_height <= 0.0 {
        rect_height = height * 0.5;
        radius = height - rect_height;
    }

    let rect = cuboid(width, depth, rect_height)?;

    // Semicircular arch laid through the wall at the top of the rectangle.
    let arch = cylinder(radius, depth, segments)?;
    let arch = rotate_x(&arch, 90.0);
    let arch = translate(&arch, 0.0, depth / 2.0, rect_height);

    Ok(union_all(&[rect, arch]))
}

/// Creates a window frame sitting on the wall surface.
///
/// A rectangular border around the opening; centered on X with its back
/// face at Y=0, opening base at Z=0.
pub fn window_frame(
    width: f64,
    height: f64,
    frame_width: f64,
    frame_depth: f64,
) -> Result<Solid, GeometryError> {
    let outer = cuboid(
        width + 2.0 * frame_width,
        frame_depth,
        height + 2.0 * frame_width,
    )?;
    let opening = translate(
        &cuboid(width, frame_depth + 0.2, height)?,
        0.0,
        0.0,
        frame_width,
    );

    let frame = difference(&outer, &opening);
    Ok(translate(&frame, 0.0, frame_depth / 2.0, -frame_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_cutout_overshoots_wall() {
        let cut = window_cutout(2.0, 3.0, 0.8).unwrap();
        let (min, max) = cut.bounding_box();
        assert!((max.y - min.y) > 0.8);
        assert!(((max.y - min.y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_arched_cutout_taller_than_rect_part() {
        let cut = arched_window_cutout(2.0, 3.0, 0.5, 16).unwrap();
        let (min, max) = cut.bounding_box();
        assert!(min.z.abs() < 1e-9);
        // Rect 2.0 high plus a radius-1.0 arch
        assert!((max.z - 3.0).abs() < 0.05);
    }

    #[test]
    fn test_arched_cutout_narrow_height_falls_back() {
        // height <= width/2 would make the rectangle vanish
        let cut = arched_window_cutout(4.0, 1.5, 0.5, 16).unwrap();
        assert!(!cut.is_empty());
    }

    #[test]
    fn test_window_frame_has_opening() {
        let frame = window_frame(2.0, 3.0, 0.3, 0.2).unwrap();
        let solid_equivalent = 2.6 * 0.2 * 3.6;
        assert!(frame.volume() < solid_equivalent);
        assert!(frame.volume() > 0.0);
        let (min, _) = frame.bounding_box();
        assert!(min.y.abs() < 1e-9);
    }
}
