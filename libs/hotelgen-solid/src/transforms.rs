//! # Transforms
//!
//! Direct transform wrappers with no hidden state. Angles are degrees,
//! matching the rest of the pipeline.
//!
//! Scaling takes the 3-vector form only; there is deliberately no scalar
//! overload. Reflections (mirrors, negative factors) re-orient windings
//! inside [`Solid`] so the result stays a valid solid.

use glam::{DMat4, DVec3};

use crate::solid::Solid;

/// Translates a solid by (x, y, z).
pub fn translate(solid: &Solid, x: f64, y: f64, z: f64) -> Solid {
    solid.transformed(&DMat4::from_translation(DVec3::new(x, y, z)))
}

/// Rotates a solid around the X axis.
pub fn rotate_x(solid: &Solid, degrees: f64) -> Solid {
    solid.transformed(&DMat4::from_rotation_x(degrees.to_radians()))
}

/// Rotates a solid around the Y axis.
pub fn rotate_y(solid: &Solid, degrees: f64) -> Solid {
    solid.transformed(&DMat4::from_rotation_y(degrees.to_radians()))
}

/// Rotates a solid around the Z axis.
pub fn rotate_z(solid: &Solid, degrees: f64) -> Solid {
    solid.transformed(&DMat4::from_rotation_z(degrees.to_radians()))
}

/// Mirrors a solid across the YZ plane (flips X).
pub fn mirror_x(solid: &Solid) -> Solid {
    scale_xyz(solid, -1.0, 1.0, 1.0)
}

/// Mirrors a solid across the XZ plane (flips Y).
pub fn mirror_y(solid: &Solid) -> Solid {
    scale_xyz(solid, 1.0, -1.0, 1.0)
}

/// Scales a solid by independent per-axis factors.
pub fn scale_xyz(solid: &Solid, sx: f64, sy: f64, sz: f64) -> Solid {
    solid.transformed(&DMat4::from_scale(DVec3::new(sx, sy, sz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cuboid, cylinder};
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_moves_bounding_box() {
        let solid = cuboid(2.0, 2.0, 2.0).unwrap();
        let moved = translate(&solid, 10.0, -5.0, 3.0);
        let (min, max) = moved.bounding_box();
        assert!((min.x - 9.0).abs() < 1e-9);
        assert!((max.y + 4.0).abs() < 1e-9);
        assert!((min.z - 3.0).abs() < 1e-9);
        assert!((moved.volume() - solid.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_z_90_swaps_extents() {
        let solid = cuboid(4.0, 2.0, 1.0).unwrap();
        let rotated = rotate_z(&solid, 90.0);
        let (min, max) = rotated.bounding_box();
        assert!((max.x - min.x - 2.0).abs() < 1e-6);
        assert!((max.y - min.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_x_turns_cylinder_along_y() {
        let solid = cylinder(1.0, 6.0, 16).unwrap();
        let rotated = rotate_x(&solid, 90.0);
        let (min, max) = rotated.bounding_box();
        // Axis now runs along -Y
        assert!((max.y - min.y - 6.0).abs() < 1e-6);
        assert!((rotated.volume() - solid.volume()).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_y_preserves_volume() {
        let solid = cuboid(1.0, 2.0, 3.0).unwrap();
        let rotated = rotate_y(&solid, 37.0);
        assert_relative_eq!(rotated.volume(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mirror_preserves_volume_sign() {
        let solid = cuboid(3.0, 2.0, 1.0).unwrap();
        assert!((mirror_x(&solid).volume() - 6.0).abs() < 1e-9);
        assert!((mirror_y(&solid).volume() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_xyz_scales_volume() {
        let solid = cuboid(1.0, 1.0, 1.0).unwrap();
        let scaled = scale_xyz(&solid, 2.0, 3.0, 4.0);
        assert_relative_eq!(scaled.volume(), 24.0, epsilon = 1e-9);
    }
}
