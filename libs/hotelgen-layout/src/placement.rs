//! Building footprint geometry and overlap detection.

use hotelgen_core::BuildingPlacement;

/// Axis-aligned bounding box of a placed building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Footprint {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }
}

/// Computes the AABB footprint for a placed building.
///
/// 90/270-degree rotations swap width and depth.
pub fn placement_footprint(p: &BuildingPlacement) -> Footprint {
    let rot = p.rotation.rem_euclid(360.0);
    let (half_w, half_d) = if (rot - 90.0).abs() < 1e-9 || (rot - 270.0).abs() < 1e-9 {
        (p.depth / 2.0, p.width / 2.0)
    } else {
        (p.width / 2.0, p.depth / 2.0)
    };
    Footprint {
        min_x: p.x - half_w,
        min_y: p.y - half_d,
        max_x: p.x + half_w,
        max_y: p.y + half_d,
    }
}

/// Checks if two footprints overlap (with optional margin).
pub fn footprints_overlap(a: &Footprint, b: &Footprint, margin: f64) -> bool {
    !(a.max_x + margin <= b.min_x
        || b.max_x + margin <= a.min_x
        || a.max_y + margin <= b.min_y
        || b.max_y + margin <= a.min_y)
}

/// Checks if any placements overlap each other.
pub fn any_overlaps(placements: &[BuildingPlacement], margin: f64) -> bool {
    let footprints: Vec<Footprint> = placements.iter().map(placement_footprint).collect();
    for i in 0..footprints.len() {
        for j in i + 1..footprints.len() {
            if footprints_overlap(&footprints[i], &footprints[j], margin) {
                return true;
            }
        }
    }
    false
}

/// Computes the lot size needed to contain all placements, with margin.
pub fn compute_lot_bounds(placements: &[BuildingPlacement], margin: f64) -> (f64, f64) {
    if placements.is_empty() {
        return (0.0, 0.0);
    }
    let footprints: Vec<Footprint> = placements.iter().map(placement_footprint).collect();
    let min_x = footprints.iter().map(|f| f.min_x).fold(f64::INFINITY, f64::min) - margin;
    let min_y = footprints.iter().map(|f| f.min_y).fold(f64::INFINITY, f64::min) - margin;
    let max_x = footprints
        .iter()
        .map(|f| f.max_x)
        .fold(f64::NEG_INFINITY, f64::max)
        + margin;
    let max_y = footprints
        .iter()
        .map(|f| f.max_y)
        .fold(f64::NEG_INFINITY, f64::max)
        + margin;
    (max_x - min_x, max_y - min_y)
}

/// Checks if all placements fit within the given lot size.
pub fn footprints_fit_lot(placements: &[BuildingPlacement], lot_width: f64, lot_depth: f64) -> bool {
    let (needed_w, needed_d) = compute_lot_bounds(placements, 0.0);
    needed_w <= lot_width && needed_d <= lot_depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelgen_core::Role;

    fn placement(x: f64, y: f64, width: f64, depth: f64, rotation: f64) -> BuildingPlacement {
        BuildingPlacement {
            x,
            y,
            rotation,
            width,
            depth,
            num_floors: 4,
            floor_height: 5.0,
            role: Role::Main,
        }
    }

    #[test]
    fn test_footprint_unrotated() {
        let fp = placement_footprint(&placement(0.0, 0.0, 10.0, 6.0, 0.0));
        assert_eq!(fp.width(), 10.0);
        assert_eq!(fp.depth(), 6.0);
    }

    #[test]
    fn test_footprint_rotation_swaps_axes() {
        for rot in [90.0, 270.0, -90.0] {
            let fp = placement_footprint(&placement(0.0, 0.0, 10.0, 6.0, rot));
            assert_eq!(fp.width(), 6.0, "rotation {rot}");
            assert_eq!(fp.depth(), 10.0, "rotation {rot}");
        }
        let fp = placement_footprint(&placement(0.0, 0.0, 10.0, 6.0, 180.0));
        assert_eq!(fp.width(), 10.0);
    }

    #[test]
    fn test_overlap_detection() {
        let a = placement(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = placement(8.0, 0.0, 10.0, 10.0, 0.0);
        let c = placement(20.0, 0.0, 10.0, 10.0, 0.0);
        assert!(any_overlaps(&[a.clone(), b], 0.0));
        assert!(!any_overlaps(&[a, c], 0.0));
    }

    #[test]
    fn test_overlap_respects_rotation() {
        // 20x4 building rotated 90 degrees occupies 4x20
        let a = placement(0.0, 0.0, 20.0, 4.0, 90.0);
        let b = placement(8.0, 0.0, 4.0, 4.0, 0.0);
        assert!(!any_overlaps(&[a, b], 0.0));
    }

    #[test]
    fn test_lot_bounds_with_margin() {
        let a = placement(-10.0, 0.0, 10.0, 10.0, 0.0);
        let b = placement(10.0, 0.0, 10.0, 10.0, 0.0);
        let (w, d) = compute_lot_bounds(&[a, b], 2.0);
        assert_eq!(w, 34.0);
        assert_eq!(d, 14.0);
    }

    #[test]
    fn test_fit_lot() {
        let a = placement(0.0, 0.0, 10.0, 10.0, 0.0);
        assert!(footprints_fit_lot(std::slice::from_ref(&a), 10.0, 10.0));
        assert!(!footprints_fit_lot(&[a], 9.0, 10.0));
    }
}
