//! # Boolean Operations
//!
//! CSG union/difference/intersection with degenerate-operand filtering.
//!
//! Empty operands are filtered before any clipping happens. The filtering is
//! the load-bearing correctness mechanism here, not an optimization: clip
//! sequences against an empty tree produce garbage, so empties must never
//! reach them.

use crate::bsp::BspNode;
use crate::error::GeometryError;
use crate::solid::Solid;

/// Unions two solids.
pub fn union(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(a.polygons().to_vec());
    let mut bsp_b = BspNode::new(b.polygons().to_vec());

    // a minus interior of b, b minus interior of a, with b's coplanar
    // duplicates removed by the invert/clip/invert round trip.
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());
    Solid::from_polygons(polygons)
}

/// Subtracts `b` from `a`.
pub fn difference(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() {
        return Solid::empty();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(a.polygons().to_vec());
    let mut bsp_b = BspNode::new(b.polygons().to_vec());

    // A - B == ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());
    let mut merged = BspNode::new(polygons);
    merged.invert();

    Solid::from_polygons(merged.all_polygons())
}

/// Intersects two solids.
pub fn intersection(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() || b.is_empty() {
        return Solid::empty();
    }

    let mut bsp_a = BspNode::new(a.polygons().to_vec());
    let mut bsp_b = BspNode::new(b.polygons().to_vec());

    // A & B == ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut polygons = bsp_a.all_polygons();
    polygons.extend(bsp_b.all_polygons());
    let mut merged = BspNode::new(polygons);
    merged.invert();

    Solid::from_polygons(merged.all_polygons())
}

/// Unions a list of solids in one batched operation.
///
/// Empty members are filtered first; an all-empty (or empty) list yields the
/// empty solid and a singleton is returned unchanged. The batch runs as a
/// balanced pairwise reduction so intermediate BSP trees stay shallow,
/// rather than a left fold that degrades on long lists.
pub fn union_all(parts: &[Solid]) -> Solid {
    let mut valid: Vec<Solid> = parts.iter().filter(|p| !p.is_empty()).cloned().collect();

    match valid.len() {
        0 => return Solid::empty(),
        1 => return valid.pop().unwrap_or_default(),
        _ => {}
    }

    while valid.len() > 1 {
        let mut next = Vec::with_capacity(valid.len() / 2 + 1);
        let mut iter = valid.chunks(2);
        for chunk in &mut iter {
            match chunk {
                [a, b] => next.push(union(a, b)),
                [a] => next.push(a.clone()),
                _ => {}
            }
        }
        valid = next;
    }

    valid.pop().unwrap_or_default()
}

/// Subtracts all cutouts from a base solid.
///
/// Cutouts are unioned first so the subtraction is a single operation. An
/// empty base is a caller bug and fails with [`GeometryError::EmptyBase`];
/// a cutter union that collapses to empty returns the base unchanged.
pub fn difference_all(base: &Solid, cutouts: &[Solid]) -> Result<Solid, GeometryError> {
    if base.is_empty() {
        return Err(GeometryError::EmptyBase);
    }

    let cutter = union_all(cutouts);
    if cutter.is_empty() {
        return Ok(base.clone());
    }

    Ok(difference(base, &cutter))
}

/// Composes known-disjoint solids in O(1) per part.
///
/// Precondition (documented, not checked): no two parts overlap. Overlapping
/// inputs produce a self-intersecting result; use [`union_all`] for anything
/// that may touch.
pub fn compose_disjoint(parts: &[Solid]) -> Solid {
    let mut polygons = Vec::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        polygons.extend_from_slice(part.polygons());
    }
    Solid::from_polygons(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;
    use crate::transforms::translate;

    fn unit_cube_at(x: f64) -> Solid {
        translate(&cuboid(2.0, 2.0, 2.0).unwrap(), x, 0.0, 0.0)
    }

    #[test]
    fn test_union_disjoint_adds_volumes() {
        let a = unit_cube_at(-3.0);
        let b = unit_cube_at(3.0);
        let result = union(&a, &b);
        assert!((result.volume() - 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_overlapping_does_not_double_count() {
        let a = unit_cube_at(0.0);
        let b = unit_cube_at(1.0);
        let result = union(&a, &b);
        // 2x2x2 cubes overlapping by 1 along X: 8 + 8 - 4
        assert!((result.volume() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_difference_carves_overlap() {
        let a = unit_cube_at(0.0);
        let b = unit_cube_at(1.0);
        let result = difference(&a, &b);
        assert!((result.volume() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_difference_disjoint_returns_base_volume() {
        let a = unit_cube_at(-3.0);
        let b = unit_cube_at(3.0);
        let result = difference(&a, &b);
        assert!((result.volume() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_of_overlap() {
        let a = unit_cube_at(0.0);
        let b = unit_cube_at(1.0);
        let result = intersection(&a, &b);
        assert!((result.volume() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = unit_cube_at(-3.0);
        let b = unit_cube_at(3.0);
        let result = intersection(&a, &b);
        assert!(result.volume().abs() < 1e-6);
    }

    #[test]
    fn test_union_all_empty_list() {
        assert!(union_all(&[]).is_empty());
    }

    #[test]
    fn test_union_all_singleton_unchanged() {
        let a = unit_cube_at(0.0);
        let result = union_all(std::slice::from_ref(&a));
        assert!((result.volume() - a.volume()).abs() < 1e-9);
        assert_eq!(result.triangle_count(), a.triangle_count());
    }

    #[test]
    fn test_union_all_filters_empties() {
        let a = unit_cube_at(0.0);
        let parts = vec![Solid::empty(), a.clone(), Solid::empty()];
        let result = union_all(&parts);
        assert!((result.volume() - a.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_union_all_many_disjoint() {
        let parts: Vec<Solid> = (0..5).map(|i| unit_cube_at(i as f64 * 3.0)).collect();
        let result = union_all(&parts);
        assert!((result.volume() - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_difference_all_empty_base_is_error() {
        let cutter = unit_cube_at(0.0);
        assert!(difference_all(&Solid::empty(), &[cutter]).is_err());
    }

    #[test]
    fn test_difference_all_no_cutters_returns_base() {
        let base = unit_cube_at(0.0);
        let result = difference_all(&base, &[Solid::empty()]).unwrap();
        assert!((result.volume() - base.volume()).abs() < 1e-9);
    }

    #[test]
    fn test_difference_all_batches_cutters() {
        let base = cuboid(10.0, 2.0, 2.0).unwrap();
        let cut_a = translate(&cuboid(2.0, 3.0, 3.0).unwrap(), -3.0, 0.0, -0.5);
        let cut_b = translate(&cuboid(2.0, 3.0, 3.0).unwrap(), 3.0, 0.0, -0.5);
        let result = difference_all(&base, &[cut_a, cut_b]).unwrap();
        assert!((result.volume() - (40.0 - 16.0)).abs() < 1e-6);
    }

    #[test]
    fn test_compose_disjoint_concatenates() {
        let a = unit_cube_at(-3.0);
        let b = unit_cube_at(3.0);
        let result = compose_disjoint(&[a, Solid::empty(), b]);
        assert!((result.volume() - 16.0).abs() < 1e-6);
        assert_eq!(result.triangle_count(), 24);
    }
}
