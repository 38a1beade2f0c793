//! Road generation: property slots along a procedural road layout.
//!
//! Three topologies:
//! - loop: properties around a rectangular loop, facing inward
//! - serpentine: two rows on alternating sides of an S-road
//! - linear: two parallel rows along a straight road
//!
//! Slot positions are pure functions of the board parameters; presets are
//! assigned from the default cycle unless the caller overrides them.

use std::collections::BTreeMap;

use super::config::{PropertySlot, RoadEdge, RoadShape, DEFAULT_PRESET_ASSIGNMENTS};

/// Generates property slots along the road.
pub fn generate_road_layout(
    road_shape: RoadShape,
    num_properties: u32,
    property_width: f64,
    property_depth: f64,
    road_width: f64,
    style_assignments: Option<&BTreeMap<u32, String>>,
) -> Vec<PropertySlot> {
    let mut slots = match road_shape {
        RoadShape::Loop => loop_layout(num_properties, property_width, property_depth, road_width),
        RoadShape::Serpentine => {
            serpentine_layout(num_properties, property_width, property_depth, road_width)
        }
        RoadShape::Linear => {
            linear_layout(num_properties, property_width, property_depth, road_width)
        }
    };

    for slot in &mut slots {
        slot.assigned_preset = match style_assignments.and_then(|map| map.get(&slot.index)) {
            Some(name) => name.clone(),
            None => {
                DEFAULT_PRESET_ASSIGNMENTS[slot.index as usize % DEFAULT_PRESET_ASSIGNMENTS.len()]
                    .to_string()
            }
        };
    }

    slots
}

fn slot(index: u32, x: f64, y: f64, edge: RoadEdge) -> PropertySlot {
    PropertySlot {
        index,
        center_x: x,
        center_y: y,
        road_edge: edge,
        assigned_preset: String::new(),
    }
}

/// Properties around a rectangular loop, facing the road between the rings.
fn loop_layout(
    num_properties: u32,
    prop_w: f64,
    prop_d: f64,
    road_w: f64,
) -> Vec<PropertySlot> {
    let gap = road_w + 2.0;
    let mut slots = Vec::new();

    if num_properties <= 2 {
        // Two properties facing each other across one road
        for i in 0..num_properties {
            let side = if i == 0 { -1.0 } else { 1.0 };
            let edge = if side < 0.0 {
                RoadEdge::North
            } else {
                RoadEdge::South
            };
            slots.push(slot(i, 0.0, side * (prop_d / 2.0 + gap / 2.0), edge));
        }
        return slots;
    }

    let (bottom, left, top, right) = distribute_sides(num_properties);

    // Inner loop dimensions grow with the longest side.
    let inner_w = bottom.max(top) as f64 * (prop_w + 2.0);
    let inner_h = left.max(right) as f64 * (prop_w + 2.0);

    let mut idx = 0;

    for j in 0..bottom {
        let x = -inner_w / 2.0 + (j as f64 + 0.5) * (inner_w / bottom.max(1) as f64);
        let y = -(inner_h / 2.0 + gap / 2.0 + prop_d / 2.0);
        slots.push(slot(idx, x, y, RoadEdge::North));
        idx += 1;
    }
    for j in 0..left {
        let x = -(inner_w / 2.0 + gap / 2.0 + prop_d / 2.0);
        let y = -inner_h / 2.0 + (j as f64 + 0.5) * (inner_h / left.max(1) as f64);
        slots.push(slot(idx, x, y, RoadEdge::East));
        idx += 1;
    }
    for j in 0..top {
        let x = -inner_w / 2.0 + (j as f64 + 0.5) * (inner_w / top.max(1) as f64);
        let y = inner_h / 2.0 + gap / 2.0 + prop_d / 2.0;
        slots.push(slot(idx, x, y, RoadEdge::South));
        idx += 1;
    }
    for j in 0..right {
        let x = inner_w / 2.0 + gap / 2.0 + prop_d / 2.0;
        let y = -inner_h / 2.0 + (j as f64 + 0.5) * (inner_h / right.max(1) as f64);
        slots.push(slot(idx, x, y, RoadEdge::West));
        idx += 1;
    }

    slots
}

/// Two rows on alternating sides, the second row reversed.
fn serpentine_layout(
    num_properties: u32,
    prop_w: f64,
    prop_d: f64,
    road_w: f64,
) -> Vec<PropertySlot> {
    let half = num_properties.div_ceil(2);
    let gap = road_w + 2.0;
    let mut slots = Vec::new();

    for i in 0..num_properties {
        let (x, y, edge) = if i < half {
            (
                i as f64 * (prop_w + 2.0),
                gap / 2.0 + prop_d / 2.0,
                RoadEdge::South,
            )
        } else {
            let j = (num_properties - 1 - i) as f64;
            (
                j * (prop_w + 2.0),
                -(gap / 2.0 + prop_d / 2.0),
                RoadEdge::North,
            )
        };
        slots.push(slot(i, x, y, edge));
    }

    center_on_x(&mut slots);
    slots
}

/// Properties on both sides of a straight road.
fn linear_layout(
    num_properties: u32,
    prop_w: f64,
    prop_d: f64,
    road_w: f64,
) -> Vec<PropertySlot> {
    let gap = road_w + 2.0;
    let mut slots = Vec::new();

    for i in 0..num_properties {
        let col = (i / 2) as f64;
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let edge = if side > 0.0 {
            RoadEdge::South
        } else {
            RoadEdge::North
        };
        slots.push(slot(
            i,
            col * (prop_w + 2.0),
            side * (gap / 2.0 + prop_d / 2.0),
            edge,
        ));
    }

    center_on_x(&mut slots);
    slots
}

fn center_on_x(slots: &mut [PropertySlot]) {
    if slots.is_empty() {
        return;
    }
    let cx = slots.iter().map(|s| s.center_x).sum::<f64>() / slots.len() as f64;
    for s in slots {
        s.center_x -= cx;
    }
}

/// Distributes n properties across the 4 sides of a rectangle.
///
/// Returns (bottom, left, top, right); roughly 2/3 on the long sides.
fn distribute_sides(n: u32) -> (u32, u32, u32, u32) {
    if n <= 4 {
        let mut counts = [0u32; 4];
        for i in 0..n {
            counts[i as usize % 4] = 1;
        }
        return (counts[0], counts[1], counts[2], counts[3]);
    }

    let long_total = n * 2 / 3;
    let short_total = n - long_total;
    let bottom = long_total.div_ceil(2);
    let top = long_total - bottom;
    let left = short_total.div_ceil(2);
    let right = short_total - left;
    (bottom, left, top, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(shape: RoadShape, n: u32) -> Vec<PropertySlot> {
        generate_road_layout(shape, n, 100.0, 80.0, 8.0, None)
    }

    #[test]
    fn test_every_shape_produces_requested_count() {
        for shape in [RoadShape::Loop, RoadShape::Serpentine, RoadShape::Linear] {
            for n in 1..=12 {
                let slots = layout(shape, n);
                assert_eq!(slots.len(), n as usize, "{shape:?} n={n}");
                for (i, slot) in slots.iter().enumerate() {
                    assert_eq!(slot.index, i as u32);
                    assert!(!slot.assigned_preset.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_default_preset_cycle_wraps() {
        let slots = layout(RoadShape::Serpentine, 10);
        assert_eq!(slots[0].assigned_preset, "royal");
        assert_eq!(slots[8].assigned_preset, "royal");
        assert_eq!(slots[9].assigned_preset, "fujiyama");
    }

    #[test]
    fn test_explicit_assignments_override() {
        let mut assignments = BTreeMap::new();
        assignments.insert(0u32, "waikiki".to_string());
        let slots = generate_road_layout(
            RoadShape::Linear,
            2,
            100.0,
            80.0,
            8.0,
            Some(&assignments),
        );
        assert_eq!(slots[0].assigned_preset, "waikiki");
        assert_eq!(slots[1].assigned_preset, "fujiyama");
    }

    #[test]
    fn test_loop_two_properties_face_each_other() {
        let slots = layout(RoadShape::Loop, 2);
        assert_eq!(slots[0].road_edge, RoadEdge::North);
        assert_eq!(slots[1].road_edge, RoadEdge::South);
        assert!(slots[0].center_y < slots[1].center_y);
    }

    #[test]
    fn test_loop_eight_uses_all_sides() {
        let slots = layout(RoadShape::Loop, 8);
        for edge in [RoadEdge::North, RoadEdge::South, RoadEdge::East, RoadEdge::West] {
            assert!(slots.iter().any(|s| s.road_edge == edge), "{edge:?} unused");
        }
    }

    #[test]
    fn test_serpentine_two_rows() {
        let slots = layout(RoadShape::Serpentine, 8);
        let top: Vec<_> = slots.iter().filter(|s| s.center_y > 0.0).collect();
        let bottom: Vec<_> = slots.iter().filter(|s| s.center_y < 0.0).collect();
        assert_eq!(top.len(), 4);
        assert_eq!(bottom.len(), 4);
        // X-centered
        let cx: f64 = slots.iter().map(|s| s.center_x).sum::<f64>() / slots.len() as f64;
        assert!(cx.abs() < 1e-9);
    }

    #[test]
    fn test_distribute_sides_totals() {
        for n in 1..=12 {
            let (b, l, t, r) = distribute_sides(n);
            assert_eq!(b + l + t + r, n);
        }
    }
}
