//! Board frame and road connector geometry.
//!
//! Four piece families derived purely from the slot geometry the road
//! layout already produced, with no additional randomness:
//! 1. Road fillers: gaps between facing property rows, road-surfaced
//! 2. Road side strips: vertical connectors between horizontal roads (loop)
//! 3. Road corners: 90-degree turn pieces at loop intersections
//! 4. Frame rails: perimeter border with a retaining lip
//!
//! Filler surface and curb dimensions match the property road strip so
//! seams align across pieces.

use hotelgen_core::GenError;
use hotelgen_solid::primitives::cuboid;
use hotelgen_solid::{difference_all, rotate_z, translate, union_all, Solid};

use super::config::{BoardParams, FrameParams, PropertySlot, RoadEdge, RoadShape};
use super::{CURB_HEIGHT, CURB_WIDTH, ROAD_RECESS};

/// Rows closer than this in Y are treated as the same row.
const ROW_TOLERANCE: f64 = 5.0;

/// A single frame or road connector piece.
#[derive(Debug, Clone)]
pub struct FramePiece {
    pub solid: Solid,
    pub piece_type: &'static str,
    pub label: String,
    /// Position in board coordinates
    pub x: f64,
    pub y: f64,
    /// Rotation around Z in degrees
    pub rotation: f64,
}

/// All frame pieces for a board.
#[derive(Debug, Clone, Default)]
pub struct FrameResult {
    pub road_fillers: Vec<FramePiece>,
    pub road_sides: Vec<FramePiece>,
    pub road_corners: Vec<FramePiece>,
    pub frame_rails: Vec<FramePiece>,
}

impl FrameResult {
    pub fn all_pieces(&self) -> impl Iterator<Item = &FramePiece> {
        self.road_fillers
            .iter()
            .chain(&self.road_sides)
            .chain(&self.road_corners)
            .chain(&self.frame_rails)
    }

    pub fn piece_count(&self) -> usize {
        self.road_fillers.len()
            + self.road_sides.len()
            + self.road_corners.len()
            + self.frame_rails.len()
    }
}

/// Generates all frame and road connector pieces for a board layout.
pub fn generate_frame(
    slots: &[PropertySlot],
    params: &BoardParams,
    base_thickness: f64,
) -> Result<FrameResult, GenError> {
    if !params.frame.enabled {
        return Ok(FrameResult::default());
    }

    let gap = params.road_width + 2.0;
    match params.road_shape {
        RoadShape::Loop => generate_loop_frame(
            slots,
            params.property_width,
            params.property_depth,
            gap,
            &params.frame,
            base_thickness,
        ),
        RoadShape::Serpentine | RoadShape::Linear => generate_linear_frame(
            slots,
            params.property_width,
            params.property_depth,
            gap,
            &params.frame,
            base_thickness,
        ),
    }
}

// ---------------------------------------------------------------------------
// Piece geometry
// ---------------------------------------------------------------------------

/// Road segment filling the gap between two facing properties.
///
/// Centered on X/Y, base at Z=-thickness, road surface recessed below Z=0.
fn make_road_filler(width: f64, gap: f64, thickness: f64) -> Result<Solid, GenError> {
    let slab = translate(&cuboid(width, gap, thickness)?, 0.0, 0.0, -thickness);

    let recess = translate(
        &cuboid(width - 1.0, gap - 2.0 * CURB_WIDTH, ROAD_RECESS + 0.1)?,
        0.0,
        0.0,
        -ROAD_RECESS,
    );
    let slab = difference_all(&slab, &[recess])?;

    let curb_near = translate(
        &cuboid(width - 1.0, CURB_WIDTH, CURB_HEIGHT)?,
        0.0,
        -(gap / 2.0 - CURB_WIDTH / 2.0),
        0.0,
    );
    let curb_far = translate(
        &cuboid(width - 1.0, CURB_WIDTH, CURB_HEIGHT)?,
        0.0,
        gap / 2.0 - CURB_WIDTH / 2.0,
        0.0,
    );

    Ok(union_all(&[slab, curb_near, curb_far]))
}

/// 90-degree road corner piece at an intersection. Centered on X/Y.
fn make_road_corner(gap: f64, thickness: f64) -> Result<Solid, GenError> {
    let mut slab = translate(&cuboid(gap, gap, thickness)?, 0.0, 0.0, -thickness);

    let inner = gap - 2.0 * CURB_WIDTH;
    if inner > 0.0 {
        let recess = translate(
            &cuboid(inner, inner, ROAD_RECESS + 0.1)?,
            0.0,
            0.0,
            -ROAD_RECESS,
        );
        slab = difference_all(&slab, &[recess])?;
    }

    let mut parts = vec![slab];
    // Short curb segments along each edge, leaving the corners open
    for y_sign in [-1.0, 1.0] {
        parts.push(translate(
            &cuboid(inner.max(CURB_WIDTH), CURB_WIDTH, CURB_HEIGHT)?,
            0.0,
            y_sign * (gap / 2.0 - CURB_WIDTH / 2.0),
            0.0,
        ));
    }
    for x_sign in [-1.0, 1.0] {
        parts.push(translate(
            &cuboid(CURB_WIDTH, inner.max(CURB_WIDTH), CURB_HEIGHT)?,
            x_sign * (gap / 2.0 - CURB_WIDTH / 2.0),
            0.0,
            0.0,
        ));
    }

    Ok(union_all(&parts))
}

/// Outer frame rail with a retaining lip along its outer (+Y) edge.
///
/// Centered on X/Y, base flush with the property plate bottom.
fn make_frame_rail(
    length: f64,
    rail_width: f64,
    lip_height: f64,
    lip_thickness: f64,
    thickness: f64,
) -> Result<Solid, GenError> {
    let base = translate(&cuboid(length, rail_width, thickness)?, 0.0, 0.0, -thickness);
    let lip = translate(
        &cuboid(length, lip_thickness, lip_height)?,
        0.0,
        rail_width / 2.0 - lip_thickness / 2.0,
        0.0,
    );
    Ok(union_all(&[base, lip]))
}

// ---------------------------------------------------------------------------
// Frame assembly
// ---------------------------------------------------------------------------

fn generate_loop_frame(
    slots: &[PropertySlot],
    prop_w: f64,
    prop_d: f64,
    gap: f64,
    frame: &FrameParams,
    thickness: f64,
) -> Result<FrameResult, GenError> {
    let mut result = FrameResult::default();
    if slots.len() < 3 {
        return Ok(result);
    }

    let rows = group_slots_by_row(slots);
    if rows.len() < 2 {
        return Ok(result);
    }
    let row_ys: Vec<f64> = rows.iter().map(|(y, _)| *y).collect();

    // Road fillers between adjacent facing rows
    let mut filler_idx = 1;
    let mut road_ys = Vec::new();
    for pair in rows.windows(2) {
        let (y_lower, lower_slots) = &pair[0];
        let (y_upper, upper_slots) = &pair[1];

        let lower_faces_up = lower_slots.iter().any(|s| s.road_edge == RoadEdge::North);
        let upper_faces_down = upper_slots.iter().any(|s| s.road_edge == RoadEdge::South);
        if !(lower_faces_up || upper_faces_down) {
            continue;
        }

        let road_y = (y_lower + prop_d / 2.0 + y_upper - prop_d / 2.0) / 2.0;
        road_ys.push(road_y);

        let mut xs: Vec<f64> = lower_slots
            .iter()
            .chain(upper_slots.iter())
            .map(|s| s.center_x)
            .collect();
        dedup_positions(&mut xs);

        for x in xs {
            let filler = make_road_filler(prop_w, gap, thickness)?;
            result.road_fillers.push(FramePiece {
                solid: translate(&filler, x, road_y, 0.0),
                piece_type: "road_filler",
                label: format!("road_filler_{filler_idx:02}"),
                x,
                y: road_y,
                rotation: 0.0,
            });
            filler_idx += 1;
        }
    }

    // Side roads and corners only exist once the loop has 4 rows
    if row_ys.len() >= 4 && road_ys.len() >= 2 {
        let mut xs: Vec<f64> = slots.iter().map(|s| s.center_x).collect();
        dedup_positions(&mut xs);
        let left_x = xs[0] - prop_w / 2.0 - gap / 2.0;
        let right_x = xs[xs.len() - 1] + prop_w / 2.0 + gap / 2.0;

        let mut side_idx = 1;
        for pair in road_ys.windows(2) {
            let side_length = pair[1] - pair[0];
            if side_length <= gap {
                continue;
            }
            let side_center_y = (pair[0] + pair[1]) / 2.0;

            for side_x in [left_x, right_x] {
                let side_road = rotate_z(&make_road_filler(side_length, gap, thickness)?, 90.0);
                result.road_sides.push(FramePiece {
                    solid: translate(&side_road, side_x, side_center_y, 0.0),
                    piece_type: "road_side",
                    label: format!("road_side_{side_idx:02}"),
                    x: side_x,
                    y: side_center_y,
                    rotation: 90.0,
                });
                side_idx += 1;
            }
        }

        let mut corner_idx = 1;
        for &road_y in &road_ys {
            for side_x in [left_x, right_x] {
                let corner = make_road_corner(gap, thickness)?;
                result.road_corners.push(FramePiece {
                    solid: translate(&corner, side_x, road_y, 0.0),
                    piece_type: "road_corner",
                    label: format!("road_corner_{corner_idx:02}"),
                    x: side_x,
                    y: road_y,
                    rotation: 0.0,
                });
                corner_idx += 1;
            }
        }
    }

    add_outer_rails(&mut result, slots, prop_w, prop_d, frame, thickness)?;
    Ok(result)
}

fn generate_linear_frame(
    slots: &[PropertySlot],
    prop_w: f64,
    prop_d: f64,
    gap: f64,
    frame: &FrameParams,
    thickness: f64,
) -> Result<FrameResult, GenError> {
    let mut result = FrameResult::default();
    if slots.len() < 2 {
        return Ok(result);
    }

    let rows = group_slots_by_row(slots);
    if rows.len() < 2 {
        return Ok(result);
    }

    let y_lower = rows[0].0;
    let y_upper = rows[rows.len() - 1].0;
    let road_y = (y_lower + prop_d / 2.0 + y_upper - prop_d / 2.0) / 2.0;

    let mut xs: Vec<f64> = slots.iter().map(|s| s.center_x).collect();
    dedup_positions(&mut xs);

    for (i, x) in xs.into_iter().enumerate() {
        let filler = make_road_filler(prop_w, gap, thickness)?;
        result.road_fillers.push(FramePiece {
            solid: translate(&filler, x, road_y, 0.0),
            piece_type: "road_filler",
            label: format!("road_filler_{:02}", i + 1),
            x,
            y: road_y,
            rotation: 0.0,
        });
    }

    add_outer_rails(&mut result, slots, prop_w, prop_d, frame, thickness)?;
    Ok(result)
}

fn add_outer_rails(
    result: &mut FrameResult,
    slots: &[PropertySlot],
    prop_w: f64,
    prop_d: f64,
    frame: &FrameParams,
    thickness: f64,
) -> Result<(), GenError> {
    let rows = group_slots_by_row(slots);
    if rows.is_empty() {
        return Ok(());
    }
    let mut xs: Vec<f64> = slots.iter().map(|s| s.center_x).collect();
    dedup_positions(&mut xs);

    let first_y = rows[0].0;
    let last_y = rows[rows.len() - 1].0;
    let total_w = (xs[xs.len() - 1] - xs[0]) + prop_w;
    let rail_x = (xs[0] + xs[xs.len() - 1]) / 2.0;

    // Bottom rail, lip facing outward (south), when the bottom row's outer
    // edge is the board edge
    if rows[0].1.iter().any(|s| s.road_edge == RoadEdge::North) {
        let rail = rotate_z(
            &make_frame_rail(
                total_w,
                frame.frame_width,
                frame.lip_height,
                frame.lip_thickness,
                thickness,
            )?,
            180.0,
        );
        let rail_y = first_y - prop_d / 2.0 - frame.frame_width / 2.0;
        result.frame_rails.push(FramePiece {
            solid: translate(&rail, rail_x, rail_y, 0.0),
            piece_type: "frame_rail",
            label: "rail_bottom".to_string(),
            x: rail_x,
            y: rail_y,
            rotation: 180.0,
        });
    }

    // Top rail
    if rows[rows.len() - 1]
        .1
        .iter()
        .any(|s| s.road_edge == RoadEdge::South)
    {
        let rail = make_frame_rail(
            total_w,
            frame.frame_width,
            frame.lip_height,
            frame.lip_thickness,
            thickness,
        )?;
        let rail_y = last_y + prop_d / 2.0 + frame.frame_width / 2.0;
        result.frame_rails.push(FramePiece {
            solid: translate(&rail, rail_x, rail_y, 0.0),
            piece_type: "frame_rail",
            label: "rail_top".to_string(),
            x: rail_x,
            y: rail_y,
            rotation: 0.0,
        });
    }

    // Left and right rails always close the perimeter
    let total_h = (last_y - first_y) + prop_d;
    let rail_y = (first_y + last_y) / 2.0;

    let left = rotate_z(
        &make_frame_rail(
            total_h,
            frame.frame_width,
            frame.lip_height,
            frame.lip_thickness,
            thickness,
        )?,
        90.0,
    );
    let left_x = xs[0] - prop_w / 2.0 - frame.frame_width / 2.0;
    result.frame_rails.push(FramePiece {
        solid: translate(&left, left_x, rail_y, 0.0),
        piece_type: "frame_rail",
        label: "rail_left".to_string(),
        x: left_x,
        y: rail_y,
        rotation: 90.0,
    });

    let right = rotate_z(
        &make_frame_rail(
            total_h,
            frame.frame_width,
            frame.lip_height,
            frame.lip_thickness,
            thickness,
        )?,
        -90.0,
    );
    let right_x = xs[xs.len() - 1] + prop_w / 2.0 + frame.frame_width / 2.0;
    result.frame_rails.push(FramePiece {
        solid: translate(&right, right_x, rail_y, 0.0),
        piece_type: "frame_rail",
        label: "rail_right".to_string(),
        x: right_x,
        y: rail_y,
        rotation: -90.0,
    });

    Ok(())
}

/// Groups slots into rows by Y coordinate, sorted bottom to top.
fn group_slots_by_row(slots: &[PropertySlot]) -> Vec<(f64, Vec<&PropertySlot>)> {
    let mut rows: Vec<(f64, Vec<&PropertySlot>)> = Vec::new();
    for slot in slots {
        match rows
            .iter_mut()
            .find(|(y, _)| (slot.center_y - *y).abs() < ROW_TOLERANCE)
        {
            Some((_, members)) => members.push(slot),
            None => rows.push((slot.center_y, vec![slot])),
        }
    }
    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    rows
}

/// Sorts and removes near-duplicate coordinates.
fn dedup_positions(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::road::generate_road_layout;

    fn board_params(shape: RoadShape, n: u32) -> BoardParams {
        BoardParams {
            road_shape: shape,
            num_properties: n,
            ..BoardParams::default()
        }
    }

    fn slots(shape: RoadShape, n: u32) -> Vec<PropertySlot> {
        generate_road_layout(shape, n, 100.0, 80.0, 8.0, None)
    }

    #[test]
    fn test_disabled_frame_is_empty() {
        let mut params = board_params(RoadShape::Linear, 4);
        params.frame.enabled = false;
        let result = generate_frame(&slots(RoadShape::Linear, 4), &params, 2.5).unwrap();
        assert_eq!(result.piece_count(), 0);
    }

    #[test]
    fn test_linear_frame_has_fillers_and_rails() {
        let params = board_params(RoadShape::Linear, 4);
        let result = generate_frame(&slots(RoadShape::Linear, 4), &params, 2.5).unwrap();
        // 2 columns of properties -> 2 fillers
        assert_eq!(result.road_fillers.len(), 2);
        // Bottom, top, left, right rails
        assert_eq!(result.frame_rails.len(), 4);
        for piece in result.all_pieces() {
            assert!(!piece.solid.is_empty(), "{} empty", piece.label);
        }
    }

    #[test]
    fn test_serpentine_frame_counts() {
        let params = board_params(RoadShape::Serpentine, 6);
        let result = generate_frame(&slots(RoadShape::Serpentine, 6), &params, 2.5).unwrap();
        assert_eq!(result.road_fillers.len(), 3);
        assert_eq!(result.frame_rails.len(), 4);
    }

    #[test]
    fn test_road_filler_matches_road_styling() {
        let filler = make_road_filler(100.0, 10.0, 2.5).unwrap();
        let (min, max) = filler.bounding_box();
        assert!((min.z + 2.5).abs() < 1e-9);
        assert!((max.z - CURB_HEIGHT).abs() < 1e-9);
    }

    #[test]
    fn test_frame_rail_lip_rises_above_plate() {
        let rail = make_frame_rail(50.0, 6.0, 2.0, 1.2, 2.5).unwrap();
        let (min, max) = rail.bounding_box();
        assert!((min.z + 2.5).abs() < 1e-9);
        assert!((max.z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_road_corner_has_recess() {
        let corner = make_road_corner(10.0, 2.5).unwrap();
        let solid_slab = 10.0 * 10.0 * 2.5;
        assert!(corner.volume() < solid_slab + 4.0 * 10.0 * CURB_WIDTH * CURB_HEIGHT);
        assert!(!corner.is_empty());
    }
}
