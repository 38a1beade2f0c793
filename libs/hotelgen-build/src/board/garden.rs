//! Garden layout engine: places landscape features on a property plate.
//!
//! Given the lot rectangle, building footprints, road width, and a
//! [`GardenTheme`], computes where trees, a pool, hedges, a path, and a
//! terrace go. Tree placement uses Poisson-disk dart throwing for a natural
//! scatter. Everything is deterministic given the seeded rng.
//!
//! Coordinate system (canonical orientation, road on the south edge):
//! - Lot centered on X, extending from y=0 to y=lot_depth
//! - Road strip occupies y in [0, road_width]
//! - Buildings sit in the building zone; the garden fills the rest

use glam::DVec2;
use hotelgen_core::{BuildingPlacement, Role};
use hotelgen_layout::{placement_footprint, Footprint};
use hotelgen_styles::{GardenTheme, HedgeStyle, PathStyle};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::{GardenFeature, GardenPlacement};

/// Clearance kept around buildings (mm).
const BUILDING_MARGIN: f64 = 3.0;

/// Attempts per tree before giving up on placing it.
const TREE_ATTEMPTS: u32 = 30;

fn rects_overlap(a: &Footprint, b: &Footprint, margin: f64) -> bool {
    !(a.max_x + margin <= b.min_x
        || b.max_x + margin <= a.min_x
        || a.max_y + margin <= b.min_y
        || b.max_y + margin <= a.min_y)
}

fn contains(rect: &Footprint, x: f64, y: f64, margin: f64) -> bool {
    rect.min_x - margin <= x
        && x <= rect.max_x + margin
        && rect.min_y - margin <= y
        && y <= rect.max_y + margin
}

/// Computes positions for garden features within a property lot.
#[derive(Debug, Default)]
pub struct GardenLayoutEngine;

impl GardenLayoutEngine {
    /// Computes garden feature placements.
    ///
    /// Calling twice with the same inputs and seed yields the same feature
    /// list, types, and coordinates.
    pub fn compute_layout(
        &self,
        lot_width: f64,
        lot_depth: f64,
        road_width: f64,
        building_placements: &[BuildingPlacement],
        theme: &GardenTheme,
        rng: &mut StdRng,
    ) -> Vec<GardenPlacement> {
        let mut features: Vec<GardenPlacement> = Vec::new();

        let building_rects: Vec<Footprint> =
            building_placements.iter().map(placement_footprint).collect();

        // The main building anchors the terrace, pool, and path.
        let main_building = building_placements
            .iter()
            .find(|p| p.role == Role::Main)
            .or_else(|| building_placements.first());

        // Garden zone: the lot minus the road strip, with a small margin.
        let garden_y_min = road_width + 1.0;
        let garden_y_max = lot_depth - 1.0;
        let garden_x_min = -lot_width / 2.0 + 1.0;
        let garden_x_max = lot_width / 2.0 - 1.0;

        // --- Terrace: between the main building and the road ---
        if theme.has_terrace {
            if let Some(main) = main_building {
                let main_rect = placement_footprint(main);
                let terrace_w = (main_rect.width() + 4.0).min(lot_width * 0.3);
                let terrace_d = ((main_rect.min_y - garden_y_min) * 0.4).max(3.0);
                let terrace_y = main_rect.min_y - terrace_d / 2.0 - 0.5;
                if terrace_y > garden_y_min + 1.0 {
                    features.push(GardenPlacement {
                        x: main_rect.center_x(),
                        y: terrace_y,
                        rotation: 0.0,
                        feature: GardenFeature::Terrace {
                            width: terrace_w,
                            depth: terrace_d,
                            height: 0.5,
                        },
                    });
                }
            }
        }

        // --- Pool ---
        if let Some(shape) = theme.pool_shape {
            let (pool_w, pool_d) = theme.pool_size.dimensions();
            if let Some((px, py)) = find_pool_position(
                pool_w,
                pool_d,
                &building_rects,
                garden_x_min,
                garden_x_max,
                garden_y_min,
                garden_y_max,
                main_building,
            ) {
                features.push(GardenPlacement {
                    x: px,
                    y: py,
                    rotation: 0.0,
                    feature: GardenFeature::Pool {
                        width: pool_w,
                        depth: pool_d,
                        shape,
                    },
                });
            }
        }

        // --- Path from the road to the main entrance ---
        if let Some(main) = main_building {
            let main_rect = placement_footprint(main);
            let points = path_points(&main_rect, road_width, theme.path_style, rng);
            if !points.is_empty() {
                features.push(GardenPlacement {
                    x: 0.0,
                    y: 0.0,
                    rotation: 0.0,
                    feature: GardenFeature::Path {
                        points,
                        width: 2.0,
                        height: 0.3,
                    },
                });
            }
        }

        // --- Hedges ---
        if theme.has_hedges {
            place_hedges(
                theme.hedge_style,
                lot_width,
                lot_depth,
                road_width,
                &building_rects,
                &mut features,
            );
        }

        // --- Trees (Poisson-disk dart throwing) ---
        place_trees(
            theme,
            lot_width,
            lot_depth,
            road_width,
            &building_rects,
            &mut features,
            rng,
        );

        features
    }
}

/// Tries candidate positions behind, right of, and left of the main
/// building, in that priority order; None if nothing fits.
#[allow(clippy::too_many_arguments)]
fn find_pool_position(
    pool_w: f64,
    pool_d: f64,
    building_rects: &[Footprint],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    main_building: Option<&BuildingPlacement>,
) -> Option<(f64, f64)> {
    let Some(main) = main_building else {
        return Some(((x_min + x_max) / 2.0, (y_min + y_max) / 2.0));
    };
    let main_rect = placement_footprint(main);

    let candidates = [
        (
            main_rect.center_x(),
            main_rect.max_y + BUILDING_MARGIN + pool_d / 2.0,
        ),
        (main_rect.center_x() + main_rect.width(), main_rect.center_y()),
        (main_rect.center_x() - main_rect.width(), main_rect.center_y()),
    ];

    for (cx, cy) in candidates {
        let pool_rect = Footprint {
            min_x: cx - pool_w / 2.0,
            min_y: cy - pool_d / 2.0,
            max_x: cx + pool_w / 2.0,
            max_y: cy + pool_d / 2.0,
        };
        if pool_rect.min_x < x_min
            || pool_rect.max_x > x_max
            || pool_rect.min_y < y_min
            || pool_rect.max_y > y_max
        {
            continue;
        }
        if building_rects
            .iter()
            .any(|r| rects_overlap(&pool_rect, r, BUILDING_MARGIN))
        {
            continue;
        }
        return Some((cx, cy));
    }

    None
}

/// Waypoints from the middle of the road strip to the entrance.
fn path_points(
    main_rect: &Footprint,
    road_width: f64,
    style: PathStyle,
    rng: &mut StdRng,
) -> Vec<DVec2> {
    let start_x = main_rect.center_x();
    let start_y = road_width * 0.5;
    let end_y = main_rect.min_y - 0.5;

    if end_y <= start_y + 1.0 {
        return Vec::new();
    }

    match style {
        PathStyle::Curved => {
            // S-curve via a sine-offset midpoint
            let mid_y = (start_y + end_y) / 2.0;
            let offset = rng.random_range(-3.0..3.0);
            vec![
                DVec2::new(start_x, start_y),
                DVec2::new(start_x + offset, mid_y),
                DVec2::new(start_x, end_y),
            ]
        }
        PathStyle::Straight => vec![DVec2::new(start_x, start_y), DVec2::new(start_x, end_y)],
    }
}

fn place_hedges(
    style: HedgeStyle,
    lot_width: f64,
    lot_depth: f64,
    road_width: f64,
    building_rects: &[Footprint],
    features: &mut Vec<GardenPlacement>,
) {
    let hedge_h = 1.5;
    let hedge_w = 1.0;
    let margin = 1.5;

    // Border hedges down both sides of the garden.
    let length = lot_depth - road_width - 2.0 * margin;
    if length > 5.0 {
        for side in [-1.0, 1.0] {
            features.push(GardenPlacement {
                x: side * (lot_width / 2.0 - margin),
                y: road_width + margin + length / 2.0,
                rotation: 90.0,
                feature: GardenFeature::Hedge {
                    length,
                    height: hedge_h,
                    width: hedge_w,
                },
            });
        }
    }

    // Formal gardens add cross hedges where the buildings allow.
    if style == HedgeStyle::Formal {
        let cross_y = lot_depth * 0.7;
        let cross_length = lot_width * 0.3;
        for side in [-1.0, 1.0] {
            let cx = side * lot_width * 0.25;
            let hedge_rect = Footprint {
                min_x: cx - cross_length / 2.0,
                min_y: cross_y - hedge_w / 2.0,
                max_x: cx + cross_length / 2.0,
                max_y: cross_y + hedge_w / 2.0,
            };
            if !building_rects
                .iter()
                .any(|r| rects_overlap(&hedge_rect, r, BUILDING_MARGIN))
            {
                features.push(GardenPlacement {
                    x: cx,
                    y: cross_y,
                    rotation: 0.0,
                    feature: GardenFeature::Hedge {
                        length: cross_length,
                        height: hedge_h,
                        width: hedge_w,
                    },
                });
            }
        }
    }
}

/// Poisson-disk dart throwing: sample, reject on spacing or exclusion,
/// accept until the density cap or the attempt budget runs out.
///
/// No grid acceleration; at this feature count (at most ~20 trees) the
/// quadratic neighbor check is nothing.
fn place_trees(
    theme: &GardenTheme,
    lot_width: f64,
    lot_depth: f64,
    road_width: f64,
    building_rects: &[Footprint],
    features: &mut Vec<GardenPlacement>,
    rng: &mut StdRng,
) {
    if theme.tree_density <= 0.01 {
        return;
    }

    let min_spacing = (12.0 * (1.0 - theme.tree_density)).max(4.0);
    let max_trees = ((theme.tree_density * 20.0) as u32).max(2);

    // Buildings plus already-placed pool/terrace are exclusion zones.
    let mut exclusions: Vec<Footprint> = building_rects.to_vec();
    for f in features.iter() {
        match &f.feature {
            GardenFeature::Pool { width, depth, .. } => exclusions.push(Footprint {
                min_x: f.x - width / 2.0 - 2.0,
                min_y: f.y - depth / 2.0 - 2.0,
                max_x: f.x + width / 2.0 + 2.0,
                max_y: f.y + depth / 2.0 + 2.0,
            }),
            GardenFeature::Terrace { width, depth, .. } => exclusions.push(Footprint {
                min_x: f.x - width / 2.0 - 1.0,
                min_y: f.y - depth / 2.0 - 1.0,
                max_x: f.x + width / 2.0 + 1.0,
                max_y: f.y + depth / 2.0 + 1.0,
            }),
            _ => {}
        }
    }

    let x_min = -lot_width / 2.0 + 2.0;
    let x_max = lot_width / 2.0 - 2.0;
    let y_min = road_width + 2.0;
    let y_max = lot_depth - 2.0;
    if x_max <= x_min || y_max <= y_min {
        return;
    }

    let mut placed: Vec<(f64, f64)> = Vec::new();
    for _ in 0..max_trees {
        for _ in 0..TREE_ATTEMPTS {
            let tx = rng.random_range(x_min..x_max);
            let ty = rng.random_range(y_min..y_max);

            let too_close = placed
                .iter()
                .any(|&(px, py)| ((tx - px).powi(2) + (ty - py).powi(2)).sqrt() < min_spacing);
            if too_close {
                continue;
            }

            let excluded = exclusions
                .iter()
                .any(|rect| contains(rect, tx, ty, BUILDING_MARGIN));
            if excluded {
                continue;
            }

            placed.push((tx, ty));
            let height = rng.random_range(3.5..5.5);
            features.push(GardenPlacement {
                x: tx,
                y: ty,
                rotation: 0.0,
                feature: GardenFeature::Tree {
                    kind: theme.tree_kind,
                    height,
                },
            });
            break;
        }
    }
}
