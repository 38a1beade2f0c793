//! Layout strategy functions for positioning buildings in a complex.
//!
//! Each strategy is a pure function of its input record plus a seeded rng;
//! identical inputs reproduce identical placements.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use hotelgen_core::{BuildingPlacement, Role};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-role sizing multipliers from a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleSize {
    pub width: f64,
    pub depth: f64,
    pub floors: f64,
}

/// Preset size hints, keyed by role.
pub type SizeHints = BTreeMap<Role, RoleSize>;

/// Common input to every strategy.
#[derive(Debug, Clone)]
pub struct StrategyInput<'a> {
    pub num_buildings: u32,
    pub base_width: f64,
    pub base_depth: f64,
    pub base_floors: u32,
    pub floor_height: f64,
    pub spacing: f64,
    pub roles: Option<&'a [Role]>,
    pub size_hints: Option<&'a SizeHints>,
}

/// A layout strategy function.
pub type StrategyFn = fn(&StrategyInput, &mut StdRng) -> Vec<BuildingPlacement>;

/// Valid strategy names, in display order.
pub const STRATEGY_NAMES: [&str; 6] = [
    "row",
    "courtyard",
    "hierarchical",
    "cluster",
    "campus",
    "l_layout",
];

/// Resolves a strategy by name.
pub fn strategy_by_name(name: &str) -> Option<StrategyFn> {
    match name {
        "row" => Some(row_layout),
        "courtyard" => Some(courtyard_layout),
        "hierarchical" => Some(hierarchical_layout),
        "cluster" => Some(cluster_layout),
        "campus" => Some(campus_layout),
        "l_layout" => Some(l_layout),
        _ => None,
    }
}

/// Role-based sizing multipliers: (width, depth, floors).
///
/// Asymmetric width/depth factors give more rectangular, varied shapes.
fn role_sizing(role: Role) -> (f64, f64, f64) {
    match role {
        Role::Main => (1.0, 0.85, 1.0),
        Role::Wing => (0.8, 0.55, 0.85),
        Role::Annex => (0.55, 0.45, 0.75),
        Role::Tower => (0.35, 0.35, 2.5),
        Role::Pavilion => (0.45, 0.35, 0.5),
    }
}

/// Applies role sizing (preset hints override the default table).
fn sized(input: &StrategyInput, role: Role) -> (f64, f64, u32, f64) {
    let (wf, df, ff) = match input.size_hints.and_then(|hints| hints.get(&role)) {
        Some(hint) => (hint.width, hint.depth, hint.floors),
        None => role_sizing(role),
    };
    let floors = ((input.base_floors as f64 * ff) as u32).max(2);
    (
        input.base_width * wf,
        input.base_depth * df,
        floors,
        input.floor_height,
    )
}

/// Default role assignment: main, up to two wings, annexes after.
fn default_roles(num_buildings: u32, roles: Option<&[Role]>) -> Vec<Role> {
    if let Some(roles) = roles {
        return roles.iter().copied().take(num_buildings as usize).collect();
    }
    let mut result = vec![Role::Main];
    for i in 1..num_buildings {
        result.push(if i <= 2 { Role::Wing } else { Role::Annex });
    }
    result
}

fn placement(
    x: f64,
    y: f64,
    rotation: f64,
    (width, depth, num_floors, floor_height): (f64, f64, u32, f64),
    role: Role,
) -> BuildingPlacement {
    BuildingPlacement {
        x,
        y,
        rotation,
        width,
        depth,
        num_floors,
        floor_height,
        role,
    }
}

/// Buildings in a row along the X axis.
pub fn row_layout(input: &StrategyInput, _rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = default_roles(input.num_buildings, input.roles);
    let sizes: Vec<_> = roles.iter().map(|&r| (sized(input, r), r)).collect();

    let total_width: f64 = sizes.iter().map(|(s, _)| s.0).sum::<f64>()
        + input.spacing * (input.num_buildings.saturating_sub(1)) as f64;
    let mut x = -total_width / 2.0;

    let mut placements = Vec::new();
    for (size, role) in sizes {
        placements.push(placement(x + size.0 / 2.0, 0.0, 0.0, size, role));
        x += size.0 + input.spacing;
    }
    placements
}

/// Buildings arranged around a courtyard (U or C shape).
pub fn courtyard_layout(input: &StrategyInput, _rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = default_roles(input.num_buildings, input.roles);
    let mut placements = Vec::new();

    // Main building at the back
    let main = sized(input, roles[0]);
    let (w0, d0) = (main.0, main.1);
    placements.push(placement(0.0, d0 / 2.0 + input.spacing / 2.0, 0.0, main, roles[0]));

    if input.num_buildings >= 2 {
        // Left wing, rotated to face the courtyard
        let wing = sized(input, roles[1]);
        placements.push(placement(
            -w0 / 2.0 - input.spacing / 2.0 - wing.1 / 2.0,
            0.0,
            90.0,
            wing,
            roles[1],
        ));
    }

    if input.num_buildings >= 3 {
        // Right wing
        let wing = sized(input, roles[2]);
        placements.push(placement(
            w0 / 2.0 + input.spacing / 2.0 + wing.1 / 2.0,
            0.0,
            90.0,
            wing,
            roles[2],
        ));
    }

    if input.num_buildings >= 4 {
        // Front building closes the courtyard
        let front = sized(input, roles[3]);
        placements.push(placement(
            0.0,
            -front.1 / 2.0 - input.spacing / 2.0,
            0.0,
            front,
            roles[3],
        ));
    }

    // Overflow buildings go behind the main block
    for i in 4..input.num_buildings as usize {
        let extra = sized(input, roles[i]);
        let extra_idx = (i - 4) as f64;
        let y = d0 / 2.0 + input.spacing / 2.0 + d0 + input.spacing + extra.1 / 2.0
            + extra_idx * (extra.1 + input.spacing);
        placements.push(placement(0.0, y, 0.0, extra, roles[i]));
    }

    placements
}

/// One dominant building with symmetric, slightly set-back flanks.
pub fn hierarchical_layout(input: &StrategyInput, _rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = default_roles(input.num_buildings, input.roles);
    let mut placements = Vec::new();

    let main = sized(input, roles[0]);
    let w0 = main.0;
    placements.push(placement(0.0, 0.0, 0.0, main, roles[0]));

    for i in 1..input.num_buildings as usize {
        let size = sized(input, roles[i]);
        let side = if i % 2 == 1 { -1.0 } else { 1.0 };
        let pair_idx = ((i + 1) / 2) as f64;
        let x = side * (w0 / 2.0 + input.spacing + size.0 / 2.0) * pair_idx;
        let y = size.1 * 0.2 * pair_idx;
        placements.push(placement(x, y, 0.0, size, roles[i]));
    }

    placements
}

/// Main building with pavilions scattered in a ring around it.
pub fn cluster_layout(input: &StrategyInput, rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = match input.roles {
        Some(roles) => roles.iter().copied().take(input.num_buildings as usize).collect(),
        None => {
            let mut r = vec![Role::Main];
            r.extend(std::iter::repeat(Role::Pavilion).take(input.num_buildings as usize - 1));
            r
        }
    };

    let mut placements = Vec::new();
    let main = sized(input, roles[0]);
    let (w0, d0) = (main.0, main.1);
    placements.push(placement(0.0, 0.0, 0.0, main, roles[0]));

    let pav_sizes: Vec<_> = roles[1..].iter().map(|&r| (sized(input, r), r)).collect();
    let max_pav = pav_sizes
        .iter()
        .map(|(s, _)| s.0.max(s.1))
        .fold(0.0, f64::max);
    let radius = w0.max(d0) / 2.0 + max_pav / 2.0 + input.spacing * 2.0;

    // The one seeded draw: where around the ring the scatter starts.
    let angle_start = rng.random_range(0.0..PI / 4.0);
    let ring_count = (input.num_buildings - 1).max(1) as f64;
    for (i, (size, role)) in pav_sizes.into_iter().enumerate() {
        let angle = angle_start + 2.0 * PI * i as f64 / ring_count;
        placements.push(placement(
            radius * angle.cos(),
            radius * angle.sin(),
            0.0,
            size,
            role,
        ));
    }

    placements
}

/// Evenly spaced grid arrangement.
pub fn campus_layout(input: &StrategyInput, _rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = default_roles(input.num_buildings, input.roles);
    let sizes: Vec<_> = roles.iter().map(|&r| (sized(input, r), r)).collect();

    let cols = (input.num_buildings as f64).sqrt().ceil() as usize;
    let rows = (input.num_buildings as usize).div_ceil(cols);

    let max_w = sizes.iter().map(|(s, _)| s.0).fold(0.0, f64::max);
    let max_d = sizes.iter().map(|(s, _)| s.1).fold(0.0, f64::max);
    let cell_w = max_w + input.spacing;
    let cell_d = max_d + input.spacing;
    let total_w = cols as f64 * cell_w - input.spacing;
    let total_d = rows as f64 * cell_d - input.spacing;

    let mut placements = Vec::new();
    for (idx, (size, role)) in sizes.into_iter().enumerate() {
        let row = idx / cols;
        let col = idx % cols;
        let x = -total_w / 2.0 + col as f64 * cell_w + cell_w / 2.0 - input.spacing / 2.0;
        let y = -total_d / 2.0 + row as f64 * cell_d + cell_d / 2.0 - input.spacing / 2.0;
        placements.push(placement(x, y, 0.0, size, role));
    }

    placements
}

/// Buildings in an L-shaped arrangement: a corner plus two arms.
pub fn l_layout(input: &StrategyInput, _rng: &mut StdRng) -> Vec<BuildingPlacement> {
    let roles = default_roles(input.num_buildings, input.roles);
    let sizes: Vec<_> = roles.iter().map(|&r| (sized(input, r), r)).collect();

    let mut placements = Vec::new();
    let (corner, corner_role) = sizes[0];
    let (w0, d0) = (corner.0, corner.1);
    placements.push(placement(0.0, 0.0, 0.0, corner, corner_role));

    // Odd indices go along X, even along Y
    let mut x_pos = w0 / 2.0 + input.spacing;
    let mut y_pos = d0 / 2.0 + input.spacing;
    for (i, (size, role)) in sizes.into_iter().enumerate().skip(1) {
        if i % 2 == 1 {
            placements.push(placement(x_pos + size.0 / 2.0, 0.0, 0.0, size, role));
            x_pos += size.0 + input.spacing;
        } else {
            placements.push(placement(0.0, y_pos + size.1 / 2.0, 0.0, size, role));
            y_pos += size.1 + input.spacing;
        }
    }

    placements
}
