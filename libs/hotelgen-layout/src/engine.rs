//! Layout engine: dispatches to strategy functions and validates results.

use hotelgen_core::{BuildingPlacement, ComplexParams, GenError, Role};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::placement::{any_overlaps, compute_lot_bounds};
use crate::strategies::{strategy_by_name, SizeHints, StrategyInput, STRATEGY_NAMES};

/// Default base building dimensions the strategies size roles against.
const BASE_WIDTH: f64 = 30.0;
const BASE_DEPTH: f64 = 25.0;
const BASE_FLOORS: u32 = 4;
const FLOOR_HEIGHT: f64 = 5.0;

/// Computes building placements for a complex.
#[derive(Debug, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    /// Computes placements for a complex.
    ///
    /// Caller-supplied explicit placements are overlap-checked and returned
    /// as-is. Otherwise the named strategy runs (default "row"), and the
    /// result is re-validated: pairwise non-overlap, and lot fit when the
    /// caller specified a lot size. Failures raise `InvalidParams` rather
    /// than silently clipping.
    pub fn compute_layout(
        &self,
        params: &ComplexParams,
        strategy: Option<&str>,
        roles: Option<&[Role]>,
        size_hints: Option<&SizeHints>,
    ) -> Result<Vec<BuildingPlacement>, GenError> {
        if let Some(placements) = &params.placements {
            if any_overlaps(placements, 0.0) {
                return Err(GenError::invalid_params(
                    "Provided placements have overlapping buildings",
                ));
            }
            return Ok(placements.clone());
        }

        let strategy_name = strategy.unwrap_or("row");
        let strategy_fn = strategy_by_name(strategy_name).ok_or_else(|| {
            GenError::invalid_params(format!(
                "Unknown layout strategy '{strategy_name}'. Valid: {}",
                STRATEGY_NAMES.join(", ")
            ))
        })?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let input = StrategyInput {
            num_buildings: params.num_buildings,
            base_width: BASE_WIDTH,
            base_depth: BASE_DEPTH,
            base_floors: BASE_FLOORS,
            floor_height: FLOOR_HEIGHT,
            spacing: params.building_spacing,
            roles,
            size_hints,
        };
        let placements = strategy_fn(&input, &mut rng);

        if any_overlaps(&placements, 0.0) {
            return Err(GenError::invalid_params(format!(
                "Layout strategy '{strategy_name}' produced overlapping buildings"
            )));
        }

        if let (Some(lot_width), Some(lot_depth)) = (params.lot_width, params.lot_depth) {
            let (needed_w, needed_d) = compute_lot_bounds(&placements, 0.0);
            if needed_w > lot_width || needed_d > lot_depth {
                return Err(GenError::invalid_params(format!(
                    "Buildings don't fit in lot ({needed_w:.1}x{needed_d:.1}mm exceeds \
                     {lot_width}x{lot_depth}mm)"
                )));
            }
        }

        Ok(placements)
    }
}
