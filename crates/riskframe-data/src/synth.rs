//! Placeholder risk panel synthesis.
//!
//! Simulates portfolio risk data with labels. The values are placeholders
//! for a real risk decomposition: cell (i, j, k) gets `value = i * j * k`,
//! `asset = "Asset {i+1}"`, `risk_factor = "Risk Factor {j+1}"` and
//! `time_period = 2022 + k`.

use crate::grid::RiskGrid;
use crate::sample::RiskSample;
use ndarray::Array3;

/// Calendar year assigned to time index zero.
pub const BASE_YEAR: i32 = 2022;

/// Output of [`synthesize`]: the populated grid plus the per-cell label
/// projections, taken in population order.
///
/// The projections carry one entry per cell (length `a * r * t` each), not
/// one per distinct axis value. Axis ticking wants the deduplicated
/// sequences from [`RiskGrid::axis_labels`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// The populated risk panel.
    pub grid: RiskGrid,

    /// `asset` field of every cell, in iteration order.
    pub asset_labels: Vec<String>,

    /// `risk_factor` field of every cell, in iteration order.
    pub risk_factor_labels: Vec<String>,

    /// `time_period` field of every cell, in iteration order.
    pub time_period_labels: Vec<i32>,
}

/// Simulate a risk panel of the given dimensions.
///
/// Cells are populated in ascending (asset, risk_factor, time_period)
/// index order, time period innermost. A zero in any dimension yields an
/// empty grid and empty projections; that is degenerate, not an error.
pub fn synthesize(
    num_assets: usize,
    num_risk_factors: usize,
    num_time_periods: usize,
) -> Synthesis {
    let shape = (num_assets, num_risk_factors, num_time_periods);
    let cells = Array3::from_shape_fn(shape, |(i, j, k)| {
        RiskSample::new(
            format!("Asset {}", i + 1),
            format!("Risk Factor {}", j + 1),
            BASE_YEAR + k as i32,
            (i * j * k) as f64,
        )
    });
    let grid = RiskGrid::from_cells(cells);

    Synthesis {
        asset_labels: grid.asset_projection(),
        risk_factor_labels: grid.risk_factor_projection(),
        time_period_labels: grid.time_period_projection(),
        grid,
    }
}
