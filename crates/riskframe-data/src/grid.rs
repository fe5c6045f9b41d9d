//! Dense three-dimensional container for synthesized risk samples.
//!
//! A [`RiskGrid`] owns an `Array3<RiskSample>` of shape
//! `(num_assets, num_risk_factors, num_time_periods)`. Two different label
//! views exist over it:
//!
//! - the per-cell *projections* ([`RiskGrid::asset_projection`] and
//!   friends), one entry per populated cell in iteration order, and
//! - the deduplicated per-axis sequences ([`RiskGrid::axis_labels`]), one
//!   entry per distinct axis value.
//!
//! The chart layer ticks its axes from the latter; the former exist so the
//! synthesis contract can hand back a field-wise projection of the whole
//! panel.

use crate::sample::RiskSample;
use derive_more::Display;
use ndarray::Array3;

/// The three axes of a risk grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridAxis {
    /// The asset axis (outermost).
    #[display("assets")]
    Assets,

    /// The risk factor axis.
    #[display("risk factors")]
    RiskFactors,

    /// The time period axis (innermost).
    #[display("time periods")]
    TimePeriods,
}

/// Deduplicated axis label sequences, one entry per distinct axis value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AxisLabels {
    /// Distinct asset labels in ascending asset-index order.
    pub assets: Vec<String>,

    /// Distinct risk factor labels in ascending factor-index order.
    pub risk_factors: Vec<String>,

    /// Distinct calendar years in ascending time-index order.
    pub time_periods: Vec<i32>,
}

/// Dense panel of [`RiskSample`] cells.
///
/// Invariant: every cell is populated exactly once, in ascending
/// (asset, risk_factor, time_period) index order. The wrapped array is
/// row-major, so plain iteration visits cells in that same order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskGrid {
    cells: Array3<RiskSample>,
}

impl RiskGrid {
    /// Wrap a fully populated cell array.
    pub(crate) const fn from_cells(cells: Array3<RiskSample>) -> Self {
        Self { cells }
    }

    /// Grid shape as `(num_assets, num_risk_factors, num_time_periods)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at the given index triple, if in bounds.
    pub fn get(&self, asset: usize, risk_factor: usize, time_period: usize) -> Option<&RiskSample> {
        self.cells.get((asset, risk_factor, time_period))
    }

    /// Iterate over cells in ascending (asset, risk_factor, time_period)
    /// index order.
    pub fn iter(&self) -> impl Iterator<Item = &RiskSample> {
        self.cells.iter()
    }

    /// The `value` field of every cell, same shape as the grid.
    pub fn values(&self) -> Array3<f64> {
        self.cells.map(|sample| sample.value)
    }

    /// The `asset` field of every cell, one entry per cell in iteration
    /// order. Length is `num_cells()`, not `num_assets`.
    pub fn asset_projection(&self) -> Vec<String> {
        self.iter().map(|sample| sample.asset.clone()).collect()
    }

    /// The `risk_factor` field of every cell, one entry per cell.
    pub fn risk_factor_projection(&self) -> Vec<String> {
        self.iter().map(|sample| sample.risk_factor.clone()).collect()
    }

    /// The `time_period` field of every cell, one entry per cell.
    pub fn time_period_projection(&self) -> Vec<i32> {
        self.iter().map(|sample| sample.time_period).collect()
    }

    /// Deduplicated per-axis label sequences, first occurrence wins.
    ///
    /// Lengths match the grid shape; a degenerate empty grid yields three
    /// empty sequences.
    pub fn axis_labels(&self) -> AxisLabels {
        let mut labels = AxisLabels::default();
        for sample in self.iter() {
            if !labels.assets.contains(&sample.asset) {
                labels.assets.push(sample.asset.clone());
            }
            if !labels.risk_factors.contains(&sample.risk_factor) {
                labels.risk_factors.push(sample.risk_factor.clone());
            }
            if !labels.time_periods.contains(&sample.time_period) {
                labels.time_periods.push(sample.time_period);
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize;

    #[test]
    fn test_shape_and_cell_count() {
        let grid = synthesize(3, 2, 2).grid;

        assert_eq!(grid.shape(), (3, 2, 2));
        assert_eq!(grid.num_cells(), 12);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = synthesize(2, 2, 2).grid;

        assert!(grid.get(1, 1, 1).is_some());
        assert!(grid.get(2, 0, 0).is_none());
        assert!(grid.get(0, 2, 0).is_none());
        assert!(grid.get(0, 0, 2).is_none());
    }

    #[test]
    fn test_iteration_order_is_time_innermost() {
        let grid = synthesize(2, 2, 2).grid;
        let periods: Vec<i32> = grid.iter().map(|s| s.time_period).collect();

        // Time period varies fastest, then risk factor, then asset.
        assert_eq!(periods, vec![2022, 2023, 2022, 2023, 2022, 2023, 2022, 2023]);

        let assets: Vec<&str> = grid.iter().map(|s| s.asset.as_str()).collect();
        assert_eq!(&assets[..4], &["Asset 1"; 4]);
        assert_eq!(&assets[4..], &["Asset 2"; 4]);
    }

    #[test]
    fn test_values_projection_shape() {
        let grid = synthesize(3, 2, 2).grid;
        let values = grid.values();

        assert_eq!(values.dim(), (3, 2, 2));
        assert_eq!(values[[2, 1, 1]], 2.0);
    }

    #[test]
    fn test_axis_labels_deduplicate() {
        let grid = synthesize(3, 2, 2).grid;
        let labels = grid.axis_labels();

        assert_eq!(labels.assets, vec!["Asset 1", "Asset 2", "Asset 3"]);
        assert_eq!(labels.risk_factors, vec!["Risk Factor 1", "Risk Factor 2"]);
        assert_eq!(labels.time_periods, vec![2022, 2023]);
    }

    #[test]
    fn test_axis_labels_empty_grid() {
        let grid = synthesize(0, 2, 2).grid;
        let labels = grid.axis_labels();

        assert!(labels.assets.is_empty());
        assert!(labels.risk_factors.is_empty());
        assert!(labels.time_periods.is_empty());
    }

    #[test]
    fn test_grid_axis_display() {
        assert_eq!(GridAxis::Assets.to_string(), "assets");
        assert_eq!(GridAxis::RiskFactors.to_string(), "risk factors");
        assert_eq!(GridAxis::TimePeriods.to_string(), "time periods");
    }
}
