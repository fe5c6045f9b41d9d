//! Individual cells of the synthesized risk panel.

use serde::{Deserialize, Serialize};

/// One observation in the risk panel, keyed by the
/// (asset, risk factor, time period) index triple that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskSample {
    /// Asset label, e.g. `"Asset 1"`.
    pub asset: String,

    /// Risk factor label, e.g. `"Risk Factor 1"`.
    pub risk_factor: String,

    /// Calendar year of the observation.
    pub time_period: i32,

    /// Simulated risk value for the cell.
    pub value: f64,
}

impl RiskSample {
    /// Create a new risk sample.
    pub const fn new(asset: String, risk_factor: String, time_period: i32, value: f64) -> Self {
        Self {
            asset,
            risk_factor,
            time_period,
            value,
        }
    }
}
