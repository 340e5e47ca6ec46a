//! Projection models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to the growth projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssumptions {
    /// Portfolio value at the start of the horizon (>= 0); counted as
    /// already-invested capital at month 0
    pub starting_value: Decimal,
    /// Constant cash added every month (>= 0)
    pub monthly_contribution: Decimal,
    /// Assumed annual return, in percent (may be 0 or negative)
    pub annual_return_pct: Decimal,
    /// Horizon in whole years (>= 1)
    pub years: u32,
}

/// One yearly sample of the projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Elapsed years, 0..=horizon
    pub year: u32,
    /// Cumulative invested capital (contributions are never withdrawn,
    /// so this track never decreases)
    pub invested: Decimal,
    /// Compounded total value
    pub total: Decimal,
}

/// The full projection series plus its closing figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Yearly samples including year 0; length = horizon + 1
    pub points: Vec<ProjectionPoint>,
    /// Final total value minus final invested capital
    pub gain: Decimal,
    /// Gain over invested capital, in percent (0 when nothing invested)
    pub roi_pct: Decimal,
}
