//! Aggregate portfolio models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One asset singled out for its performance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Performer {
    pub id: String,
    pub name: String,
    /// Per-unit performance ratio (price - cost) / cost, as a fraction
    pub perf: Decimal,
}

/// Aggregate totals over the asset collection.
///
/// `best` and `worst` are `None` (distinct from zero performance) when no
/// asset has both a price and a positive cost basis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    /// Sum of price x quantity over assets with a known price
    pub total_value: Decimal,
    /// Sum of cost basis x quantity over assets with a known cost basis
    pub total_cost: Decimal,
    /// (totalValue - totalCost) / totalCost, 0 when totalCost <= 0
    pub total_return: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Performer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst: Option<Performer>,
}

/// Market value held in one asset class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    /// Asset class tag (e.g. "ETF", "Crypto")
    pub name: String,
    /// Total market value in this class, rounded to 2 decimal places
    pub value: Decimal,
}

/// Unrealized gain contributed by one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GainContribution {
    pub name: String,
    /// (price - cost) x quantity, 0 when either side is unknown
    pub value: Decimal,
}
