//! Rebalance plan models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-asset entry of the monthly accumulation plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceAction {
    pub id: String,
    pub name: String,
    /// Market identifier (ISIN or coin id), for display
    pub identifier: String,
    /// Current share of portfolio value, 0-100
    pub current_weight: Decimal,
    /// Normalized target share, 0-100
    pub target_weight: Decimal,
    /// Currency gap to target: positive = underweight, needs buying
    pub delta_value: Decimal,
    /// Units needed to close the gap; `None` when the price is unknown
    /// (a currency gap cannot be translated to a share count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_delta: Option<Decimal>,
    /// Last known price, carried for quantity derivation and display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_price: Option<Decimal>,
    /// Cash to spend on this asset this month (>= 0, 2 decimal places)
    pub monthly_buy_amount: Decimal,
    /// Units the monthly amount buys; `None` when the price is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_buy_quantity: Option<Decimal>,
}

/// The monthly accumulation plan for the whole portfolio.
///
/// Invariant: the monthly buy amounts sum to `monthly_budget` within the
/// rounding tolerance, and no amount is negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalancePlan {
    pub actions: Vec<RebalanceAction>,
    pub monthly_budget: Decimal,
}

impl RebalancePlan {
    /// Plan for a portfolio with no priced holdings: nothing to steer.
    pub fn empty(monthly_budget: Decimal) -> Self {
        Self {
            actions: Vec::new(),
            monthly_budget,
        }
    }
}
