//! Weight models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current and desired portfolio share of one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetWeight {
    pub id: String,
    pub name: String,
    /// Current market value (0 when the price is unknown)
    pub value: Decimal,
    /// Current share of total portfolio value, 0-100
    /// (0 when the total is not positive)
    pub weight: Decimal,
    /// Raw investor-entered target weight, as displayed
    pub target: Decimal,
}
