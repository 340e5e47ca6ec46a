//! Asset domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pacfolio_market_data::QuoteUpdate;

use crate::errors::ValidationError;

/// Fallback asset class for assets created without one.
pub const ASSET_CLASS_UNCLASSIFIED: &str = "Unclassified";

/// A single portfolio position.
///
/// Quantity, cost basis and target weight are investor-entered; the last
/// price is either fetched from a quote provider or, for `manual` assets,
/// maintained by the investor directly. A `None` price or cost basis means
/// "unknown" and degrades dependent computations to their fallbacks - it is
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique key within the portfolio
    pub id: String,
    /// Display name
    pub name: String,
    /// Market identifier (ISIN for funds/ETFs, CoinGecko id for crypto)
    pub identifier: String,
    /// Units held (>= 0)
    pub quantity: Decimal,
    /// Quote currency
    pub currency: String,
    /// Average price paid per unit, if known
    pub cost_basis: Option<Decimal>,
    /// Desired portfolio share in percentage points; the collection does
    /// not have to sum to 100 (weights are normalized downstream)
    pub target_weight: Decimal,
    /// Last known price per unit, if any
    pub last_price: Option<Decimal>,
    /// When the last price was observed
    pub last_updated: Option<DateTime<Utc>>,
    /// Free-form asset class tag (e.g. "ETF", "Crypto", "Private equity")
    pub asset_class: String,
    /// Price is investor-supplied; providers never overwrite it
    #[serde(default)]
    pub manual: bool,
}

impl Asset {
    /// Market value of the position: price x quantity, 0 when the price
    /// is unknown.
    pub fn current_value(&self) -> Decimal {
        match self.last_price {
            Some(price) => price * self.quantity,
            None => Decimal::ZERO,
        }
    }

    /// Total cost of the position: cost basis x quantity, `None` when the
    /// cost basis is unknown.
    pub fn cost_value(&self) -> Option<Decimal> {
        self.cost_basis.map(|cost| cost * self.quantity)
    }

    /// Per-unit performance ratio (price - cost) / cost.
    ///
    /// `None` when either side is unknown or the cost basis is zero
    /// (a zero cost basis is excluded rather than divided by).
    pub fn performance_ratio(&self) -> Option<Decimal> {
        match (self.last_price, self.cost_basis) {
            (Some(price), Some(cost)) if cost > Decimal::ZERO => Some((price - cost) / cost),
            _ => None,
        }
    }

    /// Unrealized gain in currency: (price - cost) x quantity, 0 when
    /// either side is unknown.
    pub fn unrealized_gain(&self) -> Decimal {
        match (self.last_price, self.cost_basis) {
            (Some(price), Some(cost)) => (price - cost) * self.quantity,
            _ => Decimal::ZERO,
        }
    }

    /// Applies a fetched quote to this asset.
    ///
    /// Manual assets are left untouched: their price is investor-supplied.
    pub fn apply_quote(&mut self, quote: &QuoteUpdate) {
        if self.manual {
            return;
        }
        self.last_price = Some(quote.price);
        self.last_updated = Some(quote.timestamp);
        if !quote.currency.is_empty() {
            self.currency = quote.currency.clone();
        }
    }
}

/// Input model for creating or updating an asset through the form
/// boundary. Matching is by identifier: if an asset with the same
/// identifier (case-insensitive) exists it is updated, otherwise a new
/// one is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub identifier: String,
    pub quantity: Decimal,
    /// `None` keeps the existing cost basis on update (unknown on create)
    pub cost_basis: Option<Decimal>,
    /// `None` keeps the existing target weight on update (0 on create)
    pub target_weight: Option<Decimal>,
    /// `None` keeps the existing class on update ("Unclassified" on create)
    pub asset_class: Option<String>,
    #[serde(default)]
    pub manual: bool,
}

impl NewAsset {
    /// Boundary validation: non-negative numbers, required text fields.
    ///
    /// The core computations assume these bounds hold; violations here are
    /// form errors, violations past this point are upstream bugs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.identifier.trim().is_empty() {
            return Err(ValidationError::MissingField("identifier".to_string()));
        }
        if self.quantity < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "quantity",
                requirement: ">= 0",
                value: self.quantity.to_string(),
            });
        }
        if let Some(cost) = self.cost_basis {
            if cost < Decimal::ZERO {
                return Err(ValidationError::OutOfRange {
                    field: "costBasis",
                    requirement: ">= 0",
                    value: cost.to_string(),
                });
            }
        }
        if let Some(target) = self.target_weight {
            if target < Decimal::ZERO {
                return Err(ValidationError::OutOfRange {
                    field: "targetWeight",
                    requirement: ">= 0",
                    value: target.to_string(),
                });
            }
        }
        Ok(())
    }
}
