//! Quote domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A freshly fetched price for a single instrument.
///
/// This is the only thing the portfolio core ever learns from a provider:
/// a price, the currency it is quoted in, and when it was observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteUpdate {
    /// Last known price per unit
    pub price: Decimal,
    /// Quote currency (e.g. "EUR")
    pub currency: String,
    /// When the quote was observed
    pub timestamp: DateTime<Utc>,
    /// Provider the quote came from (e.g. "JUSTETF", "COINGECKO", "MANUAL")
    pub provider: String,
}

impl QuoteUpdate {
    /// Builds a quote update stamped with the current time.
    pub fn now(price: Decimal, currency: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            price,
            currency: currency.into(),
            timestamp: Utc::now(),
            provider: provider.into(),
        }
    }
}
