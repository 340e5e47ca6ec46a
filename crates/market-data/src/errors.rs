//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quotes.
///
/// A failed quote fetch is never fatal to the portfolio core: callers treat
/// any of these as "price unknown" for the current cycle and move on.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// No provider recognizes the identifier (e.g. not an ISIN, not a
    /// known crypto id). Terminal - retrying won't help.
    #[error("Unsupported identifier: {0}")]
    UnsupportedIdentifier(String),

    /// The provider responded but had no usable quote for the identifier.
    #[error("No quote data for {0}")]
    NoData(String),

    /// The HTTP request itself failed (network, TLS, timeout).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider returned a non-success HTTP status.
    #[error("Provider error: {provider} returned status {status}")]
    ProviderStatus {
        /// The provider that returned the error
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider response could not be parsed.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::Parse(err.to_string())
    }
}
