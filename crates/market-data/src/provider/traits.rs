//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::QuoteUpdate;

/// Trait for quote providers.
///
/// Implement this trait to add support for a new market data source.
/// The registry asks each provider whether it recognizes an identifier
/// (`supports`) and forwards the fetch to the first one that does.
#[async_trait]
pub trait QuoteProviderTrait: Send + Sync {
    /// Unique identifier for this provider, e.g. "JUSTETF".
    /// Used for logging and for stamping quote updates.
    fn id(&self) -> &'static str;

    /// Whether this provider recognizes the given market identifier.
    ///
    /// This is a purely syntactic check (identifier shape), not a lookup:
    /// a provider may still return [`MarketDataError::NoData`] for an
    /// identifier it claims to support.
    fn supports(&self, identifier: &str) -> bool;

    /// Fetch the latest quote for a market identifier.
    async fn get_latest_quote(&self, identifier: &str) -> Result<QuoteUpdate, MarketDataError>;
}
