//! Provider registry.
//!
//! Routes a market identifier to the first provider that recognizes it.

use std::sync::Arc;

use log::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::QuoteUpdate;
use crate::provider::coingecko::CoinGeckoProvider;
use crate::provider::justetf::JustEtfProvider;
use crate::provider::QuoteProviderTrait;

/// Ordered collection of quote providers.
///
/// Providers are consulted in registration order; the first one whose
/// `supports` check matches the identifier handles the fetch. Manual
/// assets never reach the registry - the caller echoes their stored price.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn QuoteProviderTrait>>,
}

impl ProviderRegistry {
    /// Builds a registry with the given providers, consulted in order.
    pub fn new(providers: Vec<Arc<dyn QuoteProviderTrait>>) -> Self {
        Self { providers }
    }

    /// Fetches the latest quote for an identifier via the first matching
    /// provider.
    pub async fn get_latest_quote(&self, identifier: &str) -> Result<QuoteUpdate, MarketDataError> {
        let provider = self
            .providers
            .iter()
            .find(|p| p.supports(identifier))
            .ok_or_else(|| MarketDataError::UnsupportedIdentifier(identifier.to_string()))?;

        debug!("Fetching quote for {} via {}", identifier, provider.id());
        match provider.get_latest_quote(identifier).await {
            Ok(quote) => Ok(quote),
            Err(e) => {
                warn!("Quote fetch for {} via {} failed: {}", identifier, provider.id(), e);
                Err(e)
            }
        }
    }
}

impl Default for ProviderRegistry {
    /// Default registry: JustETF for ISIN-shaped identifiers, CoinGecko
    /// for coin ids.
    fn default() -> Self {
        Self::new(vec![
            Arc::new(JustEtfProvider::new()),
            Arc::new(CoinGeckoProvider::new()),
        ])
    }
}
