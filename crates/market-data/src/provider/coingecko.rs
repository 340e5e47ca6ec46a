//! CoinGecko quote provider.
//!
//! Fetches crypto spot prices in EUR from the CoinGecko "simple price"
//! endpoint. Identifiers are CoinGecko coin ids (e.g. "bitcoin").

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::QuoteUpdate;
use crate::provider::QuoteProviderTrait;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CoinGecko quote provider for crypto assets.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url("https://api.coingecko.com/api/v3")
    }

    /// Overrides the endpoint base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Whether the identifier has the shape of a CoinGecko coin id:
    /// lowercase ASCII letters, digits and dashes (e.g. "bitcoin",
    /// "ethereum-classic").
    pub fn is_coin_id(identifier: &str) -> bool {
        let id = identifier.trim();
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProviderTrait for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn supports(&self, identifier: &str) -> bool {
        Self::is_coin_id(identifier)
    }

    async fn get_latest_quote(&self, identifier: &str) -> Result<QuoteUpdate, MarketDataError> {
        let coin_id = identifier.trim();
        if !Self::is_coin_id(coin_id) {
            return Err(MarketDataError::UnsupportedIdentifier(identifier.to_string()));
        }

        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=eur",
            self.base_url,
            urlencoding::encode(coin_id)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        // Response shape: {"bitcoin": {"eur": 12345.67}}
        let body: HashMap<String, HashMap<String, Decimal>> = response.json().await?;
        let price = body
            .get(coin_id)
            .and_then(|prices| prices.get("eur"))
            .copied()
            .ok_or_else(|| MarketDataError::NoData(coin_id.to_string()))?;

        Ok(QuoteUpdate::now(price, "EUR", PROVIDER_ID))
    }
}
