//! JustETF quote provider.
//!
//! Fetches the latest quote for an ETF or fund by ISIN from the public
//! JustETF quote endpoint. Quotes are requested in EUR.
//!
//! The endpoint rejects requests without a browser-like User-Agent, so one
//! is sent explicitly.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::QuoteUpdate;
use crate::provider::QuoteProviderTrait;

/// Provider ID constant
const PROVIDER_ID: &str = "JUSTETF";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent to JustETF; the API blocks the default reqwest agent.
const USER_AGENT: &str = "Mozilla/5.0";

lazy_static! {
    /// ISIN shape: exactly 12 alphanumeric characters.
    static ref ISIN_RE: Regex = Regex::new(r"^(?i)[A-Z0-9]{12}$").expect("valid ISIN regex");
}

/// Response from the JustETF quote endpoint.
///
/// Only `latestQuote.raw` is used; the rest of the payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JustEtfQuoteResponse {
    latest_quote: Option<LatestQuote>,
}

#[derive(Debug, Deserialize)]
struct LatestQuote {
    raw: RawPrice,
}

/// The endpoint has been observed returning `raw` both as a JSON number
/// and as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawPrice::Number(n) => Decimal::try_from(*n).ok(),
            RawPrice::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// JustETF quote provider for ETFs and funds identified by ISIN.
pub struct JustEtfProvider {
    client: Client,
    base_url: String,
}

impl JustEtfProvider {
    pub fn new() -> Self {
        Self::with_base_url("https://www.justetf.com/api/etfs")
    }

    /// Overrides the endpoint base URL. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Whether the identifier has the shape of an ISIN.
    pub fn is_isin(identifier: &str) -> bool {
        ISIN_RE.is_match(identifier.trim())
    }
}

impl Default for JustEtfProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProviderTrait for JustEtfProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn supports(&self, identifier: &str) -> bool {
        Self::is_isin(identifier)
    }

    async fn get_latest_quote(&self, identifier: &str) -> Result<QuoteUpdate, MarketDataError> {
        let isin = identifier.trim().to_uppercase();
        if !Self::is_isin(&isin) {
            return Err(MarketDataError::UnsupportedIdentifier(identifier.to_string()));
        }

        let url = format!(
            "{}/{}/quote?locale=it&currency=EUR&isin={}",
            self.base_url,
            urlencoding::encode(&isin),
            urlencoding::encode(&isin)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: JustEtfQuoteResponse = response.json().await?;
        let quote = body
            .latest_quote
            .ok_or_else(|| MarketDataError::NoData(isin.clone()))?;
        let price = quote
            .raw
            .to_decimal()
            .ok_or_else(|| MarketDataError::Parse(format!("unparseable quote for {}", isin)))?;

        Ok(QuoteUpdate::now(price, "EUR", PROVIDER_ID))
    }
}
