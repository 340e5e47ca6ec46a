//! Pacfolio Market Data Crate
//!
//! Provider-agnostic quote fetching for the pacfolio portfolio tracker.
//!
//! The computational core never performs I/O; it only ever sees a price as
//! "known" or "unknown". This crate owns the "how do we learn a price"
//! question: each provider maps a market identifier (ISIN, CoinGecko id)
//! to a [`QuoteUpdate`], and the [`ProviderRegistry`] picks the first
//! provider that recognizes the identifier.
//!
//! Providers:
//! - [`JustEtfProvider`] - ETF/fund quotes by ISIN (EUR)
//! - [`CoinGeckoProvider`] - crypto spot prices by CoinGecko id (EUR)

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::QuoteUpdate;
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::justetf::JustEtfProvider;
pub use provider::registry::ProviderRegistry;
pub use provider::QuoteProviderTrait;
