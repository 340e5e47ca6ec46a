//! Quote provider implementations and the provider trait.

pub mod coingecko;
pub mod justetf;
pub mod registry;
mod traits;

pub use traits::QuoteProviderTrait;
