use super::assets_model::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Creates or updates an asset; matching is by identifier
    /// (case-insensitive).
    async fn upsert_asset(&self, input: NewAsset) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
    /// Fetches fresh prices for every non-manual asset and persists the
    /// updated collection. Fetch failures leave the prior price in place.
    async fn refresh_quotes(&self) -> Result<Vec<Asset>>;
}

/// Trait defining the contract for Asset repository operations.
///
/// Implemented by the application's storage layer; the core neither knows
/// nor cares about the storage medium.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Asset>>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Replaces the stored collection with the given one, preserving order.
    async fn save_all(&self, assets: Vec<Asset>) -> Result<()>;
}
