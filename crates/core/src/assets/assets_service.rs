use log::{debug, warn};
use std::sync::Arc;

use pacfolio_market_data::ProviderRegistry;

use super::assets_model::{Asset, NewAsset, ASSET_CLASS_UNCLASSIFIED};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing the asset collection.
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
    registry: Arc<ProviderRegistry>,
}

impl AssetService {
    /// Creates a new AssetService instance.
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>, registry: Arc<ProviderRegistry>) -> Self {
        Self {
            repository,
            registry,
        }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }

    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.repository.get_by_id(asset_id)
    }

    async fn upsert_asset(&self, input: NewAsset) -> Result<Asset> {
        input.validate().map_err(Error::Validation)?;

        let mut assets = self.repository.list()?;
        let identifier = input.identifier.trim().to_string();

        let updated = match assets
            .iter_mut()
            .find(|a| a.identifier.eq_ignore_ascii_case(&identifier))
        {
            Some(existing) => {
                existing.name = input.name.trim().to_string();
                existing.quantity = input.quantity;
                // Absent fields keep their prior values on update
                if let Some(cost) = input.cost_basis {
                    existing.cost_basis = Some(cost);
                }
                if let Some(target) = input.target_weight {
                    existing.target_weight = target;
                }
                if let Some(class) = input.asset_class {
                    existing.asset_class = class;
                }
                existing.clone()
            }
            None => {
                let asset = Asset {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: input.name.trim().to_string(),
                    identifier,
                    quantity: input.quantity,
                    currency: String::new(),
                    cost_basis: input.cost_basis,
                    target_weight: input.target_weight.unwrap_or_default(),
                    last_price: None,
                    last_updated: None,
                    asset_class: input
                        .asset_class
                        .unwrap_or_else(|| ASSET_CLASS_UNCLASSIFIED.to_string()),
                    manual: input.manual,
                };
                assets.push(asset.clone());
                asset
            }
        };

        self.repository.save_all(assets).await?;
        Ok(updated)
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        let mut assets = self.repository.list()?;
        let before = assets.len();
        assets.retain(|a| a.id != asset_id);
        if assets.len() == before {
            return Err(Error::NotFound(format!("Asset {}", asset_id)));
        }
        self.repository.save_all(assets).await
    }

    async fn refresh_quotes(&self) -> Result<Vec<Asset>> {
        let mut assets = self.repository.list()?;

        for asset in assets.iter_mut() {
            // Manual prices are investor-supplied; never fetched.
            if asset.manual {
                continue;
            }
            match self.registry.get_latest_quote(&asset.identifier).await {
                Ok(quote) => {
                    debug!(
                        "Refreshed {} ({}): {} {}",
                        asset.name, asset.identifier, quote.price, quote.currency
                    );
                    asset.apply_quote(&quote);
                }
                Err(e) => {
                    // Degrade to the prior price; the core treats the asset
                    // as "price unknown" only if it never had one.
                    warn!("Keeping prior price for {}: {}", asset.identifier, e);
                }
            }
        }

        self.repository.save_all(assets.clone()).await?;
        Ok(assets)
    }
}
