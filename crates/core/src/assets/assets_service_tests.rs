//! Unit tests for the asset service, backed by an in-memory repository
//! and a stub quote provider.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pacfolio_market_data::{
    MarketDataError, ProviderRegistry, QuoteProviderTrait, QuoteUpdate,
};

use super::*;
use crate::errors::{Error, Result};

#[derive(Default)]
struct MemoryRepository {
    assets: Mutex<Vec<Asset>>,
}

#[async_trait::async_trait]
impl AssetRepositoryTrait for MemoryRepository {
    fn list(&self) -> Result<Vec<Asset>> {
        Ok(self.assets.lock().unwrap().clone())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.assets
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == asset_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Asset {}", asset_id)))
    }

    async fn save_all(&self, assets: Vec<Asset>) -> Result<()> {
        *self.assets.lock().unwrap() = assets;
        Ok(())
    }
}

/// Serves a fixed price for identifiers starting with "OK", never touching
/// the network.
struct FixedPriceProvider {
    price: Decimal,
}

#[async_trait::async_trait]
impl QuoteProviderTrait for FixedPriceProvider {
    fn id(&self) -> &'static str {
        "FIXED"
    }

    fn supports(&self, identifier: &str) -> bool {
        identifier.starts_with("OK")
    }

    async fn get_latest_quote(
        &self,
        _identifier: &str,
    ) -> std::result::Result<QuoteUpdate, MarketDataError> {
        Ok(QuoteUpdate::now(self.price, "EUR", self.id()))
    }
}

fn service_with(price: Decimal) -> (AssetService, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let registry = Arc::new(ProviderRegistry::new(vec![Arc::new(FixedPriceProvider {
        price,
    })]));
    (AssetService::new(repository.clone(), registry), repository)
}

fn new_asset(name: &str, identifier: &str) -> NewAsset {
    NewAsset {
        name: name.to_string(),
        identifier: identifier.to_string(),
        quantity: dec!(1),
        cost_basis: None,
        target_weight: None,
        asset_class: None,
        manual: false,
    }
}

#[tokio::test]
async fn test_upsert_creates_with_defaults() {
    let (service, _) = service_with(dec!(10));

    let created = service.upsert_asset(new_asset("World ETF", "OK123")).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.asset_class, ASSET_CLASS_UNCLASSIFIED);
    assert_eq!(created.target_weight, Decimal::ZERO);
    assert_eq!(created.last_price, None);
    assert_eq!(service.get_assets().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_matches_identifier_case_insensitively() {
    let (service, _) = service_with(dec!(10));

    let created = service
        .upsert_asset(NewAsset {
            cost_basis: Some(dec!(80)),
            target_weight: Some(dec!(60)),
            ..new_asset("World ETF", "ie00b4l5y983")
        })
        .await
        .unwrap();

    let updated = service
        .upsert_asset(NewAsset {
            quantity: dec!(5),
            ..new_asset("World ETF (acc)", "IE00B4L5Y983")
        })
        .await
        .unwrap();

    // Same row, refreshed fields; absent fields keep their prior values.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "World ETF (acc)");
    assert_eq!(updated.quantity, dec!(5));
    assert_eq!(updated.cost_basis, Some(dec!(80)));
    assert_eq!(updated.target_weight, dec!(60));
    assert_eq!(service.get_assets().unwrap().len(), 1);
}

#[tokio::test]
async fn test_upsert_rejects_blank_name() {
    let (service, _) = service_with(dec!(10));

    let err = service.upsert_asset(new_asset("  ", "OK123")).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_delete_unknown_asset_is_not_found() {
    let (service, _) = service_with(dec!(10));

    let err = service.delete_asset("missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_refresh_applies_quotes_and_skips_manual() {
    let (service, repository) = service_with(dec!(42));

    service.upsert_asset(new_asset("Fetched", "OK111")).await.unwrap();
    service
        .upsert_asset(NewAsset {
            manual: true,
            ..new_asset("Manual", "OK222")
        })
        .await
        .unwrap();

    let refreshed = service.refresh_quotes().await.unwrap();

    let fetched = refreshed.iter().find(|a| a.identifier == "OK111").unwrap();
    assert_eq!(fetched.last_price, Some(dec!(42)));
    assert_eq!(fetched.currency, "EUR");
    assert!(fetched.last_updated.is_some());

    let manual = refreshed.iter().find(|a| a.identifier == "OK222").unwrap();
    assert_eq!(manual.last_price, None);

    // The refreshed collection is persisted.
    assert_eq!(repository.list().unwrap(), refreshed);
}

#[tokio::test]
async fn test_refresh_keeps_prior_price_on_fetch_failure() {
    let (service, _) = service_with(dec!(42));

    let created = service.upsert_asset(new_asset("Unroutable", "ZZ999")).await.unwrap();
    // Simulate an earlier successful fetch.
    let mut seeded = service.get_assets().unwrap();
    seeded
        .iter_mut()
        .find(|a| a.id == created.id)
        .unwrap()
        .last_price = Some(dec!(7));
    let (service, _) = {
        let repository = Arc::new(MemoryRepository {
            assets: Mutex::new(seeded),
        });
        let registry = Arc::new(ProviderRegistry::new(vec![]));
        (AssetService::new(repository.clone(), registry), repository)
    };

    let refreshed = service.refresh_quotes().await.unwrap();
    assert_eq!(refreshed[0].last_price, Some(dec!(7)));
}
