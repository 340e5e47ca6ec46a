//! File-backed JSON store.
//!
//! The whole portfolio (assets, history, settings) lives in one JSON file
//! kept mirrored in memory behind an `RwLock`. Writes go through a sibling
//! temp file and an atomic rename, so a crash mid-write never leaves a
//! truncated store on disk.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use pacfolio_core::assets::{Asset, AssetRepositoryTrait};
use pacfolio_core::errors::{Error, Result};
use pacfolio_core::portfolio::history::{HistoryRepositoryTrait, HistorySnapshot};
use pacfolio_core::settings::{Settings, SettingsRepositoryTrait};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoreFile {
    assets: Vec<Asset>,
    history: Vec<HistorySnapshot>,
    settings: Settings,
}

pub struct JsonStore {
    path: PathBuf,
    state: RwLock<StoreFile>,
}

impl JsonStore {
    /// Opens the store, creating parent directories and starting from
    /// defaults when the file does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let state = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            StoreFile::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            state: RwLock::new(state),
        })
    }

    fn persist(&self, state: &StoreFile) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn poisoned() -> Error {
    Error::Unexpected("store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl AssetRepositoryTrait for JsonStore {
    fn list(&self) -> Result<Vec<Asset>> {
        Ok(self.state.read().map_err(|_| poisoned())?.assets.clone())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.state
            .read()
            .map_err(|_| poisoned())?
            .assets
            .iter()
            .find(|a| a.id == asset_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Asset {}", asset_id)))
    }

    async fn save_all(&self, assets: Vec<Asset>) -> Result<()> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        state.assets = assets;
        self.persist(&state)
    }
}

#[async_trait::async_trait]
impl HistoryRepositoryTrait for JsonStore {
    fn load(&self) -> Result<Vec<HistorySnapshot>> {
        Ok(self.state.read().map_err(|_| poisoned())?.history.clone())
    }

    async fn save(&self, history: Vec<HistorySnapshot>) -> Result<()> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        state.history = history;
        self.persist(&state)
    }
}

#[async_trait::async_trait]
impl SettingsRepositoryTrait for JsonStore {
    fn get(&self) -> Result<Settings> {
        Ok(self.state.read().map_err(|_| poisoned())?.settings.clone())
    }

    async fn update(&self, settings: Settings) -> Result<Settings> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        state.settings = settings.clone();
        self.persist(&state)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_asset() -> Asset {
        Asset {
            id: "a1".to_string(),
            name: "World ETF".to_string(),
            identifier: "IE00B4L5Y983".to_string(),
            quantity: dec!(10),
            currency: "EUR".to_string(),
            cost_basis: Some(dec!(80)),
            target_weight: dec!(60),
            last_price: Some(dec!(100)),
            last_updated: None,
            asset_class: "ETF".to_string(),
            manual: false,
        }
    }

    #[tokio::test]
    async fn test_assets_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");

        let store = JsonStore::open(&path).unwrap();
        store.save_all(vec![sample_asset()]).await.unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        let assets = reopened.list().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].identifier, "IE00B4L5Y983");
        assert_eq!(assets[0].last_price, Some(dec!(100)));
    }

    #[tokio::test]
    async fn test_missing_file_starts_from_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(&dir.path().join("fresh.json")).unwrap();

        assert!(AssetRepositoryTrait::list(&store).unwrap().is_empty());
        assert!(HistoryRepositoryTrait::load(&store).unwrap().is_empty());
        assert_eq!(
            SettingsRepositoryTrait::get(&store).unwrap(),
            Settings::default()
        );
    }

    #[tokio::test]
    async fn test_settings_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");

        let store = JsonStore::open(&path).unwrap();
        let settings = Settings {
            monthly_budget: dec!(750),
            ..Settings::default()
        };
        store.update(settings).await.unwrap();
        drop(store);

        let reopened = JsonStore::open(&path).unwrap();
        assert_eq!(reopened.get().unwrap().monthly_budget, dec!(750));
    }

    #[tokio::test]
    async fn test_unknown_asset_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(&dir.path().join("portfolio.json")).unwrap();

        let err = store.get_by_id("missing").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
