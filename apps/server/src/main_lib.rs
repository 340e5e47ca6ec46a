use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pacfolio_core::assets::{AssetService, AssetServiceTrait};
use pacfolio_core::portfolio::history::HistoryService;
use pacfolio_core::settings::SettingsRepositoryTrait;
use pacfolio_market_data::ProviderRegistry;

use crate::config::Config;
use crate::store::JsonStore;

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub history_service: Arc<HistoryService>,
    pub settings_repository: Arc<dyn SettingsRepositoryTrait>,
    pub registry: Arc<ProviderRegistry>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Arc::new(JsonStore::open(Path::new(&config.data_file))?);
    tracing::info!("Store file in use: {}", config.data_file);

    let registry = Arc::new(ProviderRegistry::default());
    let asset_service = Arc::new(AssetService::new(store.clone(), registry.clone()));
    let history_service = Arc::new(HistoryService::new(store.clone()));

    Ok(Arc::new(AppState {
        asset_service,
        history_service,
        settings_repository: store,
        registry,
    }))
}
