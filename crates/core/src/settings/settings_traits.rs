use super::settings_model::Settings;
use crate::errors::Result;

/// Trait defining the contract for settings storage.
#[async_trait::async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get(&self) -> Result<Settings>;
    /// Persists validated settings.
    async fn update(&self, settings: Settings) -> Result<Settings>;
}
