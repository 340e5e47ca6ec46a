use super::history_model::HistorySnapshot;
use crate::errors::Result;

/// Trait defining the contract for history repository operations.
///
/// Implemented by the application's storage layer; the cap is enforced
/// before `save` is called, so implementations store what they are given.
#[async_trait::async_trait]
pub trait HistoryRepositoryTrait: Send + Sync {
    fn load(&self) -> Result<Vec<HistorySnapshot>>;
    async fn save(&self, history: Vec<HistorySnapshot>) -> Result<()>;
}
