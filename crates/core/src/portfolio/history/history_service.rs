use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::history_model::{push_snapshot, HistorySnapshot};
use super::history_traits::HistoryRepositoryTrait;
use crate::assets::Asset;
use crate::constants::DISPLAY_DECIMALS;
use crate::errors::Result;

/// Service for recording and reading the portfolio value history.
pub struct HistoryService {
    repository: Arc<dyn HistoryRepositoryTrait>,
}

impl HistoryService {
    /// Creates a new HistoryService instance.
    pub fn new(repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub fn get_history(&self) -> Result<Vec<HistorySnapshot>> {
        self.repository.load()
    }

    /// Computes the current portfolio total and appends it to the history,
    /// dropping the oldest entries beyond the cap.
    pub async fn record_snapshot(&self, assets: &[Asset]) -> Result<HistorySnapshot> {
        let total: rust_decimal::Decimal = assets.iter().map(|a| a.current_value()).sum();
        let snapshot = HistorySnapshot {
            timestamp: Utc::now(),
            total_value: total.round_dp(DISPLAY_DECIMALS),
        };

        let mut history = self.repository.load()?;
        push_snapshot(&mut history, snapshot.clone());
        debug!(
            "Recorded snapshot {} ({} entries)",
            snapshot.total_value,
            history.len()
        );
        self.repository.save(history).await?;
        Ok(snapshot)
    }
}
