//! Background scheduler for periodic quote refresh.
//!
//! Refreshes every non-manual asset on a fixed interval and appends a
//! history snapshot after each pass.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Starts the background quote refresh scheduler.
///
/// The first tick fires immediately, so the portfolio has fresh prices
/// right after startup.
pub fn start_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Quote refresh scheduler started ({}s interval)", period.as_secs());
        let mut refresh_interval = interval(period);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

/// Runs a single scheduled refresh pass.
async fn run_scheduled_refresh(state: &Arc<AppState>) {
    match state.asset_service.refresh_quotes().await {
        Ok(assets) => {
            if assets.is_empty() {
                return;
            }
            match state.history_service.record_snapshot(&assets).await {
                Ok(snapshot) => info!(
                    "Refreshed {} assets, portfolio value {}",
                    assets.len(),
                    snapshot.total_value
                ),
                Err(e) => warn!("Failed to record history snapshot: {}", e),
            }
        }
        Err(e) => warn!("Scheduled quote refresh failed: {}", e),
    }
}
