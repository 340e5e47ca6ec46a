mod api;
mod config;
mod error;
mod main_lib;
mod scheduler;
mod store;

use api::app_router;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config)?;

    // Background quote refresh plus history snapshot (15-minute interval)
    scheduler::start_refresh_scheduler(state.clone(), config.refresh_interval);

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
