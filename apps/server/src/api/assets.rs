use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use pacfolio_core::assets::{Asset, NewAsset};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(assets))
}

async fn upsert_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAsset>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.upsert_asset(payload).await?;
    Ok(Json(asset))
}

async fn delete_asset(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetches fresh prices for every non-manual asset and records a history
/// snapshot of the refreshed portfolio value.
async fn refresh_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.refresh_quotes().await?;
    state.history_service.record_snapshot(&assets).await?;
    Ok(Json(assets))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(upsert_asset))
        .route("/assets/refresh", post(refresh_assets))
        .route("/assets/{id}", delete(delete_asset))
}
