use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use pacfolio_core::errors::Error as CoreError;
use pacfolio_core::settings::Settings;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<Settings>> {
    let settings = state.settings_repository.get()?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Settings>,
) -> ApiResult<Json<Settings>> {
    payload.validate().map_err(CoreError::Validation)?;
    let saved = state.settings_repository.update(payload).await?;
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).put(update_settings))
}
