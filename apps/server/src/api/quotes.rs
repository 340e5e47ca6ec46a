use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use pacfolio_core::errors::Error as CoreError;
use pacfolio_market_data::QuoteUpdate;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct QuoteQuery {
    isin: String,
}

/// Proxies a single quote lookup through the provider registry, so the
/// browser never talks to the quote providers directly.
async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<QuoteUpdate>> {
    let quote = state
        .registry
        .get_latest_quote(&query.isin)
        .await
        .map_err(CoreError::from)?;
    Ok(Json(quote))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", get(get_quote))
}
