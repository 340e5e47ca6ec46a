use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;

use pacfolio_core::portfolio::history::{period_returns, HistorySnapshot};
use pacfolio_core::portfolio::projection::{project, GrowthAssumptions, Projection};
use pacfolio_core::portfolio::rebalance::{build_plan, RebalancePlan};
use pacfolio_core::portfolio::summary::{
    class_distribution, compute_totals, gain_contributions, ClassAllocation, GainContribution,
    PortfolioTotals,
};
use pacfolio_core::portfolio::weights::{asset_weights, AssetWeight};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    totals: PortfolioTotals,
    class_distribution: Vec<ClassAllocation>,
    gain_contributions: Vec<GainContribution>,
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<SummaryResponse>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(SummaryResponse {
        totals: compute_totals(&assets),
        class_distribution: class_distribution(&assets),
        gain_contributions: gain_contributions(&assets),
    }))
}

async fn get_weights(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AssetWeight>>> {
    let assets = state.asset_service.get_assets()?;
    let total_value = compute_totals(&assets).total_value;
    Ok(Json(asset_weights(&assets, total_value)))
}

async fn get_rebalance_plan(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RebalancePlan>> {
    let assets = state.asset_service.get_assets()?;
    let settings = state.settings_repository.get()?;
    Ok(Json(build_plan(&assets, settings.monthly_budget)))
}

async fn get_projection(State(state): State<Arc<AppState>>) -> ApiResult<Json<Projection>> {
    let assets = state.asset_service.get_assets()?;
    let settings = state.settings_repository.get()?;
    let starting_value = compute_totals(&assets).total_value;
    Ok(Json(project(&GrowthAssumptions {
        starting_value,
        monthly_contribution: settings.monthly_contribution,
        annual_return_pct: settings.annual_return_pct,
        years: settings.projection_years,
    })))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistorySnapshot>>> {
    let history = state.history_service.get_history()?;
    Ok(Json(history))
}

async fn get_history_returns(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Decimal>>> {
    let history = state.history_service.get_history()?;
    Ok(Json(period_returns(&history)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/weights", get(get_weights))
        .route("/portfolio/rebalance", get(get_rebalance_plan))
        .route("/portfolio/projection", get(get_projection))
        .route("/history", get(get_history))
        .route("/history/returns", get(get_history_returns))
}
