//! HTTP handlers for dashboards

use axum::{
    extract::{Path, State},
    Json,
};

use shared::{ChartSpec, DashboardRole};

use crate::error::AppResult;
use crate::services::dashboard::{DashboardService, DashboardSummary};
use crate::AppState;

/// Counters derived from the request and inspection registries
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let service = DashboardService::new(state.store.clone());
    Ok(Json(service.summary().await))
}

/// Ordered chart layout for a role
pub async fn dashboard_layout_for_role(
    Path(role): Path<DashboardRole>,
) -> AppResult<Json<Vec<ChartSpec>>> {
    Ok(Json(DashboardService::layout(role)))
}
