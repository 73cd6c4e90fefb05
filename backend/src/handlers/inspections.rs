//! HTTP handlers for QC inspections

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::QcInspection;

use crate::error::AppResult;
use crate::services::inspections::{CloseInspectionInput, InspectionService};
use crate::AppState;

use super::parse_token;

#[derive(Debug, Deserialize)]
pub struct InspectionListQuery {
    pub status: Option<String>,
}

/// List inspections, optionally narrowed by status
pub async fn list_inspections(
    State(state): State<AppState>,
    Query(query): Query<InspectionListQuery>,
) -> AppResult<Json<Vec<QcInspection>>> {
    let status = query
        .status
        .as_deref()
        .map(|t| parse_token(t, "status"))
        .transpose()?;
    let service = InspectionService::new(state.store.clone());
    Ok(Json(service.list(status).await))
}

/// Get a single inspection
pub async fn get_inspection(
    State(state): State<AppState>,
    Path(inspection_id): Path<Uuid>,
) -> AppResult<Json<QcInspection>> {
    let service = InspectionService::new(state.store.clone());
    Ok(Json(service.get(inspection_id).await?))
}

/// Move a pending inspection to in-progress
pub async fn start_inspection(
    State(state): State<AppState>,
    Path(inspection_id): Path<Uuid>,
) -> AppResult<Json<QcInspection>> {
    let service = InspectionService::new(state.store.clone());
    Ok(Json(service.start(inspection_id).await?))
}

/// Complete an in-progress inspection
pub async fn complete_inspection(
    State(state): State<AppState>,
    Path(inspection_id): Path<Uuid>,
    body: Option<Json<CloseInspectionInput>>,
) -> AppResult<Json<QcInspection>> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let service = InspectionService::new(state.store.clone());
    Ok(Json(service.complete(inspection_id, input).await?))
}

/// Fail an in-progress inspection, recording defects
pub async fn fail_inspection(
    State(state): State<AppState>,
    Path(inspection_id): Path<Uuid>,
    body: Option<Json<CloseInspectionInput>>,
) -> AppResult<Json<QcInspection>> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let service = InspectionService::new(state.store.clone());
    Ok(Json(service.fail(inspection_id, input).await?))
}
