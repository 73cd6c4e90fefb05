//! HTTP handlers for production batches

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::ProductionBatch;

use crate::error::AppResult;
use crate::services::batches::{BatchService, CreateBatchInput, UpdateBatchInput};
use crate::AppState;

/// List all batches
pub async fn list_batches(State(state): State<AppState>) -> AppResult<Json<Vec<ProductionBatch>>> {
    let service = BatchService::new(state.store.clone());
    Ok(Json(service.list().await))
}

/// Get a single batch
pub async fn get_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
) -> AppResult<Json<ProductionBatch>> {
    let service = BatchService::new(state.store.clone());
    Ok(Json(service.get(batch_id).await?))
}

/// Create a batch against an existing product
pub async fn create_batch(
    State(state): State<AppState>,
    Json(input): Json<CreateBatchInput>,
) -> AppResult<Json<ProductionBatch>> {
    let service = BatchService::new(state.store.clone());
    Ok(Json(service.create(input).await?))
}

/// Update a batch
pub async fn update_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
    Json(input): Json<UpdateBatchInput>,
) -> AppResult<Json<ProductionBatch>> {
    let service = BatchService::new(state.store.clone());
    Ok(Json(service.update(batch_id, input).await?))
}

/// Delete a batch
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = BatchService::new(state.store.clone());
    service.delete(batch_id).await?;
    Ok(Json(()))
}
