//! HTTP handlers for the inventory catalog

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::{MaterialFilter, MaterialStock};

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, MaterialInput};
use crate::AppState;

use super::{parse_list, split_list};

/// Query parameters for listing materials; multi-select dimensions are
/// comma-separated
#[derive(Debug, Deserialize)]
pub struct MaterialListQuery {
    pub search: Option<String>,
    pub categories: Option<String>,
    pub statuses: Option<String>,
    pub suppliers: Option<String>,
}

/// List catalog records matching the query filters
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialListQuery>,
) -> AppResult<Json<Vec<MaterialStock>>> {
    let filter = MaterialFilter {
        search: query.search.clone(),
        categories: parse_list(query.categories.as_deref(), "categories")?,
        statuses: parse_list(query.statuses.as_deref(), "statuses")?,
        suppliers: split_list(query.suppliers.as_deref()),
    };
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.list(&filter).await))
}

/// Get a single material record
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> AppResult<Json<MaterialStock>> {
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.get(material_id).await?))
}

/// Create a material record
pub async fn create_material(
    State(state): State<AppState>,
    Json(input): Json<MaterialInput>,
) -> AppResult<Json<MaterialStock>> {
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.create(input).await?))
}

/// Full replace of a material record
pub async fn replace_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
    Json(input): Json<MaterialInput>,
) -> AppResult<Json<MaterialStock>> {
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.replace(material_id, input).await?))
}

/// Reorder report: records below Active status
pub async fn low_stock(State(state): State<AppState>) -> AppResult<Json<Vec<MaterialStock>>> {
    let service = InventoryService::new(state.store.clone());
    Ok(Json(service.low_stock().await))
}
