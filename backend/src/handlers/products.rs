//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::Product;

use crate::error::AppResult;
use crate::services::products::{CreateProductInput, ProductService, UpdateProductInput};
use crate::AppState;

/// List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.store.clone());
    Ok(Json(service.list().await))
}

/// Get a single product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    Ok(Json(service.get(product_id).await?))
}

/// Create a product; the code must be unique
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    Ok(Json(service.create(input).await?))
}

/// Update a product's mutable fields
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    Ok(Json(service.update(product_id, input).await?))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ProductService::new(state.store.clone());
    service.delete(product_id).await?;
    Ok(Json(()))
}
