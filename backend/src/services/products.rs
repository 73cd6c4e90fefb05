//! Product catalog service

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::{validate_product_code, Product};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Product service
#[derive(Clone)]
pub struct ProductService {
    store: Store,
}

/// Input for creating a product
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductInput {
    pub code: String,
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
}

/// Input for updating a product; the code is immutable after creation
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductInput {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// When set, the update fails with a conflict if the stored version
    /// has moved on
    pub expected_version: Option<u64>,
}

impl ProductService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List products ordered by code
    pub async fn list(&self) -> Vec<Product> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.products.values().cloned().collect();
        products.sort_by(|a, b| a.code.cmp(&b.code));
        products
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        let store = self.store.read().await;
        store
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }

    /// Create a product; the code must be unique across the catalog
    pub async fn create(&self, input: CreateProductInput) -> AppResult<Product> {
        input
            .validate()
            .map_err(AppError::from_validation_errors)?;
        validate_product_code(&input.code).map_err(|message| AppError::Validation {
            field: "code".to_string(),
            message: message.to_string(),
        })?;

        let mut store = self.store.write().await;
        if store.products.values().any(|p| p.code == input.code) {
            return Err(AppError::DuplicateEntry(format!(
                "product code {}",
                input.code
            )));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            code: input.code,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
            version: 0,
        };
        store.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// Update a product's mutable fields
    pub async fn update(&self, id: Uuid, input: UpdateProductInput) -> AppResult<Product> {
        input
            .validate()
            .map_err(AppError::from_validation_errors)?;

        let mut store = self.store.write().await;
        let product = store
            .products
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        if let Some(expected) = input.expected_version {
            if expected != product.version {
                return Err(AppError::Conflict {
                    resource: "product".to_string(),
                    message: "Product was modified by another operator".to_string(),
                });
            }
        }

        if let Some(name) = input.name {
            product.name = name;
        }
        if let Some(description) = input.description {
            product.description = description;
        }
        if input.image_url.is_some() {
            product.image_url = input.image_url;
        }
        product.updated_at = Utc::now();
        product.version += 1;

        Ok(product.clone())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut store = self.store.write().await;
        store
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }
}
