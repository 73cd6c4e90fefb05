//! Route definitions for the HatWorks backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Inventory catalog
        .nest("/materials", material_routes())
        // Request registry and distribution
        .nest("/requests", request_routes())
        // Product catalog
        .nest("/products", product_routes())
        // Production batches
        .nest("/batches", batch_routes())
        // QC inspections
        .nest("/inspections", inspection_routes())
        // Dashboards
        .nest("/dashboard", dashboard_routes())
        // Local preferences
        .nest("/preferences", preference_routes())
}

/// Inventory catalog routes
fn material_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_materials).post(handlers::create_material),
        )
        .route("/low-stock", get(handlers::low_stock))
        .route(
            "/:material_id",
            get(handlers::get_material).put(handlers::replace_material),
        )
}

/// Request registry routes
fn request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_requests).post(handlers::create_request),
        )
        .route("/can-approve-all", post(handlers::can_approve_all))
        .route("/approve-all", post(handlers::approve_all))
        .route("/:request_id", get(handlers::get_request))
        .route("/:request_id/approve", post(handlers::approve_request))
        .route("/:request_id/deny", post(handlers::deny_request))
        .route(
            "/:request_id/distribution-plan",
            get(handlers::get_distribution_plan),
        )
        .route("/:request_id/distribute", post(handlers::distribute_request))
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Production batch routes
fn batch_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_batches).post(handlers::create_batch),
        )
        .route(
            "/:batch_id",
            get(handlers::get_batch)
                .put(handlers::update_batch)
                .delete(handlers::delete_batch),
        )
}

/// QC inspection routes
fn inspection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_inspections))
        .route("/:inspection_id", get(handlers::get_inspection))
        .route("/:inspection_id/start", post(handlers::start_inspection))
        .route(
            "/:inspection_id/complete",
            post(handlers::complete_inspection),
        )
        .route("/:inspection_id/fail", post(handlers::fail_inspection))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(handlers::dashboard_summary))
        .route("/:role", get(handlers::dashboard_layout_for_role))
}

/// Preference routes
fn preference_routes() -> Router<AppState> {
    Router::new().route(
        "/date-range",
        get(handlers::get_date_range).put(handlers::put_date_range),
    )
}
