use crate::handlers::{catalog_handler, design_handler, health_check, resources_handler};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/", post(design_handler))
        .route("/api/habitat-designer", post(design_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/resources", post(resources_handler))
        .route("/health", get(health_check))
}
