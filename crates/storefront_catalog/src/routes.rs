// --- File: crates/storefront_catalog/src/routes.rs ---

use crate::handlers::{get_product_handler, list_products_handler, CatalogState};
use axum::{routing::get, Router};
use std::sync::Arc;
use storefront_config::AppConfig;

/// Creates a router containing all routes for the catalog feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let catalog_state = Arc::new(CatalogState { config });

    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/{id}", get(get_product_handler))
        .with_state(catalog_state)
}
