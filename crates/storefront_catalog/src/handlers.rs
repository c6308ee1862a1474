// --- File: crates/storefront_catalog/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use storefront_common::{not_found, StorefrontError};
use storefront_config::AppConfig;
use tracing::debug;

use crate::logic::{find_product, list_products, ProductView};

// --- State for Catalog Handlers ---
#[derive(Clone)]
pub struct CatalogState {
    pub config: Arc<AppConfig>,
}

/// Axum handler listing every product.
#[axum::debug_handler]
pub async fn list_products_handler(
    State(state): State<Arc<CatalogState>>,
) -> Json<Vec<ProductView>> {
    Json(list_products(&state.config.catalog.products))
}

/// Axum handler returning a single product.
#[axum::debug_handler]
pub async fn get_product_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>, StorefrontError> {
    debug!("[Catalog] Looking up product {}", id);
    find_product(&state.config.catalog.products, &id)
        .map(|product| Json(ProductView::from(product)))
        .ok_or_else(|| not_found(format!("product '{}'", id)))
}
