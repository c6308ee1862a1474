// --- File: crates/storefront_catalog/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;
use storefront_common::ErrorBody;
use crate::logic::ProductView;

#[utoipa::path(
    get,
    path = "/products", // Path relative to /api
    responses(
        (status = 200, description = "All products in catalog order", body = Vec<ProductView>)
    ),
    tag = "Catalog"
)]
fn doc_list_products_handler() {}

#[utoipa::path(
    get,
    path = "/products/{id}", // Path relative to /api
    params(("id" = String, Path, description = "Product id", example = "1")),
    responses(
        (status = 200, description = "The product", body = ProductView),
        (status = 404, description = "No product with that id", body = ErrorBody)
    ),
    tag = "Catalog"
)]
fn doc_get_product_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_list_products_handler, doc_get_product_handler),
    components(schemas(ProductView, ErrorBody)),
    tags((name = "Catalog", description = "Products offered by the storefront"))
)]
pub struct CatalogApiDoc;
