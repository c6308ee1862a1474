// --- File: crates/storefront_catalog/src/lib.rs ---

pub mod logic;
pub mod handlers;
pub mod routes;
pub mod doc;

// Re-export for main backend
pub use routes::routes;
pub use handlers::CatalogState;
pub use logic::{format_price, ProductView};
