// --- File: crates/storefront_common/src/lib.rs ---

// Declare modules within this crate
pub mod routes;    // Route definitions
pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod services;  // Service abstractions
pub mod logging;   // Logging utilities

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    StorefrontError,
    HttpStatusCode,
    not_found,
};

// Re-export HTTP utilities for easier access
pub use http::{
    ErrorBody,
    error_response,
    client::create_client,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// This crate provides common functionality that can be used across the storefront.
// It includes error handling, the JSON error body, the outbound HTTP client and logging.
