// --- File: crates/storefront_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the storefront crates.
///
/// Feature crates with a richer taxonomy (see the payment crate) keep their own
/// error enum and only fall back to this one for the plain cases.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// A dependency of the requested feature is not available
    #[error("Service unavailable: {0}")]
    ServiceUnavailableError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for StorefrontError {
    fn status_code(&self) -> u16 {
        match self {
            StorefrontError::NotFoundError(_) => 404,
            StorefrontError::ServiceUnavailableError(_) => 503,
        }
    }
}

// Utility functions for error handling
pub fn not_found<T: fmt::Display>(message: T) -> StorefrontError {
    StorefrontError::NotFoundError(message.to_string())
}
