// --- File: crates/storefront_payment/src/error.rs ---
use axum::{http::StatusCode, response::Response};
use serde_json::{json, Map, Value};
use storefront_common::error_response;
use thiserror::Error;

/// Failures of the create-payment-intent flow after the body has been parsed
/// and validated. Processor failures carry one variant per Stripe error category.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    /// The card was declined or could not be charged (`card_error`)
    #[error("Card error: {message}")]
    Card {
        code: Option<String>,
        decline_code: Option<String>,
        message: String,
    },

    /// Too many requests hit the Stripe API too quickly
    #[error("Stripe rate limit reached: {message}")]
    RateLimit { message: String },

    /// The request parameters were rejected by Stripe (`invalid_request_error`)
    #[error("Invalid request to Stripe: {message}")]
    InvalidRequest {
        message: String,
        param: Option<String>,
    },

    /// Stripe failed on its side, or answered with something unreadable
    #[error("Stripe API error: {message}")]
    Api { message: String },

    /// Stripe could not be reached
    #[error("Connection to Stripe failed: {message}")]
    Connection { message: String },

    /// The secret key was rejected
    #[error("Stripe authentication failed: {message}")]
    Authentication { message: String },

    /// Any other category Stripe reports, e.g. `idempotency_error`
    #[error("Stripe error ({category}): {message}")]
    Processor { category: String, message: String },

    /// The request could not be turned into payment parameters
    #[error("Validation error: {0}")]
    Validation(String),

    /// Stripe answered without a usable client secret
    #[error("Payment intent created without a client secret")]
    MissingClientSecret,

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

/// Status, public message and optional details of an error response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorParts {
    pub status: StatusCode,
    pub message: &'static str,
    pub details: Option<Value>,
}

/// Builds a details object, leaving out absent fields.
fn details(fields: &[(&str, Option<&str>)]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), Value::String(v.to_string()))))
        .collect();
    Value::Object(map)
}

impl PaymentError {
    /// Maps the error to what the client gets to see.
    ///
    /// `expose_internal` controls whether the message of an uncategorized error
    /// is returned as-is; otherwise it is replaced by a generic string.
    pub fn error_parts(&self, expose_internal: bool) -> ErrorParts {
        let (status, message, details) = match self {
            PaymentError::Card {
                code,
                decline_code,
                message,
            } => (
                StatusCode::BAD_REQUEST,
                "Card error occurred",
                Some(details(&[
                    ("code", code.as_deref()),
                    ("decline_code", decline_code.as_deref()),
                    ("message", Some(message.as_str())),
                ])),
            ),
            PaymentError::RateLimit { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests",
                Some(json!({ "message": "Please try again later" })),
            ),
            PaymentError::InvalidRequest { message, param } => (
                StatusCode::BAD_REQUEST,
                "Invalid request to Stripe",
                Some(details(&[
                    ("message", Some(message.as_str())),
                    ("param", param.as_deref()),
                ])),
            ),
            PaymentError::Api { .. } => (
                StatusCode::BAD_GATEWAY,
                "Stripe API error",
                Some(json!({ "message": "Payment service temporarily unavailable" })),
            ),
            PaymentError::Connection { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Connection error",
                Some(json!({ "message": "Unable to connect to payment service" })),
            ),
            PaymentError::Authentication { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Authentication error",
                Some(json!({ "message": "Payment service configuration error" })),
            ),
            PaymentError::Processor { category, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Payment processing error",
                Some(json!({ "type": category, "message": message })),
            ),
            PaymentError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(json!({ "message": message })),
            ),
            PaymentError::MissingClientSecret => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create payment intent",
                None,
            ),
            PaymentError::Internal(message) => {
                let message = if expose_internal {
                    message.as_str()
                } else {
                    "Something went wrong"
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    Some(json!({ "message": message })),
                )
            }
        };
        ErrorParts {
            status,
            message,
            details,
        }
    }

    /// Logs the error with its full cause and converts it into a JSON response.
    pub fn into_error_response(self, expose_internal: bool) -> Response {
        tracing::warn!(error = %self, "payment intent creation failed");
        let parts = self.error_parts(expose_internal);
        error_response(parts.status, parts.message, parts.details)
    }
}

/// Transport failures are connection errors; an unreadable body is Stripe's fault.
impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            PaymentError::Internal(format!("Failed to build Stripe request: {}", err))
        } else if err.is_decode() {
            PaymentError::Api {
                message: format!("Invalid response received from the Stripe API: {}", err),
            }
        } else {
            PaymentError::Connection {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Api {
            message: format!("Invalid JSON received from the Stripe API: {}", err),
        }
    }
}
