// --- File: crates/storefront_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::error::{HttpStatusCode, StorefrontError};

// Include the client module
pub mod client;

/// JSON body of every error response: `{ "error": ..., "details": ... }`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Logs the error, then builds the JSON error response.
pub fn error_response(status: StatusCode, message: &str, details: Option<Value>) -> Response {
    match &details {
        Some(details) => error!(
            status = status.as_u16(),
            details = %details,
            "API error [{}]: {}",
            status.as_u16(),
            message
        ),
        None => error!(status = status.as_u16(), "API error [{}]: {}", status.as_u16(), message),
    }

    let body = ErrorBody {
        error: message.to_string(),
        details,
    };
    (status, Json(body)).into_response()
}

/// Extension trait for StorefrontError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for StorefrontError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status_code, &self.to_string(), None)
    }
}

/// Implement IntoResponse for StorefrontError to make it easier to use in Axum handlers.
impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
