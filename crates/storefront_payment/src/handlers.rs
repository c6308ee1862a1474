// --- File: crates/storefront_payment/src/handlers.rs ---
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use storefront_common::services::{NewPaymentIntent, PaymentService};
use storefront_common::{error_response, StorefrontError};
use storefront_config::AppConfig;
use tracing::info;

use crate::error::PaymentError;
use crate::service::StripePaymentService;
use crate::validation::{validate_payment_request, PaymentRequest};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- State for Payment Handlers ---
#[derive(Clone)]
pub struct PaymentState {
    pub config: Arc<AppConfig>,
    pub payments: Arc<dyn PaymentService<Error = PaymentError>>,
}

impl PaymentState {
    /// Builds the state with the Stripe client described by `config.stripe`.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, PaymentError> {
        let payments = StripePaymentService::new(config.stripe.clone())?;
        Ok(Self {
            config,
            payments: Arc::new(payments),
        })
    }
}

/// Body of a successful `POST /payment`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    #[cfg_attr(feature = "openapi", schema(example = "pi_3Nv..._secret_..."))]
    pub client_secret: String,
    #[cfg_attr(feature = "openapi", schema(example = "pi_3Nv..."))]
    pub payment_intent_id: String,
}

/// Body of `GET /payment/config`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfigResponse {
    #[cfg_attr(feature = "openapi", schema(example = "pk_test_..."))]
    pub publishable_key: String,
}

/// Creation timestamp stored in the intent metadata, e.g. `2026-10-16T09:30:00.000Z`.
fn created_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calls the processor for an already validated body and checks the result.
async fn create_intent(
    state: &PaymentState,
    body: &Value,
) -> Result<PaymentIntentResponse, PaymentError> {
    let request = PaymentRequest::from_validated(body)?;

    let mut metadata = BTreeMap::new();
    metadata.insert("created_at".to_string(), created_at_now());

    let intent = state
        .payments
        .create_payment_intent(NewPaymentIntent {
            amount: request.amount,
            currency: request.currency_or_default().to_string(),
            automatic_payment_methods: true,
            metadata,
        })
        .await?;

    let client_secret = intent
        .client_secret
        .filter(|secret| !secret.is_empty())
        .ok_or(PaymentError::MissingClientSecret)?;

    info!(
        "[Payment] PaymentIntent {} ready for confirmation: status={} amount={} {}",
        intent.id,
        intent.status.as_deref().unwrap_or("unknown"),
        intent.amount.unwrap_or(request.amount),
        intent.currency.as_deref().unwrap_or(request.currency_or_default())
    );
    Ok(PaymentIntentResponse {
        client_secret,
        payment_intent_id: intent.id,
    })
}

/// Axum handler to create a payment intent for the checkout page.
///
/// The body is read raw so that malformed JSON and a missing `Content-Type`
/// get the same treatment as any other invalid input.
#[axum::debug_handler]
pub async fn create_payment_intent_handler(
    State(state): State<Arc<PaymentState>>,
    body: Bytes,
) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body",
                Some(json!({ "parseError": e.to_string() })),
            )
        }
    };

    let validation_errors = validate_payment_request(&body);
    if !validation_errors.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            Some(json!({ "validationErrors": validation_errors })),
        );
    }

    match create_intent(&state, &body).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => err.into_error_response(state.config.run_env.is_development()),
    }
}

/// Answers every method other than POST on `/payment`.
pub async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}

/// Axum handler exposing the publishable key to the browser SDK.
#[axum::debug_handler]
pub async fn payment_config_handler(
    State(state): State<Arc<PaymentState>>,
) -> Result<Json<PaymentConfigResponse>, StorefrontError> {
    let publishable_key = state.config.stripe.publishable_key().ok_or_else(|| {
        StorefrontError::ServiceUnavailableError("Publishable key not configured".to_string())
    })?;
    Ok(Json(PaymentConfigResponse {
        publishable_key: publishable_key.to_string(),
    }))
}
