// --- File: crates/storefront_payment/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;
use storefront_common::ErrorBody;
use crate::handlers::{PaymentConfigResponse, PaymentIntentResponse};
use crate::validation::PaymentRequest;

#[utoipa::path(
    post,
    path = "/payment", // Path relative to /api
    request_body(content = PaymentRequest, example = json!({
        "amount": 5000, // $50.00
        "currency": "usd"
    })),
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentResponse),
        (status = 400, description = "Invalid JSON, failed validation, card error or request rejected by Stripe", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 429, description = "Stripe rate limit reached", body = ErrorBody),
        (status = 500, description = "Missing client secret, authentication or internal error", body = ErrorBody),
        (status = 502, description = "Stripe API error", body = ErrorBody),
        (status = 503, description = "Stripe unreachable", body = ErrorBody)
    ),
    tag = "Payment"
)]
fn doc_create_payment_intent_handler() {}

#[utoipa::path(
    get,
    path = "/payment/config", // Path relative to /api
    responses(
        (status = 200, description = "Publishable key for the browser SDK", body = PaymentConfigResponse),
        (status = 503, description = "Publishable key not configured", body = ErrorBody)
    ),
    tag = "Payment"
)]
fn doc_payment_config_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_payment_intent_handler,
        doc_payment_config_handler
    ),
    components(
        schemas(PaymentRequest, PaymentIntentResponse, PaymentConfigResponse, ErrorBody)
    ),
    tags(
        (name = "Payment", description = "Stripe payment intents for the checkout page")
    )
)]
pub struct PaymentApiDoc;
