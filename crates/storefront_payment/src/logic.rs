// --- File: crates/storefront_payment/src/logic.rs ---
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use storefront_common::services::{NewPaymentIntent, PaymentIntentResult};
use storefront_config::StripeConfig;
use tracing::{error, info};

use crate::error::PaymentError;

/// Path of the PaymentIntents endpoint, relative to `stripe.api_base`.
pub const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";

// --- Data Structures ---

/// The subset of a Stripe PaymentIntent object we read back.
#[derive(Deserialize, Debug)]
struct StripePaymentIntentResponse {
    pub id: String,
    pub status: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub client_secret: Option<String>,
}

/// Stripe wraps every error in `{"error": {...}}`.
#[derive(Deserialize, Debug)]
struct StripeErrorEnvelope {
    error: StripeApiError,
}

/// Stripe's error object.
#[derive(Deserialize, Debug, Default)]
pub struct StripeApiError {
    /// e.g. "card_error", "invalid_request_error", "api_error"
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub decline_code: Option<String>,
    pub message: Option<String>,
    pub param: Option<String>,
}

// --- Request building ---

/// Form-encodes the intent parameters the way the Stripe API expects them.
pub fn payment_intent_form(request: &NewPaymentIntent) -> Vec<(String, String)> {
    let mut form_body: Vec<(String, String)> = vec![
        ("amount".to_string(), request.amount.to_string()),
        ("currency".to_string(), request.currency.clone()),
    ];
    if request.automatic_payment_methods {
        form_body.push((
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ));
    }
    for (key, value) in &request.metadata {
        form_body.push((format!("metadata[{}]", key), value.clone()));
    }
    form_body
}

// --- Response classification ---

/// Turns a non-2xx Stripe response into the matching error category.
///
/// HTTP 401 and 429 decide the category on their own; otherwise the `type`
/// field of the error object does. Bodies that are not a Stripe error object
/// are treated as API errors.
pub fn classify_stripe_error(status: StatusCode, body: &str) -> PaymentError {
    let parsed = serde_json::from_str::<StripeErrorEnvelope>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|envelope| envelope.error.message.clone())
        .unwrap_or_else(|| format!("Stripe returned HTTP {}", status.as_u16()));

    if status == StatusCode::UNAUTHORIZED {
        return PaymentError::Authentication { message };
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return PaymentError::RateLimit { message };
    }

    let Some(StripeErrorEnvelope { error: api_error }) = parsed else {
        return PaymentError::Api {
            message: format!(
                "Invalid response from the Stripe API (HTTP {}): {}",
                status.as_u16(),
                body
            ),
        };
    };

    match api_error.error_type.as_deref() {
        Some("card_error") => PaymentError::Card {
            code: api_error.code,
            decline_code: api_error.decline_code,
            message,
        },
        Some("invalid_request_error") => PaymentError::InvalidRequest {
            message,
            param: api_error.param,
        },
        Some("api_error") => PaymentError::Api { message },
        Some("authentication_error") => PaymentError::Authentication { message },
        Some("rate_limit_error") => PaymentError::RateLimit { message },
        Some(other) => PaymentError::Processor {
            category: other.to_string(),
            message,
        },
        None => PaymentError::Api { message },
    }
}

// --- Core Logic Function ---

/// Creates a Stripe PaymentIntent.
pub async fn create_payment_intent(
    client: &Client,
    stripe_config: &StripeConfig,
    request: &NewPaymentIntent,
) -> Result<PaymentIntentResult, PaymentError> {
    let api_url = format!(
        "{}{}",
        stripe_config.api_base.trim_end_matches('/'),
        PAYMENT_INTENTS_PATH
    );
    info!(
        "[Stripe Logic] Creating PaymentIntent: amount={} currency={}",
        request.amount, request.currency
    );

    let response = client
        .post(&api_url)
        .basic_auth(&stripe_config.secret_key, None::<&str>)
        .form(&payment_intent_form(request))
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let intent: StripePaymentIntentResponse = serde_json::from_str(&body_text)?;
        info!("[Stripe Logic] PaymentIntent {} created", intent.id);
        Ok(PaymentIntentResult {
            id: intent.id,
            status: intent.status,
            amount: intent.amount,
            currency: intent.currency,
            client_secret: intent.client_secret,
        })
    } else {
        let err = classify_stripe_error(status, &body_text);
        error!(
            "[Stripe Logic] Stripe API request failed with HTTP status: {}. Error: {}",
            status, err
        );
        Err(err)
    }
}
