// --- File: crates/storefront_payment/src/validation.rs ---
//! Validation of the untyped `POST /payment` body.
//!
//! The checks mirror what the checkout page is allowed to send: an amount in
//! cents and an optional currency code. Validation never looks at the
//! currency's value, only at its type; Stripe rejects unknown codes itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PaymentError;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Smallest chargeable amount in cents ($0.50).
pub const MIN_AMOUNT: i64 = 50;
/// Largest chargeable amount in cents ($999,999.99).
pub const MAX_AMOUNT: i64 = 99_999_999;
/// Currency used when the request does not name one.
pub const DEFAULT_CURRENCY: &str = "usd";

pub const BODY_REQUIRED: &str = "Request body is required";
pub const AMOUNT_NOT_A_NUMBER: &str = "Amount must be a number";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";
pub const AMOUNT_TOO_SMALL: &str = "Amount must be at least 50 cents ($0.50)";
pub const AMOUNT_TOO_LARGE: &str = "Amount cannot exceed $999,999.99";
pub const AMOUNT_NOT_WHOLE: &str = "Amount must be a whole number of cents";
pub const CURRENCY_NOT_A_STRING: &str = "Currency must be a string";

/// A validated request to charge `amount` cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentRequest {
    /// Amount in the smallest currency unit.
    #[cfg_attr(feature = "openapi", schema(example = 5000))]
    pub amount: i64,
    /// ISO currency code, `usd` when omitted.
    #[cfg_attr(feature = "openapi", schema(example = "usd"))]
    pub currency: Option<String>,
}

/// `false`, `0`, `""` and `null` count as "not provided", like an omitted field.
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the first amount rule `amount` breaks, if any.
///
/// Rules are checked in order: type, `> 0`, `>= 50`, `<= 99,999,999`, whole cents.
fn amount_error(amount: Option<&Value>) -> Option<&'static str> {
    let Some(value) = amount.and_then(Value::as_f64) else {
        return Some(AMOUNT_NOT_A_NUMBER);
    };

    if value <= 0.0 {
        Some(AMOUNT_NOT_POSITIVE)
    } else if value < MIN_AMOUNT as f64 {
        Some(AMOUNT_TOO_SMALL)
    } else if value > MAX_AMOUNT as f64 {
        Some(AMOUNT_TOO_LARGE)
    } else if value.fract() != 0.0 {
        Some(AMOUNT_NOT_WHOLE)
    } else {
        None
    }
}

/// Validates a parsed request body and returns every problem found, in order.
///
/// An empty list means the body is acceptable. A missing body yields only
/// [`BODY_REQUIRED`]. At most one amount error is reported; the currency check
/// runs regardless of the amount outcome.
pub fn validate_payment_request(body: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_provided(body) {
        errors.push(BODY_REQUIRED.to_string());
        return errors;
    }

    if let Some(message) = amount_error(body.get("amount")) {
        errors.push(message.to_string());
    }

    if let Some(currency) = body.get("currency") {
        if is_provided(currency) && !currency.is_string() {
            errors.push(CURRENCY_NOT_A_STRING.to_string());
        }
    }

    errors
}

impl PaymentRequest {
    /// Extracts the typed request from a body that passed [`validate_payment_request`].
    pub fn from_validated(body: &Value) -> Result<Self, PaymentError> {
        let amount = body
            .get("amount")
            .and_then(Value::as_f64)
            .filter(|a| a.fract() == 0.0 && (MIN_AMOUNT as f64..=MAX_AMOUNT as f64).contains(a))
            .ok_or_else(|| PaymentError::Validation(AMOUNT_NOT_A_NUMBER.to_string()))?
            as i64;

        let currency = match body.get("currency") {
            Some(value) if is_provided(value) => Some(
                value
                    .as_str()
                    .ok_or_else(|| PaymentError::Validation(CURRENCY_NOT_A_STRING.to_string()))?
                    .to_string(),
            ),
            _ => None,
        };

        Ok(Self { amount, currency })
    }

    /// The currency to charge in, falling back to [`DEFAULT_CURRENCY`].
    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}
