// --- File: crates/storefront_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! These traits decouple the HTTP handlers from the concrete processor client,
//! so handlers can be exercised against an in-memory implementation in tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for payment service operations.
///
/// Implementations must be safe to share between concurrent requests; the
/// handler keeps one instance for the lifetime of the process.
pub trait PaymentService: Send + Sync {
    /// Error type returned by payment service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create payment intent.
    fn create_payment_intent(
        &self,
        request: NewPaymentIntent,
    ) -> BoxFuture<'_, PaymentIntentResult, Self::Error>;
}

/// Parameters for creating a payment intent with the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPaymentIntent {
    /// Amount in the minor unit of `currency` (e.g. cents).
    pub amount: i64,
    /// Lower-case ISO currency code.
    pub currency: String,
    /// Let the processor pick the payment methods enabled in its dashboard.
    pub automatic_payment_methods: bool,
    /// Free-form key/value metadata stored on the intent.
    pub metadata: BTreeMap<String, String>,
}

/// Represents the result of a payment intent operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentResult {
    /// The ID of the payment intent.
    pub id: String,
    /// The status of the payment intent.
    pub status: Option<String>,
    /// The amount of the payment intent.
    pub amount: Option<i64>,
    /// The currency of the payment intent.
    pub currency: Option<String>,
    /// The client secret for the payment intent.
    pub client_secret: Option<String>,
}
