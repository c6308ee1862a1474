use reqwest::Client;
use storefront_common::create_client;
use storefront_common::services::{BoxFuture, NewPaymentIntent, PaymentIntentResult, PaymentService};
use storefront_config::StripeConfig;

use crate::error::PaymentError;
use crate::logic::create_payment_intent;

/// Stripe payment service implementation
///
/// Holds one HTTP client for the lifetime of the process; reqwest clients pool
/// connections and are safe to share across requests.
pub struct StripePaymentService {
    client: Client,
    config: StripeConfig,
}

impl StripePaymentService {
    /// Create a new Stripe payment service
    pub fn new(config: StripeConfig) -> Result<Self, PaymentError> {
        let client = create_client(config.request_timeout_secs)
            .map_err(|e| PaymentError::Internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

impl PaymentService for StripePaymentService {
    type Error = PaymentError;

    fn create_payment_intent(
        &self,
        request: NewPaymentIntent,
    ) -> BoxFuture<'_, PaymentIntentResult, Self::Error> {
        Box::pin(async move { create_payment_intent(&self.client, &self.config, &request).await })
    }
}
