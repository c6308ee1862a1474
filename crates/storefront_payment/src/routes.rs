// --- File: crates/storefront_payment/src/routes.rs ---

use crate::handlers::{
    create_payment_intent_handler,
    method_not_allowed_handler,
    payment_config_handler,
    PaymentState,
};
use axum::{routing::{get, post}, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the payment feature.
pub fn routes(state: Arc<PaymentState>) -> Router {
    Router::new()
        .route(
            "/payment",
            post(create_payment_intent_handler).fallback(method_not_allowed_handler),
        )
        // Browser SDK bootstrap (GET)
        .route("/payment/config", get(payment_config_handler))
        .with_state(state)
}
