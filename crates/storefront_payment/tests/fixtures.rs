//! Shared helpers for the payment integration tests.
#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use storefront_common::services::{
    BoxFuture, NewPaymentIntent, PaymentIntentResult, PaymentService,
};
use storefront_config::{AppConfig, CatalogConfig, RunEnv, ServerConfig, StripeConfig};
use storefront_payment::{routes, PaymentError, PaymentState};

/// Payment service double returning a canned result and recording every call.
pub struct MockPayments {
    result: Result<PaymentIntentResult, PaymentError>,
    pub calls: Mutex<Vec<NewPaymentIntent>>,
}

impl MockPayments {
    pub fn returning(result: Result<PaymentIntentResult, PaymentError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn succeeding(client_secret: Option<&str>, id: &str) -> Arc<Self> {
        Self::returning(Ok(PaymentIntentResult {
            id: id.to_string(),
            status: Some("requires_payment_method".to_string()),
            amount: None,
            currency: None,
            client_secret: client_secret.map(str::to_string),
        }))
    }

    pub fn recorded(&self) -> Vec<NewPaymentIntent> {
        self.calls.lock().unwrap().clone()
    }
}

impl PaymentService for MockPayments {
    type Error = PaymentError;

    fn create_payment_intent(
        &self,
        request: NewPaymentIntent,
    ) -> BoxFuture<'_, PaymentIntentResult, Self::Error> {
        self.calls.lock().unwrap().push(request);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

pub fn test_config(run_env: RunEnv, publishable_key: Option<&str>) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        run_env,
        stripe: StripeConfig {
            secret_key: "sk_test_123".to_string(),
            publishable_key: publishable_key.map(str::to_string),
            api_base: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: None,
        },
        catalog: CatalogConfig::default(),
    })
}

pub fn app_with(payments: Arc<MockPayments>, run_env: RunEnv) -> Router {
    let state = PaymentState {
        config: test_config(run_env, Some("pk_test_123")),
        payments,
    };
    routes(Arc::new(state))
}

pub fn post_payment(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/payment")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
