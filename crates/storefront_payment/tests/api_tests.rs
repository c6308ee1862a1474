mod fixtures;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use fixtures::{app_with, body_json, post_payment, test_config, MockPayments};
use serde_json::json;
use std::sync::Arc;
use storefront_config::RunEnv;
use storefront_payment::{routes, PaymentError, PaymentState};
use tower::ServiceExt;

#[tokio::test]
async fn successful_intent_returns_client_secret() {
    let payments = MockPayments::succeeding(Some("secret_abc"), "pi_123");
    let app = app_with(payments.clone(), RunEnv::Production);

    let response = app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "clientSecret": "secret_abc", "paymentIntentId": "pi_123" })
    );
}

#[tokio::test]
async fn missing_currency_defaults_to_usd() {
    let payments = MockPayments::succeeding(Some("secret_abc"), "pi_123");
    let app = app_with(payments.clone(), RunEnv::Production);

    app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();

    let calls = payments.recorded();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount, 5000);
    assert_eq!(calls[0].currency, "usd");
    assert!(calls[0].automatic_payment_methods);
    assert!(calls[0].metadata.contains_key("created_at"));
}

#[tokio::test]
async fn explicit_currency_is_forwarded() {
    let payments = MockPayments::succeeding(Some("secret_abc"), "pi_123");
    let app = app_with(payments.clone(), RunEnv::Production);

    app.oneshot(post_payment(r#"{"amount": 1999, "currency": "eur"}"#))
        .await
        .unwrap();

    assert_eq!(payments.recorded()[0].currency, "eur");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let payments = MockPayments::succeeding(Some("secret_abc"), "pi_123");
    let app = app_with(payments.clone(), RunEnv::Production);

    let response = app.oneshot(post_payment("{amount: 5000")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid JSON in request body");
    assert!(body["details"]["parseError"].is_string());
    assert!(payments.recorded().is_empty());
}

#[tokio::test]
async fn empty_body_is_invalid_json() {
    let app = app_with(MockPayments::succeeding(Some("s"), "pi"), RunEnv::Production);
    let response = app.oneshot(post_payment("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid JSON in request body");
}

#[tokio::test]
async fn null_body_is_required() {
    let app = app_with(MockPayments::succeeding(Some("s"), "pi"), RunEnv::Production);
    let response = app.oneshot(post_payment("null")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Validation failed",
            "details": { "validationErrors": ["Request body is required"] }
        })
    );
}

#[tokio::test]
async fn validation_errors_are_listed() {
    let payments = MockPayments::succeeding(Some("secret_abc"), "pi_123");
    let app = app_with(payments.clone(), RunEnv::Production);

    let response = app
        .oneshot(post_payment(r#"{"amount": 49, "currency": 123}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Validation failed",
            "details": {
                "validationErrors": [
                    "Amount must be at least 50 cents ($0.50)",
                    "Currency must be a string"
                ]
            }
        })
    );
    assert!(payments.recorded().is_empty());
}

#[tokio::test]
async fn card_error_is_mapped() {
    let payments = MockPayments::returning(Err(PaymentError::Card {
        code: Some("card_declined".to_string()),
        decline_code: Some("insufficient_funds".to_string()),
        message: "Your card has insufficient funds.".to_string(),
    }));
    let app = app_with(payments, RunEnv::Production);

    let response = app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Card error occurred");
    assert_eq!(body["details"]["code"], "card_declined");
    assert_eq!(body["details"]["decline_code"], "insufficient_funds");
}

#[tokio::test]
async fn processor_categories_map_to_statuses() {
    let cases = vec![
        (PaymentError::RateLimit { message: "x".into() }, StatusCode::TOO_MANY_REQUESTS),
        (PaymentError::Api { message: "x".into() }, StatusCode::BAD_GATEWAY),
        (PaymentError::Connection { message: "x".into() }, StatusCode::SERVICE_UNAVAILABLE),
        (PaymentError::Authentication { message: "x".into() }, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (err, status) in cases {
        let app = app_with(MockPayments::returning(Err(err.clone())), RunEnv::Production);
        let response = app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();
        assert_eq!(response.status(), status, "status for {:?}", err);
    }
}

#[tokio::test]
async fn rejected_parameters_and_other_categories_carry_details() {
    let cases = vec![
        (
            PaymentError::InvalidRequest {
                message: "Invalid currency: zzz".into(),
                param: Some("currency".into()),
            },
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Invalid request to Stripe",
                "details": { "message": "Invalid currency: zzz", "param": "currency" }
            }),
        ),
        (
            PaymentError::Processor {
                category: "idempotency_error".into(),
                message: "Keys for idempotent requests can only be used once".into(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Payment processing error",
                "details": {
                    "type": "idempotency_error",
                    "message": "Keys for idempotent requests can only be used once"
                }
            }),
        ),
        (
            PaymentError::Validation("Amount must be a number".into()),
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Validation error",
                "details": { "message": "Amount must be a number" }
            }),
        ),
    ];

    for (err, status, expected) in cases {
        let app = app_with(MockPayments::returning(Err(err.clone())), RunEnv::Production);
        let response = app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();
        assert_eq!(response.status(), status, "status for {:?}", err);
        assert_eq!(body_json(response).await, expected, "body for {:?}", err);
    }
}

#[tokio::test]
async fn missing_client_secret_is_server_error() {
    for secret in [None, Some("")] {
        let app = app_with(MockPayments::succeeding(secret, "pi_123"), RunEnv::Production);
        let response = app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to create payment intent" })
        );
    }
}

#[tokio::test]
async fn internal_errors_are_redacted_in_production() {
    let err = PaymentError::Internal("pool exhausted".to_string());

    let app = app_with(MockPayments::returning(Err(err.clone())), RunEnv::Production);
    let body = body_json(app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap()).await;
    assert_eq!(
        body,
        json!({ "error": "Internal server error", "details": { "message": "Something went wrong" } })
    );

    let app = app_with(MockPayments::returning(Err(err)), RunEnv::Development);
    let body = body_json(app.oneshot(post_payment(r#"{"amount": 5000}"#)).await.unwrap()).await;
    assert_eq!(body["details"]["message"], "pool exhausted");
}

#[tokio::test]
async fn other_methods_get_405() {
    let app = app_with(MockPayments::succeeding(Some("s"), "pi"), RunEnv::Production);
    let request = Request::builder()
        .method("GET")
        .uri("/payment")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn payment_config_exposes_publishable_key() {
    let app = app_with(MockPayments::succeeding(Some("s"), "pi"), RunEnv::Production);
    let request = Request::builder()
        .uri("/payment/config")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "publishableKey": "pk_test_123" }));
}

#[tokio::test]
async fn payment_config_without_key_is_unavailable() {
    let state = PaymentState {
        config: test_config(RunEnv::Production, None),
        payments: MockPayments::succeeding(Some("s"), "pi"),
    };
    let request = Request::builder()
        .uri("/payment/config")
        .body(Body::empty())
        .unwrap();

    let response = routes(Arc::new(state)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
