// File: services/storefront_backend/src/main.rs
use std::process::ExitCode;
use std::sync::Arc;
use storefront_backend::build_router;
use storefront_config::load_config;
use storefront_payment::PaymentState;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    storefront_common::logging::init();

    // A missing Stripe secret key fails here, before the listener is bound.
    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Running with run_env={:?}", config.run_env);

    let payment_state = match PaymentState::from_config(config.clone()) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to initialize Stripe client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = build_router(config.clone(), payment_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
