// --- File: crates/services/storefront_backend/src/lib.rs ---
use axum::Router;
use std::sync::Arc;
use storefront_config::AppConfig;
use storefront_payment::PaymentState;
use tower_http::trace::TraceLayer;

/// Assembles the full application router.
///
/// Every feature router is merged under `/api`. The payment state is passed in
/// so tests can swap the Stripe client for a double.
pub fn build_router(config: Arc<AppConfig>, payment_state: Arc<PaymentState>) -> Router {
    let api_router = {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = storefront_common::routes().merge(storefront_payment::routes(payment_state));
        #[cfg(feature = "catalog")]
        {
            router = router.merge(storefront_catalog::routes(config.clone()));
        }
        router
    };

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    tracing::debug!(
        "Router built for {}:{}",
        config.server.host,
        config.server.port
    );

    app.layer(TraceLayer::new_for_http())
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    #[cfg(feature = "catalog")]
    use storefront_catalog::doc::CatalogApiDoc;
    use storefront_payment::doc::PaymentApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Storefront API",
            version = "0.1.0",
            description = "Checkout and catalog endpoints of the storefront",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        tags((name = "Storefront", description = "Core service endpoints")),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    #[allow(unused_mut)]
    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(PaymentApiDoc::openapi());
    #[cfg(feature = "catalog")]
    openapi_doc.merge(CatalogApiDoc::openapi());
    tracing::info!("Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
