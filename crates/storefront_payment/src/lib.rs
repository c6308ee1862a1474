// --- File: crates/storefront_payment/src/lib.rs ---

pub mod validation;
pub mod logic;
pub mod handlers;
pub mod routes;
pub mod doc;
pub mod error;
pub mod service;


// Re-export for main backend
pub use routes::routes;
pub use handlers::{PaymentIntentResponse, PaymentState};
pub use error::PaymentError; // Re-export the error type
pub use service::StripePaymentService; // Re-export the payment service
pub use validation::{validate_payment_request, PaymentRequest};
