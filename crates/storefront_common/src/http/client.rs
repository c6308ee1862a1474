// --- File: crates/storefront_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Creates the outbound HTTP client shared by one integration.
///
/// # Arguments
///
/// * `timeout_secs` - Optional overall request timeout. `None` leaves requests unbounded.
///
/// # Returns
///
/// A new reqwest::Client instance with the specified configuration
pub fn create_client(timeout_secs: Option<u64>) -> Result<Client, ReqwestError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_timeout() {
        assert!(create_client(None).is_ok());
        assert!(create_client(Some(5)).is_ok());
    }
}
