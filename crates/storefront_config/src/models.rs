// --- File: crates/storefront_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Marker value replaced by an environment variable when the config is loaded.
pub const SECRET_FROM_ENV: &str = "secret_from_env";

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Deployment flavour. Only `Development` surfaces raw internal error messages.
///
/// Any value other than the development names (e.g. `staging`, `test`) is
/// treated as `Production`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunEnv {
    #[serde(alias = "dev", alias = "debug")]
    Development,
    #[default]
    #[serde(other)]
    Production,
}

impl RunEnv {
    pub fn is_development(self) -> bool {
        self == RunEnv::Development
    }
}

// --- Stripe Config ---
// Keys are normally "secret_from_env" markers resolved from STRIPE_SECRET_KEY
// and STRIPE_PUBLISHABLE_KEY.
#[derive(Deserialize, Serialize, Clone, PartialEq)]
pub struct StripeConfig {
    pub secret_key: String, // Mandatory
    #[serde(default)]
    pub publishable_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// No timeout unless set.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("publishable_key", &self.publishable_key)
            .field("api_base", &self.api_base)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl StripeConfig {
    /// True when the secret key is present and the env marker was resolved.
    pub fn has_secret_key(&self) -> bool {
        let key = self.secret_key.trim();
        !key.is_empty() && key != SECRET_FROM_ENV
    }

    /// The publishable key, if one was configured and resolved.
    pub fn publishable_key(&self) -> Option<&str> {
        self.publishable_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != SECRET_FROM_ENV)
    }
}

/// A product offered by the storefront.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in the smallest currency unit (e.g., cents).
    pub price_cents: i64,
    /// Path or URL of the product image.
    pub image: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)] // Defaults to an empty vec if not present in config
    pub products: Vec<Product>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub run_env: RunEnv,

    pub stripe: StripeConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}
