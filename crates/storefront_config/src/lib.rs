use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub mod models;
pub use models::*;

/// Prefix of environment variables that override configuration values.
pub const DEFAULT_PREFIX: &str = "STOREFRONT";

/// Loads the application configuration and validates it.
///
/// Sources, lowest precedence first:
/// 1. `{CONFIG_DIR}/default.*`
/// 2. `{CONFIG_DIR}/{RUN_ENV}.*` (only when `RUN_ENV` is set)
/// 3. `{PREFIX}__SECTION__KEY` environment variables
///
/// `CONFIG_DIR` defaults to `config`, `PREFIX` to `STOREFRONT`. Any value equal to
/// `secret_from_env` is then replaced from the environment, see
/// [`apply_env_overrides_from_marker`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").ok();
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let mut builder =
        Config::builder().add_source(File::from(config_dir.join("default")).required(false));
    if let Some(run_env) = &run_env {
        builder = builder.add_source(File::from(config_dir.join(run_env)).required(false));
    }
    builder = builder.add_source(
        Environment::with_prefix(&prefix)
            .separator("__")
            .try_parsing(true),
    );
    if let Some(run_env) = run_env {
        builder = builder.set_override("run_env", run_env)?;
    }

    load_config_from(builder)
}

/// Builds, resolves secrets and validates a prepared configuration builder.
pub fn load_config_from(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    let config = apply_env_overrides_from_marker(raw_config)?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the invariants the server cannot start without.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if !config.stripe.has_secret_key() {
        return Err(ConfigError::Message(
            "STRIPE_SECRET_KEY environment variable is required".to_string(),
        ));
    }
    if config.stripe.publishable_key().is_none() {
        warn!("STRIPE_PUBLISHABLE_KEY is not set; /payment/config will report it as unavailable");
    }
    Ok(())
}

/// Recursively replaces all "secret_from_env" string values using `lookup`.
///
/// The variable name is the upper-cased, `_`-joined path of the value,
/// e.g. `stripe.secret_key` becomes `STRIPE_SECRET_KEY`. Markers without a
/// matching variable are left in place.
fn inject_secrets(value: &mut Value, lookup: &dyn Fn(&str) -> Option<String>) {
    fn walk(path: &mut Vec<String>, obj: &mut Value, lookup: &dyn Fn(&str) -> Option<String>) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    walk(path, v, lookup);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_FROM_ENV => {
                let env_key = path.join("_").to_uppercase();
                match lookup(&env_key) {
                    Some(env_val) => *obj = Value::String(env_val),
                    None => warn!("env var {} not found for secret_from_env", env_key),
                }
            }
            _ => {}
        }
    }

    walk(&mut Vec::new(), value, lookup);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_overrides_with(config, &|key| env::var(key).ok())
}

fn apply_overrides_with(
    config: AppConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_secrets(&mut json, lookup);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to re-read config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, else the first command line argument when
/// it starts with `.env`, else `.env`. Loading happens at most once per process;
/// a missing file is not an error.
///
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
