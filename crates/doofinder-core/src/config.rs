use std::collections::BTreeMap;

use thiserror::Error;

use crate::filter_map::FilterNameMap;
use crate::provider_config::ProviderConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("filter name map is not a bijection: caller name \"{caller_name}\" appears more than once")]
    FilterMapCollision { caller_name: String },
}

/// Load provider configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_provider_config() -> Result<ProviderConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_provider_config_from_env()
}

/// Load provider configuration from environment variables already in the process.
///
/// Unlike [`load_provider_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_provider_config_from_env() -> Result<ProviderConfig, ConfigError> {
    build_provider_config(|key| std::env::var(key))
}

/// Build provider configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_provider_config<F>(lookup: F) -> Result<ProviderConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let zone = require("DOOFINDER_ZONE")?;
    let hash_id = require("DOOFINDER_HASH_ID")?;
    let auth_key = require("DOOFINDER_AUTH_KEY")?;
    let base_uri = lookup("DOOFINDER_BASE_URI").ok();

    let filter_map = match lookup("DOOFINDER_FILTER_MAP") {
        Ok(raw) => parse_filter_map(&raw)?,
        Err(_) => FilterNameMap::default(),
    };

    let product_id_key = or_default("DOOFINDER_PRODUCT_ID_KEY", "id");
    let request_timeout_secs = parse_u64("DOOFINDER_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DOOFINDER_USER_AGENT", "doofinder-adapter/0.1");

    Ok(ProviderConfig {
        zone,
        hash_id,
        auth_key,
        base_uri,
        filter_map,
        product_id_key,
        request_timeout_secs,
        user_agent,
    })
}

/// Parses the `DOOFINDER_FILTER_MAP` value: a JSON object mapping provider
/// filter names to caller-facing names, e.g. `{"brand": "marca"}`.
fn parse_filter_map(raw: &str) -> Result<FilterNameMap, ConfigError> {
    let entries: BTreeMap<String, String> =
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidEnvVar {
            var: "DOOFINDER_FILTER_MAP".to_string(),
            reason: e.to_string(),
        })?;
    FilterNameMap::new(entries)
}
