use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
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

    let mapquest_api_key = require("MAPQUEST_API_KEY")?;

    let nps_base_url = or_default("PARKSCOUT_NPS_BASE_URL", "https://www.nps.gov");
    let places_url = or_default(
        "PARKSCOUT_PLACES_URL",
        "http://www.mapquestapi.com/search/v2/radius",
    );
    let request_timeout_secs = parse_u64("PARKSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PARKSCOUT_USER_AGENT",
        "parkscout/0.1 (national-site-explorer)",
    );
    let log_level = or_default("PARKSCOUT_LOG_LEVEL", "info");
    let snapshot_path = PathBuf::from(or_default(
        "PARKSCOUT_SNAPSHOT_PATH",
        "./parkscout_cache.json",
    ));

    Ok(AppConfig {
        mapquest_api_key,
        nps_base_url,
        places_url,
        request_timeout_secs,
        user_agent,
        log_level,
        snapshot_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
