use crate::app_config::AppConfig;
use crate::ConfigError;

/// Environment variable holding the places API credential.
pub const API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("PLACESWEEP_LOG_LEVEL", "info");

    // An empty key in `.env` is treated the same as no key at all.
    let places_api_key = optional(API_KEY_VAR);
    let places_base_url = or_default(
        "PLACESWEEP_PLACES_BASE_URL",
        "https://places.googleapis.com",
    );

    let plan_path = optional("PLACESWEEP_PLAN_PATH").map(PathBuf::from);
    let output_path = PathBuf::from(or_default(
        "PLACESWEEP_OUTPUT_PATH",
        "nyc_supermarket_data.csv",
    ));

    let request_timeout_secs = parse_u64("PLACESWEEP_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESWEEP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default(
        "PLACESWEEP_USER_AGENT",
        "placesweep/0.1 (places-collection)",
    );

    Ok(AppConfig {
        log_level,
        places_api_key,
        places_base_url,
        plan_path,
        output_path,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
