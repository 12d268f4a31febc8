use crate::app_config::AppConfig;
use crate::error::ConfigError;

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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
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
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Key names match the original deployment environment.
    let route_api_key = require("OPEN_ROUTE_SERVICE_API_KEY")?;
    let imagery_api_key = require("MAPS_API")?;

    let log_level = or_default("PANOROUTE_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("PANOROUTE_OUTPUT_DIR", "."));
    let request_timeout_secs = parse_u64("PANOROUTE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PANOROUTE_USER_AGENT", "panoroute/0.1 (route-imagery)");

    let sample_count = {
        let raw = or_default("PANOROUTE_SAMPLE_COUNT", "100");
        let parsed = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "PANOROUTE_SAMPLE_COUNT".to_string(),
                reason: e.to_string(),
            })?;
        if parsed == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: "PANOROUTE_SAMPLE_COUNT".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        parsed
    };

    let image_width = parse_u32("PANOROUTE_IMAGE_WIDTH", "640")?;
    let image_height = parse_u32("PANOROUTE_IMAGE_HEIGHT", "640")?;

    Ok(AppConfig {
        route_api_key,
        imagery_api_key,
        log_level,
        output_dir,
        request_timeout_secs,
        user_agent,
        sample_count,
        image_width,
        image_height,
    })
}
