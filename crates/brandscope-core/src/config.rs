use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can drive it with a map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("BRANDSCOPE_ENV", "development"));
    let log_level = or_default("BRANDSCOPE_LOG_LEVEL", "info");
    let chrome_path = optional("BRANDSCOPE_CHROME_PATH").map(PathBuf::from);

    let nav_timeout_secs = parse_u64("BRANDSCOPE_NAV_TIMEOUT_SECS", "30")?;
    if nav_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRANDSCOPE_NAV_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let network_idle_ms = parse_u64("BRANDSCOPE_NETWORK_IDLE_MS", "500")?;
    let viewport_width = parse_u32("BRANDSCOPE_VIEWPORT_WIDTH", "1280")?;
    let viewport_height = parse_u32("BRANDSCOPE_VIEWPORT_HEIGHT", "800")?;
    let max_concurrent_scrapes = parse_usize("BRANDSCOPE_MAX_CONCURRENT_SCRAPES", "1")?.max(1);

    let sections_path = PathBuf::from(or_default(
        "BRANDSCOPE_SECTIONS_PATH",
        "./config/default_sections.yaml",
    ));
    let output_dir = PathBuf::from(or_default("BRANDSCOPE_OUTPUT_DIR", "./data/profiles"));

    let anthropic_api_key = optional("ANTHROPIC_API_KEY");
    let rewrite_model = or_default("BRANDSCOPE_REWRITE_MODEL", "claude-3-5-sonnet-latest");
    let rewrite_base_url = or_default("BRANDSCOPE_REWRITE_BASE_URL", "https://api.anthropic.com");
    let rewrite_timeout_secs = parse_u64("BRANDSCOPE_REWRITE_TIMEOUT_SECS", "60")?;
    let rewrite_max_tokens = parse_u32("BRANDSCOPE_REWRITE_MAX_TOKENS", "2000")?;

    Ok(AppConfig {
        env,
        log_level,
        chrome_path,
        nav_timeout_secs,
        network_idle_ms,
        viewport_width,
        viewport_height,
        max_concurrent_scrapes,
        sections_path,
        output_dir,
        anthropic_api_key,
        rewrite_model,
        rewrite_base_url,
        rewrite_timeout_secs,
        rewrite_max_tokens,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
