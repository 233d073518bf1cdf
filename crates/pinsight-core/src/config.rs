use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default or is optional, so a bare environment yields
/// a usable offline configuration (fixture source, deterministic text path).
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank secrets are treated the same as unset ones.
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

    let fixtures_dir = PathBuf::from(or_default("INSIGHT_FIXTURES_DIR", "./fixtures"));
    let output_dir = PathBuf::from(or_default("INSIGHT_OUTPUT_DIR", "./output"));
    let log_level = or_default("INSIGHT_LOG_LEVEL", "info");

    let openai_api_key = optional("OPENAI_API_KEY");
    let openai_model = or_default("OPENAI_MODEL", "gpt-4o-mini");
    let openai_base_url = or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");
    let generative_timeout_secs = parse_u64("INSIGHT_GENERATIVE_TIMEOUT_SECS", "30")?;

    let instagram_access_token = optional("INSTAGRAM_ACCESS_TOKEN");
    let instagram_account_id = optional("INSTAGRAM_ACCOUNT_ID");

    Ok(AppConfig {
        fixtures_dir,
        output_dir,
        log_level,
        openai_api_key,
        openai_model,
        openai_base_url,
        generative_timeout_secs,
        instagram_access_token,
        instagram_account_id,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
