use crate::app_config::{AppConfig, HttpConfig};
use crate::{ConfigError, MAX_CARD_FIELDS};

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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(env_lookup)
}

/// Load only the HTTP client settings. Does not require `BOT_TOKEN`.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_http_config() -> Result<HttpConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_http_config(&env_lookup)
}

fn env_lookup(key: &str) -> Result<String, std::env::VarError> {
    std::env::var(key)
}

fn or_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup(var).unwrap_or_else(|_| default.to_string())
}

fn parse_u64<F>(lookup: &F, var: &str, default: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let raw = or_default(lookup, var, default);
    raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

fn build_http_config<F>(lookup: &F) -> Result<HttpConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let request_timeout_secs = parse_u64(lookup, "SHOPLINK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        lookup,
        "SHOPLINK_USER_AGENT",
        "shoplink/0.1 (storefront-lookup)",
    );

    Ok(HttpConfig {
        request_timeout_secs,
        user_agent,
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let discord_token = lookup("BOT_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

    let command_prefix = or_default(&lookup, "SHOPLINK_COMMAND_PREFIX", "!");
    if command_prefix.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPLINK_COMMAND_PREFIX".to_string(),
            reason: "prefix must not be empty".to_string(),
        });
    }

    let log_level = or_default(&lookup, "SHOPLINK_LOG_LEVEL", "info");
    let http = build_http_config(&lookup)?;
    let selection_timeout_secs = parse_u64(&lookup, "SHOPLINK_SELECTION_TIMEOUT_SECS", "30")?;
    let collection_display_limit = parse_display_limit(&or_default(
        &lookup,
        "SHOPLINK_COLLECTION_DISPLAY_LIMIT",
        "25",
    ))?;
    let embed_footer = lookup("SHOPLINK_EMBED_FOOTER")
        .ok()
        .filter(|s| !s.is_empty());

    Ok(AppConfig {
        discord_token,
        command_prefix,
        log_level,
        http,
        selection_timeout_secs,
        collection_display_limit,
        embed_footer,
    })
}

/// Parse the collection display limit, which must fit on a single card.
fn parse_display_limit(raw: &str) -> Result<usize, ConfigError> {
    const VAR: &str = "SHOPLINK_COLLECTION_DISPLAY_LIMIT";
    let limit = raw.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
        var: VAR.to_string(),
        reason: e.to_string(),
    })?;
    if limit == 0 || limit > MAX_CARD_FIELDS {
        return Err(ConfigError::InvalidEnvVar {
            var: VAR.to_string(),
            reason: format!("must be between 1 and {MAX_CARD_FIELDS}, got {limit}"),
        });
    }
    Ok(limit)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
