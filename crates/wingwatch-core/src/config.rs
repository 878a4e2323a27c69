use std::env::VarError;
use std::net::SocketAddr;

use crate::app_config::{ClientConfig, ProxyConfig};
use crate::ConfigError;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.ebird.org/v2";
pub const DEFAULT_API_BASE_URL: &str = "https://wingwatch-api.netlify.app/api/ebird";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "WingWatch/1.0";

/// Load proxy configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `EBIRD_API_KEY` is missing or a value is invalid.
pub fn load_proxy_config() -> Result<ProxyConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_proxy_config_from_env()
}

/// Load proxy configuration from environment variables already in the process.
///
/// Unlike [`load_proxy_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `EBIRD_API_KEY` is missing or a value is invalid.
pub fn load_proxy_config_from_env() -> Result<ProxyConfig, ConfigError> {
    build_proxy_config(|key| std::env::var(key))
}

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_client_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_client_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_client_config(|key| std::env::var(key))
}

/// Build proxy configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_proxy_config<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let ebird_api_key = lookup("EBIRD_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("EBIRD_API_KEY".to_string()))?;

    let raw_bind = or_default(&lookup, "WINGWATCH_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_bind
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "WINGWATCH_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default(&lookup, "WINGWATCH_LOG_LEVEL", "info");
    let upstream_base_url = parse_base_url(
        &lookup,
        "WINGWATCH_UPSTREAM_BASE_URL",
        DEFAULT_UPSTREAM_BASE_URL,
    )?;
    let upstream_timeout_secs = parse_u64(&lookup, "WINGWATCH_UPSTREAM_TIMEOUT_SECS", "30")?;

    Ok(ProxyConfig {
        bind_addr,
        log_level,
        ebird_api_key,
        upstream_base_url,
        upstream_timeout_secs,
    })
}

/// Build client configuration using the provided env-var lookup function.
fn build_client_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let api_base_url = parse_base_url(&lookup, "WINGWATCH_API_URL", DEFAULT_API_BASE_URL)?;
    let log_level = or_default(&lookup, "WINGWATCH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64(&lookup, "WINGWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let geocoder_url = parse_base_url(&lookup, "WINGWATCH_GEOCODER_URL", DEFAULT_GEOCODER_URL)?;
    let user_agent = or_default(&lookup, "WINGWATCH_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(ClientConfig {
        api_base_url,
        log_level,
        request_timeout_secs,
        geocoder_url,
        user_agent,
    })
}

fn or_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    lookup(var).unwrap_or_else(|_| default.to_string())
}

fn parse_u64<F>(lookup: &F, var: &str, default: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let raw = or_default(lookup, var, default);
    raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

/// Reads a URL-valued variable, requiring an `http://` or `https://` scheme.
/// Trailing slashes are stripped so callers can join paths with `/`.
fn parse_base_url<F>(lookup: &F, var: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let raw = or_default(lookup, var, default);
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
