use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required proxy env vars populated.
fn proxy_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("EBIRD_API_KEY", "test-token");
    m
}

#[test]
fn build_proxy_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_proxy_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "EBIRD_API_KEY"),
        "expected MissingEnvVar(EBIRD_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_proxy_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("EBIRD_API_KEY", "   ");
    let result = build_proxy_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_proxy_config_applies_defaults() {
    let map = proxy_env();
    let cfg = build_proxy_config(lookup_from_map(&map)).expect("valid config");
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.ebird_api_key, "test-token");
    assert_eq!(cfg.upstream_base_url, "https://api.ebird.org/v2");
    assert_eq!(cfg.upstream_timeout_secs, 30);
}

#[test]
fn build_proxy_config_has_no_deployment_environment_setting() {
    let mut map = proxy_env();
    map.insert("WINGWATCH_ENV", "staging");
    let cfg = build_proxy_config(lookup_from_map(&map)).expect("WINGWATCH_ENV is not read");
    assert!(!format!("{cfg:?}").contains("staging"));
}

#[test]
fn build_proxy_config_fails_with_invalid_bind_addr() {
    let mut map = proxy_env();
    map.insert("WINGWATCH_BIND_ADDR", "not-a-socket-addr");
    let result = build_proxy_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WINGWATCH_BIND_ADDR"),
        "expected InvalidEnvVar(WINGWATCH_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_proxy_config_strips_trailing_slash_from_upstream() {
    let mut map = proxy_env();
    map.insert("WINGWATCH_UPSTREAM_BASE_URL", "http://127.0.0.1:9999/v2/");
    let cfg = build_proxy_config(lookup_from_map(&map)).expect("valid config");
    assert_eq!(cfg.upstream_base_url, "http://127.0.0.1:9999/v2");
}

#[test]
fn build_proxy_config_rejects_non_http_upstream() {
    let mut map = proxy_env();
    map.insert("WINGWATCH_UPSTREAM_BASE_URL", "ftp://example.com");
    let result = build_proxy_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WINGWATCH_UPSTREAM_BASE_URL")
    );
}

#[test]
fn build_proxy_config_fails_with_invalid_timeout() {
    let mut map = proxy_env();
    map.insert("WINGWATCH_UPSTREAM_TIMEOUT_SECS", "soon");
    let result = build_proxy_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WINGWATCH_UPSTREAM_TIMEOUT_SECS")
    );
}

#[test]
fn proxy_config_debug_redacts_api_key() {
    let map = proxy_env();
    let cfg = build_proxy_config(lookup_from_map(&map)).expect("valid config");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-token"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_client_config_applies_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_client_config(lookup_from_map(&map)).expect("valid config");
    assert_eq!(
        cfg.api_base_url,
        "https://wingwatch-api.netlify.app/api/ebird"
    );
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(
        cfg.geocoder_url,
        "https://nominatim.openstreetmap.org/search"
    );
    assert_eq!(cfg.user_agent, "WingWatch/1.0");
}

#[test]
fn build_client_config_overrides_api_url() {
    let mut map = HashMap::new();
    map.insert("WINGWATCH_API_URL", "http://localhost:3000/api/ebird/");
    let cfg = build_client_config(lookup_from_map(&map)).expect("valid config");
    assert_eq!(cfg.api_base_url, "http://localhost:3000/api/ebird");
}

#[test]
fn build_client_config_rejects_invalid_api_url() {
    let mut map = HashMap::new();
    map.insert("WINGWATCH_API_URL", "localhost:3000");
    let result = build_client_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "WINGWATCH_API_URL")
    );
}
