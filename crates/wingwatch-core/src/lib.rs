//! Shared domain types and environment-driven configuration for WingWatch.

pub mod app_config;
pub mod config;
pub mod filters;
pub mod sighting;

pub use app_config::{ClientConfig, ProxyConfig};
pub use config::{
    load_client_config, load_client_config_from_env, load_proxy_config,
    load_proxy_config_from_env,
};
pub use filters::{DateRange, SearchFilters, SearchLocation};
pub use sighting::{checklist_url, MapBounds, Sighting, SightingLocation};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
