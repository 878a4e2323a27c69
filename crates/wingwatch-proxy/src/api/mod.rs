mod ebird;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wingwatch_core::ProxyConfig;

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Builds the shared upstream HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `reqwest::Client` cannot be constructed.
    pub fn new(config: Arc<ProxyConfig>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("wingwatch-proxy/0.1")
            .build()?;
        Ok(Self { config, http })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct StatusMessage {
    message: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            REQUEST_ID_HEADER,
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/test", get(liveness))
        .route("/api/ebird/{*path}", any(ebird::relay))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn liveness() -> impl IntoResponse {
    Json(StatusMessage {
        message: "Proxy server is running",
    })
}
