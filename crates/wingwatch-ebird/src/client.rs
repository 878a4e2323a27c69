//! HTTP client for the eBird API, reached through the WingWatch proxy.
//!
//! The proxy attaches the access token, so this client never holds one. HTTP
//! statuses are classified into [`EbirdError`] variants here; payload shape
//! checks and deduplication happen in [`crate::normalize`].

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode, Url};
use wingwatch_core::{SearchFilters, Sighting};

use crate::error::EbirdError;
use crate::normalize::{normalize_sightings, normalize_species_names};

/// Days of history requested for every sightings search.
pub const LOOKBACK_DAYS: u32 = 7;

/// Row cap sent with every sightings search.
pub const MAX_RESULTS: u32 = 100;

/// Shortest species query worth sending upstream.
pub const MIN_QUERY_LEN: usize = 2;

const RECENT_OBSERVATIONS_PATH: &str = "data/obs/geo/recent";
const TAXONOMY_PATH: &str = "ref/taxonomy/ebird";

/// How an HTTP 404 from upstream should be reported.
#[derive(Debug, Clone, Copy)]
enum NotFound {
    /// "Nothing matched", reported as [`EbirdError::NoSightings`].
    NoSightings,
    /// A plain failure, reported as [`EbirdError::UnexpectedStatus`].
    Failure,
}

/// Client for the proxied eBird endpoints.
///
/// Construct one per process from configuration and share it; it holds a
/// pooled `reqwest::Client`.
pub struct EbirdClient {
    client: Client,
    base_url: Url,
}

impl EbirdClient {
    /// Creates a client for the proxy at `base_url`
    /// (e.g. `https://example.org/api/ebird`).
    ///
    /// # Errors
    ///
    /// Returns [`EbirdError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`EbirdError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, EbirdError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so relative joins append to the proxy
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| EbirdError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds a client from the shared client configuration.
    ///
    /// # Errors
    ///
    /// Same as [`EbirdClient::new`].
    pub fn from_config(config: &wingwatch_core::ClientConfig) -> Result<Self, EbirdError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches recent sightings around the filter location, one per checklist.
    ///
    /// The lookback is always [`LOOKBACK_DAYS`]; `filters.date_range` is not
    /// sent upstream.
    ///
    /// # Errors
    ///
    /// - [`EbirdError::InvalidCredential`] on HTTP 401.
    /// - [`EbirdError::NoSightings`] on HTTP 404.
    /// - [`EbirdError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`EbirdError::Http`] on network failure.
    /// - [`EbirdError::Deserialize`] if the body is not JSON.
    /// - [`EbirdError::MalformedResponse`] if the body is not an array.
    pub async fn get_recent_sightings(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<Sighting>, EbirdError> {
        let url = self.sightings_url(filters)?;
        tracing::debug!(%url, "fetching recent sightings");
        let body = self.request_json(&url, NotFound::NoSightings).await?;
        let sightings = normalize_sightings(&body)?;
        tracing::info!(
            count = sightings.len(),
            location = %filters.location.name,
            "fetched recent sightings"
        );
        Ok(sightings)
    }

    /// Looks up up to ten distinct common names containing `query`.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters, ignoring surrounding
    /// whitespace, return an empty list without contacting upstream. Longer
    /// queries are sent and matched exactly as given.
    ///
    /// # Errors
    ///
    /// - [`EbirdError::InvalidCredential`] on HTTP 401.
    /// - [`EbirdError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`EbirdError::Http`] on network failure.
    /// - [`EbirdError::Deserialize`] if the body is not JSON.
    /// - [`EbirdError::MalformedResponse`] if the body is not an array.
    pub async fn search_species(&self, query: &str) -> Result<Vec<String>, EbirdError> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let url = self.build_url(TAXONOMY_PATH, &[("fmt", "json"), ("species", query)])?;
        tracing::debug!(%url, "searching species");
        let body = self.request_json(&url, NotFound::Failure).await?;
        normalize_species_names(&body, query)
    }

    fn sightings_url(&self, filters: &SearchFilters) -> Result<Url, EbirdError> {
        let path = match filters.species_filter() {
            Some(species) => format!(
                "{RECENT_OBSERVATIONS_PATH}/{}",
                utf8_percent_encode(species, NON_ALPHANUMERIC)
            ),
            None => RECENT_OBSERVATIONS_PATH.to_string(),
        };
        let lat = filters.location.lat.to_string();
        let lng = filters.location.lng.to_string();
        let dist = filters.radius.to_string();
        let back = LOOKBACK_DAYS.to_string();
        let max_results = MAX_RESULTS.to_string();
        self.build_url(
            &path,
            &[
                ("lat", &lat),
                ("lng", &lng),
                ("dist", &dist),
                ("back", &back),
                ("maxResults", &max_results),
            ],
        )
    }

    /// Joins `path` onto the proxy base and appends percent-encoded query pairs.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, EbirdError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| EbirdError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, classifies the HTTP status, and parses the body
    /// as JSON.
    async fn request_json(
        &self,
        url: &Url,
        not_found: NotFound,
    ) -> Result<serde_json::Value, EbirdError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "eBird request failed");
            return Err(classify_status(status, url, not_found));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| EbirdError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

fn classify_status(status: StatusCode, url: &Url, not_found: NotFound) -> EbirdError {
    match (status, not_found) {
        (StatusCode::UNAUTHORIZED, _) => EbirdError::InvalidCredential,
        (StatusCode::NOT_FOUND, NotFound::NoSightings) => EbirdError::NoSightings,
        _ => EbirdError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.path().to_string(),
        },
    }
}
