//! HTTP client for Nominatim's `/search` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{AddressSuggestion, GeocodedPlace, NominatimPlace};

/// Shortest partial address worth asking the geocoder about.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

const SUGGESTION_LIMIT: &str = "5";

/// Client for forward geocoding and address autocompletion.
///
/// Nominatim's usage policy requires an identifying `User-Agent`.
pub struct GeocodeClient {
    client: Client,
    search_url: Url,
}

impl GeocodeClient {
    /// Creates a client for the search endpoint at `search_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeocodeError::InvalidBaseUrl`] if `search_url` does not parse.
    pub fn new(search_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let search_url = Url::parse(search_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: search_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, search_url })
    }

    /// Builds a client from the shared client configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::new`].
    pub fn from_config(config: &wingwatch_core::ClientConfig) -> Result<Self, GeocodeError> {
        Self::new(
            &config.geocoder_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Resolves free-form text to the single best-matching place.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NotFound`] when the geocoder returns no match.
    /// - [`GeocodeError::InvalidCoordinate`] if the match has unparsable coordinates.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::Http`] on network or decoding failure.
    pub async fn geocode_location(&self, query: &str) -> Result<GeocodedPlace, GeocodeError> {
        let places = self
            .search(&[("q", query), ("format", "json"), ("limit", "1")])
            .await?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.to_string(),
            })?;

        Ok(GeocodedPlace {
            lat: parse_coordinate(query, &place.lat)?,
            lng: parse_coordinate(query, &place.lon)?,
            name: place.display_name,
        })
    }

    /// Returns up to five address candidates for a partially typed query.
    ///
    /// Queries shorter than [`MIN_SUGGESTION_QUERY_LEN`] return an empty list
    /// without a request. Candidates with unparsable coordinates are dropped.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::Http`] on network or decoding failure.
    pub async fn address_suggestions(
        &self,
        query: &str,
    ) -> Result<Vec<AddressSuggestion>, GeocodeError> {
        if query.trim().chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Ok(Vec::new());
        }

        let places = self
            .search(&[
                ("q", query),
                ("format", "json"),
                ("limit", SUGGESTION_LIMIT),
                ("addressdetails", "1"),
            ])
            .await?;

        Ok(places
            .into_iter()
            .filter_map(|place| {
                let lat = parse_coordinate(query, &place.lat).ok()?;
                let lon = parse_coordinate(query, &place.lon).ok()?;
                Some(AddressSuggestion {
                    display_name: place.display_name,
                    lat,
                    lon,
                })
            })
            .collect())
    }

    /// Like [`GeocodeClient::address_suggestions`], but logs failures and
    /// returns an empty list so autocompletion never blocks a search.
    pub async fn address_suggestions_or_empty(&self, query: &str) -> Vec<AddressSuggestion> {
        match self.address_suggestions(query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, query, "address suggestion lookup failed");
                Vec::new()
            }
        }
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<Vec<NominatimPlace>, GeocodeError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().extend_pairs(params);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Vec<NominatimPlace>>().await?)
    }
}

fn parse_coordinate(query: &str, raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            query: query.to_string(),
            value: raw.to_string(),
        })
}
