use thiserror::Error;

/// Errors returned by the eBird client and the normalization pipeline.
#[derive(Debug, Error)]
pub enum EbirdError {
    /// Network, DNS, timeout, or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream rejected the access token (HTTP 401).
    #[error("invalid eBird API credential")]
    InvalidCredential,

    /// Upstream had nothing for the query (HTTP 404 on a sightings search).
    #[error("no sightings found for the specified criteria")]
    NoSightings,

    /// A 2xx response whose body is not the expected array shape.
    #[error("malformed response from {context}: expected a JSON array")]
    MalformedResponse { context: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl EbirdError {
    /// Short message suitable for showing to an end user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredential => {
                "Invalid eBird API key. Please check your configuration."
            }
            Self::NoSightings => "No sightings found for the specified criteria.",
            Self::Http(_) => "Could not reach the sightings service. Please try again.",
            Self::MalformedResponse { .. }
            | Self::UnexpectedStatus { .. }
            | Self::Deserialize { .. }
            | Self::InvalidBaseUrl { .. } => "Something went wrong while fetching bird data.",
        }
    }

    /// `true` when the error means "nothing found" rather than a failure.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoSightings)
    }
}
