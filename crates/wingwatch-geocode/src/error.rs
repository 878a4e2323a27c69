use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("location not found: {query}")]
    NotFound { query: String },

    #[error("invalid coordinate '{value}' for {query}")]
    InvalidCoordinate { query: String, value: String },

    #[error("unexpected HTTP status {status} from geocoder")]
    UnexpectedStatus { status: u16 },

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
