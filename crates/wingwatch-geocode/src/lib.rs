//! Address lookup against a Nominatim-compatible search endpoint.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeocodeClient, MIN_SUGGESTION_QUERY_LEN};
pub use error::GeocodeError;
pub use types::{AddressSuggestion, GeocodedPlace};
