//! Client for the eBird API as exposed through the WingWatch proxy, plus the
//! pipeline that turns raw observation feeds into display-ready sightings.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{EbirdClient, LOOKBACK_DAYS, MAX_RESULTS, MIN_QUERY_LEN};
pub use error::EbirdError;
pub use normalize::{normalize_sightings, normalize_species_names, MAX_SPECIES_SUGGESTIONS};
pub use types::{RawObservation, TaxonomyEntry};
