use serde::{Deserialize, Serialize};
use wingwatch_core::SearchLocation;

/// One row of a Nominatim `format=json` search response.
///
/// Nominatim sends coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// A resolved place, ready to be used as a search centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedPlace {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl From<GeocodedPlace> for SearchLocation {
    fn from(place: GeocodedPlace) -> Self {
        Self {
            lat: place.lat,
            lng: place.lng,
            name: place.name,
        }
    }
}

/// An autocomplete candidate for a partially typed address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressSuggestion {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}
