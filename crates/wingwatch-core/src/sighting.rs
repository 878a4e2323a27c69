use serde::{Deserialize, Serialize};

/// URL prefix for the public page of an eBird checklist.
pub const CHECKLIST_URL_PREFIX: &str = "https://ebird.org/checklist/";

/// A display-ready bird sighting, one per checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    pub checklist_id: String,
    pub observer_name: String,
    /// Observation date exactly as reported upstream.
    pub date: String,
    pub location: SightingLocation,
    pub species: String,
    pub count: u32,
    pub checklist_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

/// Builds the public checklist URL for a submission identifier.
#[must_use]
pub fn checklist_url(checklist_id: &str) -> String {
    format!("{CHECKLIST_URL_PREFIX}{checklist_id}")
}

/// Geographic bounding box, used to fit a map view around results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl MapBounds {
    /// Smallest box containing every sighting, or `None` for no sightings.
    #[must_use]
    pub fn enclosing(sightings: &[Sighting]) -> Option<Self> {
        let first = sightings.first()?;
        let seed = Self {
            north: first.location.lat,
            south: first.location.lat,
            east: first.location.lng,
            west: first.location.lng,
        };
        Some(sightings.iter().skip(1).fold(seed, |acc, s| Self {
            north: acc.north.max(s.location.lat),
            south: acc.south.min(s.location.lat),
            east: acc.east.max(s.location.lng),
            west: acc.west.min(s.location.lng),
        }))
    }
}
