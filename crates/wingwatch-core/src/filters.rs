use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default search radius in kilometres.
pub const DEFAULT_RADIUS_KM: u32 = 10;

/// Query object gathered from the user before a sightings search.
///
/// `date_range` is collected but the sightings fetch currently uses a fixed
/// seven-day lookback instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub location: SearchLocation,
    /// Search radius in kilometres.
    pub radius: u32,
    pub date_range: DateRange,
    #[serde(default)]
    pub species: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// A range covering only `day`.
    #[must_use]
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }
}

impl SearchFilters {
    /// Filters for a point with the default radius and a one-day range.
    #[must_use]
    pub fn around(location: SearchLocation, today: NaiveDate) -> Self {
        Self {
            location,
            radius: DEFAULT_RADIUS_KM,
            date_range: DateRange::single_day(today),
            species: None,
        }
    }

    /// Species filter with surrounding whitespace removed; blank counts as none.
    #[must_use]
    pub fn species_filter(&self) -> Option<&str> {
        self.species
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
