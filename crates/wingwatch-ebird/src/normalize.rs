//! Normalization of raw eBird payloads into display-ready values.
//!
//! Both pipelines keep the first occurrence of each key in upstream order and
//! drop later duplicates without merging fields.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use wingwatch_core::{checklist_url, Sighting, SightingLocation};

use crate::error::EbirdError;
use crate::types::{RawObservation, TaxonomyEntry};

pub const ANONYMOUS_OBSERVER: &str = "Anonymous";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Upper bound on species names returned by [`normalize_species_names`].
pub const MAX_SPECIES_SUGGESTIONS: usize = 10;

/// Converts a raw observation feed into one [`Sighting`] per checklist.
///
/// The submission identifier is the only required field and is read before
/// anything else, so the first record for a checklist wins even when its
/// other fields are unusable. Those fields fall back to defaults. Records
/// without an identifier are skipped and logged.
///
/// # Errors
///
/// Returns [`EbirdError::MalformedResponse`] if `payload` is not a JSON array.
pub fn normalize_sightings(payload: &Value) -> Result<Vec<Sighting>, EbirdError> {
    let records = payload
        .as_array()
        .ok_or_else(|| EbirdError::MalformedResponse {
            context: "recent observations".to_string(),
        })?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut sightings = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let Some(key) = record
            .get("subId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        else {
            tracing::warn!(index, "skipping observation without a submission id");
            continue;
        };
        if !seen.insert(key) {
            continue;
        }
        match RawObservation::deserialize(record) {
            Ok(raw) => sightings.push(to_sighting(key, &raw)),
            Err(e) => tracing::warn!(index, error = %e, "skipping undecodable observation record"),
        }
    }

    Ok(sightings)
}

/// Filters taxonomy records down to distinct common names containing `query`.
///
/// Matching ignores case; uniqueness does not, so `"Robin"` and `"robin"` are
/// both kept. At most [`MAX_SPECIES_SUGGESTIONS`] names are returned.
///
/// # Errors
///
/// Returns [`EbirdError::MalformedResponse`] if `payload` is not a JSON array.
pub fn normalize_species_names(payload: &Value, query: &str) -> Result<Vec<String>, EbirdError> {
    let records = payload
        .as_array()
        .ok_or_else(|| EbirdError::MalformedResponse {
            context: "taxonomy".to_string(),
        })?;

    let needle = query.to_lowercase();
    let mut seen = HashSet::new();

    let names = records
        .iter()
        .filter_map(|record| TaxonomyEntry::deserialize(record).ok())
        .filter_map(|entry| entry.com_name.filter(|name| !name.is_empty()))
        .filter(|name| name.to_lowercase().contains(&needle))
        .filter(|name| seen.insert(name.clone()))
        .take(MAX_SPECIES_SUGGESTIONS)
        .collect();

    Ok(names)
}

fn to_sighting(checklist_id: &str, raw: &RawObservation) -> Sighting {
    Sighting {
        checklist_id: checklist_id.to_string(),
        observer_name: non_empty_or(raw.user_display_name.as_deref(), ANONYMOUS_OBSERVER),
        date: raw.obs_dt.clone().unwrap_or_default(),
        location: SightingLocation {
            lat: raw.lat.unwrap_or_default(),
            lng: raw.lng.unwrap_or_default(),
            name: non_empty_or(raw.loc_name.as_deref(), UNKNOWN_LOCATION),
        },
        species: raw.com_name.clone().unwrap_or_default(),
        count: raw
            .how_many
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&n| n > 0)
            .unwrap_or(1),
        checklist_url: checklist_url(checklist_id),
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback).to_string()
}
