//! eBird API record types.
//!
//! Every field is optional at this layer: the feed is not trusted to be
//! complete, and the normalization step decides which gaps get defaults and
//! which make a record unusable. A field holding a value of the wrong type
//! decodes as absent rather than failing the whole record.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// One record from the `data/obs/geo/recent` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObservation {
    #[serde(default, deserialize_with = "lenient")]
    pub sub_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub obs_dt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub loc_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub loc_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub com_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sci_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub species_code: Option<String>,
    /// Absent when the observer recorded presence only ("X").
    #[serde(default, deserialize_with = "lenient")]
    pub how_many: Option<i64>,
}

/// One record from the `ref/taxonomy/ebird` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub com_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sci_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub species_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
