//! `sightings` command: collect filters, fetch, and render recent sightings.

use chrono::{Local, NaiveDate};
use wingwatch_core::{ClientConfig, DateRange, MapBounds, SearchFilters, SearchLocation};
use wingwatch_ebird::EbirdClient;
use wingwatch_geocode::GeocodeClient;

use crate::display;

/// Where the search is centred.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Centre {
    Point { lat: f64, lng: f64 },
    Place(String),
}

#[derive(Debug, Clone)]
pub(crate) struct SightingsArgs {
    pub centre: Centre,
    pub radius: u32,
    pub species: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub json: bool,
}

/// Fetch and print recent sightings.
///
/// An empty result is reported as a message, not an error.
///
/// # Errors
///
/// Returns an error with a short user-facing message if geocoding or the
/// sightings fetch fails.
pub(crate) async fn run_sightings(config: &ClientConfig, args: SightingsArgs) -> anyhow::Result<()> {
    let location = resolve_centre(config, &args.centre).await?;
    let filters = build_filters(location, &args, Local::now().date_naive());

    let client = EbirdClient::from_config(config)?;
    let sightings = match client.get_recent_sightings(&filters).await {
        Ok(sightings) => sightings,
        Err(e) if e.is_empty_result() => {
            println!("{}", e.user_message());
            return Ok(());
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching bird sightings");
            anyhow::bail!(e.user_message());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sightings)?);
        return Ok(());
    }

    if sightings.is_empty() {
        println!("No bird sightings found in this area.");
        return Ok(());
    }

    println!(
        "{} sighting(s) within {} km of {}",
        sightings.len(),
        filters.radius,
        filters.location.name
    );
    println!();
    display::print_sightings_table(&sightings);
    if let Some(bounds) = MapBounds::enclosing(&sightings) {
        println!();
        println!("{}", display::fmt_bounds(&bounds));
    }

    Ok(())
}

async fn resolve_centre(config: &ClientConfig, centre: &Centre) -> anyhow::Result<SearchLocation> {
    match centre {
        Centre::Point { lat, lng } => Ok(SearchLocation {
            lat: *lat,
            lng: *lng,
            name: format!("{lat:.4}, {lng:.4}"),
        }),
        Centre::Place(query) => {
            let geocoder = GeocodeClient::from_config(config)?;
            let place = geocoder.geocode_location(query).await.map_err(|e| {
                tracing::error!(error = %e, query = %query, "error geocoding location");
                anyhow::anyhow!("could not find location '{query}'")
            })?;
            Ok(place.into())
        }
    }
}

/// Assembles the query object; missing dates default to `today`.
fn build_filters(location: SearchLocation, args: &SightingsArgs, today: NaiveDate) -> SearchFilters {
    let start = args.start.unwrap_or(today);
    let end = args.end.unwrap_or(today).max(start);
    SearchFilters {
        location,
        radius: args.radius,
        date_range: DateRange { start, end },
        species: args.species.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SightingsArgs {
        SightingsArgs {
            centre: Centre::Point {
                lat: 40.0,
                lng: -74.0,
            },
            radius: 15,
            species: Some("Blue Jay".to_string()),
            start: None,
            end: None,
            json: false,
        }
    }

    fn here() -> SearchLocation {
        SearchLocation {
            lat: 40.0,
            lng: -74.0,
            name: "Here".to_string(),
        }
    }

    #[test]
    fn build_filters_defaults_dates_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let filters = build_filters(here(), &args(), today);
        assert_eq!(filters.date_range, DateRange::single_day(today));
        assert_eq!(filters.radius, 15);
        assert_eq!(filters.species.as_deref(), Some("Blue Jay"));
    }

    #[test]
    fn build_filters_never_ends_before_start() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut a = args();
        a.start = NaiveDate::from_ymd_opt(2025, 6, 1);
        let filters = build_filters(here(), &a, today);
        assert_eq!(filters.date_range.end, filters.date_range.start);
    }

    #[tokio::test]
    async fn point_centre_resolves_without_geocoding() {
        let config = ClientConfig {
            api_base_url: "http://127.0.0.1:1/api/ebird".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 1,
            geocoder_url: "http://127.0.0.1:1/search".to_string(),
            user_agent: "wingwatch-test".to_string(),
        };
        let location = resolve_centre(
            &config,
            &Centre::Point {
                lat: 40.5,
                lng: -74.25,
            },
        )
        .await
        .expect("no network needed");
        assert_eq!(location.name, "40.5000, -74.2500");
    }
}
