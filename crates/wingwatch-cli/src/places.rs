//! Address lookup commands backed by the geocoder.

use wingwatch_core::ClientConfig;
use wingwatch_geocode::GeocodeClient;

/// Print address candidates for a partial query. Lookup failures print
/// nothing rather than failing the command.
///
/// # Errors
///
/// Returns an error only if the geocoder client cannot be built.
pub(crate) async fn run_suggest(config: &ClientConfig, query: &str) -> anyhow::Result<()> {
    let geocoder = GeocodeClient::from_config(config)?;
    for suggestion in geocoder.address_suggestions_or_empty(query).await {
        println!(
            "{:>10.5} {:>11.5}  {}",
            suggestion.lat, suggestion.lon, suggestion.display_name
        );
    }
    Ok(())
}

/// Print the coordinates of the best match for `query`.
///
/// # Errors
///
/// Returns an error if the place cannot be found or the geocoder fails.
pub(crate) async fn run_geocode(config: &ClientConfig, query: &str) -> anyhow::Result<()> {
    let geocoder = GeocodeClient::from_config(config)?;
    let place = geocoder.geocode_location(query).await.map_err(|e| {
        tracing::error!(error = %e, "error geocoding location");
        anyhow::anyhow!("could not find location '{query}'")
    })?;
    println!("{:.5}, {:.5}  {}", place.lat, place.lng, place.name);
    Ok(())
}
