mod display;
mod places;
mod sightings;
mod species;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "wingwatch")]
#[command(about = "Look up recent bird sightings near a place")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List recent sightings around a point or address
    Sightings {
        /// Latitude of the search centre
        #[arg(long, requires = "lng", conflicts_with = "place", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude of the search centre
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Address or place name to geocode as the search centre
        #[arg(long)]
        place: Option<String>,
        /// Search radius in kilometres
        #[arg(long, default_value_t = wingwatch_core::filters::DEFAULT_RADIUS_KM)]
        radius: u32,
        /// Species to filter on
        #[arg(long)]
        species: Option<String>,
        /// Start of the date range (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End of the date range (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Suggest species common names matching a partial name
    Species {
        query: String,
    },
    /// Suggest addresses matching a partial query
    Suggest {
        query: String,
    },
    /// Resolve an address to coordinates
    Geocode {
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = wingwatch_core::load_client_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sightings {
            lat,
            lng,
            place,
            radius,
            species,
            start,
            end,
            json,
        } => {
            let centre = match (lat, lng, place) {
                (Some(lat), Some(lng), _) => sightings::Centre::Point { lat, lng },
                (_, _, Some(place)) => sightings::Centre::Place(place),
                _ => anyhow::bail!("provide either --lat/--lng or --place"),
            };
            let args = sightings::SightingsArgs {
                centre,
                radius,
                species,
                start,
                end,
                json,
            };
            sightings::run_sightings(&config, args).await?;
        }
        Commands::Species { query } => species::run_species(&config, &query).await?,
        Commands::Suggest { query } => places::run_suggest(&config, &query).await?,
        Commands::Geocode { query } => places::run_geocode(&config, &query).await?,
    }

    Ok(())
}
