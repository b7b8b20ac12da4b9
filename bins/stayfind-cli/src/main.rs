//! stayfind: CLI for the hotel catalog and its distance tools.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stayfind_catalog::{CatalogService, InMemoryStore, NewHotel, SearchQuery};
use stayfind_geo::{Coordinate, DistanceAlgorithm};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stayfind")]
#[command(about = "Proximity-ranked hotel catalog search")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a catalog of hotels around a location
    Search {
        /// Latitude of the search origin, in degrees
        #[arg(long)]
        lat: f64,
        /// Longitude of the search origin, in degrees
        #[arg(long)]
        lon: f64,
        /// JSON file holding an array of hotels (name, price, latitude, longitude)
        #[arg(long)]
        records: PathBuf,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Results per page
        #[arg(long, default_value_t = SearchQuery::DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Distance algorithm to rank with
        #[arg(long, value_enum, default_value = "haversine")]
        algorithm: Algorithm,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the distance between two points
    Distance {
        /// Latitude of the first point, in degrees
        #[arg(long)]
        from_lat: f64,
        /// Longitude of the first point, in degrees
        #[arg(long)]
        from_lon: f64,
        /// Latitude of the second point, in degrees
        #[arg(long)]
        to_lat: f64,
        /// Longitude of the second point, in degrees
        #[arg(long)]
        to_lon: f64,
        /// Distance algorithm; all four are printed when omitted
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,
    },
}

/// CLI-facing names for the distance algorithms.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Euclidean,
    Haversine,
    LawOfCosines,
    Vincenty,
}

impl From<Algorithm> for DistanceAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Euclidean => DistanceAlgorithm::Euclidean,
            Algorithm::Haversine => DistanceAlgorithm::Haversine,
            Algorithm::LawOfCosines => DistanceAlgorithm::LawOfCosines,
            Algorithm::Vincenty => DistanceAlgorithm::Vincenty,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            lat,
            lon,
            records,
            page,
            page_size,
            algorithm,
            json,
        } => run_search(lat, lon, &records, page, page_size, algorithm.into(), json),
        Commands::Distance {
            from_lat,
            from_lon,
            to_lat,
            to_lon,
            algorithm,
        } => run_distance(from_lat, from_lon, to_lat, to_lon, algorithm),
    }
}

fn run_search(
    lat: f64,
    lon: f64,
    records: &PathBuf,
    page: u32,
    page_size: u32,
    algorithm: DistanceAlgorithm,
    json: bool,
) -> anyhow::Result<()> {
    Coordinate::try_new(lat, lon).context("invalid search origin")?;

    let data = std::fs::read_to_string(records)
        .with_context(|| format!("reading records file {}", records.display()))?;
    let hotels: Vec<NewHotel> =
        serde_json::from_str(&data).context("records file must be a JSON array of hotels")?;

    let service = CatalogService::new(InMemoryStore::new(), algorithm);
    for hotel in hotels {
        service
            .create(hotel)
            .context("loading records into the catalog")?;
    }

    let query = SearchQuery::new(lat, lon).page(page).page_size(page_size);
    let results = service.search(&query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results on page {page}.");
    } else {
        println!("{:<6} {:<30} {:>10} {:>14}", "ID", "NAME", "PRICE", "DISTANCE");
        for ranked in &results {
            println!(
                "{:<6} {:<30} {:>10.2} {:>12.1} m",
                ranked.hotel.id, ranked.hotel.name, ranked.hotel.price, ranked.distance_meters
            );
        }
    }

    Ok(())
}

fn run_distance(
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
    algorithm: Option<Algorithm>,
) -> anyhow::Result<()> {
    let from = Coordinate::try_new(from_lat, from_lon).context("invalid first point")?;
    let to = Coordinate::try_new(to_lat, to_lon).context("invalid second point")?;

    let algorithms: Vec<DistanceAlgorithm> = match algorithm {
        Some(algo) => vec![algo.into()],
        None => DistanceAlgorithm::all().to_vec(),
    };

    for algo in algorithms {
        match algo.distance_meters(&from, &to) {
            Ok(meters) => println!("{:<15} {:>14.1} m", algo.to_string(), meters),
            Err(e) => println!("{:<15} failed: {e}", algo.to_string()),
        }
    }

    Ok(())
}
