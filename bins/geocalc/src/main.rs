//! geocalc: great-circle distance, bearing and radius search from the shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geolocation::batch::{BatchOptions, LocationItem, find_within_radius};
use geolocation::{
    Coordinate, CoordinateBoundaries, DistanceUnit, get_bearing, get_direction, get_distance,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::Config;

/// Great-circle calculations on a spherical Earth
#[derive(Parser)]
#[command(name = "geocalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to .geocalc.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// A latitude/longitude pair given as two positionals.
#[derive(clap::Args)]
struct Pair {
    /// Origin latitude
    #[arg(allow_negative_numbers = true)]
    lat1: f64,
    /// Origin longitude
    #[arg(allow_negative_numbers = true)]
    lon1: f64,
    /// Destination latitude
    #[arg(allow_negative_numbers = true)]
    lat2: f64,
    /// Destination longitude
    #[arg(allow_negative_numbers = true)]
    lon2: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance between two points
    Distance {
        #[command(flatten)]
        pair: Pair,

        /// Distance unit (mi, nmi, km, m)
        #[arg(short, long)]
        unit: Option<DistanceUnit>,

        /// Decimal places to round to (may be negative)
        #[arg(short, long, allow_negative_numbers = true)]
        decimals: Option<i32>,
    },

    /// Initial bearing in degrees from the first point to the second
    Bearing {
        #[command(flatten)]
        pair: Pair,
    },

    /// Compass direction from the first point to the second
    Direction {
        #[command(flatten)]
        pair: Pair,
    },

    /// Bounding rectangle around a radius
    Bounds {
        /// Origin latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Origin longitude
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Radius
        radius: f64,

        /// Distance unit (mi, nmi, km, m)
        #[arg(short, long)]
        unit: Option<DistanceUnit>,
    },

    /// Locations from a JSON file within a radius, closest first
    Search {
        /// Origin latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Origin longitude
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Radius
        radius: f64,
        /// JSON array of {"id", "latitude", "longitude"}
        file: PathBuf,

        /// Distance unit (mi, nmi, km, m)
        #[arg(short, long)]
        unit: Option<DistanceUnit>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("geolocation=debug,geocalc=debug")
        } else {
            EnvFilter::new(level)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose, &config.settings.log_level);
    tracing::debug!(path = ?config.path, settings = ?config.settings, "configuration loaded");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let settings = &config.settings;

    match cli.command {
        Commands::Distance {
            pair,
            unit,
            decimals,
        } => {
            let unit = unit.unwrap_or(settings.unit);
            let decimals = decimals.unwrap_or(settings.decimal_places);
            let distance =
                get_distance(pair.lat1, pair.lon1, pair.lat2, pair.lon2, decimals, unit)?;

            if cli.json {
                println!("{}", serde_json::json!({ "distance": distance, "unit": unit }));
            } else {
                println!("{}", output::format_distance(distance, unit));
            }
        }

        Commands::Bearing { pair } => {
            let bearing = get_bearing(pair.lat1, pair.lon1, pair.lat2, pair.lon2)?;

            if cli.json {
                println!("{}", serde_json::json!({ "bearing": bearing }));
            } else {
                println!("{}", bearing);
            }
        }

        Commands::Direction { pair } => {
            let direction = get_direction(pair.lat1, pair.lon1, pair.lat2, pair.lon2)?;

            if cli.json {
                println!("{}", serde_json::json!({ "direction": direction }));
            } else {
                println!("{}", direction);
            }
        }

        Commands::Bounds {
            lat,
            lon,
            radius,
            unit,
        } => {
            let unit = unit.unwrap_or(settings.unit);
            let bounds = CoordinateBoundaries::new(lat, lon, radius, unit)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&bounds)?);
            } else {
                output::print_boundaries(&bounds);
            }
        }

        Commands::Search {
            lat,
            lon,
            radius,
            file,
            unit,
            limit,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let items: Vec<LocationItem> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", file.display()))?;

            let options = BatchOptions {
                unit: unit.unwrap_or(settings.unit),
                decimal_places: settings.decimal_places,
            };
            let origin = Coordinate::new(lat, lon);
            let mut results = find_within_radius(&origin, &items, radius, options)?;
            if let Some(max) = limit {
                results.truncate(max);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_results(&results, options.unit);
            }
        }
    }

    Ok(())
}
