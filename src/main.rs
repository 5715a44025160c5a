use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};

use flightpath::{
    AirportTable, ConfigError, DistanceUnit, RouteCalculator, RouteConfig, POPULAR_ROUTES,
};

mod report;

#[derive(Parser)]
#[clap(author, version, about = "Great-circle flight path calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV airport database. Created with the built-in airports if missing.
    #[arg(short, long, global = true)]
    airports: Option<PathBuf>,

    /// Average cruise speed, in `--speed-unit` per hour.
    #[arg(short, long, global = true, default_value_t = flightpath::DEFAULT_CRUISE_SPEED_MPH)]
    speed: f64,

    /// Unit the cruise speed is given in (miles, km, nm).
    #[arg(long, global = true, default_value = "miles")]
    speed_unit: DistanceUnit,

    /// Distance unit for display (miles, km, nm).
    #[arg(short, long, global = true, default_value = "miles")]
    unit: DistanceUnit,

    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write the report to this file.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a single route between two airport codes.
    Route { origin: String, destination: String },
    /// Analyze several `ORIGIN-DESTINATION` pairs (default: popular routes).
    Batch {
        #[arg(value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
    /// List the airports in the database.
    Airports,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (origin, destination) = s
        .split_once('-')
        .ok_or_else(|| format!("expected ORIGIN-DESTINATION, got '{}'", s))?;
    Ok((origin.trim().to_string(), destination.trim().to_string()))
}

fn load_airports(path: Option<&PathBuf>) -> Result<AirportTable, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(AirportTable::builtin());
    };
    let loaded = AirportTable::load_or_create(path)?;
    if !loaded.rejected.is_empty() {
        warn!("{} airport rows were skipped", loaded.rejected.len());
    }
    Ok(loaded.table)
}

/// The display unit never feeds into the speed.
fn route_config(cli: &Cli) -> Result<RouteConfig, ConfigError> {
    RouteConfig::new(cli.speed, cli.speed_unit)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = route_config(&cli)?;
    let calculator = RouteCalculator::new(config)?;
    let airports = load_airports(cli.airports.as_ref())?;
    if airports.is_empty() {
        return Err("airport database is empty".into());
    }

    let body = match cli.command {
        Commands::Route {
            origin,
            destination,
        } => {
            let route = calculator.compute_route_by_code(&airports, &origin, &destination)?;
            match cli.format {
                Format::Text => report::render_route(&route, &config)?,
                Format::Json => serde_json::to_string_pretty(&route)?,
            }
        }
        Commands::Batch { pairs } => {
            let pairs = if pairs.is_empty() {
                info!("No pairs given, analyzing popular routes");
                POPULAR_ROUTES
                    .iter()
                    .map(|(o, d)| (o.to_string(), d.to_string()))
                    .collect()
            } else {
                pairs
            };
            let analysis = calculator.analyze_batch(&airports, &pairs);
            let summary = analysis.summary();
            match cli.format {
                Format::Text => report::render_batch(&analysis, &summary, cli.unit)?,
                Format::Json => {
                    serde_json::to_string_pretty(&report::batch_json(&analysis, &summary))?
                }
            }
        }
        Commands::Airports => match cli.format {
            Format::Text => report::render_airports(&airports)?,
            Format::Json => serde_json::to_string_pretty(&airports.iter().collect::<Vec<_>>())?,
        },
    };

    println!("{}", body);
    if let Some(path) = cli.output {
        report::save_report(&path, &body)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "info" }),
    )
    .init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
