//! antroute: solve a closed tour over pre-geocoded locations.
//!
//! ```text
//! antroute stops.csv --start 1 --iterations 500 --geojson route.geojson
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_antroute::aco::{AcoConfig, AcoRunner};
use u_antroute::geo::{DistanceMatrix, Location, Metric};
use u_antroute::report::RouteSummary;
use u_antroute::AcoError;

#[derive(Parser)]
#[command(name = "antroute")]
#[command(about = "Find a short closed tour over geocoded locations with Ant Colony Optimization")]
#[command(version)]
struct Cli {
    /// Locations file: JSON array of {latitude, longitude, label} or CSV
    /// with a `latitude,longitude,label` header
    input: PathBuf,

    /// Number of the starting location (1-based, in file order)
    #[arg(short, long, default_value_t = 1)]
    start: usize,

    /// TOML file with solver parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ants per iteration
    #[arg(long)]
    ants: Option<usize>,

    /// Number of iterations
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Pheromone exponent
    #[arg(long)]
    alpha: Option<f64>,

    /// Inverse-distance exponent
    #[arg(long)]
    beta: Option<f64>,

    /// Evaporation rate in [0, 1]
    #[arg(long)]
    rho: Option<f64>,

    /// Exploitation probability in [0, 1]
    #[arg(long)]
    q0: Option<f64>,

    /// Distance metric
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Construct ant tours in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Write the route as GeoJSON for a map renderer
    #[arg(long)]
    geojson: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Haversine,
    Euclidean,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Haversine => Metric::Haversine,
            MetricArg::Euclidean => Metric::Euclidean,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported input format: {0} (expected .json or .csv)")]
    UnknownFormat(PathBuf),

    #[error("invalid location number {number}: choose between 1 and {len}")]
    InvalidStart { number: usize, len: usize },

    #[error(transparent)]
    Solver(#[from] AcoError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let started = Instant::now();

    let locations = load_locations(&cli.input)?;
    info!(count = locations.len(), path = %cli.input.display(), "loaded locations");

    let start = cli
        .start
        .checked_sub(1)
        .filter(|&s| s < locations.len())
        .ok_or(CliError::InvalidStart {
            number: cli.start,
            len: locations.len(),
        })?;

    let config = build_config(&cli)?;
    info!(
        metric = config.metric.as_str(),
        ants = config.n_ants,
        iterations = config.n_iterations,
        "solver configured"
    );
    let distances = DistanceMatrix::from_locations(&locations, config.metric);
    let result = AcoRunner::run(&distances, start, &config)?;
    let summary = RouteSummary::new(&locations, &result.tour, &distances);

    let unit = match config.metric {
        Metric::Haversine => " km",
        Metric::Euclidean => "",
    };

    println!("Best route (found in iteration {}):", result.best_iteration);
    for (order, stop) in summary.stops.iter().enumerate() {
        println!("{:>3}. {}", order + 1, stop.label);
    }
    println!();
    for leg in &summary.legs {
        println!(
            "  {} -> {}: {:.2}{unit}",
            locations[leg.from].label, locations[leg.to].label, leg.distance
        );
    }
    println!("Total route distance: {:.2}{unit}", summary.total_distance);

    if let Some(path) = &cli.geojson {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary.to_geojson())?;
        info!(path = %path.display(), "wrote GeoJSON route");
    }

    println!(
        "Calculation completed in {:.2} seconds.",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Reads locations from JSON or CSV, chosen by file extension.
fn load_locations(path: &Path) -> Result<Vec<Location>, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("json") => {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        }
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)?;
            let locations = reader.deserialize().collect::<Result<Vec<Location>, _>>()?;
            Ok(locations)
        }
        _ => Err(CliError::UnknownFormat(path.to_path_buf())),
    }
}

/// Starts from the TOML file (or defaults) and applies command-line overrides.
fn build_config(cli: &Cli) -> Result<AcoConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => AcoConfig::default(),
    };

    if let Some(n) = cli.ants {
        config.n_ants = n;
    }
    if let Some(n) = cli.iterations {
        config.n_iterations = n;
    }
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }
    if let Some(beta) = cli.beta {
        config.beta = beta;
    }
    if let Some(rho) = cli.rho {
        config.rho = rho;
    }
    if let Some(q0) = cli.q0 {
        config.q0 = q0;
    }
    if let Some(metric) = cli.metric {
        config.metric = metric.into();
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.parallel {
        config.parallel = true;
    }

    config.validate()?;
    Ok(config)
}
