//! CAPPI Projector
//!
//! Converts a CAPPI radar product into a GeoJSON point collection.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use cappi_projector::ProjectorConfig;

/// CAPPI Projector
#[derive(Parser, Debug)]
#[command(name = "cappi-projector")]
#[command(about = "Convert CAPPI radar grids into GeoJSON points")]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a product and write its points as GeoJSON
    Project(ProjectArgs),

    /// Print the timestamp key of the newest available product
    TimeKey,
}

#[derive(clap::Args, Debug)]
struct ProjectArgs {
    /// Product JSON file, or `-` for stdin
    #[arg(short, long)]
    product: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "CAPPI_CONFIG")]
    config: Option<PathBuf>,

    /// Indent the GeoJSON output (`--pretty=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pretty: Option<bool>,

    /// Project rows in parallel (`--parallel=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    parallel: Option<bool>,

    /// Attach a bbox to the output collection (`--bbox=false` turns it off)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    bbox: Option<bool>,

    /// Drop isolated cells below this value
    #[arg(long)]
    noise_filter_threshold: Option<f64>,

    /// Override the number of columns
    #[arg(long)]
    xdim: Option<usize>,

    /// Override the number of rows
    #[arg(long)]
    ydim: Option<usize>,

    /// Override the origin longitude
    #[arg(long, allow_hyphen_values = true)]
    origin_lon: Option<f64>,

    /// Override the origin latitude
    #[arg(long, allow_hyphen_values = true)]
    origin_lat: Option<f64>,

    /// Override the grid spacing in kilometers
    #[arg(long)]
    grid_km: Option<f64>,

    /// Override the CAPPI altitude in kilometers
    #[arg(long)]
    altitude_km: Option<f64>,
}

impl ProjectArgs {
    /// Layer command-line flags over `config`.
    fn apply_to(&self, config: &mut ProjectorConfig) {
        config.pretty = self.pretty.unwrap_or(config.pretty);
        config.parallel = self.parallel.unwrap_or(config.parallel);
        config.include_bbox = self.bbox.unwrap_or(config.include_bbox);

        if self.noise_filter_threshold.is_some() {
            config.noise_filter_threshold = self.noise_filter_threshold;
        }

        let o = &mut config.overrides;
        o.xdim = self.xdim.or(o.xdim);
        o.ydim = self.ydim.or(o.ydim);
        o.origin_lon = self.origin_lon.or(o.origin_lon);
        o.origin_lat = self.origin_lat.or(o.origin_lat);
        o.grid_km = self.grid_km.or(o.grid_km);
        o.altitude_km = self.altitude_km.or(o.altitude_km);
    }
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for GeoJSON
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    if let Err(e) = run(args.command) {
        error!("cappi-projector failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::TimeKey => {
            println!("{}", display_units::radar_time_key_now());
            Ok(())
        }
        Command::Project(args) => project(args),
    }
}

fn project(args: ProjectArgs) -> Result<()> {
    let mut config = ProjectorConfig::load(args.config.as_deref())?;
    args.apply_to(&mut config);

    if let Err(e) = config.validate() {
        bail!("Invalid configuration: {}", e);
    }

    info!(product = %args.product, "Starting CAPPI projection");

    let product = cappi_projector::load_product(&args.product)?;
    let collection = cappi_projector::convert(&product, &config)?;
    let json = cappi_projector::render(&collection, &config)?;
    cappi_projector::write_output(args.output.as_deref(), &json)?;

    Ok(())
}
