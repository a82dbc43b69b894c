use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use flocview::device::SensorCommand;

mod config;
mod demo;
mod ingest;
mod sensor;
mod series;
mod watch;

pub use config::Config;

/// flocview - Flocculation test-rig dashboard
#[derive(Parser)]
#[command(name = "flocview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for the chart series.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SeriesFormat {
    /// `x,y` lines with a header
    #[default]
    Csv,
    /// JSON array of `{x, y}` points
    Json,
}

/// Sensor command argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SensorArg {
    /// Start the sensor code
    On,
    /// Stop the sensor code
    Off,
}

impl From<SensorArg> for SensorCommand {
    fn from(arg: SensorArg) -> Self {
        match arg {
            SensorArg::On => SensorCommand::On,
            SensorArg::Off => SensorCommand::Off,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a test-run CSV export and print its protocol and summary
    Ingest {
        /// Run export CSV path
        #[arg(value_name = "CSV")]
        input: PathBuf,

        /// Print the whole ingestion as JSON
        #[arg(long)]
        json: bool,

        /// Show demonstration data if the file cannot be read
        #[arg(long)]
        fallback_demo: bool,
    },

    /// Print the chart series (elapsed time vs. volume concentration)
    Series {
        /// Run export CSV path
        #[arg(value_name = "CSV")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "csv", value_enum)]
        format: SeriesFormat,
    },

    /// Print the demonstration dataset
    Demo {
        /// Print the whole ingestion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Poll live device status and print each update
    Watch {
        /// Rig base URL (overrides the config file)
        #[arg(long)]
        url: Option<String>,

        /// Read status from a JSON snapshot file instead of the rig
        #[arg(long, value_name = "FILE", conflicts_with = "url")]
        snapshot: Option<PathBuf>,

        /// Polling interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Stop after this many updates
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Send a sensor on/off command to the rig
    Sensor {
        /// Command to send
        #[arg(value_enum)]
        action: SensorArg,

        /// Rig base URL (overrides the config file)
        #[arg(long)]
        url: Option<String>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Ingest {
            input,
            json,
            fallback_demo,
        } => ingest::run(input, json, fallback_demo, &config),
        Commands::Series { input, format } => series::run(input, format),
        Commands::Demo { json } => demo::run(json, &config),
        Commands::Watch {
            url,
            snapshot,
            interval_ms,
            ticks,
        } => watch::run(url, snapshot, interval_ms, ticks, &config),
        Commands::Sensor { action, url } => sensor::run(action.into(), url, &config),
    }
}
