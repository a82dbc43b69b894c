//! # flocview
//!
//! Command-line front end for the flocculation test-rig dashboard.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a run export
//! flocview ingest run-2025-03-14.csv
//!
//! # Chart series as CSV
//! flocview series run-2025-03-14.csv > series.csv
//!
//! # Watch live pump/sensor/valve status
//! flocview watch --url http://raspberrypi.local:8000
//!
//! # Start the sensor
//! flocview sensor on
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
