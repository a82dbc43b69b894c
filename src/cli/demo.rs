use anyhow::Result;
use log::info;

use flocview::demo::demo_ingestion;

use super::ingest::print_ingestion;
use super::Config;

/// Print the demonstration dataset
pub fn run(json: bool, config: &Config) -> Result<()> {
    info!("flocview demonstration dataset");
    print_ingestion(&demo_ingestion(), json, config)
}
