use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use flocview::dashboard::Dashboard;
use flocview::ingest::{ingest_file, ingest_file_or_demo, Ingestion};

use super::Config;

/// Ingest a run export and print what the dashboard would show
pub fn run(input: PathBuf, json: bool, fallback_demo: bool, config: &Config) -> Result<()> {
    info!("Ingesting {}", input.display());

    let ingestion = if fallback_demo {
        ingest_file_or_demo(&input)
    } else {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        ingest_file(&input).with_context(|| format!("Failed to ingest {}", input.display()))?
    };

    print_ingestion(&ingestion, json, config)
}

/// Shared by `ingest` and `demo`
pub fn print_ingestion(ingestion: &Ingestion, json: bool, config: &Config) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(ingestion).context("Failed to serialize ingestion")?;
        println!("{}", text);
        return Ok(());
    }

    let mut dashboard = Dashboard::new(config.dose_unit());
    dashboard.load(ingestion.clone());
    let view = dashboard.view();
    let protocol = &ingestion.protocol;

    println!("Protocol");
    println!("========");
    println!("  Title:     {}", protocol.title);
    println!("  Chemistry: {}", protocol.chemistry);
    println!("  Dosage:    {}", protocol.dosage);
    println!("  Comments:  {}", protocol.comments);
    println!();

    println!("Doses");
    println!("=====");
    println!("  Coagulant: {}", view.coagulant_dose.as_deref().unwrap_or("-"));
    println!("  Polymer:   {}", view.polymer_dose.as_deref().unwrap_or("-"));
    println!();

    println!("Test");
    println!("====");
    match &view.test_info {
        Some(test_info) => println!("  {}", test_info),
        None => println!("  No samples"),
    }

    Ok(())
}
