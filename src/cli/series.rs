use anyhow::{Context, Result};
use std::path::PathBuf;

use flocview::ingest::ingest_file;

use super::SeriesFormat;

/// Print the chart series of a run export
pub fn run(input: PathBuf, format: SeriesFormat) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let ingestion =
        ingest_file(&input).with_context(|| format!("Failed to ingest {}", input.display()))?;
    let series = ingestion.chart_series();

    match format {
        SeriesFormat::Csv => {
            println!("elapsed_time,vol_concentration");
            for point in &series {
                println!("{},{}", point.x, point.y);
            }
        }
        SeriesFormat::Json => {
            let text = serde_json::to_string(&series).context("Failed to serialize series")?;
            println!("{}", text);
        }
    }

    Ok(())
}
