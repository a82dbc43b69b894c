//! # Run Export Ingestion
//!
//! Converts the CSV export of a flocculation test run into an [`Ingestion`]:
//! the ordered [`Sample`] sequence plus the [`ProtocolInfo`] decoded from the
//! header block.
//!
//! ## Export Layout
//!
//! ```text
//! row 0   header
//! row 1   header, cell 1 = protocol descriptor line
//! row 2-4 header
//! row 5+  data rows (> 10 cells), columns 1..=9 map to Sample fields
//! ```
//!
//! Rows are physical lines of the export, so blank lines keep their index.
//! Tabular decoding and descriptor decoding run as two separate passes over
//! the same rows.
//!
//! ## Failure Semantics
//!
//! Content problems never fail an ingestion: short rows are dropped, bad
//! numeric cells become `0.0`, a missing descriptor gives an empty
//! [`ProtocolInfo`]. Only reading a file or stream can fail, with
//! [`IngestError`].

mod error;
mod rows;
mod sample;

#[cfg(test)]
mod tests;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::protocol::ProtocolInfo;
use crate::series::{self, ChartPoint, TestSummary};

pub use error::IngestError;
pub use rows::{
    decode_protocol, decode_samples, is_data_row, HEADER_ROWS, METADATA_CELL, METADATA_ROW,
    MIN_DATA_CELLS,
};
pub use sample::{
    Sample, DATE_COLUMN, ELAPSED_TIME_COLUMN, FLOC_COUNT_COLUMN, G_VALUE_COLUMN,
    MEAN_DIAMETER_COLUMN, MEAN_VOLUME_COLUMN, RPM_COLUMN, TIME_COLUMN, VOL_CONCENTRATION_COLUMN,
};

/// Result of one ingestion: samples and protocol sharing one time base.
///
/// Each ingestion produces a fresh value; callers replace, never merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingestion {
    /// Samples in export row order
    pub samples: Vec<Sample>,

    /// Protocol descriptor from the header block
    pub protocol: ProtocolInfo,
}

impl Ingestion {
    /// Number of samples
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// True when no data row qualified
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Chart points of volume concentration over elapsed time
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        series::chart_series(&self.samples)
    }

    /// Test summary, or `None` when there are no samples
    pub fn summary(&self) -> Option<TestSummary> {
        series::summarize(&self.samples)
    }
}

/// Ingest rows that have already been split into cells.
pub fn ingest_rows<R: AsRef<[String]>>(rows: &[R]) -> Ingestion {
    let protocol = decode_protocol(rows);
    let samples = decode_samples(rows);
    debug!(
        "Ingested {} samples from {} rows (protocol: {:?})",
        samples.len(),
        rows.len(),
        protocol.title
    );
    Ingestion { samples, protocol }
}

/// Ingest raw CSV text.
pub fn ingest_str(text: &str) -> Ingestion {
    ingest_rows(&split_rows(text))
}

/// Ingest a CSV export from any reader.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn ingest_reader<R: Read>(mut reader: R) -> Result<Ingestion, IngestError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(ingest_str(&String::from_utf8_lossy(&bytes)))
}

/// Ingest a CSV export file.
pub fn ingest_file<P: AsRef<Path>>(path: P) -> Result<Ingestion, IngestError> {
    let file = File::open(path)?;
    ingest_reader(file)
}

/// Ingest a CSV export file, falling back to the demonstration dataset
/// when the file cannot be read.
pub fn ingest_file_or_demo<P: AsRef<Path>>(path: P) -> Ingestion {
    let path = path.as_ref();
    match ingest_file(path) {
        Ok(ingestion) => ingestion,
        Err(e) => {
            warn!("{} ({}); showing demonstration data", e, path.display());
            crate::demo::demo_ingestion()
        }
    }
}

/// Split CSV text into rows of cells, one row per physical line.
///
/// A blank line becomes a single empty cell so header offsets stay aligned.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let mut reader = builder.from_reader(line.as_bytes());
            match reader.records().next() {
                Some(Ok(record)) => record.iter().map(str::to_string).collect(),
                Some(Err(e)) => {
                    warn!("Skipping unreadable CSV line {}: {}", index + 1, e);
                    vec![String::new()]
                }
                None => vec![String::new()],
            }
        })
        .collect()
}
