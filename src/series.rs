//! # Time-Series Aggregation
//!
//! Derives chart-ready points, a test summary and dose display strings from an
//! ingested run. Nothing here reorders or filters samples: the chart series is
//! exactly one point per sample, in the order the export recorded them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ingest::Sample;
use crate::protocol::ProtocolInfo;

/// One chart point: elapsed seconds against volume concentration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Elapsed time in seconds
    pub x: f64,
    /// Volume concentration
    pub y: f64,
}

/// Summary of a test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    /// Date recorded on the first sample
    pub test_date: String,
    /// Whole minutes elapsed at the last sample
    pub duration_minutes: i64,
    /// Number of samples
    pub sample_count: usize,
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Duration: {} min | Samples: {}",
            self.test_date, self.duration_minutes, self.sample_count
        )
    }
}

/// Chart series of `(elapsedTime, volConcentration)`, one point per sample.
pub fn chart_series(samples: &[Sample]) -> Vec<ChartPoint> {
    samples
        .iter()
        .map(|s| ChartPoint {
            x: s.elapsed_time,
            y: s.vol_concentration,
        })
        .collect()
}

/// Summarize a run; `None` when there are no samples.
pub fn summarize(samples: &[Sample]) -> Option<TestSummary> {
    let first = samples.first()?;
    let last = samples.last()?;

    Some(TestSummary {
        test_date: first.date.clone(),
        duration_minutes: (last.elapsed_time / 60.0).floor() as i64,
        sample_count: samples.len(),
    })
}

/// Display strings for the two doses of a protocol.
///
/// A dose that was not provided has no string; consumers keep whatever they
/// were showing before.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoseDisplay {
    /// Coagulant dose text (e.g., "25.5 ppm")
    pub coagulant: Option<String>,
    /// Polymer dose text (e.g., "0.95 ppm")
    pub polymer: Option<String>,
}

impl DoseDisplay {
    /// Format the present doses of `protocol` in `unit`
    pub fn from_protocol(protocol: &ProtocolInfo, unit: &str) -> Self {
        Self {
            coagulant: protocol.coagulant.map(|dose| format_dose(dose, unit)),
            polymer: protocol.polymer.map(|dose| format_dose(dose, unit)),
        }
    }
}

/// `"{dose} {unit}"`
pub fn format_dose(dose: f64, unit: &str) -> String {
    format!("{} {}", dose, unit)
}
