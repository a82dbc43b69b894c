//! Deterministic demonstration dataset.
//!
//! Shown whenever a run export cannot be acquired, so the dashboard always has
//! something to chart: a bell curve of volume concentration over 50 seconds
//! with fixed placeholder doses.

use crate::ingest::{Ingestion, Sample};
use crate::protocol::ProtocolInfo;

/// Number of demonstration samples
pub const DEMO_POINTS: usize = 50;

/// Placeholder dosage token of the demonstration protocol
pub const DEMO_DOSAGE: &str = "25.5/0.95 ppm";

/// Build the demonstration ingestion
pub fn demo_ingestion() -> Ingestion {
    let mut protocol = ProtocolInfo {
        title: "Demo Protocol".to_string(),
        chemistry: "Alum/PolyDADMAC".to_string(),
        dosage: DEMO_DOSAGE.to_string(),
        comments: "Demonstration data".to_string(),
        coagulant: None,
        polymer: None,
    };
    protocol.apply_dosage();

    Ingestion {
        samples: bell_curve(DEMO_POINTS),
        protocol,
    }
}

fn bell_curve(points: usize) -> Vec<Sample> {
    let half = points as f64 / 2.0;
    let width = points as f64 / 6.0;

    (0..points)
        .map(|i| {
            let z = (i as f64 - half) / width;
            Sample {
                date: "Demo".to_string(),
                time: format!("00:{:02}:{:02}", i / 60, i % 60),
                elapsed_time: i as f64,
                vol_concentration: (-0.5 * z * z).exp(),
                ..Default::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_shape() {
        let demo = demo_ingestion();
        assert_eq!(demo.sample_count(), DEMO_POINTS);
        assert_eq!(demo.protocol.coagulant, Some(25.5));
        assert_eq!(demo.protocol.polymer, Some(0.95));
        assert_eq!(demo.samples[1].time, "00:00:01");
    }

    #[test]
    fn test_demo_peaks_at_center() {
        let demo = demo_ingestion();
        let peak = &demo.samples[DEMO_POINTS / 2];

        assert_eq!(peak.vol_concentration, 1.0);
        assert!(demo.samples[0].vol_concentration < 0.02);
        assert!(demo
            .samples
            .iter()
            .all(|s| s.vol_concentration > 0.0 && s.vol_concentration <= 1.0));
    }

    #[test]
    fn test_demo_is_deterministic() {
        assert_eq!(demo_ingestion(), demo_ingestion());
    }
}
