//! # flocview - Flocculation Test-Rig Dashboard Core
//!
//! `flocview` turns the CSV export of a coagulation/flocculation test run into
//! chart-ready data and keeps a live view of the rig's pump, particle sensor
//! and valves.
//!
//! ## Key Features
//!
//! - **Run Export Ingestion**: Decodes the semi-structured analyser export into
//!   typed [`ingest::Sample`]s. Malformed content degrades gracefully and never
//!   fails an ingestion.
//!
//! - **Protocol Extraction**: The free-text descriptor line in the export's
//!   header block is decoded separately into a [`protocol::ProtocolInfo`],
//!   including coagulant and polymer doses.
//!
//! - **Time-Series Aggregation**: Chart points, test duration and sample count
//!   via [`series`].
//!
//! - **Live Status**: A cancellable poller projects rig snapshots onto display
//!   fields once per second ([`device`], [`dashboard`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use flocview::dashboard::Dashboard;
//! use flocview::ingest::ingest_str;
//!
//! let csv = "\
//! Analyzer Export
//! Protocol,Protocol Title: Jar 1 | Run Chemistry: Alum | Run Dosage: 25/1 ppm | Comments: -
//! h
//! h
//! Index,Date,Time,Elapsed,Count,Diameter,Volume,Concentration,RPM,G,Flags
//! 1,2025-03-14,10:00:00,0,12,35.2,1800,0.021,100,120,
//! 2,2025-03-14,10:08:00,480,48,61.0,9500,0.145,40,35,
//! ";
//!
//! let ingestion = ingest_str(csv);
//! assert_eq!(ingestion.sample_count(), 2);
//! assert_eq!(ingestion.protocol.coagulant, Some(25.0));
//!
//! let mut dashboard = Dashboard::default();
//! let ticket = dashboard.load(ingestion);
//! let frame = dashboard.frame(ticket).unwrap();
//! assert_eq!(frame.test_info.as_deref(), Some("Date: 2025-03-14 | Duration: 8 min | Samples: 2"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! CSV text ─▶ ingest ─┬─▶ samples ──▶ series ──┐
//!                     └─▶ protocol ─▶ doses ───┼─▶ dashboard ─▶ renderer
//! rig /status ─▶ device::StatusPoller ─────────┘
//! ```
//!
//! - [`protocol`]: descriptor line and dosage token parsing
//! - [`ingest`]: row classification and sample building
//! - [`series`]: chart points and test summary
//! - [`demo`]: deterministic demonstration dataset
//! - [`device`]: status payloads, sources, poller and commands
//! - [`dashboard`]: projection onto display fields

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dashboard;
pub mod demo;
pub mod device;
pub mod ingest;
pub mod protocol;
pub mod series;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dashboard::{Dashboard, RenderFrame, RenderTicket, StatusPanel};
    pub use crate::demo::demo_ingestion;
    pub use crate::device::{DeviceStatus, SensorCommand, StatusPoller, StatusSource};
    pub use crate::ingest::{
        ingest_file, ingest_file_or_demo, ingest_rows, ingest_str, Ingestion, Sample,
    };
    pub use crate::protocol::{Dosage, ProtocolInfo};
    pub use crate::series::{ChartPoint, DoseDisplay, TestSummary};
}
