use log::debug;
use serde::{Deserialize, Serialize};

use crate::device::SensorCommand;
use crate::ingest::Ingestion;
use crate::series::{ChartPoint, DoseDisplay, TestSummary};

use super::{SensorControls, StatusPanel};

/// Unit used when none is configured
pub const DEFAULT_DOSE_UNIT: &str = "ppm";

/// Display strings derived from the current ingestion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetView {
    /// Chart points
    pub series: Vec<ChartPoint>,
    /// Test info line, once a non-empty run has been loaded
    pub test_info: Option<String>,
    /// Coagulant dose text, once one has been provided
    pub coagulant_dose: Option<String>,
    /// Polymer dose text, once one has been provided
    pub polymer_dose: Option<String>,
}

/// Token tying a render to the ingestion that requested it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
}

impl RenderTicket {
    /// Generation this ticket was issued for
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything the rendering surface needs for one redraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Generation of the data in this frame
    pub generation: u64,
    /// Chart points
    pub series: Vec<ChartPoint>,
    /// Test info line
    pub test_info: Option<String>,
    /// Coagulant dose text
    pub coagulant_dose: Option<String>,
    /// Polymer dose text
    pub polymer_dose: Option<String>,
}

/// Dashboard state: one ingestion at a time, plus the latest status panel
/// and the sensor controls.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dose_unit: String,
    generation: u64,
    ingestion: Ingestion,
    summary: Option<TestSummary>,
    view: DatasetView,
    status: Option<StatusPanel>,
    controls: SensorControls,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DEFAULT_DOSE_UNIT)
    }
}

impl Dashboard {
    /// Create an empty dashboard displaying doses in `dose_unit`
    pub fn new(dose_unit: &str) -> Self {
        Self {
            dose_unit: dose_unit.to_string(),
            generation: 0,
            ingestion: Ingestion::default(),
            summary: None,
            view: DatasetView::default(),
            status: None,
            controls: SensorControls::default(),
        }
    }

    /// Replace the current data with `ingestion`.
    ///
    /// Samples and protocol are replaced wholesale and any ticket issued for
    /// earlier data goes stale. Test info is only rewritten for a non-empty
    /// run, and each dose text only when that dose is present; otherwise the
    /// previous text stays on screen.
    pub fn load(&mut self, ingestion: Ingestion) -> RenderTicket {
        self.generation += 1;

        let summary = ingestion.summary();
        let doses = DoseDisplay::from_protocol(&ingestion.protocol, &self.dose_unit);

        self.view.series = ingestion.chart_series();
        if let Some(summary) = &summary {
            self.view.test_info = Some(summary.to_string());
        }
        if doses.coagulant.is_some() {
            self.view.coagulant_dose = doses.coagulant;
        }
        if doses.polymer.is_some() {
            self.view.polymer_dose = doses.polymer;
        }

        debug!(
            "Loaded generation {} ({} points)",
            self.generation,
            self.view.series.len()
        );
        self.summary = summary;
        self.ingestion = ingestion;
        RenderTicket {
            generation: self.generation,
        }
    }

    /// True if `ticket` still refers to the loaded data
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Frame for `ticket`, or `None` if newer data has been loaded since
    pub fn frame(&self, ticket: RenderTicket) -> Option<RenderFrame> {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale render (generation {} < {})",
                ticket.generation, self.generation
            );
            return None;
        }

        Some(RenderFrame {
            generation: self.generation,
            series: self.view.series.clone(),
            test_info: self.view.test_info.clone(),
            coagulant_dose: self.view.coagulant_dose.clone(),
            polymer_dose: self.view.polymer_dose.clone(),
        })
    }

    /// Currently loaded ingestion
    pub fn ingestion(&self) -> &Ingestion {
        &self.ingestion
    }

    /// Summary of the loaded run, if it has samples
    pub fn summary(&self) -> Option<&TestSummary> {
        self.summary.as_ref()
    }

    /// Current display strings
    pub fn view(&self) -> &DatasetView {
        &self.view
    }

    /// Show a freshly projected status panel
    pub fn apply_status(&mut self, panel: StatusPanel) {
        self.status = Some(panel);
    }

    /// Latest status panel
    pub fn status(&self) -> Option<&StatusPanel> {
        self.status.as_ref()
    }

    /// Sensor controls
    pub fn controls(&self) -> &SensorControls {
        &self.controls
    }

    /// Press a sensor button; returns the command to dispatch
    pub fn press_sensor(&mut self, command: SensorCommand) -> SensorCommand {
        self.controls.press(command)
    }
}
