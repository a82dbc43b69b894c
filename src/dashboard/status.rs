use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::device::{DeviceStatus, PollError};

/// Format of the "last updated" clock
pub const LAST_UPDATED_FORMAT: &str = "%H:%M:%S";

/// Coarse grouping of status strings, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// running / on / open
    Active,
    /// priming / opening / closing
    Transition,
    /// anything else
    Inactive,
}

/// One displayed status value with its style class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusField {
    /// Status text exactly as reported
    pub text: String,
    /// Style class, `status-<lowercased text>`
    pub class: String,
}

impl StatusField {
    /// Project a raw status string
    pub fn new(state: &str) -> Self {
        Self {
            text: state.to_string(),
            class: format!("status-{}", state.to_lowercase()),
        }
    }

    /// Tone of this status
    pub fn tone(&self) -> StatusTone {
        match self.text.trim().to_lowercase().as_str() {
            "running" | "on" | "open" => StatusTone::Active,
            "priming" | "opening" | "closing" => StatusTone::Transition,
            _ => StatusTone::Inactive,
        }
    }
}

/// Status fields for pump, sensor and valves, stamped at projection time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPanel {
    /// Main pump
    pub pump: StatusField,
    /// Particle sensor
    pub sensor: StatusField,
    /// Valve 1
    pub valve1: StatusField,
    /// Valve 2
    pub valve2: StatusField,
    /// Valve 3
    pub valve3: StatusField,
    /// Wall-clock time of the projection
    pub updated_at: DateTime<Local>,
}

impl StatusPanel {
    /// Map a snapshot onto display fields.
    ///
    /// Fails only when one of the three displayed valves is missing.
    pub fn project(status: &DeviceStatus, now: DateTime<Local>) -> Result<Self, PollError> {
        let [valve1, valve2, valve3] = status.displayed_valves()?;

        Ok(Self {
            pump: StatusField::new(&status.pump.state),
            sensor: StatusField::new(&status.sensor.state),
            valve1: StatusField::new(&valve1.state),
            valve2: StatusField::new(&valve2.state),
            valve3: StatusField::new(&valve3.state),
            updated_at: now,
        })
    }

    /// Named fields in display order
    pub fn fields(&self) -> [(&'static str, &StatusField); 5] {
        [
            ("pump", &self.pump),
            ("sensor", &self.sensor),
            ("valve1", &self.valve1),
            ("valve2", &self.valve2),
            ("valve3", &self.valve3),
        ]
    }

    /// Projection time as shown on the dashboard
    pub fn last_updated(&self) -> String {
        self.updated_at.format(LAST_UPDATED_FORMAT).to_string()
    }

    /// Render the panel with terminal colours (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::style;

            let mut output = String::new();
            for (name, field) in self.fields() {
                let text = match field.tone() {
                    StatusTone::Active => style(&field.text).green().bold(),
                    StatusTone::Transition => style(&field.text).yellow(),
                    StatusTone::Inactive => style(&field.text).dim(),
                };
                output.push_str(&format!("{:>7}: {}\n", style(name).bold(), text));
            }
            output.push_str(&format!(
                "{}: {}",
                style("Last updated").cyan(),
                self.last_updated()
            ));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for StatusPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, field) in self.fields() {
            writeln!(f, "{:>7}: {}", name, field.text)?;
        }
        write!(f, "Last updated: {}", self.last_updated())
    }
}
