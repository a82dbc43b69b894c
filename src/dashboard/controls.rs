use serde::{Deserialize, Serialize};

use crate::device::SensorCommand;

/// Sensor on/off buttons and the output line shown beside them.
///
/// Buttons toggle optimistically when a command is pressed, before (and
/// regardless of) the rig's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorControls {
    /// "Sensor On" button enabled
    pub on_enabled: bool,
    /// "Sensor Off" button enabled
    pub off_enabled: bool,
    /// Last command message
    pub output: String,
}

impl Default for SensorControls {
    fn default() -> Self {
        Self {
            on_enabled: true,
            off_enabled: true,
            output: String::new(),
        }
    }
}

impl SensorControls {
    /// Apply the UI side of a command and return it for dispatch
    pub fn press(&mut self, command: SensorCommand) -> SensorCommand {
        let on = command == SensorCommand::On;
        self.on_enabled = !on;
        self.off_enabled = on;
        self.output = command.message().to_string();
        command
    }
}
