use log::{debug, warn};
use std::fmt;
use std::time::Duration;

use super::source::endpoint_url;
use super::CommandError;

/// Commands the dashboard can send to the particle sensor.
///
/// Both are idempotent: repeating one leaves the rig in the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorCommand {
    /// Start the sensor code
    On,
    /// Stop the sensor code
    Off,
}

impl SensorCommand {
    /// Endpoint path, relative to the rig's base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::On => "/Sensor/On",
            Self::Off => "/Sensor/Off",
        }
    }

    /// Message shown to the operator when the command is sent
    pub fn message(&self) -> &'static str {
        match self {
            Self::On => "Sensor Code Running",
            Self::Off => "Sensor Code Stopping",
        }
    }
}

impl fmt::Display for SensorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "sensor-on",
            Self::Off => "sensor-off",
        })
    }
}

/// Fire-and-forget command client for the rig
#[derive(Debug, Clone)]
pub struct CommandClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CommandClient {
    /// Create a client for the rig at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CommandError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL a command is posted to
    pub fn url(&self, command: SensorCommand) -> String {
        endpoint_url(&self.base_url, command.path())
    }

    /// POST the command and return the response body as text.
    ///
    /// Failures are logged as well as returned; callers are free to ignore them.
    pub fn send(&self, command: SensorCommand) -> Result<String, CommandError> {
        let url = self.url(command);
        let result = self
            .client
            .post(&url)
            .send()
            .and_then(|response| response.text());

        match result {
            Ok(body) => {
                debug!("POST {} -> {}", url, body);
                Ok(body)
            }
            Err(e) => {
                warn!("Error sending {}: {}", command, e);
                Err(e.into())
            }
        }
    }
}
