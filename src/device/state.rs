use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::PollError;

/// Valve keys the dashboard displays, in display order
pub const VALVE_KEYS: [&str; 3] = ["1", "2", "3"];

/// State of one component as reported by the rig
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentState {
    /// Short status string (e.g., "RUNNING", "OFF", "open")
    pub state: String,
}

impl ComponentState {
    /// Create a component state from its status string
    pub fn new(state: &str) -> Self {
        Self {
            state: state.to_string(),
        }
    }

    /// Parse the status string as a typed state
    pub fn parse<T: FromStr>(&self) -> Option<T> {
        self.state.parse().ok()
    }
}

/// Snapshot of the rig returned by one status poll.
///
/// ```json
/// { "pump": {"state": "RUNNING"}, "sensor": {"state": "ON"},
///   "valves": {"1": {"state": "OPEN"}, "2": {"state": "CLOSED"}, "3": {"state": "IDLE"}} }
/// ```
///
/// Extra fields sent by the rig (names, flags) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Main pump
    pub pump: ComponentState,
    /// Particle sensor
    pub sensor: ComponentState,
    /// Valves keyed by number ("1", "2", "3")
    pub valves: BTreeMap<String, ComponentState>,
}

impl DeviceStatus {
    /// Decode a status payload
    pub fn from_json(json: &str) -> Result<Self, PollError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Valve by number, if reported
    pub fn valve(&self, number: u8) -> Option<&ComponentState> {
        self.valves.get(&number.to_string())
    }

    /// The three displayed valves, in order
    pub fn displayed_valves(&self) -> Result<[&ComponentState; 3], PollError> {
        let get = |key: &str| {
            self.valves
                .get(key)
                .ok_or_else(|| PollError::MissingComponent(format!("valves[\"{}\"]", key)))
        };
        Ok([get(VALVE_KEYS[0])?, get(VALVE_KEYS[1])?, get(VALVE_KEYS[2])?])
    }
}

/// Error returned when a status string is not a known state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized {kind} state: {value}")]
pub struct ParseStateError {
    kind: &'static str,
    value: String,
}

impl ParseStateError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Pump states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    /// "idle"
    Idle,
    /// "priming"
    Priming,
    /// "running"
    Running,
}

impl FromStr for PumpState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "priming" => Ok(Self::Priming),
            "running" => Ok(Self::Running),
            _ => Err(ParseStateError::new("pump", s)),
        }
    }
}

impl fmt::Display for PumpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Priming => "priming",
            Self::Running => "running",
        };
        f.write_str(name)
    }
}

/// Valve states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    /// "idle"
    Idle,
    /// "opening"
    Opening,
    /// "open"
    Open,
    /// "closing"
    Closing,
    /// "closed"
    Closed,
}

impl ValveState {
    /// True while the valve is moving
    pub fn in_transit(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

impl FromStr for ValveState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "opening" => Ok(Self::Opening),
            "open" => Ok(Self::Open),
            "closing" => Ok(Self::Closing),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStateError::new("valve", s)),
        }
    }
}

impl fmt::Display for ValveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Sensor states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorState {
    /// "on"
    On,
    /// "off"
    Off,
}

impl FromStr for SensorState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ParseStateError::new("sensor", s)),
        }
    }
}

impl fmt::Display for SensorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}
