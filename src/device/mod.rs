//! # Live Device State
//!
//! The rig exposes its pump, particle sensor and three valves through a
//! status endpoint polled once per second, and accepts sensor on/off
//! commands. This module holds the payload types, the sources a snapshot can
//! come from, the cancellable poller and the command client.
//!
//! The dashboard only reads snapshots; it never keeps a history of them.

mod command;
mod error;
mod poller;
mod source;
mod state;

#[cfg(test)]
mod tests;

pub use command::{CommandClient, SensorCommand};
pub use error::{CommandError, PollError};
pub use poller::{PollerHandle, StatusPoller, DEFAULT_POLL_INTERVAL};
pub use source::{endpoint_url, FnSource, HttpStatusSource, JsonFileSource, StatusSource, STATUS_PATH};
pub use state::{
    ComponentState, DeviceStatus, ParseStateError, PumpState, SensorState, ValveState, VALVE_KEYS,
};
