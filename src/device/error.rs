/// Errors that can occur while polling live device status.
///
/// The poller reports these to the log and retries on the next tick.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// I/O error reading a status snapshot
    #[error("Failed to read status snapshot: {0}")]
    IoError(#[from] std::io::Error),

    /// Status payload is not the expected JSON shape
    #[error("Invalid status payload: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP transport error talking to the rig
    #[error("Status request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Payload lacks a component the dashboard displays
    #[error("Status payload is missing component: {0}")]
    MissingComponent(String),
}

/// Errors that can occur while dispatching a command to the rig
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// HTTP transport error talking to the rig
    #[error("Command request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}
