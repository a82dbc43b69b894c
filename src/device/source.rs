use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use super::{DeviceStatus, PollError};

/// Path of the status endpoint, relative to the rig's base URL
pub const STATUS_PATH: &str = "/status";

/// Anything that can deliver a live status snapshot
pub trait StatusSource {
    /// Fetch the current snapshot
    fn fetch(&mut self) -> Result<DeviceStatus, PollError>;
}

/// Polls the rig's HTTP status endpoint
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpStatusSource {
    /// Create a source for the rig at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PollError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: endpoint_url(base_url, STATUS_PATH),
        })
    }

    /// Full URL polled on each tick
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch(&mut self) -> Result<DeviceStatus, PollError> {
        let status = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json::<DeviceStatus>()?;
        debug!("GET {} -> {:?}", self.url, status);
        Ok(status)
    }
}

/// Re-reads a JSON snapshot file on every tick
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl StatusSource for JsonFileSource {
    fn fetch(&mut self) -> Result<DeviceStatus, PollError> {
        let content = std::fs::read_to_string(&self.path)?;
        DeviceStatus::from_json(&content)
    }
}

/// Adapts a closure into a [`StatusSource`]
pub struct FnSource<F>(pub F);

impl<F> StatusSource for FnSource<F>
where
    F: FnMut() -> Result<DeviceStatus, PollError>,
{
    fn fetch(&mut self) -> Result<DeviceStatus, PollError> {
        (self.0)()
    }
}

/// Join a base URL and an endpoint path without doubling the slash
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
