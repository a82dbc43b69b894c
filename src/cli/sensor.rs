use anyhow::{Context, Result};
use log::info;

use flocview::dashboard::SensorControls;
use flocview::device::{CommandClient, SensorCommand};

use super::Config;

/// Send a sensor command to the rig
pub fn run(command: SensorCommand, url: Option<String>, config: &Config) -> Result<()> {
    let base_url = config.base_url(url);
    let client = CommandClient::new(&base_url, config.request_timeout())
        .context("Failed to create HTTP client")?;

    // Controls flip before the rig answers, as on the dashboard.
    let mut controls = SensorControls::default();
    let command = controls.press(command);
    println!("{}", controls.output);

    info!("POST {}", client.url(command));
    let body = client
        .send(command)
        .with_context(|| format!("Failed to send {} to {}", command, base_url))?;
    println!("Server response: {}", body);

    Ok(())
}
