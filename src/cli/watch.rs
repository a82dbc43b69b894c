use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use log::info;
use std::path::PathBuf;

use flocview::dashboard::StatusPanel;
use flocview::device::{HttpStatusSource, JsonFileSource, StatusPoller, StatusSource};

use super::Config;

/// Poll live status until interrupted (or `ticks` updates have been shown)
pub fn run(
    url: Option<String>,
    snapshot: Option<PathBuf>,
    interval_ms: Option<u64>,
    ticks: Option<u64>,
    config: &Config,
) -> Result<()> {
    let interval = config.poll_interval(interval_ms);

    match snapshot {
        Some(path) => {
            info!("Watching snapshot {} every {:?}", path.display(), interval);
            watch(JsonFileSource::new(path), interval, ticks)
        }
        None => {
            let source = HttpStatusSource::new(&config.base_url(url), config.request_timeout())
                .context("Failed to create HTTP client")?;
            info!("Watching {} every {:?}", source.url(), interval);
            watch(source, interval, ticks)
        }
    }
}

fn watch<S: StatusSource + Send + 'static>(
    source: S,
    interval: std::time::Duration,
    ticks: Option<u64>,
) -> Result<()> {
    let (tx, rx) = unbounded::<StatusPanel>();
    let handle = StatusPoller::new(source)
        .spawn(interval, tx)
        .context("Failed to start status poller")?;

    let mut shown = 0u64;
    for panel in rx.iter() {
        if limit_reached(shown, ticks) {
            break;
        }
        print_panel(&panel);
        shown += 1;
        if limit_reached(shown, ticks) {
            break;
        }
    }

    if let Some(poller) = handle.stop() {
        info!(
            "Polled {} times, {} failed",
            poller.ticks(),
            poller.failures()
        );
    }
    Ok(())
}

fn limit_reached(shown: u64, ticks: Option<u64>) -> bool {
    ticks.is_some_and(|limit| shown >= limit)
}

fn print_panel(panel: &StatusPanel) {
    #[cfg(feature = "colorized_output")]
    {
        println!("{}\n", panel.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}\n", panel);
    }
}
