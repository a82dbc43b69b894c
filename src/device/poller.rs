//! Cancellable status polling.
//!
//! A [`StatusPoller`] can be driven one tick at a time (deterministic, used by
//! tests) or spawned onto a background thread that ticks at a fixed interval
//! until its [`PollerHandle`] is stopped or dropped.
//!
//! ```text
//! ┌──────────────┐  crossbeam tick  ┌─────────────────┐   StatusPanel   ┌──────────┐
//! │ StatusSource │ ◀──── fetch ──── │ poller thread   │ ──── send ────▶ │ consumer │
//! └──────────────┘                  │ ("flocview-     │                 └──────────┘
//!                                   │   poller")      │ ◀── stop ─── PollerHandle
//!                                   └─────────────────┘
//! ```

use chrono::{DateTime, Local};
use crossbeam_channel::{bounded, select, tick, Receiver, Sender, TryRecvError};
use log::{debug, warn};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::dashboard::StatusPanel;

use super::StatusSource;

/// Default polling interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Polls a [`StatusSource`] and projects each snapshot onto a [`StatusPanel`].
///
/// Failures are logged and counted, never surfaced; the next tick simply
/// tries again. No snapshot history is kept.
pub struct StatusPoller<S> {
    source: S,
    ticks: u64,
    failures: u64,
}

impl<S: StatusSource> StatusPoller<S> {
    /// Create a poller over `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            ticks: 0,
            failures: 0,
        }
    }

    /// Poll once, stamping the projection with `now`
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<StatusPanel> {
        self.ticks += 1;
        let projected = self
            .source
            .fetch()
            .and_then(|status| StatusPanel::project(&status, now));

        match projected {
            Ok(panel) => Some(panel),
            Err(e) => {
                self.failures += 1;
                warn!("Error fetching status: {}", e);
                None
            }
        }
    }

    /// Number of ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of ticks that produced no panel
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Give back the underlying source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Run on a background thread, sending a panel to `sink` after every
    /// successful tick. The first tick happens immediately.
    ///
    /// The thread exits when the handle is stopped or dropped, or when `sink`
    /// is disconnected. A full bounded `sink` never delays stopping.
    pub fn spawn(
        self,
        interval: Duration,
        sink: Sender<StatusPanel>,
    ) -> std::io::Result<PollerHandle<S>>
    where
        S: Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("flocview-poller".to_string())
            .spawn(move || poll_loop(self, interval, sink, stop_rx))?;

        Ok(PollerHandle {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }
}

fn poll_loop<S: StatusSource>(
    mut poller: StatusPoller<S>,
    interval: Duration,
    sink: Sender<StatusPanel>,
    stop: Receiver<()>,
) -> StatusPoller<S> {
    let ticker = tick(interval);

    loop {
        let panel = poller.tick(Local::now());

        // A stop requested during a slow fetch wins over delivery.
        if !matches!(stop.try_recv(), Err(TryRecvError::Empty)) {
            break;
        }
        // A consumer that stops reading a bounded sink must not block stop.
        if let Some(panel) = panel {
            select! {
                send(sink, panel) -> sent => {
                    if sent.is_err() {
                        debug!("Status consumer went away; stopping poller");
                        break;
                    }
                }
                recv(stop) -> _ => break,
            }
        }

        select! {
            recv(stop) -> _ => break,
            recv(ticker) -> _ => {}
        }
    }

    debug!(
        "Poller stopped after {} ticks ({} failed)",
        poller.ticks(),
        poller.failures()
    );
    poller
}

/// Handle to a running poller thread.
///
/// Dropping the handle stops the thread and waits for it.
pub struct PollerHandle<S> {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<StatusPoller<S>>>,
}

impl<S> PollerHandle<S> {
    /// Stop polling and wait for the thread to finish.
    ///
    /// No panel is delivered after this returns. Gives back the poller, or
    /// `None` if the thread panicked.
    pub fn stop(mut self) -> Option<StatusPoller<S>> {
        self.shutdown()
    }

    /// True while the poller thread is running
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn shutdown(&mut self) -> Option<StatusPoller<S>> {
        // Disconnecting the stop channel wakes the thread.
        drop(self.stop.take());

        let handle = self.handle.take()?;
        match handle.join() {
            Ok(poller) => Some(poller),
            Err(_) => {
                warn!("Status poller thread panicked");
                None
            }
        }
    }
}

impl<S> Drop for PollerHandle<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
