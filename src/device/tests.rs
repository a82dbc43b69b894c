use super::*;
use chrono::{Local, TimeZone};
use crossbeam_channel::{bounded, unbounded};
use std::collections::VecDeque;
use std::time::Duration;

const STATUS_JSON: &str = r#"{
    "pump": {"name": "Main Pump", "state": "RUNNING"},
    "sensor": {"active": true, "state": "ON"},
    "valves": {
        "1": {"valve_number": 1, "name": "Valve 1", "state": "OPEN"},
        "2": {"valve_number": 2, "name": "Valve 2", "state": "CLOSING"},
        "3": {"valve_number": 3, "name": "Valve 3", "state": "IDLE"}
    }
}"#;

fn status(pump: &str) -> DeviceStatus {
    let mut status = DeviceStatus::from_json(STATUS_JSON).unwrap();
    status.pump = ComponentState::new(pump);
    status
}

fn scripted(
    replies: Vec<Result<DeviceStatus, PollError>>,
) -> FnSource<impl FnMut() -> Result<DeviceStatus, PollError>> {
    let mut replies: VecDeque<_> = replies.into();
    FnSource(move || {
        replies
            .pop_front()
            .unwrap_or_else(|| Err(PollError::MissingComponent("script exhausted".to_string())))
    })
}

#[test]
fn test_decode_status_payload() {
    let status = DeviceStatus::from_json(STATUS_JSON).unwrap();

    assert_eq!(status.pump.state, "RUNNING");
    assert_eq!(status.sensor.state, "ON");
    assert_eq!(status.valve(2).map(|v| v.state.as_str()), Some("CLOSING"));
    assert_eq!(status.valve(4), None);
}

#[test]
fn test_typed_states() {
    let status = DeviceStatus::from_json(STATUS_JSON).unwrap();

    assert_eq!(status.pump.parse::<PumpState>(), Some(PumpState::Running));
    assert_eq!(status.sensor.parse::<SensorState>(), Some(SensorState::On));
    let valve = status.valve(2).and_then(|v| v.parse::<ValveState>()).unwrap();
    assert!(valve.in_transit());
    assert_eq!(ComponentState::new("stalled").parse::<PumpState>(), None);
}

#[test]
fn test_state_parse_error_message() {
    let err = "jammed".parse::<ValveState>().unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized valve state: jammed");
}

#[test]
fn test_missing_valve_is_reported() {
    let mut status = DeviceStatus::from_json(STATUS_JSON).unwrap();
    status.valves.remove("3");

    let err = status.displayed_valves().unwrap_err();
    assert!(matches!(err, PollError::MissingComponent(ref key) if key.contains('3')));
}

#[test]
fn test_malformed_payload() {
    let result = DeviceStatus::from_json(r#"{"pump": "on"}"#);
    assert!(matches!(result, Err(PollError::JsonError(_))));
}

#[test]
fn test_tick_projects_snapshot() {
    let now = Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 5).unwrap();
    let mut poller = StatusPoller::new(scripted(vec![Ok(status("PRIMING"))]));

    let panel = poller.tick(now).unwrap();
    assert_eq!(panel.pump.text, "PRIMING");
    assert_eq!(panel.pump.class, "status-priming");
    assert_eq!(panel.valve2.text, "CLOSING");
    assert_eq!(panel.last_updated(), "09:30:05");
    assert_eq!(poller.ticks(), 1);
    assert_eq!(poller.failures(), 0);
}

#[test]
fn test_failures_are_swallowed_and_retried() {
    let now = Local::now();
    let mut poller = StatusPoller::new(scripted(vec![
        Err(PollError::MissingComponent("pump".to_string())),
        Ok(status("IDLE")),
    ]));

    assert!(poller.tick(now).is_none());
    let panel = poller.tick(now).unwrap();
    assert_eq!(panel.pump.text, "IDLE");
    assert_eq!(poller.ticks(), 2);
    assert_eq!(poller.failures(), 1);
}

#[test]
fn test_spawned_poller_delivers_and_stops() {
    let (tx, rx) = unbounded();
    let source = FnSource(|| Ok(status("RUNNING")));
    let handle = StatusPoller::new(source)
        .spawn(Duration::from_millis(10), tx)
        .unwrap();

    // First tick is immediate, later ones follow the interval.
    for _ in 0..3 {
        let panel = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(panel.pump.text, "RUNNING");
    }

    let poller = handle.stop().unwrap();
    assert!(poller.ticks() >= 3);

    // Nothing arrives once stop has returned.
    while rx.try_recv().is_ok() {}
    std::thread::sleep(Duration::from_millis(50));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_poller_exits_when_consumer_drops() {
    let (tx, rx) = unbounded();
    let handle = StatusPoller::new(FnSource(|| Ok(status("IDLE"))))
        .spawn(Duration::from_millis(5), tx)
        .unwrap();

    drop(rx);
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while handle.is_running() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!handle.is_running());
}

#[test]
fn test_dropping_handle_stops_thread() {
    let (tx, rx) = unbounded();
    let handle = StatusPoller::new(FnSource(|| Ok(status("IDLE"))))
        .spawn(Duration::from_millis(5), tx)
        .unwrap();

    rx.recv_timeout(Duration::from_secs(5)).unwrap();
    drop(handle);

    while rx.try_recv().is_ok() {}
    // Sender was moved into the joined thread, so the channel is now closed.
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn test_stop_with_full_bounded_sink() {
    let (tx, rx) = bounded(1);
    let handle = StatusPoller::new(FnSource(|| Ok(status("RUNNING"))))
        .spawn(Duration::from_millis(1), tx)
        .unwrap();

    // Let the sink fill up and the poller block on the next delivery.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while !rx.is_full() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(rx.is_full());
    std::thread::sleep(Duration::from_millis(20));

    let (done_tx, done_rx) = bounded(1);
    std::thread::spawn(move || {
        let poller = handle.stop();
        let _ = done_tx.send(poller.map(|p| p.ticks()));
    });

    let ticks = done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("stop blocked on a full sink");
    assert!(ticks.unwrap() >= 1);

    // The receiver stayed alive throughout.
    assert_eq!(rx.len(), 1);
}
