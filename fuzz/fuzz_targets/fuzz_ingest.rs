#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Any byte soup must ingest without panicking
    let ingestion = match flocview::ingest::ingest_reader(Cursor::new(data)) {
        Ok(ingestion) => ingestion,
        Err(_) => return,
    };

    let series = ingestion.chart_series();
    assert_eq!(series.len(), ingestion.sample_count());
    let _ = ingestion.summary();

    // The descriptor parser on its own
    let text = String::from_utf8_lossy(data);
    let _ = flocview::protocol::ProtocolInfo::from_line(&text);
});
