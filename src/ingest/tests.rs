use super::*;

const RUN_EXPORT: &str = "\
Flocculation Analyzer Export,v2.1
Protocol,Protocol Title: Standard Protocol | Run Chemistry: Alum/PolyDADMAC | Run Dosage: 25.5/0.95 ppm | Comments: Demo
Operator,JD
Instrument,FA-200
Index,Date,Time,Elapsed (s),Floc Count,Mean Diameter,Mean Volume,Vol Concentration,RPM,G Value,Flags
1,2025-03-14,10:00:00,0,12,35.2,1800,0.021,100,120,
2,2025-03-14,10:01:00,60,48,61.0,9500,0.145,100,120,
3,2025-03-14,10:02:00,120,90,88.4,21000,0.402,40,35,
";

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn data_row(elapsed: &str, concentration: &str) -> Vec<String> {
    row(&[
        "1", "2025-03-14", "10:00:00", elapsed, "10", "20", "30", concentration, "100", "120", "",
    ])
}

fn header_block() -> Vec<Vec<String>> {
    vec![row(&["h"]); HEADER_ROWS]
}

#[test]
fn test_ingest_run_export() {
    let ingestion = ingest_str(RUN_EXPORT);

    assert_eq!(ingestion.sample_count(), 3);
    assert_eq!(ingestion.protocol.title, "Standard Protocol");
    assert_eq!(ingestion.protocol.coagulant, Some(25.5));
    assert_eq!(ingestion.protocol.polymer, Some(0.95));

    let first = &ingestion.samples[0];
    assert_eq!(first.date, "2025-03-14");
    assert_eq!(first.time, "10:00:00");
    assert_eq!(first.elapsed_time, 0.0);
    assert_eq!(first.floc_count, 12.0);
    assert_eq!(first.mean_diameter, 35.2);
    assert_eq!(first.mean_volume, 1800.0);
    assert_eq!(first.vol_concentration, 0.021);
    assert_eq!(first.rpm, 100.0);
    assert_eq!(first.g_value, 120.0);

    assert_eq!(ingestion.samples[2].rpm, 40.0);
    assert_eq!(ingestion.samples[2].g_value, 35.0);
}

#[test]
fn test_short_export_is_empty() {
    let text = "a,b\nx,Protocol Title: Only Header\nc\nd\ne\n";
    let ingestion = ingest_str(text);

    assert!(ingestion.is_empty());
    assert!(ingestion.protocol.is_empty());
    assert_eq!(ingestion.summary(), None);
}

#[test]
fn test_truncated_export_ignores_descriptor() {
    let descriptor = "Export\nProtocol,Protocol Title: Jar | Run Chemistry: Alum | Run Dosage: 25/1 ppm | Comments: x\n";
    for padding in 0..=(HEADER_ROWS - 2) {
        let text = format!("{}{}", descriptor, "h\n".repeat(padding));
        let ingestion = ingest_str(&text);

        assert!(ingestion.samples.is_empty());
        assert_eq!(ingestion.protocol, ProtocolInfo::default());
    }

    // One row past the header block is enough for the descriptor.
    let text = format!("{}{}", descriptor, "h\n".repeat(HEADER_ROWS - 1));
    let ingestion = ingest_str(&text);
    assert_eq!(ingestion.protocol.title, "Jar");
    assert_eq!(ingestion.protocol.coagulant, Some(25.0));
}

#[test]
fn test_fewer_than_six_rows_without_descriptor() {
    for count in 0..6 {
        let text = "h\n".repeat(count);
        let ingestion = ingest_str(&text);
        assert!(ingestion.samples.is_empty());
        assert!(ingestion.protocol.is_empty());
    }
}

#[test]
fn test_header_rows_never_become_samples() {
    let table = vec![data_row("5", "0.5"); HEADER_ROWS + 1];

    let ingestion = ingest_rows(&table);
    assert_eq!(ingestion.sample_count(), 1);
}

#[test]
fn test_short_rows_are_dropped() {
    let mut table = header_block();
    table.push(data_row("0", "0.1"));
    table.push(row(&[""]));
    table.push(row(&["1", "d", "t", "60", "1", "2", "3", "4", "5", "6"]));
    table.push(data_row("120", "0.3"));
    table.push(row(&[""]));

    let ingestion = ingest_rows(&table);
    assert_eq!(ingestion.sample_count(), 2);
    assert_eq!(ingestion.samples[1].elapsed_time, 120.0);
}

#[test]
fn test_non_numeric_cell_defaults_only_that_field() {
    let mut bad = data_row("60", "0.25");
    bad[FLOC_COUNT_COLUMN] = "n/a".to_string();
    bad[G_VALUE_COLUMN] = String::new();
    let mut table = header_block();
    table.push(bad);

    let sample = &ingest_rows(&table).samples[0];
    assert_eq!(sample.floc_count, 0.0);
    assert_eq!(sample.g_value, 0.0);
    assert_eq!(sample.elapsed_time, 60.0);
    assert_eq!(sample.vol_concentration, 0.25);
    assert_eq!(sample.rpm, 100.0);
}

#[test]
fn test_numeric_cells_are_trimmed() {
    let mut table = header_block();
    table.push(row(&[
        "1", "d", "t", " 30 ", "\t7", "1e2", "-4.5", "0.5 ", "NaN", "inf", "x",
    ]));

    let sample = &ingest_rows(&table).samples[0];
    assert_eq!(sample.elapsed_time, 30.0);
    assert_eq!(sample.floc_count, 7.0);
    assert_eq!(sample.mean_diameter, 100.0);
    assert_eq!(sample.mean_volume, -4.5);
    assert_eq!(sample.vol_concentration, 0.5);
    assert_eq!(sample.rpm, 0.0);
    assert_eq!(sample.g_value, 0.0);
}

#[test]
fn test_descriptor_failure_does_not_block_samples() {
    let text = RUN_EXPORT.replacen(
        "Protocol,Protocol Title: Standard Protocol | Run Chemistry: Alum/PolyDADMAC | Run Dosage: 25.5/0.95 ppm | Comments: Demo",
        "Protocol",
        1,
    );
    let ingestion = ingest_str(&text);

    assert!(ingestion.protocol.is_empty());
    assert_eq!(ingestion.sample_count(), 3);
}

#[test]
fn test_quoted_descriptor_with_commas() {
    let text = RUN_EXPORT.replacen(
        "Comments: Demo",
        "Comments: Demo, second jar",
        1,
    )
    .replacen("Protocol,Protocol Title", "Protocol,\"Protocol Title", 1)
    .replacen("second jar\n", "second jar\"\n", 1);

    let ingestion = ingest_str(&text);
    assert_eq!(ingestion.protocol.comments, "Demo, second jar");
    assert_eq!(ingestion.protocol.coagulant, Some(25.5));
}

#[test]
fn test_blank_lines_keep_row_indices() {
    let rows = split_rows("a\n\nc,d\r\ne\n");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], vec![String::new()]);
    assert_eq!(rows[2], vec!["c".to_string(), "d".to_string()]);
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let with_bom = format!("\u{feff}{}", RUN_EXPORT);
    assert_eq!(ingest_str(&with_bom), ingest_str(RUN_EXPORT));
}

#[test]
fn test_ingestion_is_idempotent() {
    let first = ingest_str(RUN_EXPORT);
    let second = ingest_str(RUN_EXPORT);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_ingest_reader_lossy_utf8() {
    let mut bytes = RUN_EXPORT.as_bytes().to_vec();
    bytes.extend_from_slice(b"\xff\xfe,broken\n");

    let ingestion = ingest_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(ingestion.sample_count(), 3);
}

#[test]
fn test_ingest_missing_file() {
    let result = ingest_file("/nonexistent/run-export.csv");
    assert!(matches!(result, Err(IngestError::IoError(_))));
}

#[test]
fn test_missing_file_falls_back_to_demo() {
    let ingestion = ingest_file_or_demo("/nonexistent/run-export.csv");
    assert_eq!(ingestion, crate::demo::demo_ingestion());
}

#[test]
fn test_sample_json_field_names() {
    let json = serde_json::to_value(&ingest_str(RUN_EXPORT).samples[0]).unwrap();
    assert_eq!(json["elapsedTime"], 0.0);
    assert_eq!(json["volConcentration"], 0.021);
    assert_eq!(json["gValue"], 120.0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(prop::collection::vec(".{0,8}", 0..14), 0..30)
    }

    proptest! {
        /// Arbitrary rows never panic and respect the row contract
        #[test]
        fn test_arbitrary_rows(table in arb_rows()) {
            let ingestion = ingest_rows(&table);
            let qualifying = table
                .iter()
                .skip(HEADER_ROWS)
                .filter(|r| r.len() > MIN_DATA_CELLS)
                .count();

            prop_assert_eq!(ingestion.sample_count(), qualifying);
            prop_assert_eq!(ingestion.chart_series().len(), ingestion.sample_count());
            prop_assert_eq!(ingest_rows(&table), ingestion.clone());
            if table.len() <= HEADER_ROWS {
                prop_assert!(ingestion.protocol.is_empty());
            }
        }

        /// Arbitrary text never panics
        #[test]
        fn test_arbitrary_text(text in "(?s).{0,400}") {
            let ingestion = ingest_str(&text);
            prop_assert_eq!(ingestion.chart_series().len(), ingestion.samples.len());
        }

        /// Elapsed times are charted in row order
        #[test]
        fn test_series_follows_rows(elapsed in prop::collection::vec(0u32..10_000, 1..40)) {
            let mut table: Vec<Vec<String>> = vec![vec![String::new()]; HEADER_ROWS];
            for e in &elapsed {
                let mut row = vec![String::new(); MIN_DATA_CELLS + 1];
                row[ELAPSED_TIME_COLUMN] = e.to_string();
                table.push(row);
            }

            let xs: Vec<f64> = ingest_rows(&table).chart_series().iter().map(|p| p.x).collect();
            let expected: Vec<f64> = elapsed.iter().map(|e| f64::from(*e)).collect();
            prop_assert_eq!(xs, expected);
        }
    }
}
