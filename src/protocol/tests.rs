use super::*;

const DESCRIPTOR: &str = "Protocol Title: Standard Protocol | Run Chemistry: Alum/PolyDADMAC | Run Dosage: 25.5/0.95 ppm | Comments: Demo";

#[test]
fn test_full_descriptor() {
    let info = ProtocolInfo::from_line(DESCRIPTOR);

    assert_eq!(info.title, "Standard Protocol");
    assert_eq!(info.chemistry, "Alum/PolyDADMAC");
    assert_eq!(info.dosage, "25.5/0.95 ppm");
    assert_eq!(info.comments, "Demo");
    assert_eq!(info.coagulant, Some(25.5));
    assert_eq!(info.polymer, Some(0.95));
}

#[test]
fn test_segments_leave_doses_unset() {
    let info = ProtocolInfo::parse_segments(DESCRIPTOR);
    assert_eq!(info.dosage, "25.5/0.95 ppm");
    assert_eq!(info.coagulant, None);
    assert_eq!(info.polymer, None);
}

#[test]
fn test_missing_segments_are_empty() {
    let info = ProtocolInfo::from_line("Protocol Title: Jar 3 | Run Chemistry: Ferric");

    assert_eq!(info.title, "Jar 3");
    assert_eq!(info.chemistry, "Ferric");
    assert_eq!(info.dosage, "");
    assert_eq!(info.comments, "");
    assert_eq!(info.doses(), None);
}

#[test]
fn test_missing_label_yields_empty_field() {
    let info = ProtocolInfo::from_line("Standard Protocol | Run Chemistry: Alum | Dose 10/1 | Comments: x");

    // Neither the raw segment nor the unlabelled dose leaks through.
    assert_eq!(info.title, "");
    assert_eq!(info.chemistry, "Alum");
    assert_eq!(info.dosage, "");
    assert_eq!(info.coagulant, None);
    assert_eq!(info.comments, "x");
}

#[test]
fn test_labels_are_case_sensitive() {
    let info = ProtocolInfo::from_line("protocol title: lower");
    assert_eq!(info.title, "");
}

#[test]
fn test_label_matched_as_substring() {
    let info = ProtocolInfo::from_line("  >> Protocol Title:   Padded   ");
    assert_eq!(info.title, "Padded");
}

#[test]
fn test_unparseable_dosage_keeps_raw_text() {
    let info = ProtocolInfo::from_line("Protocol Title: T | Run Chemistry: C | Run Dosage: N/A | Comments:");

    assert_eq!(info.dosage, "N/A");
    assert_eq!(info.coagulant, None);
    assert_eq!(info.polymer, None);
    assert_eq!(info.comments, "");
}

#[test]
fn test_empty_line() {
    let info = ProtocolInfo::from_line("");
    assert!(info.is_empty());
    assert_eq!(info, ProtocolInfo::default());
}

#[test]
fn test_reapplying_dosage_overwrites() {
    let mut info = ProtocolInfo::from_line(DESCRIPTOR);
    info.dosage = "none given".to_string();
    info.apply_dosage();

    assert_eq!(info.coagulant, None);
    assert_eq!(info.polymer, None);
}

#[test]
fn test_protocol_json_roundtrip() {
    let info = ProtocolInfo::from_line(DESCRIPTOR);
    let json = serde_json::to_string(&info).unwrap();
    let restored: ProtocolInfo = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, info);
}
