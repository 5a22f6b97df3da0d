//! Tests for line classification

use super::*;
use crate::afi_parser::classify;

#[test]
fn test_classifies_every_known_record() {
    for record_type in [
        RecordType::Label,
        RecordType::CompanyHeader,
        RecordType::CompanyName,
        RecordType::Worker,
        RecordType::WorkerName,
        RecordType::Address,
        RecordType::Movement,
        RecordType::Peculiarity,
    ] {
        let line = RawLine::new(1, fixture_line(record_type));
        assert_eq!(classify(&line), Ok(record_type));
    }
}

#[test]
fn test_unknown_marker() {
    let line = RawLine::new(7, format!("XYZ{}", " ".repeat(67)));
    let finding = classify(&line).unwrap_err();

    assert_eq!(finding.kind, FindingKind::UnknownRecordType);
    assert_eq!(finding.line, 7);
    assert!(finding.message.contains("XYZ"));
}

#[test]
fn test_marker_is_case_sensitive() {
    let line = RawLine::new(1, format!("emp{}", " ".repeat(67)));
    assert_eq!(
        classify(&line).unwrap_err().kind,
        FindingKind::UnknownRecordType
    );
}

#[test]
fn test_blank_and_short_lines_are_unknown() {
    for text in ["", "   ", "EM"] {
        let finding = classify(&RawLine::new(1, text)).unwrap_err();
        assert_eq!(finding.kind, FindingKind::UnknownRecordType, "{:?}", text);
    }
}

#[test]
fn test_wrong_length() {
    let mut short = fixture_line(RecordType::Worker);
    short.pop();
    let long = format!("{} ", fixture_line(RecordType::Worker));

    for text in [short, long, "TRA".to_string()] {
        let finding = classify(&RawLine::new(2, text)).unwrap_err();
        assert_eq!(finding.kind, FindingKind::LineLengthMismatch);
        assert_eq!(finding.line, 2);
    }
}

#[test]
fn test_length_counts_characters() {
    let text = encode_line(RecordType::WorkerName, &[("primer_apellido", "MUÑOZ")]).unwrap();
    assert_eq!(text.len(), 71);

    assert_eq!(
        classify(&RawLine::new(1, text)),
        Ok(RecordType::WorkerName)
    );
}
