//! Line classification by record marker and length

use crate::constants::MARKER_WIDTH;
use crate::models::{Finding, FindingKind, RawLine};
use crate::schema::RecordType;

/// Determine the record type of a raw line.
///
/// The marker is the first three characters. Lines with an unknown marker
/// (blank and very short lines included) and lines of a known type whose
/// length differs from the layout each yield exactly one finding.
pub fn classify(line: &RawLine) -> Result<RecordType, Finding> {
    let marker: String = line.text.chars().take(MARKER_WIDTH).collect();

    let Some(record_type) = RecordType::from_marker(&marker) else {
        let message = if line.text.trim().is_empty() {
            "blank line".to_string()
        } else {
            format!("unknown record type marker '{}'", marker)
        };
        return Err(Finding::new(
            line.number,
            FindingKind::UnknownRecordType,
            message,
        ));
    };

    let length = line.char_len();
    if length != record_type.line_length() {
        return Err(Finding::new(
            line.number,
            FindingKind::LineLengthMismatch,
            format!(
                "{} line is {} characters long, expected {}",
                record_type,
                length,
                record_type.line_length()
            ),
        ));
    }

    Ok(record_type)
}
