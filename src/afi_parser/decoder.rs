//! Fixed-width field decoding
//!
//! Slices a classified line according to its record layout and converts
//! every slice to a typed [`FieldValue`]. Decoding never fails: problems are
//! carried in [`FieldValue::Invalid`] for the validator to report.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{DecodeFailure, DecodedField, DecodedFields, FieldValue, RawLine};
use crate::schema::{FieldKind, FieldSpec, RecordType};

/// Decode every field of `record_type` from a line
pub fn decode(line: &RawLine, record_type: RecordType) -> DecodedFields {
    let chars: Vec<char> = line.text.chars().collect();

    let fields = record_type
        .fields()
        .iter()
        .map(|spec| decode_field(&chars, spec))
        .collect();

    DecodedFields::new(fields)
}

fn decode_field(chars: &[char], spec: &'static FieldSpec) -> DecodedField {
    // Step 1: slice, marking fields that run past the end of the line
    if spec.end() > chars.len() {
        let raw: String = chars.iter().skip(spec.start).collect();
        return DecodedField {
            spec,
            value: FieldValue::Invalid {
                raw: raw.clone(),
                failure: DecodeFailure::OutOfRange,
            },
            raw,
        };
    }
    let raw: String = chars[spec.start..spec.end()].iter().collect();

    // Step 2: convert
    let value = convert(&raw, spec);
    DecodedField { spec, raw, value }
}

fn convert(raw: &str, spec: &FieldSpec) -> FieldValue {
    if raw.trim().is_empty() {
        return FieldValue::Empty;
    }

    match spec.kind {
        FieldKind::AlphaNumeric | FieldKind::Code(_) => FieldValue::Text(raw.trim().to_string()),
        FieldKind::Reserved => FieldValue::Text(raw.to_string()),
        FieldKind::Numeric => parse_numeric(raw),
        FieldKind::Date(format) => match NaiveDate::parse_from_str(raw, format) {
            Ok(date) => FieldValue::Date(date),
            Err(_) => invalid(raw, DecodeFailure::BadDate),
        },
        FieldKind::Time(format) => match NaiveTime::parse_from_str(raw, format) {
            Ok(time) => FieldValue::Time(time),
            Err(_) => invalid(raw, DecodeFailure::BadDate),
        },
        FieldKind::DocumentNumber(_) => {
            let trimmed = raw.trim().trim_start_matches('0');
            if trimmed.is_empty() {
                // an all-zero number is how producers leave the field unset
                FieldValue::Empty
            } else {
                FieldValue::Document(trimmed.to_ascii_uppercase())
            }
        }
    }
}

fn parse_numeric(raw: &str) -> FieldValue {
    // leading zeros are padding, embedded spaces are not
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return invalid(raw, DecodeFailure::NotNumeric);
    }
    match raw.parse::<u64>() {
        Ok(value) => FieldValue::Integer(value),
        Err(_) => invalid(raw, DecodeFailure::NotNumeric),
    }
}

fn invalid(raw: &str, failure: DecodeFailure) -> FieldValue {
    FieldValue::Invalid {
        raw: raw.to_string(),
        failure,
    }
}
