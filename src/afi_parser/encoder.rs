//! Line encoding, the inverse of decoding
//!
//! Renders named field values into a padded fixed-width line. Used to build
//! fixtures and by tooling that needs to emit well-formed records.

use crate::error::{AfiError, Result};
use crate::schema::{Padding, RecordType};

/// Encode a line of `record_type` from `(field, value)` pairs.
///
/// Fields not listed are left blank. Values are padded per the field's
/// padding convention and must fit its width.
pub fn encode_line(record_type: RecordType, values: &[(&str, &str)]) -> Result<String> {
    for (name, _) in values {
        if record_type.field(name).is_none() {
            return Err(AfiError::encoding(
                record_type.code(),
                *name,
                "no such field in this record type",
            ));
        }
    }

    let mut line = String::with_capacity(record_type.line_length());
    line.push_str(record_type.code());

    for spec in record_type.fields() {
        let value = values
            .iter()
            .rev()
            .find(|(name, _)| *name == spec.name)
            .map(|(_, value)| *value);

        let Some(value) = value else {
            line.extend(std::iter::repeat_n(' ', spec.length));
            continue;
        };

        let width = value.chars().count();
        if width > spec.length {
            return Err(AfiError::encoding(
                record_type.code(),
                spec.name,
                format!("'{}' is {} characters, field holds {}", value, width, spec.length),
            ));
        }

        match spec.padding {
            Padding::Spaces => line.push_str(&format!("{:<width$}", value, width = spec.length)),
            Padding::Zeros => line.push_str(&format!("{:0>width$}", value, width = spec.length)),
        }
    }

    Ok(line)
}
