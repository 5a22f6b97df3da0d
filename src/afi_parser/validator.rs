//! Field-level and record-level validation
//!
//! Every field check runs independently and every record rule runs after
//! the field checks, so a line reports the union of all its problems.

use std::sync::Arc;

use super::documents::{DocumentKind, DocumentValidator, DocumentVerdict};
use crate::models::{DecodeFailure, DecodedField, DecodedFields, FieldValue, Finding, FindingKind};
use crate::schema::{DocumentSource, FieldKind, RecordRule, RecordType};

/// Validates decoded lines against their layout and cross-field rules
#[derive(Clone)]
pub struct RecordValidator {
    documents: Arc<dyn DocumentValidator>,
    report_reserved_fields: bool,
}

impl RecordValidator {
    /// Create a new validator using the given document checks
    pub fn new(documents: Arc<dyn DocumentValidator>, report_reserved_fields: bool) -> Self {
        Self {
            documents,
            report_reserved_fields,
        }
    }

    /// Validate all fields of one decoded line
    pub fn validate(
        &self,
        fields: &DecodedFields,
        record_type: RecordType,
        line: usize,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();

        for field in fields.iter() {
            self.check_field(field, fields, line, &mut findings);
        }
        for rule in record_type.rules() {
            self.check_rule(rule, fields, line, &mut findings);
        }

        findings
    }

    fn check_field(
        &self,
        field: &DecodedField,
        fields: &DecodedFields,
        line: usize,
        findings: &mut Vec<Finding>,
    ) {
        let spec = field.spec;

        match &field.value {
            FieldValue::Empty => {
                if spec.mandatory {
                    findings.push(Finding::for_field(
                        line,
                        spec.name,
                        FindingKind::MissingMandatoryField,
                        "mandatory field is blank",
                    ));
                }
            }
            FieldValue::Invalid { raw, failure } => {
                let (kind, message) = match failure {
                    DecodeFailure::OutOfRange => (
                        FindingKind::TruncatedField,
                        format!(
                            "field spans columns {}..{} but the line ends first",
                            spec.start,
                            spec.end()
                        ),
                    ),
                    DecodeFailure::NotNumeric => (
                        FindingKind::InvalidNumericFormat,
                        format!("'{}' is not a zero-padded number", raw),
                    ),
                    DecodeFailure::BadDate => (
                        FindingKind::InvalidDate,
                        format!("'{}' is not a valid date or time", raw),
                    ),
                };
                findings.push(Finding::for_field(line, spec.name, kind, message));
            }
            FieldValue::Integer(value) => {
                if let Some((min, max)) = spec.range
                    && !(min..=max).contains(value)
                {
                    findings.push(Finding::for_field(
                        line,
                        spec.name,
                        FindingKind::NumericOutOfRange,
                        format!("{} is outside {}..={}", value, min, max),
                    ));
                }
            }
            FieldValue::Text(text) => {
                if spec.kind == FieldKind::Reserved {
                    if self.report_reserved_fields {
                        findings.push(Finding::for_field(
                            line,
                            spec.name,
                            FindingKind::ReservedFieldNotBlank,
                            format!("reserved field holds '{}'", text.trim_end()),
                        ));
                    }
                    return;
                }
                self.check_charset(field, text, line, findings);
                if let FieldKind::Code(table) = spec.kind
                    && !table.contains(&text.as_str())
                {
                    findings.push(Finding::for_field(
                        line,
                        spec.name,
                        FindingKind::UnknownCode,
                        format!("'{}' is not one of {}", text, table.join(", ")),
                    ));
                }
            }
            FieldValue::Document(candidate) => {
                self.check_charset(field, candidate, line, findings);
                if let FieldKind::DocumentNumber(source) = spec.kind
                    && let Some(kind) = document_kind(source, fields)
                    && let DocumentVerdict::Invalid(reason) =
                        self.documents.validate(candidate, kind)
                {
                    findings.push(Finding::for_field(
                        line,
                        spec.name,
                        FindingKind::InvalidDocumentNumber { reason },
                        format!("'{}' is not a valid {} ({})", candidate, kind, reason),
                    ));
                }
            }
            FieldValue::Date(_) | FieldValue::Time(_) => {}
        }
    }

    fn check_charset(
        &self,
        field: &DecodedField,
        text: &str,
        line: usize,
        findings: &mut Vec<Finding>,
    ) {
        let charset = field.spec.charset;
        if let Some(bad) = text.chars().find(|c| !charset.allows(*c)) {
            findings.push(Finding::for_field(
                line,
                field.spec.name,
                FindingKind::InvalidCharset,
                format!("character '{}' not allowed ({:?})", bad, charset),
            ));
        }
    }

    fn check_rule(
        &self,
        rule: &RecordRule,
        fields: &DecodedFields,
        line: usize,
        findings: &mut Vec<Finding>,
    ) {
        match *rule {
            RecordRule::DocumentMatchesType {
                type_field,
                number_field,
            } => {
                let declared = fields
                    .value(type_field)
                    .and_then(FieldValue::as_text)
                    .and_then(DocumentKind::from_type_code);
                let number = match fields.value(number_field) {
                    Some(FieldValue::Document(number)) => number,
                    _ => return,
                };
                // passports have no shape of their own to compare against
                if let Some(declared) = declared.filter(|kind| *kind != DocumentKind::Passport)
                    && let Some(inferred) = DocumentKind::infer(number)
                    && inferred != declared
                {
                    findings.push(Finding::for_field(
                        line,
                        number_field,
                        FindingKind::InconsistentRecordFields,
                        format!(
                            "{} declares a {} but '{}' looks like a {}",
                            type_field, declared, number, inferred
                        ),
                    ));
                }
            }
            RecordRule::RequiredUnless {
                field,
                other,
                value,
            } => {
                let exempt = fields.value(other).and_then(FieldValue::as_text) == Some(value);
                if !exempt && !fields.is_present(field) {
                    findings.push(Finding::for_field(
                        line,
                        field,
                        FindingKind::InconsistentRecordFields,
                        format!("required unless {} is '{}'", other, value),
                    ));
                }
            }
            RecordRule::RequiredWith { field, trigger } => {
                if fields.is_present(trigger) && !fields.is_present(field) {
                    findings.push(Finding::for_field(
                        line,
                        field,
                        FindingKind::InconsistentRecordFields,
                        format!("required when {} is present", trigger),
                    ));
                }
            }
            RecordRule::NussChecksum {
                province_field,
                number_field,
            } => {
                let province = fields.value(province_field).and_then(FieldValue::as_text);
                let number = fields.value(number_field).and_then(FieldValue::as_integer);
                let (Some(province), Some(number)) = (province, number) else {
                    return;
                };

                let candidate = format!("{}{:010}", province, number);
                if let DocumentVerdict::Invalid(reason) =
                    self.documents.validate(&candidate, DocumentKind::Nuss)
                {
                    findings.push(Finding::for_field(
                        line,
                        number_field,
                        FindingKind::InvalidDocumentNumber { reason },
                        format!("Social Security number {} fails its control ({})", candidate, reason),
                    ));
                }
            }
        }
    }
}

/// Resolve the document kind a field must be checked as
fn document_kind(source: DocumentSource, fields: &DecodedFields) -> Option<DocumentKind> {
    match source {
        DocumentSource::Fixed(kind) => Some(kind),
        DocumentSource::TypeField(name) => fields
            .value(name)
            .and_then(FieldValue::as_text)
            .and_then(DocumentKind::from_type_code),
    }
}
