//! Core data structures for AFI processing.
//!
//! Defines raw input lines, decoded field values, validation findings and
//! the logical-record tree produced by a processing pass.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::schema::{FieldSpec, RecordType};

/// A single input line with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

impl RawLine {
    /// Create a new raw line
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Length of the line in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Whether a finding blocks downstream use of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Why a document number was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentFailure {
    /// Wrong length or characters for the document kind
    Format,
    /// Well formed, but the control character does not match
    Checksum,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFailure::Format => write!(f, "format error"),
            DocumentFailure::Checksum => write!(f, "checksum error"),
        }
    }
}

/// Classification of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum FindingKind {
    UnknownRecordType,
    LineLengthMismatch,
    MissingMandatoryField,
    InvalidCharset,
    InvalidNumericFormat,
    NumericOutOfRange,
    InvalidDate,
    TruncatedField,
    UnknownCode,
    InvalidDocumentNumber { reason: DocumentFailure },
    InconsistentRecordFields,
    ReservedFieldNotBlank,
    OrphanSubLine,
    MissingCompanyHeader,
    MisplacedRecord,
}

impl FindingKind {
    /// Stable identifier used in reports and statistics
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::UnknownRecordType => "unknown_record_type",
            FindingKind::LineLengthMismatch => "line_length_mismatch",
            FindingKind::MissingMandatoryField => "missing_mandatory_field",
            FindingKind::InvalidCharset => "invalid_charset",
            FindingKind::InvalidNumericFormat => "invalid_numeric_format",
            FindingKind::NumericOutOfRange => "numeric_out_of_range",
            FindingKind::InvalidDate => "invalid_date",
            FindingKind::TruncatedField => "truncated_field",
            FindingKind::UnknownCode => "unknown_code",
            FindingKind::InvalidDocumentNumber {
                reason: DocumentFailure::Format,
            } => "invalid_document_format",
            FindingKind::InvalidDocumentNumber {
                reason: DocumentFailure::Checksum,
            } => "invalid_document_checksum",
            FindingKind::InconsistentRecordFields => "inconsistent_record_fields",
            FindingKind::ReservedFieldNotBlank => "reserved_field_not_blank",
            FindingKind::OrphanSubLine => "orphan_sub_line",
            FindingKind::MissingCompanyHeader => "missing_company_header",
            FindingKind::MisplacedRecord => "misplaced_record",
        }
    }

    /// Severity a finding of this kind carries
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::ReservedFieldNotBlank => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single reported validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line: usize,
    pub field: Option<&'static str>,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    /// Create a line-level finding with the kind's default severity
    pub fn new(line: usize, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            line,
            field: None,
            severity: kind.severity(),
            kind,
            message: message.into(),
        }
    }

    /// Create a finding attached to a specific field
    pub fn for_field(
        line: usize,
        field: &'static str,
        kind: FindingKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: Some(field),
            ..Self::new(line, kind, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(
                f,
                "line {}: {} [{}] {}: {}",
                self.line, self.severity, self.kind, field, self.message
            ),
            None => write!(
                f,
                "line {}: {} [{}] {}",
                self.line, self.severity, self.kind, self.message
            ),
        }
    }
}

/// Why the decoder could not convert a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecodeFailure {
    /// Field extends past the end of the line
    OutOfRange,
    NotNumeric,
    BadDate,
}

/// Typed value of a decoded field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum FieldValue {
    /// Only padding present
    Empty,
    Text(String),
    Integer(u64),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Normalized document number candidate (not yet validated)
    Document(String),
    Invalid { raw: String, failure: DecodeFailure },
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Text content of text, code, reserved and document values
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) | FieldValue::Document(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => write!(f, "-"),
            FieldValue::Text(text) | FieldValue::Document(text) => write!(f, "{}", text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FieldValue::Time(time) => write!(f, "{}", time.format("%H:%M")),
            FieldValue::Invalid { raw, .. } => write!(f, "{:?} (invalid)", raw),
        }
    }
}

fn serialize_spec_name<S: Serializer>(spec: &&'static FieldSpec, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(spec.name)
}

/// One decoded field: its descriptor, the raw slice and the typed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedField {
    #[serde(rename = "name", serialize_with = "serialize_spec_name")]
    pub spec: &'static FieldSpec,
    pub raw: String,
    pub value: FieldValue,
}

/// Ordered decoded fields of one line, one entry per schema field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecodedFields {
    fields: Vec<DecodedField>,
}

impl DecodedFields {
    pub fn new(fields: Vec<DecodedField>) -> Self {
        Self { fields }
    }

    /// Look up a decoded field by name
    pub fn get(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|field| field.spec.name == name)
    }

    /// Look up the value of a field by name
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).map(|field| &field.value)
    }

    /// Whether a field exists and holds something other than padding
    pub fn is_present(&self, name: &str) -> bool {
        self.value(name).is_some_and(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A classified and decoded line placed in the record tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub line: usize,
    pub record_type: RecordType,
    pub fields: DecodedFields,
}

/// A worker line and the sub-lines attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerBlock {
    pub worker: ParsedLine,
    pub children: Vec<ParsedLine>,
}

impl WorkerBlock {
    pub fn new(worker: ParsedLine) -> Self {
        Self {
            worker,
            children: Vec::new(),
        }
    }
}

/// A company header with its detail lines and worker blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalRecord {
    pub header: ParsedLine,
    pub details: Vec<ParsedLine>,
    pub workers: Vec<WorkerBlock>,
}

impl LogicalRecord {
    pub fn new(header: ParsedLine) -> Self {
        Self {
            header,
            details: Vec::new(),
            workers: Vec::new(),
        }
    }

    /// Number of lines placed in this record, header included
    pub fn line_count(&self) -> usize {
        1 + self.details.len()
            + self
                .workers
                .iter()
                .map(|block| 1 + block.children.len())
                .sum::<usize>()
    }
}

/// Outcome of a full processing pass over one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub label: Option<ParsedLine>,
    pub records: Vec<LogicalRecord>,
    pub findings: Vec<Finding>,
    pub total_lines: usize,
}

impl ParseResult {
    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn worker_count(&self) -> usize {
        self.records.iter().map(|record| record.workers.len()).sum()
    }

    /// Whether the file should be rejected; strict mode also blocks on warnings
    pub fn has_blocking_findings(&self, strict: bool) -> bool {
        if strict {
            !self.findings.is_empty()
        } else {
            self.error_count() > 0
        }
    }

    /// Findings reported against a given line
    pub fn findings_for_line(&self, line: usize) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.line == line)
    }
}
