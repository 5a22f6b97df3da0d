//! Tests for field and record validation

use super::*;
use crate::models::{DocumentFailure, Severity};

fn validate_with(record_type: RecordType, overrides: &[(&str, &str)]) -> Vec<Finding> {
    validate_text(record_type, &fixture_with(record_type, overrides))
}

fn only_finding(findings: &[Finding]) -> &Finding {
    assert_eq!(findings.len(), 1, "expected one finding, got {:?}", findings);
    &findings[0]
}

#[test]
fn test_fixtures_are_clean() {
    for record_type in RecordType::ALL {
        let findings = validate_text(record_type, &fixture_line(record_type));
        assert!(findings.is_empty(), "{}: {:?}", record_type, findings);
    }
}

#[test]
fn test_missing_mandatory_field() {
    let text = encode_line(RecordType::WorkerName, &[("nombre", "ANA")]).unwrap();
    let findings = validate_text(RecordType::WorkerName, &text);

    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::MissingMandatoryField);
    assert_eq!(finding.field, Some("primer_apellido"));
    assert_eq!(finding.severity, Severity::Error);
}

#[test]
fn test_invalid_charset() {
    let findings = validate_with(RecordType::WorkerName, &[("primer_apellido", "GARC1A")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InvalidCharset);
    assert_eq!(finding.field, Some("primer_apellido"));
}

#[test]
fn test_letters_allow_hyphens_apostrophes_and_accents() {
    let findings = validate_with(
        RecordType::WorkerName,
        &[("primer_apellido", "O'NEILL-MUÑOZ")],
    );
    assert!(findings.is_empty(), "{:?}", findings);
}

#[test]
fn test_invalid_numeric_format() {
    let findings = validate_with(RecordType::Address, &[("numero", "12A")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InvalidNumericFormat);
    assert_eq!(finding.field, Some("numero"));
}

#[test]
fn test_numeric_out_of_range() {
    let findings = validate_with(RecordType::Label, &[("id_registro_mes", "13")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::NumericOutOfRange);
    assert_eq!(finding.field, Some("id_registro_mes"));
}

#[test]
fn test_invalid_date() {
    let findings = validate_with(RecordType::Movement, &[("fecha_real", "20241301")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InvalidDate);
    assert_eq!(finding.field, Some("fecha_real"));
}

#[test]
fn test_unknown_code() {
    let findings = validate_with(RecordType::Address, &[]);
    assert!(findings.is_empty());

    let findings = validate_with(RecordType::Movement, &[("sexo", "3")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::UnknownCode);
    assert_eq!(finding.field, Some("sexo"));
}

#[test]
fn test_locality_province_code() {
    let findings = validate_with(RecordType::Locality, &[("provincia", "99")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::UnknownCode);
    assert_eq!(finding.field, Some("provincia"));
}

#[test]
fn test_labour_data_mandatory_fields() {
    let text = encode_line(RecordType::LabourData, &[("ocupacion_cno", "1234")]).unwrap();
    let finding = only_finding(&validate_text(RecordType::LabourData, &text)).clone();
    assert_eq!(finding.kind, FindingKind::MissingMandatoryField);
    assert_eq!(finding.field, Some("convenio_colectivo"));

    let text = encode_line(
        RecordType::LabourData,
        &[("convenio_colectivo", "99000015011981")],
    )
    .unwrap();
    let finding = only_finding(&validate_text(RecordType::LabourData, &text)).clone();
    assert_eq!(finding.kind, FindingKind::MissingMandatoryField);
    assert_eq!(finding.field, Some("ocupacion_cno"));
}

#[test]
fn test_labour_data_contract_end_date() {
    let findings = validate_with(
        RecordType::LabourData,
        &[("fin_previsto_contrato", "20250230")],
    );
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InvalidDate);
    assert_eq!(finding.field, Some("fin_previsto_contrato"));
}

#[test]
fn test_truncated_fields() {
    let findings = validate_text(RecordType::WorkerName, "AYNGARCIA");
    assert!(!findings.is_empty());
    assert!(
        findings
            .iter()
            .all(|f| f.kind == FindingKind::TruncatedField)
    );
    // every field runs past the end of the line
    assert_eq!(findings.len(), RecordType::WorkerName.fields().len());
}

#[test]
fn test_document_checksum_error() {
    let findings = validate_with(RecordType::Worker, &[("ipf_alfaclave", "12345678A")]);
    let finding = only_finding(&findings);
    assert_eq!(
        finding.kind,
        FindingKind::InvalidDocumentNumber {
            reason: DocumentFailure::Checksum
        }
    );
    assert_eq!(finding.field, Some("ipf_alfaclave"));
}

#[test]
fn test_document_format_error() {
    let findings = validate_with(RecordType::Worker, &[("ipf_alfaclave", "ABC")]);
    let finding = only_finding(&findings);
    assert_eq!(
        finding.kind,
        FindingKind::InvalidDocumentNumber {
            reason: DocumentFailure::Format
        }
    );
}

#[test]
fn test_documents_without_type_are_not_checked() {
    let findings = validate_with(
        RecordType::Worker,
        &[("ipf_tipo", "L"), ("ipf_alfaclave", "XYZ"), ("nacionalidad", "724")],
    );
    assert!(findings.is_empty(), "{:?}", findings);
}

#[test]
fn test_nie_worker() {
    let findings = validate_with(
        RecordType::Worker,
        &[("ipf_tipo", "6"), ("ipf_alfaclave", "X1234567L"), ("nacionalidad", "250")],
    );
    assert!(findings.is_empty(), "{:?}", findings);
}

#[test]
fn test_document_shape_must_match_declared_type() {
    let findings = validate_with(RecordType::Worker, &[("ipf_alfaclave", "B12345674")]);

    let inconsistent: Vec<_> = findings
        .iter()
        .filter(|f| f.kind == FindingKind::InconsistentRecordFields)
        .collect();
    assert_eq!(inconsistent.len(), 1);
    assert_eq!(inconsistent[0].field, Some("ipf_alfaclave"));
    // the DNI check rejects the same value on its own
    assert!(findings.iter().any(|f| f.kind
        == FindingKind::InvalidDocumentNumber {
            reason: DocumentFailure::Format
        }));
}

#[test]
fn test_nationality_required_unless_dni() {
    let findings = validate_with(
        RecordType::Worker,
        &[("ipf_tipo", "6"), ("ipf_alfaclave", "X1234567L")],
    );
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InconsistentRecordFields);
    assert_eq!(finding.field, Some("nacionalidad"));
}

#[test]
fn test_required_with_trigger() {
    let text = encode_line(
        RecordType::MovementData,
        &[("fecha_inicio_contrato", "20240201")],
    )
    .unwrap();
    let findings = validate_text(RecordType::MovementData, &text);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::InconsistentRecordFields);
    assert_eq!(finding.field, Some("fic_especifico"));

    let text = encode_line(
        RecordType::MovementData,
        &[("fecha_inicio_contrato", "20240201"), ("fic_especifico", "S")],
    )
    .unwrap();
    assert!(validate_text(RecordType::MovementData, &text).is_empty());
}

#[test]
fn test_substitute_nuss_is_checked() {
    let text = encode_line(
        RecordType::MovementData,
        &[("nuss_trabajador_sustituido", "281234567841"), ("causa_sustitucion", "1")],
    )
    .unwrap();
    let findings = validate_text(RecordType::MovementData, &text);
    let finding = only_finding(&findings);
    assert_eq!(finding.field, Some("nuss_trabajador_sustituido"));
    assert_eq!(
        finding.kind,
        FindingKind::InvalidDocumentNumber {
            reason: DocumentFailure::Checksum
        }
    );
}

#[test]
fn test_worker_nuss_checksum() {
    let findings = validate_with(RecordType::Worker, &[("ss_numero", "1234567841")]);
    let finding = only_finding(&findings);
    assert_eq!(finding.field, Some("ss_numero"));
    assert_eq!(
        finding.kind,
        FindingKind::InvalidDocumentNumber {
            reason: DocumentFailure::Checksum
        }
    );
}

#[test]
fn test_reserved_field_warning() {
    let mut text = fixture_line(RecordType::Worker);
    text.replace_range(65..66, "X");

    let findings = validate_text(RecordType::Worker, &text);
    let finding = only_finding(&findings);
    assert_eq!(finding.kind, FindingKind::ReservedFieldNotBlank);
    assert_eq!(finding.severity, Severity::Warning);

    let quiet = RecordValidator::new(std::sync::Arc::new(SpanishDocuments), false);
    let raw = RawLine::new(1, text);
    let fields = decode(&raw, RecordType::Worker);
    assert!(quiet.validate(&fields, RecordType::Worker, 1).is_empty());
}

#[test]
fn test_all_problems_are_reported() {
    let findings = validate_with(
        RecordType::Worker,
        &[
            ("ss_provincia", "99"),
            ("ipf_pais", "7X4"),
            ("ipf_alfaclave", "12345678A"),
        ],
    );
    let kinds = kinds(&findings);

    assert!(kinds.contains(&FindingKind::UnknownCode));
    assert!(kinds.contains(&FindingKind::InvalidNumericFormat));
    assert!(kinds.contains(&FindingKind::InvalidDocumentNumber {
        reason: DocumentFailure::Checksum
    }));
    assert!(findings.iter().all(|f| f.line == 1));
}
