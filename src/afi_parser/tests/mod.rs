//! Test fixtures for the AFI parser
//!
//! Builds well-formed record lines through the encoder so tests only spell
//! out the fields they care about.

use std::sync::Arc;

use super::decoder::decode;
use super::documents::SpanishDocuments;
use super::encoder::encode_line;
use super::validator::RecordValidator;
use crate::models::{Finding, FindingKind, ParsedLine, RawLine};
use crate::schema::RecordType;

// Test modules
mod classifier_tests;
mod segmenter_tests;
mod validator_tests;

pub const LABEL_FIELDS: &[(&str, &str)] = &[
    ("sintaxis", "AFI9"),
    ("version_mensaje", "1"),
    ("id_programa", "PRG1"),
    ("version_proceso", "A"),
    ("clave_autorizacion", "12345678"),
    ("fecha", "20240115"),
    ("hora", "0930"),
    ("nombre_archivo", "EMPRESA1"),
    ("extension_archivo", "AFI"),
    ("prioridad", "N"),
    ("indicador_prueba", "N"),
    ("id_registro_ano", "24"),
    ("id_registro_mes", "01"),
    ("id_registro_serie", "1"),
    ("id_registro_envio", "1"),
    ("id_registro_ordinal", "1"),
];

pub const COMPANY_FIELDS: &[(&str, &str)] = &[
    ("seguridad_social_regimen", "0111"),
    ("seguridad_social_provincia", "28"),
    ("seguridad_social_numero", "123456789"),
    ("empresario_tipo_identificacion", "9"),
    ("empresario_codigo_pais", "724"),
    ("empresario_numero_identificacion", "B12345674"),
    ("ccc_regimen", "0111"),
    ("ccc_provincia", "28"),
    ("ccc_numero", "123456789"),
];

pub const COMPANY_NAME_FIELDS: &[(&str, &str)] = &[
    ("indicador_rzs", "0"),
    ("tipo_alfabetico", "J"),
    ("razon_social", "EMPRESA EJEMPLO SL"),
];

pub const WORKER_FIELDS: &[(&str, &str)] = &[
    ("ss_provincia", "28"),
    ("ss_numero", "1234567840"),
    ("ipf_tipo", "1"),
    ("ipf_pais", "724"),
    ("ipf_alfaclave", "12345678Z"),
];

pub const WORKER_NAME_FIELDS: &[(&str, &str)] = &[
    ("primer_apellido", "GARCIA"),
    ("segundo_apellido", "LOPEZ"),
    ("nombre", "ANA"),
];

pub const ADDRESS_FIELDS: &[(&str, &str)] = &[
    ("tipo_via", "CL"),
    ("nombre_via", "MAYOR"),
    ("numero", "12"),
];

pub const LOCALITY_FIELDS: &[(&str, &str)] = &[
    ("codigo_postal", "28001"),
    ("localidad", "MADRID"),
    ("provincia", "28"),
];

pub const MOVEMENT_FIELDS: &[(&str, &str)] = &[
    ("accion", "MA1"),
    ("fecha_real", "20240201"),
    ("grupo_cotizacion", "5"),
    ("sexo", "2"),
];

pub const MOVEMENT_DATA_FIELDS: &[(&str, &str)] = &[
    ("fecha_inicio_contrato", "20240201"),
    ("fic_especifico", "S"),
    ("dias_trabajados", "20"),
];

pub const LABOUR_DATA_FIELDS: &[(&str, &str)] = &[
    ("convenio_colectivo", "99000015011981"),
    ("ocupacion_cno", "1234"),
    ("fin_previsto_contrato", "20251231"),
];

pub const PECULIARITY_FIELDS: &[(&str, &str)] = &[("peculiaridad_01", "01")];

/// Fields of a clean line of the given type
pub fn fixture_fields(record_type: RecordType) -> &'static [(&'static str, &'static str)] {
    match record_type {
        RecordType::Label => LABEL_FIELDS,
        RecordType::CompanyHeader => COMPANY_FIELDS,
        RecordType::CompanyName => COMPANY_NAME_FIELDS,
        RecordType::Worker => WORKER_FIELDS,
        RecordType::WorkerName => WORKER_NAME_FIELDS,
        RecordType::Address => ADDRESS_FIELDS,
        RecordType::Locality => LOCALITY_FIELDS,
        RecordType::Movement => MOVEMENT_FIELDS,
        RecordType::MovementData => MOVEMENT_DATA_FIELDS,
        RecordType::LabourData => LABOUR_DATA_FIELDS,
        RecordType::Peculiarity => PECULIARITY_FIELDS,
    }
}

/// A clean line of the given type
pub fn fixture_line(record_type: RecordType) -> String {
    encode_line(record_type, fixture_fields(record_type)).unwrap()
}

/// A line of the given type with some fixture fields replaced
pub fn fixture_with(record_type: RecordType, overrides: &[(&str, &str)]) -> String {
    let mut values: Vec<(&str, &str)> = fixture_fields(record_type).to_vec();
    values.extend_from_slice(overrides);
    encode_line(record_type, &values).unwrap()
}

/// Number lines from 1
pub fn numbered(lines: &[String]) -> Vec<RawLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| RawLine::new(i + 1, text.clone()))
        .collect()
}

/// Decode a clean fixture line for the segmenter
pub fn parsed(line: usize, record_type: RecordType) -> ParsedLine {
    let raw = RawLine::new(line, fixture_line(record_type));
    ParsedLine {
        line,
        record_type,
        fields: decode(&raw, record_type),
    }
}

/// A small, fully valid file: label, one company with a name and two workers
pub fn sample_file() -> String {
    [
        fixture_line(RecordType::Label),
        fixture_line(RecordType::CompanyHeader),
        fixture_line(RecordType::CompanyName),
        fixture_line(RecordType::Worker),
        fixture_line(RecordType::WorkerName),
        fixture_line(RecordType::Address),
        fixture_line(RecordType::Movement),
        fixture_line(RecordType::Worker),
        fixture_line(RecordType::Peculiarity),
    ]
    .join("\n")
}

pub fn test_validator() -> RecordValidator {
    RecordValidator::new(Arc::new(SpanishDocuments), true)
}

/// Encode, decode and validate a line in one go
pub fn validate_text(record_type: RecordType, text: &str) -> Vec<Finding> {
    let raw = RawLine::new(1, text);
    let fields = decode(&raw, record_type);
    test_validator().validate(&fields, record_type, 1)
}

pub fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
    findings.iter().map(|f| f.kind).collect()
}
