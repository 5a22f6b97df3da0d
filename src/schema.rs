//! AFI record layouts.
//!
//! Every record type is described by a static, immutable table of
//! [`FieldSpec`]s plus a table of cross-field [`RecordRule`]s. The decoder,
//! validator and encoder are driven entirely by these tables, so a layout
//! change only touches this file.

use serde::Serialize;
use std::fmt;

use crate::afi_parser::documents::DocumentKind;
use crate::constants::{
    AFI_DATE_FORMAT, AFI_LINE_LENGTH, AFI_TIME_FORMAT, MARKER_WIDTH, PROVINCE_CODES, YES_NO,
    document_types,
};

/// AFI record types, identified by the 3-character marker at column 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RecordType {
    /// `ETI` - file start label
    Label,
    /// `EMP` - company
    CompanyHeader,
    /// `RZS` - company legal name
    CompanyName,
    /// `TRA` - worker
    Worker,
    /// `AYN` - worker surnames and name
    WorkerName,
    /// `DOM` - address
    Address,
    /// `LDD` - decoded locality of the address
    Locality,
    /// `FAB` - registration / removal movement
    Movement,
    /// `DAM` - data associated with the movement
    MovementData,
    /// `ODL` - other labour data
    LabourData,
    /// `PES` - requested peculiarities
    Peculiarity,
}

/// Position a record type takes in the logical-record grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecordRole {
    Label,
    CompanyHeader,
    CompanyDetail,
    Worker,
    SubLine,
}

impl RecordType {
    /// Every known record type, in marker-table order
    pub const ALL: [RecordType; 11] = [
        RecordType::Label,
        RecordType::CompanyHeader,
        RecordType::CompanyName,
        RecordType::Worker,
        RecordType::WorkerName,
        RecordType::Address,
        RecordType::Locality,
        RecordType::Movement,
        RecordType::MovementData,
        RecordType::LabourData,
        RecordType::Peculiarity,
    ];

    /// The 3-character marker identifying this record type
    pub fn code(&self) -> &'static str {
        match self {
            RecordType::Label => "ETI",
            RecordType::CompanyHeader => "EMP",
            RecordType::CompanyName => "RZS",
            RecordType::Worker => "TRA",
            RecordType::WorkerName => "AYN",
            RecordType::Address => "DOM",
            RecordType::Locality => "LDD",
            RecordType::Movement => "FAB",
            RecordType::MovementData => "DAM",
            RecordType::LabourData => "ODL",
            RecordType::Peculiarity => "PES",
        }
    }

    /// Look up a record type by its marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|record_type| record_type.code() == marker)
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            RecordType::Label => "File label",
            RecordType::CompanyHeader => "Company",
            RecordType::CompanyName => "Company legal name",
            RecordType::Worker => "Worker",
            RecordType::WorkerName => "Worker name",
            RecordType::Address => "Address",
            RecordType::Locality => "Address locality",
            RecordType::Movement => "Registration/removal movement",
            RecordType::MovementData => "Movement data",
            RecordType::LabourData => "Other labour data",
            RecordType::Peculiarity => "Requested peculiarities",
        }
    }

    pub fn role(&self) -> RecordRole {
        match self {
            RecordType::Label => RecordRole::Label,
            RecordType::CompanyHeader => RecordRole::CompanyHeader,
            RecordType::CompanyName => RecordRole::CompanyDetail,
            RecordType::Worker => RecordRole::Worker,
            RecordType::WorkerName
            | RecordType::Address
            | RecordType::Locality
            | RecordType::Movement
            | RecordType::MovementData
            | RecordType::LabourData
            | RecordType::Peculiarity => RecordRole::SubLine,
        }
    }

    /// Total character length of a line of this type
    pub fn line_length(&self) -> usize {
        AFI_LINE_LENGTH
    }

    /// Ordered field table, starting right after the marker
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordType::Label => ETI_FIELDS,
            RecordType::CompanyHeader => EMP_FIELDS,
            RecordType::CompanyName => RZS_FIELDS,
            RecordType::Worker => TRA_FIELDS,
            RecordType::WorkerName => AYN_FIELDS,
            RecordType::Address => DOM_FIELDS,
            RecordType::Locality => LDD_FIELDS,
            RecordType::Movement => FAB_FIELDS,
            RecordType::MovementData => DAM_FIELDS,
            RecordType::LabourData => ODL_FIELDS,
            RecordType::Peculiarity => &PES_FIELDS,
        }
    }

    /// Cross-field rules checked once all fields of a line are decoded
    pub fn rules(&self) -> &'static [RecordRule] {
        match self {
            RecordType::CompanyHeader => EMP_RULES,
            RecordType::Worker => TRA_RULES,
            RecordType::MovementData => DAM_RULES,
            _ => &[],
        }
    }

    /// Find a field descriptor by name
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a field's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    AlphaNumeric,
    Numeric,
    /// Calendar date in the given chrono format
    Date(&'static str),
    /// Time of day in the given chrono format
    Time(&'static str),
    /// Value must be one of the listed codes
    Code(&'static [&'static str]),
    DocumentNumber(DocumentSource),
    /// Reserved by the format; expected blank
    Reserved,
}

/// Where a document-number field takes its document kind from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentSource {
    Fixed(DocumentKind),
    /// Name of the sibling field holding the document type code
    TypeField(&'static str),
}

/// Fixed-width padding convention of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Padding {
    /// Left aligned, padded with trailing spaces
    Spaces,
    /// Right aligned, padded with leading zeros
    Zeros,
}

/// Characters allowed in a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Charset {
    Any,
    Digits,
    /// Alphabetic plus space, hyphen and apostrophe
    Letters,
    /// Alphanumeric plus space
    Alphanumeric,
}

impl Charset {
    pub fn allows(&self, c: char) -> bool {
        match self {
            Charset::Any => true,
            Charset::Digits => c.is_ascii_digit(),
            Charset::Letters => c.is_alphabetic() || matches!(c, ' ' | '-' | '\''),
            Charset::Alphanumeric => c.is_alphanumeric() || c == ' ',
        }
    }
}

/// Static descriptor of one fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Zero-based character offset in the line
    pub start: usize,
    pub length: usize,
    pub kind: FieldKind,
    pub padding: Padding,
    pub mandatory: bool,
    pub charset: Charset,
    /// Inclusive bounds for numeric fields
    pub range: Option<(u64, u64)>,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        start: usize,
        length: usize,
        kind: FieldKind,
        padding: Padding,
        charset: Charset,
    ) -> Self {
        Self {
            name,
            start,
            length,
            kind,
            padding,
            mandatory: false,
            charset,
            range: None,
        }
    }

    pub const fn text(name: &'static str, start: usize, length: usize) -> Self {
        Self::new(name, start, length, FieldKind::AlphaNumeric, Padding::Spaces, Charset::Any)
    }

    pub const fn numeric(name: &'static str, start: usize, length: usize) -> Self {
        Self::new(name, start, length, FieldKind::Numeric, Padding::Zeros, Charset::Digits)
    }

    pub const fn date(name: &'static str, start: usize) -> Self {
        Self::new(
            name,
            start,
            8,
            FieldKind::Date(AFI_DATE_FORMAT),
            Padding::Spaces,
            Charset::Digits,
        )
    }

    pub const fn time(name: &'static str, start: usize) -> Self {
        Self::new(
            name,
            start,
            4,
            FieldKind::Time(AFI_TIME_FORMAT),
            Padding::Spaces,
            Charset::Digits,
        )
    }

    pub const fn code(
        name: &'static str,
        start: usize,
        length: usize,
        table: &'static [&'static str],
    ) -> Self {
        Self::new(name, start, length, FieldKind::Code(table), Padding::Spaces, Charset::Any)
    }

    pub const fn document(
        name: &'static str,
        start: usize,
        length: usize,
        source: DocumentSource,
    ) -> Self {
        Self::new(
            name,
            start,
            length,
            FieldKind::DocumentNumber(source),
            Padding::Zeros,
            Charset::Alphanumeric,
        )
    }

    pub const fn reserved(name: &'static str, start: usize, length: usize) -> Self {
        Self::new(name, start, length, FieldKind::Reserved, Padding::Spaces, Charset::Any)
    }

    pub const fn mandatory(self) -> Self {
        Self {
            mandatory: true,
            ..self
        }
    }

    pub const fn charset(self, charset: Charset) -> Self {
        Self { charset, ..self }
    }

    pub const fn range(self, min: u64, max: u64) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }

    /// Offset one past the last character of the field
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Cross-field constraint evaluated over a fully decoded line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordRule {
    /// The shape of the document number must agree with the declared type code
    DocumentMatchesType {
        type_field: &'static str,
        number_field: &'static str,
    },
    /// `field` is mandatory unless `other` holds `value`
    RequiredUnless {
        field: &'static str,
        other: &'static str,
        value: &'static str,
    },
    /// `field` is mandatory whenever `trigger` is present
    RequiredWith {
        field: &'static str,
        trigger: &'static str,
    },
    /// Province and number together form a NUSS with a mod-97 control
    NussChecksum {
        province_field: &'static str,
        number_field: &'static str,
    },
}

const DOCUMENT_TYPE_CODES: &[&str] = document_types::ALL;

// =============================================================================
// ETI - file label
// =============================================================================

static ETI_FIELDS: &[FieldSpec] = &[
    FieldSpec::code("sintaxis", 3, 4, &["AFI9"]).mandatory(),
    FieldSpec::numeric("version_mensaje", 7, 1).mandatory(),
    FieldSpec::text("id_programa", 8, 4).mandatory(),
    FieldSpec::text("version_proceso", 12, 1).mandatory(),
    FieldSpec::numeric("clave_autorizacion", 13, 8).mandatory(),
    FieldSpec::reserved("reservado_1", 21, 8),
    FieldSpec::date("fecha", 29).mandatory(),
    FieldSpec::time("hora", 37).mandatory(),
    FieldSpec::text("nombre_archivo", 41, 8).mandatory(),
    FieldSpec::code("extension_archivo", 49, 3, &["AFI"]).mandatory(),
    FieldSpec::code("prioridad", 52, 1, &["N"]).mandatory(),
    FieldSpec::code("indicador_prueba", 53, 1, &["P", "N"]),
    FieldSpec::numeric("id_registro_ano", 54, 2).mandatory(),
    FieldSpec::numeric("id_registro_mes", 56, 2).mandatory().range(1, 12),
    FieldSpec::numeric("id_registro_serie", 58, 1).mandatory(),
    FieldSpec::numeric("id_registro_envio", 59, 5).mandatory(),
    FieldSpec::numeric("id_registro_ordinal", 64, 4).mandatory(),
    FieldSpec::reserved("reservado_2", 68, 1),
    FieldSpec::reserved("reservado_3", 69, 1),
];

// =============================================================================
// EMP - company
// =============================================================================

static EMP_FIELDS: &[FieldSpec] = &[
    FieldSpec::numeric("seguridad_social_regimen", 3, 4).mandatory(),
    FieldSpec::code("seguridad_social_provincia", 7, 2, PROVINCE_CODES).mandatory(),
    FieldSpec::numeric("seguridad_social_numero", 9, 9).mandatory(),
    FieldSpec::code("empresario_tipo_identificacion", 18, 1, DOCUMENT_TYPE_CODES).mandatory(),
    FieldSpec::numeric("empresario_codigo_pais", 19, 3).mandatory(),
    FieldSpec::document(
        "empresario_numero_identificacion",
        22,
        14,
        DocumentSource::TypeField("empresario_tipo_identificacion"),
    )
    .mandatory(),
    FieldSpec::text("empresario_calificador", 36, 2).charset(Charset::Alphanumeric),
    FieldSpec::numeric("ccc_regimen", 38, 4).mandatory(),
    FieldSpec::code("ccc_provincia", 42, 2, PROVINCE_CODES).mandatory(),
    FieldSpec::numeric("ccc_numero", 44, 9),
    FieldSpec::reserved("reservado_recaudacion", 53, 13),
    FieldSpec::text("accion", 66, 3).charset(Charset::Alphanumeric),
    FieldSpec::reserved("reservado", 69, 1),
];

static EMP_RULES: &[RecordRule] = &[RecordRule::DocumentMatchesType {
    type_field: "empresario_tipo_identificacion",
    number_field: "empresario_numero_identificacion",
}];

// =============================================================================
// RZS - company legal name
// =============================================================================

static RZS_FIELDS: &[FieldSpec] = &[
    FieldSpec::code("indicador_rzs", 3, 1, &["0", "1", "2", "3", "4"]).mandatory(),
    FieldSpec::text("tipo_alfabetico", 4, 1)
        .mandatory()
        .charset(Charset::Letters),
    FieldSpec::text("razon_social", 5, 55).mandatory(),
    FieldSpec::numeric("clave_autorizacion", 60, 8),
    FieldSpec::reserved("reservado", 68, 2),
];

// =============================================================================
// TRA - worker
// =============================================================================

static TRA_FIELDS: &[FieldSpec] = &[
    FieldSpec::code("ss_provincia", 3, 2, PROVINCE_CODES).mandatory(),
    FieldSpec::numeric("ss_numero", 5, 10).mandatory(),
    FieldSpec::code("ipf_tipo", 15, 1, DOCUMENT_TYPE_CODES).mandatory(),
    FieldSpec::numeric("ipf_pais", 16, 3).mandatory(),
    FieldSpec::document("ipf_alfaclave", 19, 14, DocumentSource::TypeField("ipf_tipo"))
        .mandatory(),
    FieldSpec::reserved("reservado_respuesta_afi", 33, 3),
    FieldSpec::reserved("reservado_recaudacion", 36, 25),
    FieldSpec::numeric("nacionalidad", 61, 3),
    FieldSpec::text("indicador_trabajador", 64, 1),
    FieldSpec::reserved("reservado", 65, 5),
];

static TRA_RULES: &[RecordRule] = &[
    RecordRule::DocumentMatchesType {
        type_field: "ipf_tipo",
        number_field: "ipf_alfaclave",
    },
    RecordRule::RequiredUnless {
        field: "nacionalidad",
        other: "ipf_tipo",
        value: document_types::DNI,
    },
    RecordRule::NussChecksum {
        province_field: "ss_provincia",
        number_field: "ss_numero",
    },
];

// =============================================================================
// AYN - surnames and name
// =============================================================================

static AYN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("primer_apellido", 3, 20)
        .mandatory()
        .charset(Charset::Letters),
    FieldSpec::text("segundo_apellido", 23, 20).charset(Charset::Letters),
    FieldSpec::text("nombre", 43, 15).charset(Charset::Letters),
    FieldSpec::reserved("reservado", 58, 12),
];

// =============================================================================
// DOM - address
// =============================================================================

static DOM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("indicador_domicilio", 3, 1),
    FieldSpec::text("tipo_via", 4, 2).charset(Charset::Letters),
    FieldSpec::text("nombre_via", 6, 36),
    FieldSpec::numeric("numero", 42, 5),
    FieldSpec::text("bis", 47, 2).charset(Charset::Alphanumeric),
    FieldSpec::text("bloque", 49, 2).charset(Charset::Alphanumeric),
    FieldSpec::text("escalera", 51, 2).charset(Charset::Alphanumeric),
    FieldSpec::text("piso", 53, 2).charset(Charset::Alphanumeric),
    FieldSpec::text("puerta", 55, 3).charset(Charset::Alphanumeric),
    FieldSpec::numeric("telefono", 58, 10),
    FieldSpec::reserved("reservado", 68, 2),
];

// =============================================================================
// LDD - decoded locality
// =============================================================================

static LDD_FIELDS: &[FieldSpec] = &[
    FieldSpec::numeric("codigo_postal", 3, 5),
    FieldSpec::text("localidad", 8, 40),
    FieldSpec::code("provincia", 48, 2, PROVINCE_CODES),
    FieldSpec::numeric("telefono_sms", 50, 12),
    FieldSpec::numeric("prefijo_pais", 62, 3),
    FieldSpec::reserved("reservado", 65, 5),
];

// =============================================================================
// FAB - registration / removal movement
// =============================================================================

static FAB_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("accion", 3, 3)
        .mandatory()
        .charset(Charset::Alphanumeric),
    FieldSpec::numeric("situacion", 6, 2),
    FieldSpec::date("fecha_real", 8).mandatory(),
    FieldSpec::numeric("grupo_cotizacion", 16, 2).range(1, 11),
    FieldSpec::code("grupo_cotizacion_diario", 18, 1, YES_NO),
    FieldSpec::numeric("grado_discapacidad", 19, 2),
    FieldSpec::numeric("tipo_contrato", 21, 3),
    FieldSpec::text("condicion_desempleado", 24, 1).charset(Charset::Alphanumeric),
    FieldSpec::code("mujer_subrepresentada", 25, 1, YES_NO),
    FieldSpec::numeric("coeficiente_tiempo_parcial", 26, 3),
    FieldSpec::numeric("colectivo_trabajador", 29, 3),
    FieldSpec::code("indicador_impresion", 32, 1, &["S", "C", "I"]),
    FieldSpec::text("categoria_profesional", 33, 7),
    FieldSpec::date("fecha_nacimiento", 40),
    FieldSpec::code("sexo", 48, 1, &["1", "2"]),
    FieldSpec::reserved("reservado", 49, 1),
    FieldSpec::code("cese_actividad", 50, 1, &["5", "6"]),
    FieldSpec::numeric("coeficiente_huelga_ere", 51, 3),
    FieldSpec::code("mujer_reincorporada", 54, 1, &["S", "2", "3", "4"]),
    FieldSpec::text("incapacitado_readmitido", 55, 1).charset(Charset::Alphanumeric),
    FieldSpec::code("trabajador_autonomo", 56, 1, &["S", "1"]),
    FieldSpec::code("jornadas_reales_semana", 57, 1, YES_NO),
    FieldSpec::code("trabajadores_empresa", 58, 1, &["1", "3"]),
    FieldSpec::numeric("relacion_laboral_especial", 59, 4),
    FieldSpec::numeric("tipo_inactividad", 63, 2),
    FieldSpec::code("responsable_formacion", 65, 1, YES_NO),
    FieldSpec::code("exenciones_trabajador", 66, 1, YES_NO),
    FieldSpec::text("exclusion_social_victimas", 67, 1).charset(Charset::Alphanumeric),
    FieldSpec::code("renta_activa_insercion", 68, 1, YES_NO),
    FieldSpec::code("trabajadora_24m_alumbramiento", 69, 1, YES_NO),
];

// =============================================================================
// DAM - data associated with the movement
// =============================================================================

static DAM_FIELDS: &[FieldSpec] = &[
    FieldSpec::date("fecha_inicio_contrato", 3),
    FieldSpec::code("fic_especifico", 11, 1, YES_NO),
    FieldSpec::document(
        "nuss_trabajador_sustituido",
        12,
        12,
        DocumentSource::Fixed(DocumentKind::Nuss),
    ),
    FieldSpec::numeric("causa_sustitucion", 24, 2),
    FieldSpec::code("permanencia_parte_entera", 26, 1, &["1"]),
    FieldSpec::code("permanencia_parte_decimal", 27, 2, &["33", "61"]),
    FieldSpec::numeric("coeficiente_reductor_jubilacion", 29, 2),
    FieldSpec::text("relevo", 31, 1).charset(Charset::Alphanumeric),
    FieldSpec::numeric("dias_trabajados", 32, 2).range(1, 31),
    FieldSpec::text("sistema_especial", 34, 2),
    FieldSpec::numeric("exclusion_cotizacion", 36, 3),
    FieldSpec::numeric("cambio_puesto_trabajo", 39, 2),
    FieldSpec::numeric("indicativo_perdida_beneficios", 41, 2),
    FieldSpec::text("vinculo_familiar", 43, 1).charset(Charset::Alphanumeric),
    FieldSpec::document(
        "nss_persona_fisica_vinculada",
        44,
        12,
        DocumentSource::Fixed(DocumentKind::Nuss),
    ),
    FieldSpec::code("programa_fomento_empleo_agrario", 56, 1, &["0", "1", "2"]),
    FieldSpec::code("modalidad_cotizacion", 57, 1, &["0", "1", "2"]),
    FieldSpec::numeric("beneficios", 58, 2),
    FieldSpec::text("ocupacion", 60, 2).charset(Charset::Alphanumeric),
    FieldSpec::numeric("excedente_sector_industrial", 62, 2).range(1, 2),
    FieldSpec::numeric("reduccion_jornada", 64, 3),
    FieldSpec::numeric("coeficiente_tiempo_parcial_inicial", 67, 3),
];

static DAM_RULES: &[RecordRule] = &[
    RecordRule::RequiredWith {
        field: "fic_especifico",
        trigger: "fecha_inicio_contrato",
    },
    RecordRule::RequiredWith {
        field: "causa_sustitucion",
        trigger: "nuss_trabajador_sustituido",
    },
];

// =============================================================================
// ODL - other labour data
// =============================================================================

static ODL_FIELDS: &[FieldSpec] = &[
    FieldSpec::numeric("convenio_colectivo", 3, 14).mandatory(),
    FieldSpec::reserved("reservado_1", 17, 6),
    FieldSpec::numeric("ocupacion_cno", 23, 4).mandatory(),
    FieldSpec::numeric("reservado_2", 27, 6),
    FieldSpec::numeric("importe_contribucion_entero", 33, 4),
    FieldSpec::numeric("importe_contribucion_decimal", 37, 2),
    FieldSpec::text("entidad_plan_pensiones", 39, 5).charset(Charset::Alphanumeric),
    FieldSpec::numeric("pais", 44, 3),
    FieldSpec::text("region_especial_pais", 47, 3),
    FieldSpec::date("fin_previsto_contrato", 50),
    FieldSpec::reserved("reservado_3", 58, 12),
];

// =============================================================================
// PES - requested peculiarities (33 two-character slots)
// =============================================================================

const PECULIARITY_SLOTS: usize = 33;

const PECULIARITY_NAMES: [&str; PECULIARITY_SLOTS] = [
    "peculiaridad_01", "peculiaridad_02", "peculiaridad_03", "peculiaridad_04",
    "peculiaridad_05", "peculiaridad_06", "peculiaridad_07", "peculiaridad_08",
    "peculiaridad_09", "peculiaridad_10", "peculiaridad_11", "peculiaridad_12",
    "peculiaridad_13", "peculiaridad_14", "peculiaridad_15", "peculiaridad_16",
    "peculiaridad_17", "peculiaridad_18", "peculiaridad_19", "peculiaridad_20",
    "peculiaridad_21", "peculiaridad_22", "peculiaridad_23", "peculiaridad_24",
    "peculiaridad_25", "peculiaridad_26", "peculiaridad_27", "peculiaridad_28",
    "peculiaridad_29", "peculiaridad_30", "peculiaridad_31", "peculiaridad_32",
    "peculiaridad_33",
];

static PES_FIELDS: [FieldSpec; PECULIARITY_SLOTS + 1] = peculiarity_fields();

const fn peculiarity_fields() -> [FieldSpec; PECULIARITY_SLOTS + 1] {
    let mut fields = [FieldSpec::reserved("reservado", MARKER_WIDTH + PECULIARITY_SLOTS * 2, 1);
        PECULIARITY_SLOTS + 1];
    let mut i = 0;
    while i < PECULIARITY_SLOTS {
        let slot = FieldSpec::text(PECULIARITY_NAMES[i], MARKER_WIDTH + i * 2, 2)
            .charset(Charset::Alphanumeric);
        // at least one peculiarity must be requested
        fields[i] = if i == 0 { slot.mandatory() } else { slot };
        i += 1;
    }
    fields
}
