//! Application constants for the AFI validator
//!
//! Format-level constants of the AFI layout (line geometry, code tables,
//! document checksum alphabets) and defaults used by the CLI.

// =============================================================================
// Line Geometry
// =============================================================================

/// Every AFI record line is exactly this many characters long
pub const AFI_LINE_LENGTH: usize = 70;

/// Width of the record type marker at the start of every line
pub const MARKER_WIDTH: usize = 3;

/// Default extension of AFI files when scanning directories
pub const AFI_EXTENSION: &str = "afi";

/// Date layout used by every AFI date field (AAAAMMDD)
pub const AFI_DATE_FORMAT: &str = "%Y%m%d";

/// Time layout used by the label record (HHMM)
pub const AFI_TIME_FORMAT: &str = "%H%M";

// =============================================================================
// Code Tables
// =============================================================================

/// Document type codes used by the identification fields of EMP and TRA records
pub mod document_types {
    /// DNI - national identity document
    pub const DNI: &str = "1";

    /// Passport
    pub const PASSPORT: &str = "2";

    /// NIE - foreigner identity number
    pub const NIE: &str = "6";

    /// CIF - company tax code
    pub const CIF: &str = "9";

    /// Persons without document (not checked)
    pub const NO_DOCUMENT_L: &str = "L";
    pub const NO_DOCUMENT_M: &str = "M";

    /// All accepted document type codes
    pub const ALL: &[&str] = &[DNI, PASSPORT, NIE, CIF, NO_DOCUMENT_L, NO_DOCUMENT_M];
}

/// Spanish province codes (INE numbering)
pub const PROVINCE_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
    "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45",
    "46", "47", "48", "49", "50", "51", "52",
];

/// Yes/no flags
pub const YES_NO: &[&str] = &["S", "N"];

// =============================================================================
// Document Checksums
// =============================================================================

/// DNI/NIE control letters indexed by `number % 23`
pub const DNI_CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// CIF organization type letters
pub const CIF_ORGANIZATION_LETTERS: &str = "ABCDEFGHJKLMNPQRSUVW";

/// CIF organization types checked with the DNI letter instead of the CIF control
pub const CIF_PERSONAL_LETTERS: &str = "KLM";

/// CIF control letters indexed by control digit
pub const CIF_CONTROL_LETTERS: &[u8; 10] = b"JABCDEFGHI";

/// NUSS control modulus
pub const NUSS_MODULUS: u64 = 97;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Name of the configuration directory under the user config dir
pub const CONFIG_DIR_NAME: &str = "afi-validator";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Findings printed per file in human reports unless overridden
pub const DEFAULT_MAX_FINDINGS_SHOWN: usize = 50;

/// Exit code when at least one file has blocking findings
pub const EXIT_BLOCKING_FINDINGS: i32 = 2;
