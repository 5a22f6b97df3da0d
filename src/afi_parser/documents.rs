//! Official document number checks
//!
//! Format and checksum validation for the identifiers that appear in AFI
//! records (DNI, NIE, CIF, passport and Social Security numbers). The
//! validator consumes these only through the [`DocumentValidator`] trait.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::{
    CIF_CONTROL_LETTERS, CIF_ORGANIZATION_LETTERS, CIF_PERSONAL_LETTERS, DNI_CONTROL_LETTERS,
    NUSS_MODULUS, document_types,
};
use crate::models::DocumentFailure;

static DNI_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,8}[A-Z]$").expect("valid DNI pattern"));
static NIE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[XYZ][0-9]{7}[A-Z]$").expect("valid NIE pattern"));
static CIF_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[{}][0-9]{{7}}[0-9A-Z]$", CIF_ORGANIZATION_LETTERS))
        .expect("valid CIF pattern")
});
static PASSPORT_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6,9}$").expect("valid passport pattern"));

/// Kinds of official document numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    Dni,
    Nie,
    Cif,
    Passport,
    /// Social Security affiliation number
    Nuss,
}

impl DocumentKind {
    /// Map an AFI document type code to a document kind.
    ///
    /// Codes for persons without document (`L`, `M`) and unknown codes have
    /// no checkable kind.
    pub fn from_type_code(code: &str) -> Option<Self> {
        match code {
            document_types::DNI => Some(DocumentKind::Dni),
            document_types::PASSPORT => Some(DocumentKind::Passport),
            document_types::NIE => Some(DocumentKind::Nie),
            document_types::CIF => Some(DocumentKind::Cif),
            _ => None,
        }
    }

    /// The kind whose shape a candidate has, if it looks like a DNI, NIE or CIF
    pub fn infer(candidate: &str) -> Option<Self> {
        if NIE_SHAPE.is_match(candidate) {
            Some(DocumentKind::Nie)
        } else if DNI_SHAPE.is_match(candidate) {
            Some(DocumentKind::Dni)
        } else if CIF_SHAPE.is_match(candidate) {
            Some(DocumentKind::Cif)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Dni => "DNI",
            DocumentKind::Nie => "NIE",
            DocumentKind::Cif => "CIF",
            DocumentKind::Passport => "passport",
            DocumentKind::Nuss => "NUSS",
        };
        f.write_str(name)
    }
}

/// Outcome of checking one document number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentVerdict {
    /// Accepted, with the normalized form of the number
    Valid(String),
    Invalid(DocumentFailure),
}

impl DocumentVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, DocumentVerdict::Valid(_))
    }
}

/// Checks official document numbers.
///
/// Implementations must be pure: the same input always yields the same
/// verdict, so one instance can be shared by concurrent processing passes.
pub trait DocumentValidator: Send + Sync {
    fn validate(&self, candidate: &str, kind: DocumentKind) -> DocumentVerdict;
}

/// Spanish document rules: DNI, NIE and CIF checksums, passport format
/// and the mod-97 Social Security number control
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishDocuments;

impl DocumentValidator for SpanishDocuments {
    fn validate(&self, candidate: &str, kind: DocumentKind) -> DocumentVerdict {
        let candidate = candidate.trim().to_ascii_uppercase();
        match kind {
            DocumentKind::Dni => validate_dni(&candidate),
            DocumentKind::Nie => validate_nie(&candidate),
            DocumentKind::Cif => validate_cif(&candidate),
            DocumentKind::Passport => validate_passport(&candidate),
            DocumentKind::Nuss => validate_nuss(&candidate),
        }
    }
}

fn dni_letter(number: u64) -> char {
    DNI_CONTROL_LETTERS[(number % 23) as usize] as char
}

/// Split a candidate into its leading digits and trailing control character
fn split_control(candidate: &str) -> Option<(&str, char)> {
    let control = candidate.chars().last()?;
    Some((&candidate[..candidate.len() - control.len_utf8()], control))
}

fn validate_dni(candidate: &str) -> DocumentVerdict {
    if !DNI_SHAPE.is_match(candidate) {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    }
    let Some((digits, letter)) = split_control(candidate) else {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    };
    let Ok(number) = digits.parse::<u64>() else {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    };

    if dni_letter(number) == letter {
        DocumentVerdict::Valid(format!("{:08}{}", number, letter))
    } else {
        DocumentVerdict::Invalid(DocumentFailure::Checksum)
    }
}

fn validate_nie(candidate: &str) -> DocumentVerdict {
    if !NIE_SHAPE.is_match(candidate) {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    }
    // X, Y and Z stand for a leading 0, 1 and 2
    let prefix = match candidate.as_bytes()[0] {
        b'X' => 0,
        b'Y' => 1,
        _ => 2,
    };
    let Some((body, letter)) = split_control(&candidate[1..]) else {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    };
    let Ok(digits) = body.parse::<u64>() else {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    };

    if dni_letter(prefix * 10_000_000 + digits) == letter {
        DocumentVerdict::Valid(candidate.to_string())
    } else {
        DocumentVerdict::Invalid(DocumentFailure::Checksum)
    }
}

/// CIF control digit over the seven central digits
fn cif_control_digit(digits: &[u8]) -> u32 {
    let mut sum = 0;
    for (i, d) in digits.iter().map(|b| u32::from(b - b'0')).enumerate() {
        if i % 2 == 0 {
            // odd positions (1st, 3rd, ...) are doubled and their digits added
            let doubled = d * 2;
            sum += doubled / 10 + doubled % 10;
        } else {
            sum += d;
        }
    }
    (10 - sum % 10) % 10
}

fn validate_cif(candidate: &str) -> DocumentVerdict {
    if !CIF_SHAPE.is_match(candidate) {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    }
    let bytes = candidate.as_bytes();
    let organization = bytes[0] as char;
    let control = bytes[8] as char;

    let accepted = if CIF_PERSONAL_LETTERS.contains(organization) {
        // K, L and M identify persons and carry a DNI letter
        let Ok(number) = candidate[1..8].parse::<u64>() else {
            return DocumentVerdict::Invalid(DocumentFailure::Format);
        };
        control == dni_letter(number)
    } else {
        // organization types disagree on digit or letter control; accept either
        let digit = cif_control_digit(&bytes[1..8]);
        control == CIF_CONTROL_LETTERS[digit as usize] as char
            || Some(control) == char::from_digit(digit, 10)
    };

    if accepted {
        DocumentVerdict::Valid(candidate.to_string())
    } else {
        DocumentVerdict::Invalid(DocumentFailure::Checksum)
    }
}

fn validate_passport(candidate: &str) -> DocumentVerdict {
    if PASSPORT_SHAPE.is_match(candidate) {
        DocumentVerdict::Valid(candidate.to_string())
    } else {
        DocumentVerdict::Invalid(DocumentFailure::Format)
    }
}

fn validate_nuss(candidate: &str) -> DocumentVerdict {
    if candidate.is_empty() || candidate.len() > 12 || !candidate.bytes().all(|b| b.is_ascii_digit())
    {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    }
    // zero padding may have been stripped by the decoder
    let padded = format!("{:0>12}", candidate);
    let (Ok(province), Ok(number), Ok(control)) = (
        padded[0..2].parse::<u64>(),
        padded[2..10].parse::<u64>(),
        padded[10..12].parse::<u64>(),
    ) else {
        return DocumentVerdict::Invalid(DocumentFailure::Format);
    };

    let base = if number < 10_000_000 {
        number + province * 10_000_000
    } else {
        province * 100_000_000 + number
    };

    if base % NUSS_MODULUS == control {
        DocumentVerdict::Valid(padded)
    } else {
        DocumentVerdict::Invalid(DocumentFailure::Checksum)
    }
}
