//! AFI Validator Library
//!
//! A Rust library for parsing, segmenting and validating AFI files, the
//! fixed-width affiliation files exchanged with the Spanish Social Security.
//!
//! This library provides tools for:
//! - Classifying and decoding 70-character AFI record lines
//! - Validating fields against code tables, ranges, dates and charsets
//! - Checking DNI, NIE, CIF, passport and Social Security numbers
//! - Grouping lines into company and worker blocks
//! - Collecting every problem as a finding instead of aborting

pub mod afi_parser;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reader;
pub mod schema;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use afi_parser::{FileProcessor, ParseStats};
pub use config::ValidatorConfig;
pub use error::{AfiError, Result};
pub use models::{Finding, FindingKind, LogicalRecord, ParseResult, RawLine, Severity};
pub use schema::RecordType;
