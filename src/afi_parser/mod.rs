//! AFI file parser, segmenter and validator
//!
//! Turns the lines of an AFI file into a tree of logical records and a list
//! of findings. Nothing in here fails: every problem in the input becomes a
//! [`Finding`](crate::models::Finding) and processing moves on to the next line.
//!
//! ## Architecture
//!
//! - [`classifier`] - record type detection from the line marker and length
//! - [`decoder`] - fixed-width slicing and typed conversion
//! - [`documents`] - DNI, NIE, CIF, passport and NUSS checks
//! - [`validator`] - field constraints and cross-field record rules
//! - [`segmenter`] - state machine grouping lines into logical records
//! - [`processor`] - the pipeline façade
//! - [`encoder`] - the inverse of decoding, for fixtures and tooling
//! - [`stats`] - summary counts over a result
//!
//! ## Usage
//!
//! ```rust
//! use afi_validator::afi_parser::FileProcessor;
//!
//! let processor = FileProcessor::default();
//! let result = processor.process_str("EMP...\n");
//!
//! println!("{} records, {} findings", result.records.len(), result.findings.len());
//! ```

pub mod classifier;
pub mod decoder;
pub mod documents;
pub mod encoder;
pub mod processor;
pub mod segmenter;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::classify;
pub use decoder::decode;
pub use documents::{DocumentKind, DocumentValidator, DocumentVerdict, SpanishDocuments};
pub use encoder::encode_line;
pub use processor::{FilePass, FileProcessor};
pub use segmenter::{Segmenter, SegmenterState, Transition};
pub use stats::ParseStats;
pub use validator::RecordValidator;
