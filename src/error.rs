//! Error handling for AFI file processing.
//!
//! The validation core never fails: every problem inside a file becomes a
//! [`Finding`](crate::models::Finding). These error types cover the
//! collaborator boundary instead: reading files, discovering inputs,
//! loading configuration, encoding lines and writing reports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AfiError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input not found at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Directory traversal failed: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode field '{field}' of {record}: {reason}")]
    Encoding {
        record: &'static str,
        field: String,
        reason: String,
    },

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl AfiError {
    /// Create an I/O error tied to the path being accessed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error for a field of a record type
    pub fn encoding(
        record: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Encoding {
            record,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AfiError>;
