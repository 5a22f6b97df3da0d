//! Command-line argument definitions for the AFI validator
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_MAX_FINDINGS_SHOWN;
use crate::{AfiError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the AFI validator
///
/// Parses AFI affiliation files, groups their lines into company and
/// worker blocks and reports every validation finding.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "afi-validator",
    version,
    about = "Validate Spanish Social Security AFI affiliation files",
    long_about = "Parses fixed-width AFI files, checks every field against the record layout \
                  (code tables, dates, numeric ranges, DNI/NIE/CIF/NUSS control characters) \
                  and verifies that lines follow the company -> worker -> detail grouping. \
                  All problems are reported; processing never stops at the first one."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate one or more AFI files and report findings
    Validate(ValidateArgs),
    /// Show the logical-record tree of a single AFI file
    Inspect(InspectArgs),
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Files, directories or glob patterns to validate
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Descend into subdirectories when a directory is given
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Output format for the report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Treat warnings as blocking
    #[arg(long = "strict")]
    pub strict: bool,

    /// Do not report non-blank reserved fields
    #[arg(long = "no-reserved-warnings")]
    pub no_reserved_warnings: bool,

    /// Number of files validated concurrently (defaults to the CPU count)
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Path to configuration file (JSON)
    ///
    /// If not specified, looks for afi-validator/config.json in the user's
    /// configuration directory.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Findings shown per file in human output (0 shows all)
    #[arg(
        long = "max-findings",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_FINDINGS_SHOWN
    )]
    pub max_findings: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress and logging except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// AFI file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the tree
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Path to configuration file (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output formats for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl ValidateArgs {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(AfiError::configuration(
                    "Number of workers must be greater than 0",
                ));
            }
            if workers > 256 {
                return Err(AfiError::configuration(
                    "Number of workers cannot exceed 256",
                ));
            }
        }
        Ok(())
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether to draw a progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl InspectArgs {
    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
