//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, input discovery and progress bars
//! used by more than one command.

use crate::config::ValidatorConfig;
use crate::constants::EXIT_BLOCKING_FINDINGS;
use crate::{AfiError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of a CLI run, used to pick the process exit code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of files processed
    pub files_processed: usize,
    /// Files with blocking findings
    pub files_blocked: usize,
    /// Files that could not be read
    pub files_failed: usize,
}

impl RunOutcome {
    /// 0 when clean, 2 when some file has blocking findings, 1 when a file failed
    pub fn exit_code(&self) -> i32 {
        if self.files_failed > 0 {
            1
        } else if self.files_blocked > 0 {
            EXIT_BLOCKING_FINDINGS
        } else {
            0
        }
    }
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("afi_validator={}", log_level)));

    // try_init: a second initialisation (e.g. in tests) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration from an explicit file or the default location
pub fn load_configuration(config_file: Option<&Path>) -> Result<ValidatorConfig> {
    match config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ValidatorConfig::load(path)
        }
        None => {
            let config = ValidatorConfig::load_or_default()?;
            debug!("Configuration: {:?}", config);
            Ok(config)
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Expand files, directories and glob patterns into a sorted, deduplicated file list.
///
/// Files given explicitly are always taken; directories contribute files
/// with the configured extension.
pub fn discover_inputs(inputs: &[String], recursive: bool, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if is_glob_pattern(input) {
            let matches = glob::glob(input).map_err(|source| AfiError::InvalidPattern {
                pattern: input.clone(),
                source,
            })?;
            let before = files.len();
            for entry in matches {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(e) => warn!("Skipping unreadable match: {}", e),
                }
            }
            if files.len() == before {
                warn!("Pattern '{}' matched no files", input);
            }
            continue;
        }

        let path = PathBuf::from(input);
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            let max_depth = if recursive { usize::MAX } else { 1 };
            for entry in WalkDir::new(&path).max_depth(max_depth).follow_links(false) {
                let entry = entry?;
                if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                    files.push(entry.into_path());
                }
            }
        } else {
            return Err(AfiError::FileNotFound { path });
        }
    }

    // Sort files for a deterministic report order
    files.sort();
    files.dedup();

    debug!("Discovered {} input files", files.len());
    Ok(files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}
