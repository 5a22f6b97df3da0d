//! Configuration management.
//!
//! Provides the validator configuration shared by the processing core and
//! the CLI, with JSON loading from the user's config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{AFI_EXTENSION, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::error::{AfiError, Result};

/// Configuration for AFI validation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Report non-blank reserved fields as warnings
    pub report_reserved_fields: bool,

    /// Treat warnings as blocking
    pub strict: bool,

    /// Number of files processed concurrently
    pub workers: usize,

    /// File extension picked up when scanning directories
    pub extension: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            report_reserved_fields: true,
            strict: false,
            workers: num_cpus::get(),
            extension: AFI_EXTENSION.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Enable strict mode
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Disable reserved-field warnings
    pub fn without_reserved_warnings(mut self) -> Self {
        self.report_reserved_fields = false;
        self
    }

    /// Set the directory-scan extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Default location of the configuration file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AfiError::io(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| AfiError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file at the default location, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| AfiError::io(path, e))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(AfiError::configuration("workers must be at least 1"));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(AfiError::configuration(format!(
                "extension must be a bare extension like '{}', got '{}'",
                AFI_EXTENSION, self.extension
            )));
        }
        Ok(())
    }
}
