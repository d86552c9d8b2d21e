//! Configuration System
//!
//! Layered configuration for scanning, report logs, diagnostics and the host
//! application. Sources, lowest precedence first: built-in defaults, the
//! global config file, an explicit `--config` file, `TREECOMPARE_*`
//! environment variables. Command-line flags are applied on top by the
//! binaries.

use crate::blender::HostConfig;
use crate::compare::sink::DEFAULT_LOG_SUFFIX;
use crate::logging::LoggingConfig;
use crate::tree::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeCompareConfig {
    /// Directory traversal settings
    #[serde(default)]
    pub scan: WalkerConfig,

    /// Report log settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Diagnostic logging
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Host application used by the content helpers
    #[serde(default)]
    pub host: HostConfig,
}

/// Report log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory holding report logs (default: home directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File name suffix appended after the date stamp
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Also print report lines to the console
    #[serde(default = "default_true")]
    pub echo: bool,
}

fn default_suffix() -> String {
    DEFAULT_LOG_SUFFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            suffix: default_suffix(),
            echo: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Report(String),
    Host(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Report(msg) => write!(f, "Report: {}", msg),
            ValidationError::Host(msg) => write!(f, "Host: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TreeCompareConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let suffix = self.report.suffix.trim();
        if suffix.is_empty() {
            return Err(ValidationError::Report(
                "Log suffix cannot be empty".to_string(),
            ));
        }
        if suffix.contains('/') || suffix.contains('\\') {
            return Err(ValidationError::Report(format!(
                "Log suffix '{}' must be a plain file name",
                suffix
            )));
        }
        if self.host.executable.trim().is_empty() {
            return Err(ValidationError::Host(
                "Executable cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
