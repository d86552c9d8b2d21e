//! Logging System
//!
//! Diagnostic logging using the `tracing` crate. Diagnostics are separate
//! from the report log: they go to stderr (or stdout) and never into the
//! run's report file.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive (highest precedence)
pub const LOG_ENV_VAR: &str = "TREECOMPARE_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, stdout, off
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `TREECOMPARE_LOG` filter directive
/// 2. The given config (CLI flags are already folded into it by the caller)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let writer = determine_writer(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(level)
        .map_err(|e| ApiError::ConfigError(format!("Invalid log level '{}': {}", level, e)))?;

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

/// Determine output format from config
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ApiError> {
    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if format != "json" && format != "text" {
        return Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

fn determine_writer(config: Option<&LoggingConfig>) -> Result<BoxMakeWriter, ApiError> {
    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    match output {
        "stderr" => Ok(BoxMakeWriter::new(std::io::stderr)),
        "stdout" => Ok(BoxMakeWriter::new(std::io::stdout)),
        "off" => Ok(BoxMakeWriter::new(std::io::sink)),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr', 'stdout' or 'off')",
            output
        ))),
    }
}
