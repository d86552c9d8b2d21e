//! Error types for tree indexing, comparison reporting and the content helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Indexing-related errors
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Cannot find directory '{}'", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Report sink errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No home directory available to hold the report log")]
    NoHomeDirectory,

    #[error("Report log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Host application (Blender) errors
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Specified content file '{}' could not be found", .0.display())]
    ContentFileNotFound(PathBuf),

    #[error("The format of the specified content file '{}' is not supported", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to launch host application '{executable}': {source}")]
    Launch {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Host application exited with {status}")]
    HostFailed { status: String },
}

/// NDJSON conversion errors
#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("NDJSON I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by command routing
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Ndjson(#[from] NdjsonError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// Path errors are the ones an operator fixes by pointing at another directory or file.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            ApiError::Index(IndexError::RootNotFound(_))
                | ApiError::Index(IndexError::NotADirectory(_))
                | ApiError::Host(HostError::ContentFileNotFound(_))
        )
    }
}
