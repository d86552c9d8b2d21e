//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    if e.is_path_error() {
        format!("Error, {}, stopping.", e)
    } else {
        format!("Error: {}", e)
    }
}

/// Process exit code for a failed run. Usage errors exit through clap with 2.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::ConfigError(_) => 3,
        _ => 1,
    }
}
