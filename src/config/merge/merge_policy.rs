//! Merge rules: defaults, override order, conflict handling.

use crate::compare::sink::DEFAULT_LOG_SUFFIX;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override these: global file, explicit file, environment.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.follow_symlinks", false)?
        .set_default("report.suffix", DEFAULT_LOG_SUFFIX)?
        .set_default("report.echo", true)?
        .set_default("host.executable", "blender")
}
