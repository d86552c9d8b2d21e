//! Config file named on the command line; it must exist.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Message(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}
