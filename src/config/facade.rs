//! Config loading facade: defaults, then global file, explicit file, environment.

use super::merge::merge_policy;
use super::sources::{env, explicit_file, global_file};
use super::TreeCompareConfig;
use config::ConfigError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file (if any) and the environment
    pub fn load() -> Result<TreeCompareConfig, ConfigError> {
        Self::load_with(None)
    }

    /// Load configuration, layering an explicit file over the global one
    pub fn load_from_file(path: &Path) -> Result<TreeCompareConfig, ConfigError> {
        Self::load_with(Some(path))
    }

    fn load_with(explicit: Option<&Path>) -> Result<TreeCompareConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            debug!(config_path = %path.display(), "Loading explicit configuration file");
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = env::add_to_builder(builder);

        let config: TreeCompareConfig = builder.build()?.try_deserialize()?;
        config
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(config)
    }
}
