//! Environment source: TREECOMPARE_<SECTION>__<KEY>, e.g. TREECOMPARE_REPORT__DIRECTORY.
//!
//! List settings take comma-separated values: TREECOMPARE_SCAN__IGNORE=.git,target

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "TREECOMPARE";

/// Keys parsed as comma-separated lists
const LIST_KEYS: &[&str] = &["scan.ignore"];

pub fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(environment())
}
