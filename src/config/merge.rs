//! Source precedence for configuration loading.

pub mod merge_policy;
