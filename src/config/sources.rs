//! Configuration sources, lowest precedence first.

pub mod env;
pub mod explicit_file;
pub mod global_file;
