//! Treecompare: Duplicate and Completeness Checks Between Directory Trees
//!
//! Indexes directory trees by content fingerprint and by file name, then
//! reports duplicates inside a tree and discrepancies between a reference
//! tree and a mirror. Also carries small content-file helpers: Blender
//! import/conversion requests and NDJSON to JSON conversion.

pub mod blender;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod ndjson;
pub mod progress;
pub mod tree;
pub mod types;
