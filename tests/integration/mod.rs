//! Integration tests for tree indexing, comparison and the binaries

mod cli_surface;
mod comparison_scenarios;
mod content_tool;
mod index_partition;
mod test_utils;
