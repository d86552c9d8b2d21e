//! Directory tree indexing
//!
//! Scans a directory tree once and records, for every regular file, its
//! basename and (optionally) a fingerprint of its content.

pub mod hasher;
pub mod index;
pub mod path;
pub mod walker;

pub use index::{build_index, ContentIndex, Index, IndexBuilder, NameIndex, Tree, TreeIndexer, TreeStats};
pub use walker::WalkerConfig;
