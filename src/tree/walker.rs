//! Filesystem walker for traversing directory structures

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; links are then skipped)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Path components to skip entirely (e.g. ".git"); empty by default
    #[serde(default, rename = "ignore")]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every regular file
    ///
    /// Traversal is depth-first with the entries of each directory visited in
    /// file-name order, so the returned order is the same on every run over
    /// an unchanged tree. Any unreadable entry aborts the walk.
    pub fn walk(&self) -> Result<Vec<PathBuf>, IndexError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = entry.map_err(|e| IndexError::Walk(e.to_string()))?;

            // Without follow_links a symlink reports its own type and is skipped here
            if entry.file_type().is_file() {
                trace!(path = %entry.path().display(), "Found file");
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }

        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        component_matches(relative, &self.config.ignore_patterns)
    }
}

fn component_matches(path: &Path, patterns: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            patterns.iter().any(|p| p.as_str() == name)
        }
        _ => false,
    })
}
