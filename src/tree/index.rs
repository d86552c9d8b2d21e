//! Content and name indexes over a scanned directory tree

use crate::error::IndexError;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::{FileEntry, Fingerprint, NameKey};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Append-only bucket map used during the single indexing pass
#[derive(Debug)]
pub struct IndexBuilder<K> {
    buckets: BTreeMap<K, Vec<FileEntry>>,
    entry_count: usize,
}

impl<K: Ord> IndexBuilder<K> {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            entry_count: 0,
        }
    }

    /// Append an entry to the bucket for `key`, creating the bucket if needed
    pub fn append(&mut self, key: K, entry: FileEntry) {
        self.buckets.entry(key).or_default().push(entry);
        self.entry_count += 1;
    }

    /// Finish the pass; the returned index can no longer change
    pub fn freeze(self) -> Index<K> {
        Index {
            buckets: self.buckets,
            entry_count: self.entry_count,
        }
    }
}

impl<K: Ord> Default for IndexBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot mapping a key to the paths sharing it
///
/// Keys iterate in sorted order; paths inside a bucket keep traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index<K> {
    buckets: BTreeMap<K, Vec<FileEntry>>,
    entry_count: usize,
}

/// Fingerprint to paths.
pub type ContentIndex = Index<Fingerprint>;

/// Basename to paths.
pub type NameIndex = Index<NameKey>;

impl<K: Ord> Index<K> {
    pub fn get(&self, key: &K) -> Option<&[FileEntry]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[FileEntry])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Buckets holding more than one path
    pub fn duplicates(&self) -> impl Iterator<Item = (&K, &[FileEntry])> {
        self.iter().filter(|(_, entries)| entries.len() > 1)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of paths over all buckets
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

/// A scanned directory tree and its indexes
#[derive(Debug, Clone)]
pub struct Tree {
    root: PathBuf,
    content: Option<ContentIndex>,
    names: NameIndex,
}

impl Tree {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Content index, present only when the scan hashed file content
    pub fn content_index(&self) -> Option<&ContentIndex> {
        self.content.as_ref()
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.names
    }

    pub fn file_count(&self) -> usize {
        self.names.entry_count()
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            files: self.names.entry_count(),
            distinct_names: self.names.len(),
            distinct_contents: self.content.as_ref().map(Index::len),
            duplicate_names: self.names.duplicates().count(),
            duplicate_contents: self.content.as_ref().map(|c| c.duplicates().count()),
        }
    }
}

/// Counts summarizing one scanned tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub files: usize,
    pub distinct_names: usize,
    pub distinct_contents: Option<usize>,
    pub duplicate_names: usize,
    pub duplicate_contents: Option<usize>,
}

/// Builds the indexes of one directory tree
pub struct TreeIndexer {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl TreeIndexer {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (symlinks, ignore patterns). When set, the walker uses this
    /// config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Scan the tree once and freeze its indexes
    ///
    /// The root is validated before any file is read. Any unreadable file
    /// aborts the whole scan.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self, with_content: bool) -> Result<Tree, IndexError> {
        let start = Instant::now();
        info!(with_content, "Starting tree index");

        let root = path::canonicalize_root(&self.root)?;

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(root.clone(), config.clone()),
            None => Walker::new(root.clone()),
        };
        let files = match walker.walk() {
            Ok(files) => {
                debug!(file_count = files.len(), "Walked filesystem");
                files
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        let mut names = IndexBuilder::new();
        let mut content = with_content.then(IndexBuilder::<Fingerprint>::new);

        for file_path in files {
            let entry = FileEntry::new(path::relative_to(&root, &file_path));
            let name = path::name_key(entry.file_name());

            if let Some(content) = content.as_mut() {
                let fingerprint = hasher::fingerprint_file(&file_path)?;
                debug!(path = %entry, fingerprint = %fingerprint, "Hashed file");
                content.append(fingerprint, entry.clone());
            }
            names.append(name, entry);
        }

        let tree = Tree {
            root: self.root.clone(),
            content: content.map(IndexBuilder::freeze),
            names: names.freeze(),
        };

        info!(
            file_count = tree.file_count(),
            distinct_names = tree.names.len(),
            duration_ms = start.elapsed().as_millis(),
            "Tree index completed"
        );

        Ok(tree)
    }
}

/// Index the tree under `root`, hashing file content when `with_content` is set
pub fn build_index(root: impl Into<PathBuf>, with_content: bool) -> Result<Tree, IndexError> {
    TreeIndexer::new(root.into()).build(with_content)
}
