//! Report model: pure comparisons over frozen indexes
//!
//! Nothing here touches the filesystem or the log; rendering lives in
//! `compare::render`.

use crate::tree::Index;
use crate::types::{FileEntry, TreeRole};
use std::fmt::Display;
use std::path::PathBuf;

/// What the keys of the compared indexes are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Content,
    Name,
}

impl KeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::Content => "content",
            KeyKind::Name => "name",
        }
    }
}

/// One index key and the paths filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub entries: Vec<FileEntry>,
}

/// A key found in both trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub key: String,
    pub reference: Vec<FileEntry>,
    pub mirror: Vec<FileEntry>,
}

/// Buckets of one tree holding more than one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub role: TreeRole,
    pub root: PathBuf,
    pub kind: KeyKind,
    pub buckets: Vec<Bucket>,
}

/// Keys present in one tree and absent from the other, both ways
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    pub kind: KeyKind,
    /// Mirror keys the reference lacks
    pub missing_from_reference: Vec<Bucket>,
    /// Reference keys the mirror lacks
    pub missing_from_mirror: Vec<Bucket>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing_from_reference.is_empty() && self.missing_from_mirror.is_empty()
    }
}

/// Keys present in both trees (reverse mode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonReport {
    pub kind: KeyKind,
    pub common: Vec<Match>,
}

/// Content present in both trees but filed under different paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationReport {
    pub relocated: Vec<Match>,
}

fn bucket<K: Display>(key: &K, entries: &[FileEntry]) -> Bucket {
    Bucket {
        key: key.to_string(),
        entries: entries.to_vec(),
    }
}

pub fn duplicate_report<K: Ord + Display>(
    role: TreeRole,
    root: PathBuf,
    kind: KeyKind,
    index: &Index<K>,
) -> DuplicateReport {
    DuplicateReport {
        role,
        root,
        kind,
        buckets: index.duplicates().map(|(k, e)| bucket(k, e)).collect(),
    }
}

/// Buckets of `present` whose key does not occur in `other`
pub fn missing_keys<K: Ord + Display>(present: &Index<K>, other: &Index<K>) -> Vec<Bucket> {
    present
        .iter()
        .filter(|(k, _)| !other.contains_key(k))
        .map(|(k, e)| bucket(k, e))
        .collect()
}

pub fn completeness_report<K: Ord + Display>(
    kind: KeyKind,
    reference: &Index<K>,
    mirror: &Index<K>,
) -> CompletenessReport {
    CompletenessReport {
        kind,
        missing_from_reference: missing_keys(mirror, reference),
        missing_from_mirror: missing_keys(reference, mirror),
    }
}

/// Every mirror key that also occurs in the reference
pub fn common_report<K: Ord + Display>(
    kind: KeyKind,
    reference: &Index<K>,
    mirror: &Index<K>,
) -> CommonReport {
    let common = mirror
        .iter()
        .filter_map(|(k, mirror_entries)| {
            reference.get(k).map(|reference_entries| Match {
                key: k.to_string(),
                reference: reference_entries.to_vec(),
                mirror: mirror_entries.to_vec(),
            })
        })
        .collect();
    CommonReport { kind, common }
}

/// Shared keys whose path lists differ between the trees
pub fn relocation_report<K: Ord + Display>(
    reference: &Index<K>,
    mirror: &Index<K>,
) -> RelocationReport {
    let relocated = common_report(KeyKind::Content, reference, mirror)
        .common
        .into_iter()
        .filter(|m| m.reference != m.mirror)
        .collect();
    RelocationReport { relocated }
}
