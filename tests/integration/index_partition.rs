//! Integration tests for index completeness and determinism

use super::test_utils::write_tree;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;
use treecompare::tree::hasher::compute_content_fingerprint;
use treecompare::tree::{build_index, TreeIndexer, WalkerConfig};
use treecompare::types::{FileEntry, NameKey};

fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("a.txt", "X"),
            ("b/a.txt", "X"),
            ("b/c/d.bin", "payload"),
            ("e/f/g/h.txt", "deep"),
            ("z.txt", "last"),
        ],
    );
    temp_dir
}

/// Every regular file lands in exactly one name bucket
#[test]
fn test_name_buckets_partition_files() {
    let temp_dir = sample_tree();
    let tree = build_index(temp_dir.path(), false).unwrap();

    let mut seen = BTreeSet::new();
    for (_, entries) in tree.name_index().iter() {
        for entry in entries {
            assert!(seen.insert(entry.clone()), "{} appears twice", entry);
        }
    }

    let expected: BTreeSet<FileEntry> = ["a.txt", "b/a.txt", "b/c/d.bin", "e/f/g/h.txt", "z.txt"]
        .iter()
        .map(|p| FileEntry::new(PathBuf::from(p)))
        .collect();
    assert_eq!(seen, expected);
}

/// Every regular file lands in exactly one content bucket, keyed by its bytes
#[test]
fn test_content_buckets_partition_files() {
    let temp_dir = sample_tree();
    let tree = build_index(temp_dir.path(), true).unwrap();
    let content = tree.content_index().unwrap();

    assert_eq!(content.entry_count(), 5);
    assert_eq!(content.len(), 4);

    let x = content.get(&compute_content_fingerprint(b"X")).unwrap();
    assert_eq!(x, &[FileEntry::new("a.txt"), FileEntry::new("b/a.txt")]);
}

/// Re-indexing an unchanged tree yields identical indexes
#[test]
fn test_reindex_is_idempotent() {
    let temp_dir = sample_tree();
    let first = build_index(temp_dir.path(), true).unwrap();
    let second = build_index(temp_dir.path(), true).unwrap();

    assert_eq!(first.name_index(), second.name_index());
    assert_eq!(first.content_index(), second.content_index());
}

/// Ignore patterns drop whole subtrees from both indexes
#[test]
fn test_ignore_patterns_apply_to_both_indexes() {
    let temp_dir = sample_tree();
    let config = WalkerConfig {
        ignore_patterns: vec!["b".to_string()],
        ..Default::default()
    };
    let tree = TreeIndexer::new(temp_dir.path().to_path_buf())
        .with_walker_config(config)
        .build(true)
        .unwrap();

    assert_eq!(tree.file_count(), 3);
    assert_eq!(tree.content_index().unwrap().entry_count(), 3);
    assert_eq!(tree.name_index().get(&NameKey::from("a.txt")).unwrap().len(), 1);
}
