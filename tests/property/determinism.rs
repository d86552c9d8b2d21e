//! Property-based tests for index determinism

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use treecompare::tree::build_index;
use treecompare::tree::hasher::compute_content_fingerprint;

fn file_set() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        "[a-d]{1,2}(/[a-d]{1,2}){0,2}",
        prop::collection::vec(any::<u8>(), 0..64),
        1..12,
    )
}

/// Drop paths whose prefix is itself a file path
fn materialize(root: &std::path::Path, files: &BTreeMap<String, Vec<u8>>) -> usize {
    let mut written = 0;
    for (rel, bytes) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                continue;
            }
        }
        if path.is_dir() {
            continue;
        }
        if fs::write(&path, bytes).is_ok() {
            written += 1;
        }
    }
    written
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(
            compute_content_fingerprint(&bytes),
            compute_content_fingerprint(&bytes.clone())
        );
    }

    #[test]
    fn indexes_partition_every_file(files in file_set()) {
        let temp_dir = TempDir::new().unwrap();
        let written = materialize(temp_dir.path(), &files);
        prop_assume!(written > 0);

        let tree = build_index(temp_dir.path(), true).unwrap();
        let content = tree.content_index().unwrap();

        prop_assert_eq!(tree.file_count(), written);
        prop_assert_eq!(tree.name_index().entry_count(), written);
        prop_assert_eq!(content.entry_count(), written);

        for (fingerprint, entries) in content.iter() {
            for entry in entries {
                let bytes = fs::read(temp_dir.path().join(entry.relative_path())).unwrap();
                prop_assert_eq!(&compute_content_fingerprint(&bytes), fingerprint);
            }
        }
    }

    #[test]
    fn rebuild_yields_identical_indexes(files in file_set()) {
        let temp_dir = TempDir::new().unwrap();
        materialize(temp_dir.path(), &files);

        let first = build_index(temp_dir.path(), true).unwrap();
        let second = build_index(temp_dir.path(), true).unwrap();
        prop_assert_eq!(first.name_index(), second.name_index());
        prop_assert_eq!(first.content_index(), second.content_index());
    }
}
