//! End-to-end comparison runs against temporary trees

use super::test_utils::write_tree;
use tempfile::TempDir;
use treecompare::compare::sink::MemorySink;
use treecompare::compare::{run, CompareMode, CompareRequest, Direction};
use treecompare::error::{ApiError, IndexError};
use treecompare::progress;
use treecompare::tree::WalkerConfig;

fn run_text(request: &CompareRequest) -> (treecompare::compare::RunSummary, String) {
    let mut sink = MemorySink::new();
    let summary = run(request, &mut sink, &mut progress::silent).unwrap();
    (summary, sink.text())
}

#[test]
fn test_intra_tree_duplicates_listed_by_content_and_name() {
    let reference = TempDir::new().unwrap();
    write_tree(reference.path(), &[("a.txt", "X"), ("b/a.txt", "X")]);

    let (summary, text) = run_text(&CompareRequest::new(reference.path()));

    assert_eq!(summary.reference.duplicate_contents, Some(1));
    assert_eq!(summary.reference.duplicate_names, 1);
    assert!(text.contains("  + identical content: [a.txt, b/a.txt]."));
    assert!(text.contains("  + duplicated names: [a.txt, b/a.txt]."));
}

#[test]
fn test_renamed_file_matches_by_content_only() {
    let reference = TempDir::new().unwrap();
    let mirror = TempDir::new().unwrap();
    write_tree(reference.path(), &[("f1", "A")]);
    write_tree(mirror.path(), &[("f2", "A")]);

    let by_content = CompareRequest::new(reference.path()).with_mirror(mirror.path());
    let (summary, text) = run_text(&by_content);
    assert_eq!(summary.missing_from_reference, 0);
    assert_eq!(summary.missing_from_mirror, 0);
    assert_eq!(summary.relocated, 1);
    assert!(text.contains("  + identical content for [f1] in reference and [f2] in mirror."));
    assert!(!text.contains("is in mirror but not in reference"));

    let by_name = by_content.clone().with_mode(CompareMode::ByName);
    let (summary, text) = run_text(&by_name);
    assert_eq!(summary.missing_from_reference, 1);
    assert_eq!(summary.missing_from_mirror, 1);
    assert!(text.contains("  + name corresponding to [f2] is in mirror but not in reference."));
    assert!(text.contains("  + name corresponding to [f1] is in reference but not in mirror."));
}

#[test]
fn test_empty_mirror_lacks_every_reference_file() {
    let reference = TempDir::new().unwrap();
    let mirror = TempDir::new().unwrap();
    write_tree(reference.path(), &[("one", "1"), ("sub/two", "2"), ("sub/three", "3")]);

    let request = CompareRequest::new(reference.path()).with_mirror(mirror.path());
    let (summary, text) = run_text(&request);

    assert_eq!(summary.mirror.as_ref().map(|s| s.files), Some(0));
    assert_eq!(summary.missing_from_mirror, 3);
    assert_eq!(summary.missing_from_reference, 0);
    for path in ["one", "sub/two", "sub/three"] {
        assert!(text.contains(&format!(
            "  + content corresponding to [{}] is in reference but not in mirror.",
            path
        )));
    }
}

#[test]
fn test_name_mode_cannot_see_content_divergence() {
    let reference = TempDir::new().unwrap();
    let mirror = TempDir::new().unwrap();
    write_tree(reference.path(), &[("report.doc", "draft")]);
    write_tree(mirror.path(), &[("report.doc", "final")]);

    let request = CompareRequest::new(reference.path())
        .with_mirror(mirror.path())
        .with_mode(CompareMode::ByName);
    let (summary, text) = run_text(&request);

    assert_eq!(summary.missing_from_reference, 0);
    assert_eq!(summary.missing_from_mirror, 0);
    assert!(!text.contains("but not in"));

    // Content mode sees both sides as missing
    let request = CompareRequest::new(reference.path()).with_mirror(mirror.path());
    let (summary, _) = run_text(&request);
    assert_eq!(summary.missing_from_reference, 1);
    assert_eq!(summary.missing_from_mirror, 1);
}

#[test]
fn test_reverse_mode_lists_shared_content_and_names() {
    let reference = TempDir::new().unwrap();
    let mirror = TempDir::new().unwrap();
    write_tree(reference.path(), &[("keep/a.txt", "same"), ("b.txt", "only here")]);
    write_tree(mirror.path(), &[("copy.txt", "same"), ("b.txt", "different")]);

    let request = CompareRequest::new(reference.path())
        .with_mirror(mirror.path())
        .with_direction(Direction::Duplicates);
    let (summary, text) = run_text(&request);

    assert_eq!(summary.common, 2);
    assert!(text.contains(
        "  + content corresponding to [copy.txt] in mirror is also in reference, as [keep/a.txt]."
    ));
    assert!(text.contains("  + name b.txt is in mirror, as [b.txt], and in reference, as [b.txt]."));
    assert!(!text.contains("Checking completeness"));
}

#[test]
fn test_missing_mirror_root_fails_before_reporting() {
    let reference = TempDir::new().unwrap();
    write_tree(reference.path(), &[("a", "1")]);
    let missing = reference.path().join("nope");

    let mut sink = MemorySink::new();
    let request = CompareRequest::new(reference.path()).with_mirror(&missing);
    let err = run(&request, &mut sink, &mut progress::silent).unwrap_err();

    assert!(matches!(
        err,
        ApiError::Index(IndexError::RootNotFound(_))
    ));
    assert!(err.is_path_error());
    assert!(sink.lines().is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_unicode_names_compare_by_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let reference = TempDir::new().unwrap();
    let mirror = TempDir::new().unwrap();
    std::fs::write(reference.path().join(OsStr::from_bytes(b"\xff.txt")), "a").unwrap();
    std::fs::write(mirror.path().join(OsStr::from_bytes(b"\xfe.txt")), "a").unwrap();

    let request = CompareRequest::new(reference.path())
        .with_mirror(mirror.path())
        .with_mode(CompareMode::ByName);
    let (summary, text) = run_text(&request);

    assert_eq!(summary.missing_from_reference, 1);
    assert_eq!(summary.missing_from_mirror, 1);
    assert!(!text.contains("duplicated names: ["));
}

#[cfg(unix)]
#[test]
fn test_unreadable_entry_aborts_run_before_reporting() {
    let reference = TempDir::new().unwrap();
    write_tree(reference.path(), &[("a.txt", "X")]);
    std::os::unix::fs::symlink(
        reference.path().join("gone"),
        reference.path().join("dangling"),
    )
    .unwrap();

    let walker = WalkerConfig {
        follow_symlinks: true,
        ..Default::default()
    };
    let request = CompareRequest::new(reference.path()).with_walker_config(walker);

    let mut sink = MemorySink::new();
    let err = run(&request, &mut sink, &mut progress::silent).unwrap_err();

    assert!(matches!(err, ApiError::Index(_)));
    assert!(!err.is_path_error());
    assert!(sink.lines().is_empty());
}
