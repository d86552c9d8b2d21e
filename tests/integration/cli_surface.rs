//! tree-file-compare binary: arguments, exit codes, report log

use super::test_utils::{report_log, run_isolated, write_tree};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_tree-file-compare");

#[test]
fn test_missing_reference_is_usage_error() {
    let sandbox = TempDir::new().unwrap();
    let output = run_isolated(BIN, &sandbox, &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--reference"));
    assert!(report_log(&sandbox).is_none());
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let sandbox = TempDir::new().unwrap();
    let output = run_isolated(BIN, &sandbox, &["--reference", "/tmp", "--bogus"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_nonexistent_reference_stops_before_log() {
    let sandbox = TempDir::new().unwrap();
    let missing = sandbox.path().join("absent");
    let output = run_isolated(BIN, &sandbox, &["--reference", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error, Cannot find directory"));
    assert!(stderr.contains("stopping."));
    assert!(report_log(&sandbox).is_none());
}

#[test]
fn test_file_as_mirror_is_rejected() {
    let sandbox = TempDir::new().unwrap();
    let reference = sandbox.path().join("ref");
    write_tree(&reference, &[("a", "1")]);
    let file = reference.join("a");

    let output = run_isolated(
        BIN,
        &sandbox,
        &[
            "--reference",
            reference.to_str().unwrap(),
            "--mirror",
            file.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a directory"));
}

#[test]
fn test_successful_run_appends_to_dated_log() {
    let sandbox = TempDir::new().unwrap();
    let reference = sandbox.path().join("ref");
    let mirror = sandbox.path().join("mirror");
    write_tree(&reference, &[("a.txt", "X"), ("b/a.txt", "X")]);
    write_tree(&mirror, &[("a.txt", "X")]);

    let args = [
        "--reference",
        reference.to_str().unwrap(),
        "--mirror",
        mirror.to_str().unwrap(),
    ];
    let first = run_isolated(BIN, &sandbox, &args);
    assert!(first.status.success(), "{:?}", first);
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("Report appended to"));

    let log = report_log(&sandbox).unwrap();
    assert!(log.starts_with("Report generated on "));
    assert!(log.contains("Arguments specified: "));
    assert!(log.contains("  + identical content: [a.txt, b/a.txt]."));
    assert!(log.contains(" ***** Tree comparison *****"));

    let second = run_isolated(BIN, &sandbox, &["-r", "--by-name-only", "--reference", reference.to_str().unwrap()]);
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Comparison will be based on names only"));
    assert!(stdout.contains("Reverse comparison will be performed"));

    let log = report_log(&sandbox).unwrap();
    assert_eq!(log.matches("Report generated on ").count(), 2);
}

#[test]
fn test_report_directory_from_environment() {
    let sandbox = TempDir::new().unwrap();
    let reference = sandbox.path().join("ref");
    let reports = sandbox.path().join("reports");
    write_tree(&reference, &[("only", "1")]);

    let output = std::process::Command::new(BIN)
        .env("HOME", sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("config"))
        .env("TREECOMPARE_REPORT__DIRECTORY", &reports)
        .args(["--reference", reference.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let written: Vec<_> = std::fs::read_dir(&reports).unwrap().collect();
    assert_eq!(written.len(), 1);
}
