//! content-tool binary: dry-run host invocations and NDJSON conversion

use super::test_utils::{run_isolated, write_tree};
use std::fs;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_content-tool");

#[test]
fn test_convert_dry_run_shows_glb_target() {
    let sandbox = TempDir::new().unwrap();
    let model = sandbox.path().join("scene.FBX");
    write_tree(sandbox.path(), &[("scene.FBX", "fbx bytes")]);

    let output = run_isolated(BIN, &sandbox, &["convert", "--dry-run", model.to_str().unwrap()]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Detected format: FBX"));
    assert!(stdout.contains("scene.glb"));
    assert!(stdout.contains("--background"));
}

#[test]
fn test_import_rejects_unrecognized_extension() {
    let sandbox = TempDir::new().unwrap();
    let notes = sandbox.path().join("notes.txt");
    write_tree(sandbox.path(), &[("notes.txt", "hello")]);

    let output = run_isolated(BIN, &sandbox, &["import", "--dry-run", notes.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_import_missing_file_fails() {
    let sandbox = TempDir::new().unwrap();
    let missing = sandbox.path().join("gone.gltf");

    let output = run_isolated(BIN, &sandbox, &["import", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_ndjson_to_json_writes_array() {
    let sandbox = TempDir::new().unwrap();
    let input = sandbox.path().join("in.ndjson");
    let output_path = sandbox.path().join("out.json");
    fs::write(&input, "{\"id\":1}\n{\"id\":2}\n").unwrap();

    let output = run_isolated(
        BIN,
        &sandbox,
        &[
            "ndjson-to-json",
            input.to_str().unwrap(),
            output_path.to_str().unwrap(),
        ],
    );

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Converted 2 records"));
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(parsed, serde_json::json!([{"id": 1}, {"id": 2}]));
}
