//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Create `files` (relative path, content) under `root`, creating parent directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Run a binary with HOME and XDG_CONFIG_HOME pointed into `sandbox`
pub fn run_isolated(bin: &str, sandbox: &TempDir, args: &[&str]) -> Output {
    let home = sandbox.path().join("home");
    let config_home = sandbox.path().join("config");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&config_home).unwrap();

    Command::new(bin)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .env_remove("TREECOMPARE_LOG")
        .env_remove("TREECOMPARE_REPORT__DIRECTORY")
        .args(args)
        .output()
        .unwrap()
}

/// Contents of the report log written into the sandbox home, if any
pub fn report_log(sandbox: &TempDir) -> Option<String> {
    let home = sandbox.path().join("home");
    let entry = fs::read_dir(&home)
        .ok()?
        .filter_map(Result::ok)
        .find(|e| {
            e.file_name()
                .to_string_lossy()
                .ends_with("-tree-file-compare.log")
        })?;
    fs::read_to_string(entry.path()).ok()
}
