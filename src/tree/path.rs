//! Root validation and name normalization utilities

use crate::error::IndexError;
use crate::types::NameKey;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Validate and canonicalize a scan root
///
/// Fails before anything is read when the root is missing or is not a
/// directory. Symlinked roots are resolved, so the walk starts from the
/// real directory.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, IndexError> {
    if !root.exists() {
        return Err(IndexError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }

    dunce::canonicalize(root).map_err(|source| IndexError::Io {
        path: root.to_path_buf(),
        source,
    })
}

/// Path of `path` relative to `root`
///
/// Falls back to the path itself when it does not live under `root`.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Normalize a name for use as an index key (without filesystem access)
///
/// Unicode is normalized to NFC so that composed and decomposed spellings of
/// the same name land in one bucket. Trailing separators are dropped.
pub fn normalize_path_string(path: &str) -> String {
    let normalized: String = path.nfc().collect();

    let mut result = normalized;
    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    result
}

/// Name index key for a basename
///
/// Unicode names are NFC-normalized; other names keep their raw bytes.
pub fn name_key(name: &OsStr) -> NameKey {
    match name.to_str() {
        Some(text) => NameKey::from(normalize_path_string(text).as_str()),
        None => NameKey::new(name),
    }
}
