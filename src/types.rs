//! Core value types shared by the indexer and the comparator.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Number of bytes in a content fingerprint (128 bits).
pub const FINGERPRINT_LEN: usize = 16;

/// Whole-file content fingerprint
///
/// A 128-bit digest over the raw file bytes. Two files with identical bytes
/// always share a fingerprint; collisions are treated as identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    pub fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Lowercase hex form, 32 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A file discovered under a scanned root, stored relative to that root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileEntry {
    relative: PathBuf,
}

impl FileEntry {
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Final path component, or an empty name for an empty path.
    pub fn file_name(&self) -> &OsStr {
        self.relative.file_name().unwrap_or_default()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        f.write_str(&parts.join("/"))
    }
}

/// Name index key: a basename kept as raw OS bytes
///
/// Names that are not valid Unicode never collapse into one key; the lossy
/// text form is only used for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(OsString);

impl NameKey {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

/// Which role a tree plays in a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRole {
    Reference,
    Mirror,
}

impl TreeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeRole::Reference => "reference",
            TreeRole::Mirror => "mirror",
        }
    }
}

impl fmt::Display for TreeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
