//! Content fingerprints using BLAKE3
//!
//! Fingerprints are the first 128 bits of the BLAKE3 extendable output over
//! the raw file bytes.

use crate::error::IndexError;
use crate::types::{Fingerprint, FINGERPRINT_LEN};
use blake3::Hasher;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const READ_CHUNK: usize = 64 * 1024;

/// Compute the fingerprint of in-memory bytes
pub fn compute_content_fingerprint(content: &[u8]) -> Fingerprint {
    let mut hasher = Hasher::new();
    hasher.update(content);
    finish(&hasher)
}

/// Compute the fingerprint of a file, reading it once in binary mode
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, IndexError> {
    let io_err = |source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = reader.read(&mut buf).map_err(io_err)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(finish(&hasher))
}

fn finish(hasher: &Hasher) -> Fingerprint {
    let mut out = [0u8; FINGERPRINT_LEN];
    hasher.finalize_xof().fill(&mut out);
    Fingerprint::from_bytes(out)
}
