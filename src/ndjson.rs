//! NDJSON to JSON conversion

use crate::error::NdjsonError;
use serde_json::Value;
use std::io::{BufRead, Write};

pub const DEFAULT_INPUT: &str = "messages.ndjson";
pub const DEFAULT_OUTPUT: &str = "messages.json";

/// Convert newline-delimited JSON into a single JSON array
///
/// Blank lines are skipped. Returns the number of records written.
pub fn convert<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize, NdjsonError> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|source| NdjsonError::Parse {
            line: idx + 1,
            source,
        })?;
        records.push(value);
    }

    let count = records.len();
    serde_json::to_writer(&mut writer, &Value::Array(records))
        .map_err(|e| NdjsonError::Io(e.into()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(count)
}
