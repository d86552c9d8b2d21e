//! Run-scoped report sink
//!
//! The sink is opened once at run start and handed explicitly to every
//! reporting call. `LogSink` owns its file, so it is flushed and closed when
//! dropped on any exit path; `finish` closes it while surfacing flush errors.

use crate::error::ReportError;
use chrono::{DateTime, Utc};
use directories::BaseDirs;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default suffix of report log files.
pub const DEFAULT_LOG_SUFFIX: &str = "tree-file-compare.log";

/// Destination of report text
pub trait ReportSink {
    fn write_line(&mut self, line: &str) -> Result<(), ReportError>;

    fn blank(&mut self) -> Result<(), ReportError> {
        self.write_line("")
    }

    /// Write a line that belongs in the log only, never echoed to the console
    fn write_log_only(&mut self, line: &str) -> Result<(), ReportError> {
        self.write_line(line)
    }
}

/// Name of the log file for a run started at `now`: `<YYYYMMDD>-<suffix>`
pub fn log_file_name(now: DateTime<Utc>, suffix: &str) -> String {
    format!("{}-{}", now.format("%Y%m%d"), suffix)
}

/// Directory holding report logs: the configured one, else the home directory
pub fn resolve_report_dir(configured: Option<&Path>) -> Result<PathBuf, ReportError> {
    if let Some(dir) = configured {
        return Ok(dir.to_path_buf());
    }
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ReportError::NoHomeDirectory)
}

/// Append-only log file, optionally echoing every line to stdout
pub struct LogSink {
    path: PathBuf,
    writer: BufWriter<File>,
    echo: bool,
}

impl LogSink {
    /// Open (or create) the run's log file in append mode
    pub fn open(
        dir: &Path,
        suffix: &str,
        now: DateTime<Utc>,
        echo: bool,
    ) -> Result<Self, ReportError> {
        let path = dir.join(log_file_name(now, suffix));
        let io_err = |source| ReportError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_err)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err)?;

        debug!(log = %path.display(), "Opened report log");
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            echo,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the log, returning its path
    pub fn finish(mut self) -> Result<PathBuf, ReportError> {
        self.writer.flush().map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path)
    }
}

impl ReportSink for LogSink {
    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        if self.echo {
            println!("{}", line);
        }
        self.write_log_only(line)
    }

    fn write_log_only(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.writer, "{}", line).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory sink, used for previews and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl ReportSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
