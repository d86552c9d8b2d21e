//! Event schema for run progress.

use crate::tree::TreeStats;
use crate::types::TreeRole;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    ScanStarted {
        role: &'static str,
        root: PathBuf,
    },
    ScanFinished {
        role: &'static str,
        files: usize,
        duration_ms: u128,
    },
    ReportWritten {
        report: &'static str,
        entries: usize,
    },
    RunFinished {
        status: &'static str,
    },
}

impl ProgressEvent {
    pub fn scan_started(role: TreeRole, root: PathBuf) -> Self {
        ProgressEvent::ScanStarted {
            role: role.as_str(),
            root,
        }
    }

    pub fn scan_finished(role: TreeRole, stats: &TreeStats, duration_ms: u128) -> Self {
        ProgressEvent::ScanFinished {
            role: role.as_str(),
            files: stats.files,
            duration_ms,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            ProgressEvent::ScanStarted { .. } => "scan_started",
            ProgressEvent::ScanFinished { .. } => "scan_finished",
            ProgressEvent::ReportWritten { .. } => "report_written",
            ProgressEvent::RunFinished { .. } => "run_finished",
        }
    }
}
