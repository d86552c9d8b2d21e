//! Human-readable rendering of comparison reports into a sink

use crate::compare::report::{
    Bucket, CommonReport, CompletenessReport, DuplicateReport, KeyKind, RelocationReport,
};
use crate::compare::sink::ReportSink;
use crate::error::ReportError;
use crate::tree::ContentIndex;
use crate::types::FileEntry;
use chrono::{DateTime, Utc};
use std::path::Path;

/// `[a.txt, b/a.txt]`
pub fn format_entries(entries: &[FileEntry]) -> String {
    let parts: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

pub fn write_header(
    sink: &mut dyn ReportSink,
    now: DateTime<Utc>,
    arguments: &[String],
) -> Result<(), ReportError> {
    sink.write_line(&format!(
        "Report generated on {}.",
        now.format("%a, %d %B %Y %H:%M:%S")
    ))?;
    sink.write_line(&format!("Arguments specified: {:?}", arguments))
}

pub fn write_tree_banner(
    sink: &mut dyn ReportSink,
    role: &str,
    root: &Path,
) -> Result<(), ReportError> {
    sink.blank()?;
    sink.write_line(&format!(" ***** For {} tree {} *****", role, root.display()))?;
    sink.blank()
}

pub fn write_comparison_banner(sink: &mut dyn ReportSink) -> Result<(), ReportError> {
    sink.blank()?;
    sink.write_line(" ***** Tree comparison *****")?;
    sink.blank()
}

pub fn write_duplicates(
    sink: &mut dyn ReportSink,
    report: &DuplicateReport,
) -> Result<(), ReportError> {
    let (title, label) = match report.kind {
        KeyKind::Content => ("content", "identical content"),
        KeyKind::Name => ("names", "duplicated names"),
    };
    sink.write_line(&format!(
        "Displaying duplicated {} in tree {}:",
        title,
        report.root.display()
    ))?;
    for bucket in &report.buckets {
        sink.write_line(&format!("  + {}: {}.", label, format_entries(&bucket.entries)))?;
    }
    sink.blank()
}

pub fn write_completeness(
    sink: &mut dyn ReportSink,
    report: &CompletenessReport,
) -> Result<(), ReportError> {
    let kind = report.kind.as_str();

    sink.write_line("Checking completeness of reference regarding the mirror:")?;
    write_missing(sink, kind, &report.missing_from_reference, "mirror", "reference")?;
    sink.blank()?;

    sink.write_line("Checking completeness of mirror regarding the reference:")?;
    write_missing(sink, kind, &report.missing_from_mirror, "reference", "mirror")?;
    sink.blank()
}

fn write_missing(
    sink: &mut dyn ReportSink,
    kind: &str,
    buckets: &[Bucket],
    present_in: &str,
    absent_from: &str,
) -> Result<(), ReportError> {
    for bucket in buckets {
        sink.write_line(&format!(
            "  + {} corresponding to {} is in {} but not in {}.",
            kind,
            format_entries(&bucket.entries),
            present_in,
            absent_from
        ))?;
    }
    Ok(())
}

pub fn write_relocations(
    sink: &mut dyn ReportSink,
    report: &RelocationReport,
) -> Result<(), ReportError> {
    sink.write_line("Comparing reference tree with mirror tree:")?;
    for m in &report.relocated {
        sink.write_line(&format!(
            "  + identical content for {} in reference and {} in mirror.",
            format_entries(&m.reference),
            format_entries(&m.mirror)
        ))?;
    }
    sink.blank()
}

pub fn write_common(sink: &mut dyn ReportSink, report: &CommonReport) -> Result<(), ReportError> {
    match report.kind {
        KeyKind::Content => {
            sink.write_line("Looking for duplicated content between reference and mirror:")?;
            for m in &report.common {
                sink.write_line(&format!(
                    "  + content corresponding to {} in mirror is also in reference, as {}.",
                    format_entries(&m.mirror),
                    format_entries(&m.reference)
                ))?;
            }
        }
        KeyKind::Name => {
            sink.write_line("Looking for duplicated names between reference and mirror:")?;
            for m in &report.common {
                sink.write_line(&format!(
                    "  + name {} is in mirror, as {}, and in reference, as {}.",
                    m.key,
                    format_entries(&m.mirror),
                    format_entries(&m.reference)
                ))?;
            }
        }
    }
    sink.blank()
}

/// Full content index listing: fingerprint then paths, written to the log only
pub fn write_hashes(sink: &mut dyn ReportSink, index: &ContentIndex) -> Result<(), ReportError> {
    sink.write_log_only("Hashes:")?;
    sink.write_log_only("")?;
    for (fingerprint, entries) in index.iter() {
        sink.write_log_only(&format!("  {} {}", fingerprint, format_entries(entries)))?;
    }
    sink.write_log_only("")
}
