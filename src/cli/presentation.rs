//! Console presentation: progress lines, run summary, host invocations.

use crate::blender::HostInvocation;
use crate::compare::RunSummary;
use crate::progress::ProgressEvent;
use crate::tree::TreeStats;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Console line for a progress event; report-level events stay quiet unless verbose
pub fn format_progress(event: &ProgressEvent, verbose: bool) -> Option<String> {
    match event {
        ProgressEvent::ScanStarted { role, root } => Some(format!(
            "{} {} tree {}...",
            "Scanning".cyan().bold(),
            role,
            root.display()
        )),
        ProgressEvent::ScanFinished {
            role,
            files,
            duration_ms,
        } if verbose => Some(format!(
            "  {} tree: {} files indexed in {} ms",
            role, files, duration_ms
        )),
        ProgressEvent::ReportWritten { report, entries } if verbose => {
            Some(format!("  {} report: {} entries", report, entries))
        }
        _ => None,
    }
}

fn stats_row(role: &str, stats: &TreeStats) -> Vec<String> {
    let optional = |v: Option<usize>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    vec![
        role.to_string(),
        stats.files.to_string(),
        stats.distinct_names.to_string(),
        optional(stats.distinct_contents),
        stats.duplicate_names.to_string(),
        optional(stats.duplicate_contents),
    ]
}

/// Per-tree counts as a table
pub fn format_summary_table(summary: &RunSummary) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec![
        "Tree",
        "Files",
        "Names",
        "Contents",
        "Dup. names",
        "Dup. contents",
    ]);
    table.add_row(stats_row("reference", &summary.reference));
    if let Some(mirror) = &summary.mirror {
        table.add_row(stats_row("mirror", mirror));
    }
    table.to_string()
}

/// One-line outcome of a comparison run
pub fn format_outcome(summary: &RunSummary, log: &Path) -> String {
    let mut s = String::new();
    if summary.mirror.is_some() {
        if summary.missing_from_reference == 0 && summary.missing_from_mirror == 0 && summary.common == 0 {
            s.push_str(&format!("{}\n", "No discrepancy found.".green()));
        } else {
            s.push_str(&format!(
                "{} missing from reference, {} missing from mirror, {} in common.\n",
                summary.missing_from_reference, summary.missing_from_mirror, summary.common
            ));
        }
    }
    s.push_str(&format!("Report appended to {}", log.display()));
    s
}

/// Dry-run rendering of a host invocation
pub fn format_invocation(invocation: &HostInvocation) -> String {
    let mut lines = vec![format!(
        "Detected format: {}",
        invocation.format().display_name()
    )];
    if let Some(target) = invocation.target() {
        lines.push(format!("Target: {}", target.display()));
    }
    lines.push(format!(
        "Command: {} {}",
        invocation.executable(),
        invocation
            .args()
            .iter()
            .map(|a| if a.contains(char::is_whitespace) {
                format!("'{}'", a.replace('\'', "'\\''"))
            } else {
                a.clone()
            })
            .collect::<Vec<_>>()
            .join(" ")
    ));
    lines.join("\n")
}
