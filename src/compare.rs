//! Tree comparison
//!
//! Indexes a reference tree and an optional mirror tree, then reports
//! duplicates inside each tree and, with a mirror, either the completeness of
//! each tree regarding the other or the keys both trees share.

pub mod render;
pub mod report;
pub mod sink;

use crate::error::ApiError;
use crate::progress::{ProgressEvent, ProgressFn};
use crate::tree::{Tree, TreeIndexer, TreeStats, WalkerConfig};
use crate::types::TreeRole;
use report::KeyKind;
use sink::ReportSink;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// What identifies a file across trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Content fingerprints (and names, for intra-tree duplicates)
    #[default]
    ByContent,
    /// Basenames only; content is never read
    ByName,
}

/// What a two-tree comparison looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Keys present in one tree and missing from the other
    #[default]
    Completeness,
    /// Keys present in both trees
    Duplicates,
}

#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub reference: PathBuf,
    pub mirror: Option<PathBuf>,
    pub mode: CompareMode,
    pub direction: Direction,
    pub walker: WalkerConfig,
}

impl CompareRequest {
    pub fn new(reference: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            mirror: None,
            mode: CompareMode::default(),
            direction: Direction::default(),
            walker: WalkerConfig::default(),
        }
    }

    pub fn with_mirror(mut self, mirror: impl Into<PathBuf>) -> Self {
        self.mirror = Some(mirror.into());
        self
    }

    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_walker_config(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }
}

/// Counts describing what a run reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub reference: TreeStats,
    pub mirror: Option<TreeStats>,
    pub missing_from_reference: usize,
    pub missing_from_mirror: usize,
    pub relocated: usize,
    pub common: usize,
}

fn scan(
    role: TreeRole,
    root: &Path,
    request: &CompareRequest,
    progress: &mut ProgressFn<'_>,
) -> Result<Tree, ApiError> {
    progress(&ProgressEvent::scan_started(role, root.to_path_buf()));
    let start = Instant::now();
    let tree = TreeIndexer::new(root.to_path_buf())
        .with_walker_config(request.walker.clone())
        .build(request.mode == CompareMode::ByContent)?;
    progress(&ProgressEvent::scan_finished(
        role,
        &tree.stats(),
        start.elapsed().as_millis(),
    ));
    Ok(tree)
}

fn report_tree(
    sink: &mut dyn ReportSink,
    role: TreeRole,
    tree: &Tree,
    progress: &mut ProgressFn<'_>,
) -> Result<(), ApiError> {
    render::write_tree_banner(sink, role.as_str(), tree.root())?;

    if let Some(content) = tree.content_index() {
        let dups = report::duplicate_report(role, tree.root().to_path_buf(), KeyKind::Content, content);
        render::write_duplicates(sink, &dups)?;
        progress(&ProgressEvent::ReportWritten {
            report: "content_duplicates",
            entries: dups.buckets.len(),
        });
    }

    let dups = report::duplicate_report(
        role,
        tree.root().to_path_buf(),
        KeyKind::Name,
        tree.name_index(),
    );
    render::write_duplicates(sink, &dups)?;
    progress(&ProgressEvent::ReportWritten {
        report: "name_duplicates",
        entries: dups.buckets.len(),
    });
    Ok(())
}

/// Run one comparison, writing every report to `sink`
///
/// Both trees are fully indexed before anything is reported. Any indexing
/// failure aborts the run before the first report line.
#[instrument(skip_all, fields(reference = %request.reference.display()))]
pub fn run(
    request: &CompareRequest,
    sink: &mut dyn ReportSink,
    progress: &mut ProgressFn<'_>,
) -> Result<RunSummary, ApiError> {
    let reference = scan(TreeRole::Reference, &request.reference, request, progress)?;
    let mirror = match &request.mirror {
        Some(path) => Some(scan(TreeRole::Mirror, path, request, progress)?),
        None => None,
    };

    let mut summary = RunSummary {
        reference: reference.stats(),
        mirror: mirror.as_ref().map(Tree::stats),
        missing_from_reference: 0,
        missing_from_mirror: 0,
        relocated: 0,
        common: 0,
    };

    report_tree(sink, TreeRole::Reference, &reference, progress)?;
    if let Some(mirror) = &mirror {
        report_tree(sink, TreeRole::Mirror, mirror, progress)?;
    }

    if let Some(mirror) = &mirror {
        render::write_comparison_banner(sink)?;
        let contents = reference.content_index().zip(mirror.content_index());

        match request.direction {
            Direction::Completeness => {
                let completeness = match contents {
                    Some((ref_content, mirror_content)) => {
                        let relocation = report::relocation_report(ref_content, mirror_content);
                        render::write_relocations(sink, &relocation)?;
                        summary.relocated = relocation.relocated.len();
                        report::completeness_report(KeyKind::Content, ref_content, mirror_content)
                    }
                    None => report::completeness_report(
                        KeyKind::Name,
                        reference.name_index(),
                        mirror.name_index(),
                    ),
                };
                render::write_completeness(sink, &completeness)?;
                summary.missing_from_reference = completeness.missing_from_reference.len();
                summary.missing_from_mirror = completeness.missing_from_mirror.len();
                progress(&ProgressEvent::ReportWritten {
                    report: "completeness",
                    entries: summary.missing_from_reference + summary.missing_from_mirror,
                });
            }
            Direction::Duplicates => {
                if let Some((ref_content, mirror_content)) = contents {
                    let common = report::common_report(KeyKind::Content, ref_content, mirror_content);
                    render::write_common(sink, &common)?;
                    summary.common += common.common.len();
                }
                let common = report::common_report(
                    KeyKind::Name,
                    reference.name_index(),
                    mirror.name_index(),
                );
                render::write_common(sink, &common)?;
                summary.common += common.common.len();
                progress(&ProgressEvent::ReportWritten {
                    report: "common",
                    entries: summary.common,
                });
            }
        }
    }

    for tree in std::iter::once(&reference).chain(mirror.as_ref()) {
        if let Some(content) = tree.content_index() {
            render::write_hashes(sink, content)?;
        }
    }

    info!(
        missing_from_reference = summary.missing_from_reference,
        missing_from_mirror = summary.missing_from_mirror,
        common = summary.common,
        "Comparison completed"
    );
    progress(&ProgressEvent::RunFinished { status: "completed" });

    Ok(summary)
}
