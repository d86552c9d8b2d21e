//! CLI route: turns parsed arguments into domain calls.

use crate::blender::HostRequest;
use crate::cli::parse::{CompareCli, ContentCommands};
use crate::cli::presentation;
use crate::compare::render;
use crate::compare::sink::{self, LogSink};
use crate::compare::{self, CompareMode, CompareRequest, Direction, RunSummary};
use crate::config::TreeCompareConfig;
use crate::error::ApiError;
use crate::error::NdjsonError;
use crate::ndjson;
use crate::progress::ProgressEvent;
use crate::tree::path::canonicalize_root;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;

/// Result of a comparison run
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub log: PathBuf,
}

/// Comparison run bound to its configuration
pub struct CompareRun {
    config: TreeCompareConfig,
}

impl CompareRun {
    pub fn new(config: TreeCompareConfig) -> Self {
        Self { config }
    }

    pub fn request(&self, cli: &CompareCli) -> CompareRequest {
        let mut request = CompareRequest::new(&cli.reference)
            .with_walker_config(self.config.scan.clone())
            .with_mode(if cli.by_name_only {
                CompareMode::ByName
            } else {
                CompareMode::ByContent
            })
            .with_direction(if cli.reverse {
                Direction::Duplicates
            } else {
                Direction::Completeness
            });
        if let Some(mirror) = &cli.mirror {
            request = request.with_mirror(mirror);
        }
        request
    }

    /// Validate roots, open the run's log, write every report, close the log
    ///
    /// The log is closed on every path: explicitly on success, by drop when a
    /// report step fails.
    pub fn execute(
        &self,
        cli: &CompareCli,
        arguments: &[String],
        now: DateTime<Utc>,
    ) -> Result<RunOutcome, ApiError> {
        let request = self.request(cli);

        canonicalize_root(&request.reference)?;
        if let Some(mirror) = &request.mirror {
            canonicalize_root(mirror)?;
        }

        let dir = sink::resolve_report_dir(self.config.report.directory.as_deref())?;
        let mut log = LogSink::open(&dir, &self.config.report.suffix, now, self.config.report.echo)?;
        info!(log = %log.path().display(), "Report log opened");

        render::write_header(&mut log, now, arguments)?;

        let verbose = cli.verbose;
        let summary = compare::run(&request, &mut log, &mut |event: &ProgressEvent| {
            if let Some(line) = presentation::format_progress(event, verbose) {
                println!("{}", line);
            }
        })?;

        let log = log.finish()?;
        Ok(RunOutcome { summary, log })
    }
}

/// Run a content-tool subcommand, returning the text to print
pub fn execute_content(
    command: &ContentCommands,
    config: &TreeCompareConfig,
) -> Result<String, ApiError> {
    match command {
        ContentCommands::Import { file, dry_run } => run_host(
            HostRequest::Import {
                content_file: file.clone(),
            },
            *dry_run,
            config,
        ),
        ContentCommands::Convert { file, dry_run } => run_host(
            HostRequest::Convert {
                content_file: file.clone(),
            },
            *dry_run,
            config,
        ),
        ContentCommands::NdjsonToJson { input, output } => {
            let reader = BufReader::new(File::open(input).map_err(NdjsonError::Io)?);
            let writer = BufWriter::new(File::create(output).map_err(NdjsonError::Io)?);
            let count = ndjson::convert(reader, writer)?;
            Ok(format!(
                "Converted {} records from {} to {}",
                count,
                input.display(),
                output.display()
            ))
        }
    }
}

fn run_host(
    request: HostRequest,
    dry_run: bool,
    config: &TreeCompareConfig,
) -> Result<String, ApiError> {
    let invocation = request.prepare(&config.host)?;
    if dry_run {
        return Ok(presentation::format_invocation(&invocation));
    }

    println!(
        "### Requesting Blender to process the content in file '{}', detected as being in the {} format...",
        request.content_file().display(),
        invocation.format()
    );
    invocation.launch()?;

    Ok(match invocation.target() {
        Some(target) => format!(
            "The file '{}' has been successfully generated from '{}'.",
            target.display(),
            request.content_file().display()
        ),
        None => format!("Imported '{}'.", request.content_file().display()),
    })
}
