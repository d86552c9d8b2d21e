//! CLI parse: clap types for both binaries. No behavior; definitions only.

use crate::ndjson::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const COMPARE_LONG_ABOUT: &str = "\
Scans the reference tree for duplicated files (same content or same name at \
different paths). If a mirror tree is given, also looks for content present in \
one tree but not in the other, to make sure the reference is complete and the \
mirror up to date. With --reverse, looks instead for files common to both \
trees, to make sure they do not overlap.

Reports are appended to ~/<YYYYMMDD>-tree-file-compare.log.";

/// tree-file-compare: duplicate and completeness checks between directory trees
#[derive(Parser, Debug)]
#[command(name = "tree-file-compare", version)]
#[command(about = "Find duplicated and missing files between a reference tree and a mirror")]
#[command(long_about = COMPARE_LONG_ABOUT)]
pub struct CompareCli {
    /// Tree treated as the authoritative copy
    #[arg(long, value_name = "PATH")]
    pub reference: PathBuf,

    /// Second tree to compare with the reference
    #[arg(long, value_name = "PATH")]
    pub mirror: Option<PathBuf>,

    /// Compare names only; no content is read (useful when names identify content, as for archives)
    #[arg(long)]
    pub by_name_only: bool,

    /// Search for files common to both trees rather than files lacking in one
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Verbose mode: debug diagnostics and a summary table
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path (layered over the global config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// content-tool: content-file helpers
#[derive(Parser, Debug)]
#[command(name = "content-tool", version)]
#[command(about = "Import or convert 3D content through Blender, and convert NDJSON files")]
pub struct ContentCli {
    #[command(subcommand)]
    pub command: ContentCommands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Import a content file into a blank Blender scene (glTF, Collada, FBX, IFC)
    Import {
        file: PathBuf,
        /// Print the host invocation instead of launching it
        #[arg(long)]
        dry_run: bool,
    },
    /// Convert a content file to binary glTF 2.0 (.glb) next to it
    Convert {
        file: PathBuf,
        /// Print the host invocation instead of launching it
        #[arg(long)]
        dry_run: bool,
    },
    /// Convert newline-delimited JSON into one JSON array
    NdjsonToJson {
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}
