//! CLI domain: parse, route, output, and presentation only.
//! No comparison logic lives here; routes call into `compare`, `blender` and `ndjson`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::{CompareCli, ContentCli, ContentCommands};
pub use presentation::{format_invocation, format_outcome, format_progress, format_summary_table};
pub use route::{execute_content, CompareRun, RunOutcome};
