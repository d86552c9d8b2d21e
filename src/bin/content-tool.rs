//! content-tool binary
//!
//! Hands content files to Blender for import or glTF conversion, and converts
//! NDJSON files to JSON.

use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::{error, info};
use treecompare::cli::{self, ContentCli};
use treecompare::config::ConfigLoader;
use treecompare::logging::init_logging;

fn main() {
    let cli = ContentCli::parse();

    if let Err(e) = run(&cli) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &ContentCli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .context("loading configuration")?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(Some(&logging))?;

    info!("content-tool starting");
    let output = cli::execute_content(&cli.command, &config)?;
    println!("{}", output);
    Ok(())
}
