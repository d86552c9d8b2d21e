//! tree-file-compare binary
//!
//! Scans a reference tree (and optionally a mirror) and appends duplicate and
//! completeness reports to the run's log file.

use chrono::Utc;
use clap::Parser;
use std::process;
use tracing::{error, info};
use treecompare::cli::{self, CompareCli, CompareRun};
use treecompare::config::{ConfigLoader, TreeCompareConfig};
use treecompare::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = CompareCli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(3);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("tree-file-compare starting");
    if cli.verbose {
        println!("Reference path = {}", cli.reference.display());
        match &cli.mirror {
            Some(mirror) => println!("Mirror path = {}", mirror.display()),
            None => println!("Mirror path = (none)"),
        }
    }
    if cli.by_name_only {
        println!("Comparison will be based on names only, rather than on content too.");
    }
    if cli.reverse {
        println!("Reverse comparison will be performed: looking for duplicates rather than lacking files.");
    }

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    match CompareRun::new(config).execute(&cli, &arguments, Utc::now()) {
        Ok(outcome) => {
            info!("Comparison completed successfully");
            if cli.verbose {
                println!("{}", cli::format_summary_table(&outcome.summary));
            }
            println!("{}", cli::format_outcome(&outcome.summary, &outcome.log));
        }
        Err(e) => {
            error!("Comparison failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(cli::exit_code(&e));
        }
    }
}

fn load_config(cli: &CompareCli) -> Result<TreeCompareConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: --log-level over --verbose over config file over defaults.
fn build_logging_config(cli: &CompareCli, config: &TreeCompareConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    logging
}
