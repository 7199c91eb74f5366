// ABOUTME: tcx-cli - command-line front end for the TCX activity reader
// ABOUTME: Shows, summarizes, scans, and exports TCX activity files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One-line description of an activity
//! tcx-cli show morning_run.tcx
//!
//! # Full decoded record as JSON
//! tcx-cli show morning_run.tcx --json
//!
//! # Speed, pace, and recomputed distance
//! tcx-cli summary morning_run.tcx
//!
//! # Decode every .tcx file in a directory (defaults to $TCX_DATA_DIR)
//! tcx-cli scan ~/activities
//!
//! # Export all track points to CSV
//! tcx-cli export ~/activities ride.tcx --output points.csv
//!
//! # Print the effective configuration
//! tcx-cli config
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tcx_activity::config::{LogLevel, TcxConfig};
use tcx_activity::logging::LoggingConfig;
use tcx_activity::TcxError;
use tracing::debug;

use helpers::display;

#[derive(Parser)]
#[command(
    name = "tcx-cli",
    about = "TCX activity reader",
    long_about = "Decode Training Center XML activity files and derive pace, speed, and distance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (overrides `RUST_LOG` and `TCX_LOG_LEVEL`)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Copy latitude into longitude, matching older readers
    #[arg(long, global = true)]
    legacy_longitude: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the one-line description of an activity
    Show {
        /// TCX file to decode
        file: PathBuf,

        /// Print the decoded record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print derived metrics for an activity
    Summary {
        /// TCX file to decode
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode every TCX-named file in a directory
    Scan {
        /// Directory to scan (defaults to `TCX_DATA_DIR`)
        dir: Option<PathBuf>,

        /// Print activities and failures as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export track points to CSV
    Export {
        /// TCX files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// CSV file to write (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.downcast_ref::<TcxError>() {
                Some(tcx_error) => display::display_error(tcx_error),
                None => eprintln!("error: {error:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TcxConfig::from_env()?;
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    if cli.legacy_longitude {
        config.legacy_longitude = true;
    }

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else {
        logging.with_default_level(config.log_level)
    };
    logging.init()?;
    debug!("{}", config.summary());

    let decode_options = config.decode_options();
    let scan_options = config.scan_options();

    match cli.command {
        Command::Show { file, json } => commands::activity::show(&file, json, &decode_options),
        Command::Summary { file, json } => {
            commands::activity::summary(&file, json, &decode_options)
        }
        Command::Scan { dir, json } => {
            let dir = dir.unwrap_or_else(|| config.data_dir.clone());
            commands::scan::run(&dir, json, &scan_options)
        }
        Command::Export { inputs, output } => {
            commands::export::run(&inputs, output.as_deref(), &scan_options)
        }
        Command::Config => display::print_json(&config),
    }
}
