// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: CSV export command for tcx-cli
// ABOUTME: Flattens track points from files and directories into one table

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tcx_activity::decoder::decode_file_with;
use tcx_activity::export::{write_csv, write_csv_file};
use tcx_activity::scanner::{decode_directory_with, ScanOptions};
use tracing::info;

/// Export track points from every input to `output`, or stdout when `None`
pub fn run(inputs: &[PathBuf], output: Option<&Path>, options: &ScanOptions) -> Result<()> {
    let mut records = Vec::new();
    for input in inputs {
        if input.is_dir() {
            records.extend(decode_directory_with(input, options)?);
        } else {
            records.push(decode_file_with(input, &options.decode)?);
        }
    }

    let rows = match output {
        Some(path) => write_csv_file(&records, path)?,
        None => write_csv(&records, io::stdout().lock())?,
    };
    info!(
        activities = records.len(),
        rows,
        output = %output.map_or_else(|| "stdout".to_owned(), |p| p.display().to_string()),
        "Export complete"
    );
    Ok(())
}
