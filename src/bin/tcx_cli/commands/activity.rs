// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-file commands for tcx-cli
// ABOUTME: Decodes one TCX file and prints its description or derived metrics

use std::path::Path;

use anyhow::Result;
use tcx_activity::decoder::{decode_file_with, DecodeOptions};
use tcx_activity::metrics::ActivitySummary;
use tracing::info;

use crate::helpers::display;

/// Decode `path` and print the one-line description, or the full record as JSON
pub fn show(path: &Path, json: bool, options: &DecodeOptions) -> Result<()> {
    let record = decode_file_with(path, options)?;
    info!(file = %path.display(), "Decoded activity");

    if json {
        display::print_json(&record)
    } else {
        display::display_activity(&record);
        Ok(())
    }
}

/// Decode `path` and print derived metrics
pub fn summary(path: &Path, json: bool, options: &DecodeOptions) -> Result<()> {
    let record = decode_file_with(path, options)?;
    let summary = ActivitySummary::from_record(&record);

    if json {
        display::print_json(&summary)
    } else {
        display::display_summary(&record, &summary);
        Ok(())
    }
}
