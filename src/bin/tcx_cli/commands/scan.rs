// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Directory scan command for tcx-cli
// ABOUTME: Decodes every TCX-named file in a folder and reports skipped files

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tcx_activity::metrics::ActivitySummary;
use tcx_activity::scanner::{scan_report, ScanOptions};
use tcx_activity::TcxError;

use crate::helpers::display;

/// Scan `dir` and print one line per decoded activity
pub fn run(dir: &Path, json: bool, options: &ScanOptions) -> Result<()> {
    let report = scan_report(dir, options)?;

    if json {
        let activities: Vec<_> = report
            .activities
            .iter()
            .map(|record| {
                json!({
                    "id": record.id(),
                    "summary": ActivitySummary::from_record(record),
                })
            })
            .collect();
        let failures: Vec<_> = report
            .failure_responses()
            .into_iter()
            .map(|(path, error)| json!({ "file": path, "error": error }))
            .collect();
        display::print_json(&json!({ "activities": activities, "failures": failures }))?;
    } else {
        for record in &report.activities {
            display::display_activity(record);
        }
        for failure in &report.failures {
            let status = failure.error.status();
            eprintln!(
                "skipped {} ({} {}): {}",
                failure.path.display(),
                status,
                status.description(),
                failure.error
            );
        }
    }

    if let Some(failure) = report.first_unrecoverable() {
        anyhow::bail!("{}: {}", failure.path.display(), failure.error);
    }

    if report.activities.is_empty() {
        return Err(TcxError::NoActivities(dir.to_path_buf()).into());
    }
    Ok(())
}
