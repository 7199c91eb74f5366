// ABOUTME: Directory batch scanning that decodes every TCX-named file in a folder
// ABOUTME: Isolates per-file failures and only escalates when nothing decodes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Batch Directory Scanning
//!
//! Files are selected when their name *contains* the configured pattern
//! (`.tcx` by default), so `ride.tcx.bak` is picked up too. Results follow
//! `read_dir` order, which is filesystem-dependent. Decoding runs on the
//! rayon pool unless disabled; the indexed parallel iterator keeps listing
//! order intact.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tcx_core::constants::scan::DEFAULT_FILE_PATTERN;
use tcx_core::errors::{ErrorResponse, TcxError, TcxResult};
use tcx_core::models::ActivityRecord;
use tracing::{error, info, warn};

use crate::decoder::{decode_file_with, DecodeOptions};

/// Options for a directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Substring a filename must contain
    pub file_pattern: String,
    /// Decode files on the rayon thread pool
    pub parallel: bool,
    /// Options forwarded to each decode
    pub decode: DecodeOptions,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            file_pattern: DEFAULT_FILE_PATTERN.to_owned(),
            parallel: true,
            decode: DecodeOptions::default(),
        }
    }
}

/// One file a scan could not decode
#[derive(Debug)]
pub struct ScanFailure {
    /// File that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: TcxError,
}

/// Outcome of a scan: successes and skipped files, both in listing order
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Decoded activities
    pub activities: Vec<ActivityRecord>,
    /// Files that were skipped
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// Serializable view of the failures
    #[must_use]
    pub fn failure_responses(&self) -> Vec<(PathBuf, ErrorResponse)> {
        self.failures
            .iter()
            .map(|failure| (failure.path.clone(), ErrorResponse::from(&failure.error)))
            .collect()
    }

    /// First failure that is not a per-file problem, if any
    #[must_use]
    pub fn first_unrecoverable(&self) -> Option<&ScanFailure> {
        self.failures
            .iter()
            .find(|failure| !failure.error.is_recoverable())
    }
}

/// List files in `dir` whose name contains `pattern`, in directory-listing order
///
/// # Errors
///
/// Returns [`TcxError::InvalidDirectory`] if `dir` is not an existing
/// directory, or [`TcxError::Io`] if listing fails part-way
pub fn scan_directory(dir: &Path, pattern: &str) -> TcxResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TcxError::InvalidDirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| TcxError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TcxError::io(dir, e))?;
        let path = entry.path();
        let matches = entry.file_name().to_string_lossy().contains(pattern);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Decode every matching file in `dir`, collecting successes and failures
///
/// # Errors
///
/// Returns [`TcxError::InvalidDirectory`] for a bad directory. Per-file
/// failures are recorded in the report, never returned.
pub fn scan_report(dir: &Path, options: &ScanOptions) -> TcxResult<ScanReport> {
    let files = scan_directory(dir, &options.file_pattern)?;
    info!(
        directory = %dir.display(),
        candidates = files.len(),
        parallel = options.parallel,
        "Scanning directory for TCX files"
    );

    let decode = |path: &PathBuf| decode_file_with(path, &options.decode);
    let outcomes: Vec<TcxResult<ActivityRecord>> = if options.parallel {
        files.par_iter().map(decode).collect()
    } else {
        files.iter().map(decode).collect()
    };

    let mut report = ScanReport::default();
    for (path, outcome) in files.into_iter().zip(outcomes) {
        match outcome {
            Ok(record) => report.activities.push(record),
            Err(error) if error.is_recoverable() => {
                warn!(
                    file = %path.display(),
                    status = error.status().code(),
                    error = %error,
                    "Skipping file"
                );
                report.failures.push(ScanFailure { path, error });
            }
            Err(error) => {
                error!(
                    file = %path.display(),
                    status = error.status().code(),
                    error = %error,
                    "Unexpected failure while scanning"
                );
                report.failures.push(ScanFailure { path, error });
            }
        }
    }
    Ok(report)
}

/// Decode every matching file in `dir` with default options
///
/// # Errors
///
/// See [`decode_directory_with`]
pub fn decode_directory(dir: &Path) -> TcxResult<Vec<ActivityRecord>> {
    decode_directory_with(dir, &ScanOptions::default())
}

/// Decode every matching file in `dir`, returning only the successes
///
/// # Errors
///
/// Returns [`TcxError::InvalidDirectory`] for a bad directory and
/// [`TcxError::NoActivities`] when no file decodes
pub fn decode_directory_with(dir: &Path, options: &ScanOptions) -> TcxResult<Vec<ActivityRecord>> {
    let report = scan_report(dir, options)?;
    if report.activities.is_empty() {
        return Err(TcxError::NoActivities(dir.to_path_buf()));
    }
    Ok(report.activities)
}
