// ABOUTME: Integration tests for directory batch scanning
// ABOUTME: Uses temporary directories to check filtering, ordering, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;

use tcx_activity::decoder::DecodeOptions;
use tcx_activity::scanner::{
    decode_directory, decode_directory_with, scan_directory, scan_report, ScanFailure,
    ScanOptions, ScanReport,
};
use tcx_activity::{StatusCode, TcxError};
use tempfile::TempDir;

/// Two valid activities, one broken `.tcx` file, and one unrelated file
fn populated_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(dir.path(), "run.tcx", &common::minimal_tcx("Running"));
    common::write_file(dir.path(), "ride.tcx", &common::sample_tcx());
    common::write_file(dir.path(), "route.gpx.tcx", &common::gpx_document());
    common::write_file(dir.path(), "notes.txt", "not an activity");
    dir
}

/// Matching files in the order the filesystem lists them
fn listing_order(dir: &TempDir, pattern: &str) -> Vec<PathBuf> {
    fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .contains(pattern)
        })
        .collect()
}

#[test]
fn test_scan_directory_filters_by_pattern() {
    let dir = populated_dir();
    let files = scan_directory(dir.path(), ".tcx").unwrap();

    assert_eq!(files.len(), 3);
    assert_eq!(files, listing_order(&dir, ".tcx"));
}

#[test]
fn test_scan_directory_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("archive.tcx")).unwrap();
    common::write_file(dir.path(), "run.tcx", &common::minimal_tcx("Running"));

    let files = scan_directory(dir.path(), ".tcx").unwrap();
    assert_eq!(files, vec![dir.path().join("run.tcx")]);
}

#[test]
fn test_decode_directory_skips_bad_files() {
    common::init_test_logging();
    let dir = populated_dir();

    let records = decode_directory(dir.path()).unwrap();
    assert_eq!(records.len(), 2);

    let expected: Vec<String> = listing_order(&dir, ".tcx")
        .into_iter()
        .filter(|path| !path.to_string_lossy().contains("gpx"))
        .map(|path| {
            if path.ends_with("run.tcx") {
                "Running".to_owned()
            } else {
                "Biking".to_owned()
            }
        })
        .collect();
    let actual: Vec<String> = records
        .iter()
        .map(|record| record.activity_type().to_owned())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let dir = populated_dir();
    let sequential = ScanOptions {
        parallel: false,
        ..ScanOptions::default()
    };

    let parallel_records = decode_directory_with(dir.path(), &ScanOptions::default()).unwrap();
    let sequential_records = decode_directory_with(dir.path(), &sequential).unwrap();
    assert_eq!(parallel_records, sequential_records);
}

#[test]
fn test_scan_report_records_failures() {
    common::init_test_logging();
    let dir = populated_dir();

    let report = scan_report(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(report.activities.len(), 2);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert!(failure.path.ends_with("route.gpx.tcx"));
    assert!(matches!(failure.error, TcxError::NotTcx { .. }));

    let responses = report.failure_responses();
    assert_eq!(responses[0].1.code, 401);
    assert!(report.first_unrecoverable().is_none());
}

#[test]
fn test_first_unrecoverable_ignores_per_file_failures() {
    let report = ScanReport {
        activities: Vec::new(),
        failures: vec![
            ScanFailure {
                path: PathBuf::from("route.tcx"),
                error: TcxError::NotTcx {
                    root: "gpx".to_owned(),
                },
            },
            ScanFailure {
                path: PathBuf::from("ride.tcx"),
                error: TcxError::Internal("pattern".to_owned()),
            },
        ],
    };

    let failure = report.first_unrecoverable().unwrap();
    assert_eq!(failure.path, PathBuf::from("ride.tcx"));
    assert_eq!(failure.error.status(), StatusCode::ServerError);
}

#[test]
fn test_custom_pattern_and_decode_options() {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(dir.path(), "ride.xml", &common::sample_tcx());
    common::write_file(dir.path(), "run.tcx", &common::minimal_tcx("Running"));

    let options = ScanOptions {
        file_pattern: ".xml".to_owned(),
        parallel: false,
        decode: DecodeOptions::legacy(),
    };
    let records = decode_directory_with(dir.path(), &options).unwrap();

    assert_eq!(records.len(), 1);
    let point = &records[0].track_points()[0];
    assert_eq!(point.longitude(), point.latitude());
}

#[test]
fn test_empty_directory_has_no_activities() {
    let dir = tempfile::tempdir().unwrap();

    let err = decode_directory(dir.path()).unwrap_err();
    assert!(matches!(err, TcxError::NoActivities(_)));
    assert_eq!(err.status(), StatusCode::NotFound);
}

#[test]
fn test_only_broken_files_has_no_activities() {
    let dir = tempfile::tempdir().unwrap();
    common::write_file(dir.path(), "broken.tcx", "<TrainingCenterDatabase>");

    let err = decode_directory(dir.path()).unwrap_err();
    assert!(matches!(err, TcxError::NoActivities(_)));
}

#[test]
fn test_file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = common::write_file(dir.path(), "run.tcx", &common::minimal_tcx("Running"));

    let err = decode_directory(&file).unwrap_err();
    assert!(matches!(err, TcxError::InvalidDirectory(_)));
    assert_eq!(err.status(), StatusCode::ServerError);
}

#[test]
fn test_missing_directory_is_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let err = scan_directory(&dir.path().join("absent"), ".tcx").unwrap_err();
    assert!(matches!(err, TcxError::InvalidDirectory(_)));
}
