// ABOUTME: Tabular export of track points across one or more activities
// ABOUTME: Flattens ActivityRecord samples into CSV rows with stable column names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tcx_core::errors::{TcxError, TcxResult};
use tcx_core::models::{ActivityRecord, TrackPoint};
use tracing::debug;

/// Column names, in [`TrackPointRow`] field order
pub const HEADERS: [&str; 6] = [
    "Time",
    "Latitude",
    "Longitude",
    "HeartRateBpm",
    "AltitudeMeter",
    "DistanceMeter",
];

/// One exported sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPointRow {
    /// Sample time
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
    /// Latitude in degrees
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Longitude in degrees
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Heart rate in BPM
    #[serde(rename = "HeartRateBpm")]
    pub heart_rate_bpm: u32,
    /// Altitude in meters
    #[serde(rename = "AltitudeMeter")]
    pub altitude_meter: f64,
    /// Cumulative distance in meters
    #[serde(rename = "DistanceMeter")]
    pub distance_meter: f64,
}

impl From<&TrackPoint> for TrackPointRow {
    fn from(point: &TrackPoint) -> Self {
        Self {
            time: point.time(),
            latitude: point.latitude(),
            longitude: point.longitude(),
            heart_rate_bpm: point.heart_rate_bpm(),
            altitude_meter: point.altitude_meters(),
            distance_meter: point.distance_meters(),
        }
    }
}

/// Flatten samples from every record, in record order then document order
#[must_use]
pub fn rows(records: &[ActivityRecord]) -> Vec<TrackPointRow> {
    records
        .iter()
        .flat_map(ActivityRecord::track_points)
        .map(TrackPointRow::from)
        .collect()
}

/// Write all samples as CSV with a header row
///
/// The header is written even when there are no samples.
///
/// # Errors
///
/// Returns [`TcxError::Export`] if serialization or the writer fails
pub fn write_csv<W: Write>(records: &[ActivityRecord], writer: W) -> TcxResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(HEADERS)
        .map_err(|e| TcxError::Export(e.to_string()))?;

    let rows = rows(records);
    for row in &rows {
        csv_writer
            .serialize(row)
            .map_err(|e| TcxError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| TcxError::Export(e.to_string()))?;
    debug!(rows = rows.len(), "Exported track points");
    Ok(rows.len())
}

/// Write all samples to a CSV file, creating or truncating it
///
/// # Errors
///
/// Returns [`TcxError::Io`] if the file cannot be created, otherwise see
/// [`write_csv`]
pub fn write_csv_file(records: &[ActivityRecord], path: &Path) -> TcxResult<usize> {
    let file = File::create(path).map_err(|e| TcxError::io(path, e))?;
    write_csv(records, file)
}
