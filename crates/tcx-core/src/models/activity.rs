// ABOUTME: Parsed TCX activity model including ActivityRecord, its builder, and TrackPoint
// ABOUTME: Immutable once built; numeric fields default to zero when the source omits them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::units::METERS_PER_KM;

/// One GPS/sensor sample from a lap's track
///
/// Zero stands in for every optional reading the device did not record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Sample time (UTC, whole seconds)
    time: DateTime<Utc>,
    /// Latitude in signed degrees
    latitude: f64,
    /// Longitude in signed degrees
    longitude: f64,
    /// Heart rate in beats per minute
    heart_rate_bpm: u32,
    /// Altitude in meters
    altitude_meters: f64,
    /// Cumulative distance in meters
    distance_meters: f64,
}

impl TrackPoint {
    /// Create a sample at `time` with every reading zeroed
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            latitude: 0.0,
            longitude: 0.0,
            heart_rate_bpm: 0,
            altitude_meters: 0.0,
            distance_meters: 0.0,
        }
    }

    /// Set the position
    #[must_use]
    pub const fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.heart_rate_bpm = bpm;
        self
    }

    /// Set the altitude
    #[must_use]
    pub const fn with_altitude(mut self, meters: f64) -> Self {
        self.altitude_meters = meters;
        self
    }

    /// Set the cumulative distance
    #[must_use]
    pub const fn with_distance(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Sample time
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Latitude in degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Heart rate in BPM, 0 when not recorded
    #[must_use]
    pub const fn heart_rate_bpm(&self) -> u32 {
        self.heart_rate_bpm
    }

    /// Altitude in meters, 0 when not recorded
    #[must_use]
    pub const fn altitude_meters(&self) -> f64 {
        self.altitude_meters
    }

    /// Cumulative distance in meters, 0 when not recorded
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Whether the sample carries a non-zero position
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }
}

/// One parsed activity: the first lap of the first `Activity` in a TCX document
///
/// Distance and duration come from the lap's own totals rather than being
/// recomputed from the track. Fields are private; use [`ActivityRecordBuilder`]
/// to construct and the accessors to read.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tcx_core::models::ActivityRecordBuilder;
///
/// let id = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
/// let record = ActivityRecordBuilder::new(id, "Running", 3600.0)
///     .distance_meters(10_000.0)
///     .build();
///
/// assert_eq!(
///     record.to_string(),
///     "Running 10 km at 2023-05-01T10:00:00Z for 3600 seconds."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Activity identifier timestamp, the record's natural key
    id: DateTime<Utc>,
    /// Lap text content
    name: String,
    /// Free-form sport tag (e.g. "Running", "Biking")
    activity_type: String,
    /// Lap total distance in meters
    distance_meters: f64,
    /// Lap total time in seconds
    duration_seconds: f64,
    /// Lap average heart rate in BPM, 0 when absent
    average_heart_rate_bpm: u32,
    /// Samples in document order
    track_points: Vec<TrackPoint>,
}

impl ActivityRecord {
    /// Identifying timestamp
    #[must_use]
    pub const fn id(&self) -> DateTime<Utc> {
        self.id
    }

    /// Display name taken from the lap node text
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sport tag
    #[must_use]
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    /// Lap total distance in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Lap total time in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Lap average heart rate in BPM
    #[must_use]
    pub const fn average_heart_rate_bpm(&self) -> u32 {
        self.average_heart_rate_bpm
    }

    /// Samples in document order
    #[must_use]
    pub fn track_points(&self) -> &[TrackPoint] {
        &self.track_points
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.track_points.len()
    }

    /// Whether the lap carried no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.track_points.is_empty()
    }
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} km at {} for {} seconds.",
            self.activity_type,
            self.distance_meters / METERS_PER_KM,
            self.id.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.duration_seconds
        )
    }
}

/// Builder for [`ActivityRecord`]
///
/// The identifying timestamp, sport tag and duration are required up front;
/// every other field starts at its documented default.
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder {
    record: ActivityRecord,
}

impl ActivityRecordBuilder {
    /// Start a record with its required fields
    #[must_use]
    pub fn new(
        id: DateTime<Utc>,
        activity_type: impl Into<String>,
        duration_seconds: f64,
    ) -> Self {
        Self {
            record: ActivityRecord {
                id,
                name: String::new(),
                activity_type: activity_type.into(),
                distance_meters: 0.0,
                duration_seconds,
                average_heart_rate_bpm: 0,
                track_points: Vec::new(),
            },
        }
    }

    /// Set the display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    /// Set the lap total distance
    #[must_use]
    pub const fn distance_meters(mut self, meters: f64) -> Self {
        self.record.distance_meters = meters;
        self
    }

    /// Set the lap average heart rate
    #[must_use]
    pub const fn average_heart_rate_bpm(mut self, bpm: u32) -> Self {
        self.record.average_heart_rate_bpm = bpm;
        self
    }

    /// Append one sample, keeping insertion order
    #[must_use]
    pub fn track_point(mut self, point: TrackPoint) -> Self {
        self.record.track_points.push(point);
        self
    }

    /// Replace all samples
    #[must_use]
    pub fn track_points(mut self, points: Vec<TrackPoint>) -> Self {
        self.record.track_points = points;
        self
    }

    /// Finish the record
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        self.record
    }
}
