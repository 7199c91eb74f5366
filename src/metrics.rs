// ABOUTME: Derived activity metrics computed from a decoded ActivityRecord
// ABOUTME: Average speed and pace from lap totals, plus geodesic distance recomputed from track points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Derived metrics

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use tcx_core::constants::units::{METERS_PER_KM, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use tcx_core::models::{ActivityRecord, TrackPoint};

/// Lap total distance in meters, as recorded by the device
#[must_use]
pub fn distance_static(record: &ActivityRecord) -> f64 {
    record.distance_meters()
}

/// Lap total time in seconds, as recorded by the device
#[must_use]
pub fn duration_static(record: &ActivityRecord) -> f64 {
    record.duration_seconds()
}

/// Average speed in km/h, `None` when the lap has no duration
#[must_use]
pub fn average_speed(record: &ActivityRecord) -> Option<f64> {
    let hours = duration_static(record) / SECONDS_PER_HOUR;
    if hours == 0.0 {
        return None;
    }
    Some((distance_static(record) / METERS_PER_KM) / hours)
}

/// Average pace in min/km, `None` when the lap has no distance
#[must_use]
pub fn average_pace(record: &ActivityRecord) -> Option<f64> {
    let kilometers = distance_static(record) / METERS_PER_KM;
    if kilometers == 0.0 {
        return None;
    }
    Some((duration_static(record) / SECONDS_PER_MINUTE) / kilometers)
}

/// Distance in meters summed over consecutive track point pairs on the WGS84 ellipsoid
///
/// Fewer than two points yield 0. Altitude is ignored. The figure is only as
/// good as the stored positions, so treat it as a diagnostic next to
/// [`distance_static`].
#[must_use]
pub fn distance_recomputed(record: &ActivityRecord) -> f64 {
    record
        .track_points()
        .windows(2)
        .map(|pair| geodesic_distance(&pair[0], &pair[1]))
        .sum()
}

fn geodesic_distance(from: &TrackPoint, to: &TrackPoint) -> f64 {
    let from = Point::new(from.longitude(), from.latitude());
    let to = Point::new(to.longitude(), to.latitude());
    Geodesic::distance(from, to)
}

/// Derived figures for one activity, ready for display or JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Sport tag
    pub activity_type: String,
    /// Lap total distance in meters
    pub distance_meters: f64,
    /// Lap total time in seconds
    pub duration_seconds: f64,
    /// Average speed in km/h
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_speed_kmh: Option<f64>,
    /// Average pace in min/km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_pace_min_per_km: Option<f64>,
    /// Geodesic distance over the track in meters
    pub recomputed_distance_meters: f64,
    /// Lap average heart rate, 0 when absent
    pub average_heart_rate_bpm: u32,
    /// Number of track points
    pub track_points: usize,
    /// Track points carrying a GPS fix
    pub positioned_points: usize,
}

impl ActivitySummary {
    /// Compute every derived metric for `record`
    #[must_use]
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            activity_type: record.activity_type().to_owned(),
            distance_meters: distance_static(record),
            duration_seconds: duration_static(record),
            average_speed_kmh: average_speed(record),
            average_pace_min_per_km: average_pace(record),
            recomputed_distance_meters: distance_recomputed(record),
            average_heart_rate_bpm: record.average_heart_rate_bpm(),
            track_points: record.len(),
            positioned_points: record
                .track_points()
                .iter()
                .filter(|point| point.has_position())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use tcx_core::models::ActivityRecordBuilder;

    fn record(distance: f64, duration: f64) -> ActivityRecord {
        let id = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        ActivityRecordBuilder::new(id, "Running", duration)
            .distance_meters(distance)
            .build()
    }

    #[test]
    fn test_speed_and_pace_guard_zero() {
        assert_eq!(average_speed(&record(5000.0, 0.0)), None);
        assert_eq!(average_pace(&record(0.0, 600.0)), None);
    }

    #[test]
    fn test_recomputed_distance_skips_final_point() {
        let id = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let single = ActivityRecordBuilder::new(id, "Running", 1.0)
            .track_point(TrackPoint::new(id).with_position(0.0, 0.0))
            .build();
        assert_eq!(distance_recomputed(&single), 0.0);

        // One degree of latitude along a meridian is about 110.6 km at the equator.
        let pair = ActivityRecordBuilder::new(id, "Running", 1.0)
            .track_point(TrackPoint::new(id).with_position(0.0, 0.0))
            .track_point(TrackPoint::new(id + Duration::seconds(1)).with_position(1.0, 0.0))
            .build();
        let meters = distance_recomputed(&pair);
        assert!((meters - 110_574.0).abs() < 5.0, "got {meters}");
    }
}
