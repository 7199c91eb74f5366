// ABOUTME: Unit conversion constants and TCX schema element names
// ABOUTME: Provides named constants to eliminate magic numbers and strings in the decoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units {
    /// Meters per kilometer conversion factor
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Element and attribute names from the Training Center XML schema
pub mod tcx {
    /// Required root element
    pub const ROOT: &str = "TrainingCenterDatabase";
    /// Container for activity elements
    pub const ACTIVITIES: &str = "Activities";
    /// A single recorded activity
    pub const ACTIVITY: &str = "Activity";
    /// Attribute on `Activity` naming the sport
    pub const SPORT: &str = "Sport";
    /// Activity identifier, an ISO-8601 timestamp
    pub const ID: &str = "Id";
    /// Lap segment within an activity
    pub const LAP: &str = "Lap";
    /// Lap duration in seconds
    pub const TOTAL_TIME_SECONDS: &str = "TotalTimeSeconds";
    /// Lap total or trackpoint cumulative distance
    pub const DISTANCE_METERS: &str = "DistanceMeters";
    /// Wrapper for the lap's average heart rate
    pub const AVERAGE_HEART_RATE_BPM: &str = "AverageHeartRateBpm";
    /// Container for trackpoints
    pub const TRACK: &str = "Track";
    /// Trackpoint timestamp
    pub const TIME: &str = "Time";
    /// Trackpoint GPS position
    pub const POSITION: &str = "Position";
    /// Latitude inside `Position`
    pub const LATITUDE_DEGREES: &str = "LatitudeDegrees";
    /// Longitude inside `Position`
    pub const LONGITUDE_DEGREES: &str = "LongitudeDegrees";
    /// Wrapper for a trackpoint heart rate sample
    pub const HEART_RATE_BPM: &str = "HeartRateBpm";
    /// Trackpoint altitude
    pub const ALTITUDE_METERS: &str = "AltitudeMeters";
}

/// Defaults for batch scanning
pub mod scan {
    /// Substring a filename must contain to be picked up by a directory scan
    pub const DEFAULT_FILE_PATTERN: &str = ".tcx";
}
