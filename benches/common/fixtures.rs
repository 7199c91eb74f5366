// ABOUTME: Benchmark fixtures that generate TCX documents of configurable size
// ABOUTME: Deterministic track generation for reproducible decode and metric timings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for TCX documents.
//!
//! Tracks start in Zurich and move north-east in small fixed steps, one
//! sample per second, so every run decodes the same bytes.

use std::fmt::Write;

/// Predefined track lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum TrackSize {
    /// Short effort, about 1.5 minutes of samples
    Small,
    /// One hour at 1 Hz
    Hour,
}

impl TrackSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Hour => 3600,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Hour => "hour",
        }
    }
}

/// Build a namespaced TCX document with `size` trackpoints
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_tcx(size: TrackSize) -> String {
    let count = size.count();
    let mut track = String::new();

    for index in 0..count {
        let hours = index / 3600;
        let minutes = (index / 60) % 60;
        let seconds = index % 60;
        let step = index as f64;
        let _ = write!(
            track,
            "<Trackpoint><Time>2023-05-01T{:02}:{minutes:02}:{seconds:02}.000Z</Time>\
             <Position><LatitudeDegrees>{:.6}</LatitudeDegrees><LongitudeDegrees>{:.6}</LongitudeDegrees></Position>\
             <AltitudeMeters>{:.1}</AltitudeMeters><DistanceMeters>{:.1}</DistanceMeters>\
             <HeartRateBpm><Value>{}</Value></HeartRateBpm></Trackpoint>",
            10 + hours,
            47.3769 + step * 0.00003,
            8.5417 + step * 0.00004,
            408.0 + (step * 0.1).sin() * 5.0,
            step * 4.2,
            120 + index % 40,
        );
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2023-05-01T10:00:00.000Z</Id>
      <Lap StartTime="2023-05-01T10:00:00.000Z">
        <TotalTimeSeconds>{count}</TotalTimeSeconds>
        <DistanceMeters>{:.1}</DistanceMeters>
        <AverageHeartRateBpm><Value>139</Value></AverageHeartRateBpm>
        <Track>{track}</Track>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#,
        count as f64 * 4.2,
    )
}
