// ABOUTME: Shared test utilities and TCX fixtures for integration tests
// ABOUTME: Provides document builders, file helpers, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `tcx_activity`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Smallest document the decoder accepts: one lap with a total time and an empty track
pub fn minimal_tcx(sport: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="{sport}">
      <Id>2023-05-01T10:00:00Z</Id>
      <Lap StartTime="2023-05-01T10:00:00Z">
        <TotalTimeSeconds>3600</TotalTimeSeconds>
        <Track/>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
    )
}

/// Document with the given lap body inside an otherwise valid activity
pub fn tcx_with_lap(lap_body: &str) -> String {
    format!(
        r#"<TrainingCenterDatabase>
  <Activities>
    <Activity Sport="Running">
      <Id>2023-05-01T10:00:00Z</Id>
      <Lap>{lap_body}</Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
    )
}

/// Document whose single lap carries the given trackpoint elements
pub fn tcx_with_trackpoints(trackpoints: &str) -> String {
    tcx_with_lap(&format!(
        "<TotalTimeSeconds>60</TotalTimeSeconds><Track>{trackpoints}</Track>"
    ))
}

/// Realistic device export: namespaced, three trackpoints, heart rate and totals
pub fn sample_tcx() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Activities>
    <Activity Sport="Biking">
      <Id>2023-05-01T10:00:00.000Z</Id>
      <Lap StartTime="2023-05-01T10:00:00.000Z">
        <TotalTimeSeconds>3600.0</TotalTimeSeconds>
        <DistanceMeters>10000.0</DistanceMeters>
        <AverageHeartRateBpm>
          <Value>141</Value>
        </AverageHeartRateBpm>
        <Intensity>Active</Intensity>
        <Track>
          <Trackpoint>
            <Time>2023-05-01T10:00:00.000Z</Time>
            <Position>
              <LatitudeDegrees>47.3769</LatitudeDegrees>
              <LongitudeDegrees>8.5417</LongitudeDegrees>
            </Position>
            <AltitudeMeters>408.2</AltitudeMeters>
            <DistanceMeters>0.0</DistanceMeters>
            <HeartRateBpm>
              <Value>120</Value>
            </HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2023-05-01T10:00:01Z</Time>
            <Position>
              <LatitudeDegrees>47.3770</LatitudeDegrees>
              <LongitudeDegrees>8.5418</LongitudeDegrees>
            </Position>
            <AltitudeMeters>408.6</AltitudeMeters>
            <DistanceMeters>13.4</DistanceMeters>
            <HeartRateBpm>
              <Value>122</Value>
            </HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2023-05-01T10:00:02.5Z</Time>
            <DistanceMeters>26.9</DistanceMeters>
          </Trackpoint>
        </Track>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#
        .to_owned()
}

/// Well-formed XML that is not a TCX document
pub fn gpx_document() -> String {
    r#"<?xml version="1.0"?>
<gpx version="1.1" creator="test"><trk><trkseg/></trk></gpx>"#
        .to_owned()
}

/// Write `contents` to `dir/name`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
