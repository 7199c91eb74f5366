// ABOUTME: TCX decoder that walks Activity, Lap, Track, and Trackpoint into an ActivityRecord
// ABOUTME: Validates the root element, enforces required fields, and defaults optional readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TCX Decoder
//!
//! Decodes the first lap of the first activity in a Training Center XML
//! document. Required nodes (`Activities`, `Activity`, its `Sport` attribute,
//! `Id`, `Lap`, `TotalTimeSeconds`, and each trackpoint's `Time`) abort the
//! decode when absent; every other reading falls back to zero.
//!
//! ```rust
//! use tcx_activity::decoder::decode_str;
//!
//! let xml = r#"<TrainingCenterDatabase>
//!   <Activities>
//!     <Activity Sport="Running">
//!       <Id>2023-05-01T10:00:00Z</Id>
//!       <Lap StartTime="2023-05-01T10:00:00Z">
//!         <TotalTimeSeconds>3600</TotalTimeSeconds>
//!         <DistanceMeters>10000</DistanceMeters>
//!         <Track/>
//!       </Lap>
//!     </Activity>
//!   </Activities>
//! </TrainingCenterDatabase>"#;
//!
//! let record = decode_str(xml).unwrap();
//! assert_eq!(record.activity_type(), "Running");
//! assert_eq!(record.distance_meters(), 10000.0);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use tcx_core::constants::tcx;
use tcx_core::errors::{TcxError, TcxResult};
use tcx_core::models::{ActivityRecord, ActivityRecordBuilder, TrackPoint};
use tracing::{debug, warn};

use crate::timestamp;
use crate::xml::{
    child_elements, coerce, coerce_or_default, find_child, first_child_element, require_child,
    require_text, OnMissing,
};

/// Where a trackpoint's longitude is read from
///
/// Earlier readers copied `LatitudeDegrees` into the longitude column. That
/// behavior is available as an explicit opt-in for consumers whose stored
/// data depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeSource {
    /// Read `Position/LongitudeDegrees`
    #[default]
    LongitudeDegrees,
    /// Reuse `Position/LatitudeDegrees` (legacy)
    LatitudeMirror,
}

/// Options controlling how a document is decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Longitude field mapping
    pub longitude_source: LongitudeSource,
}

impl DecodeOptions {
    /// Options reproducing the legacy latitude-mirror longitude
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            longitude_source: LongitudeSource::LatitudeMirror,
        }
    }
}

/// Decode a parsed document with default options
///
/// # Errors
///
/// Returns [`TcxError::NotTcx`] for a wrong root element, or a structural,
/// numeric, or timestamp error when a required field is missing or malformed
pub fn decode(document: &Document<'_>) -> TcxResult<ActivityRecord> {
    decode_with(document, &DecodeOptions::default())
}

/// Decode a parsed document
///
/// # Errors
///
/// See [`decode`]
pub fn decode_with(document: &Document<'_>, options: &DecodeOptions) -> TcxResult<ActivityRecord> {
    let root = document.root_element();
    let root_name = root.tag_name().name();
    if root_name != tcx::ROOT {
        warn!(root = root_name, "Document is not a TCX file");
        return Err(TcxError::NotTcx {
            root: root_name.to_owned(),
        });
    }

    let activities = require_child(root, tcx::ACTIVITIES)?;
    let activity = require_child(activities, tcx::ACTIVITY)?;
    log_ignored_siblings(activities, tcx::ACTIVITY);

    let sport = activity
        .attribute(tcx::SPORT)
        .ok_or_else(|| TcxError::missing_attribute(tcx::SPORT, tcx::ACTIVITY))?;
    let id = timestamp::normalize(require_text(require_child(activity, tcx::ID)?)?)?;

    let lap = require_child(activity, tcx::LAP)?;
    log_ignored_siblings(activity, tcx::LAP);

    let duration_seconds: f64 = coerce(require_child(lap, tcx::TOTAL_TIME_SECONDS)?)?;
    let distance_meters: f64 =
        coerce_or_default(find_child(lap, tcx::DISTANCE_METERS, OnMissing::Silent))?;
    let average_heart_rate_bpm = wrapped_value(lap, tcx::AVERAGE_HEART_RATE_BPM)?;

    let track_points = match find_child(lap, tcx::TRACK, OnMissing::Warn) {
        Some(track) => decode_track(track, options)?,
        None => Vec::new(),
    };

    debug!(
        sport,
        track_points = track_points.len(),
        "Decoded TCX activity"
    );

    Ok(ActivityRecordBuilder::new(id, sport, duration_seconds)
        .name(lap_name(lap))
        .distance_meters(distance_meters)
        .average_heart_rate_bpm(average_heart_rate_bpm)
        .track_points(track_points)
        .build())
}

/// Parse XML text and decode it with default options
///
/// # Errors
///
/// Returns [`TcxError::MalformedXml`] if `xml` is not well-formed, otherwise
/// see [`decode`]
pub fn decode_str(xml: &str) -> TcxResult<ActivityRecord> {
    decode_str_with(xml, &DecodeOptions::default())
}

/// Parse XML text and decode it
///
/// # Errors
///
/// See [`decode_str`]
pub fn decode_str_with(xml: &str, options: &DecodeOptions) -> TcxResult<ActivityRecord> {
    let document = Document::parse(xml).map_err(|e| {
        warn!(error = %e, "Malformed XML");
        TcxError::MalformedXml(e.to_string())
    })?;
    decode_with(&document, options)
}

/// Read a file and decode it with default options
///
/// # Errors
///
/// Returns [`TcxError::PathNotFound`] if `path` does not exist, otherwise see
/// [`decode_str`]
pub fn decode_file(path: &Path) -> TcxResult<ActivityRecord> {
    decode_file_with(path, &DecodeOptions::default())
}

/// Read a file and decode it
///
/// The file handle is released before decoding starts.
///
/// # Errors
///
/// See [`decode_file`]
pub fn decode_file_with(path: &Path, options: &DecodeOptions) -> TcxResult<ActivityRecord> {
    let xml = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TcxError::PathNotFound(path.to_path_buf()),
        _ => TcxError::io(path, e),
    })?;
    decode_str_with(&xml, options)
}

fn decode_track(track: Node<'_, '_>, options: &DecodeOptions) -> TcxResult<Vec<TrackPoint>> {
    child_elements(track)
        .map(|trackpoint| decode_trackpoint(trackpoint, options))
        .collect()
}

fn decode_trackpoint(trackpoint: Node<'_, '_>, options: &DecodeOptions) -> TcxResult<TrackPoint> {
    let time = timestamp::normalize(require_text(require_child(trackpoint, tcx::TIME)?)?)?;

    let (latitude, longitude) = match find_child(trackpoint, tcx::POSITION, OnMissing::Silent) {
        Some(position) => decode_position(position, options)?,
        None => (0.0, 0.0),
    };

    let heart_rate = wrapped_value(trackpoint, tcx::HEART_RATE_BPM)?;
    let distance: f64 =
        coerce_or_default(find_child(trackpoint, tcx::DISTANCE_METERS, OnMissing::Silent))?;
    let altitude: f64 =
        coerce_or_default(find_child(trackpoint, tcx::ALTITUDE_METERS, OnMissing::Silent))?;

    Ok(TrackPoint::new(time)
        .with_position(latitude, longitude)
        .with_heart_rate(heart_rate)
        .with_distance(distance)
        .with_altitude(altitude))
}

fn decode_position(position: Node<'_, '_>, options: &DecodeOptions) -> TcxResult<(f64, f64)> {
    let latitude: f64 = coerce_or_default(find_child(
        position,
        tcx::LATITUDE_DEGREES,
        OnMissing::Warn,
    ))?;
    let longitude = match options.longitude_source {
        LongitudeSource::LongitudeDegrees => coerce_or_default(find_child(
            position,
            tcx::LONGITUDE_DEGREES,
            OnMissing::Warn,
        ))?,
        LongitudeSource::LatitudeMirror => latitude,
    };
    Ok((latitude, longitude))
}

/// Optional scalar wrapped one level deep, e.g. `<HeartRateBpm><Value>142</Value></HeartRateBpm>`
fn wrapped_value(parent: Node<'_, '_>, name: &str) -> TcxResult<u32> {
    let value = find_child(parent, name, OnMissing::Silent).and_then(first_child_element);
    coerce_or_default(value)
}

/// The lap node's own leading text, trimmed
///
/// Real devices leave only whitespace here, so the name is usually empty.
fn lap_name(lap: Node<'_, '_>) -> String {
    lap.text().map_or_else(String::new, |text| text.trim().to_owned())
}

fn log_ignored_siblings(parent: Node<'_, '_>, name: &str) {
    let count = child_elements(parent)
        .filter(|child| child.tag_name().name() == name)
        .count();
    if count > 1 {
        debug!(
            element = name,
            ignored = count - 1,
            "Only the first element is decoded"
        );
    }
}
