// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for tcx-cli
// ABOUTME: Renders activities, summaries, and errors as text or JSON

use anyhow::Result;
use serde::Serialize;
use tcx_activity::metrics::ActivitySummary;
use tcx_activity::{ActivityRecord, ErrorResponse, TcxError};

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the one-line activity description
pub fn display_activity(record: &ActivityRecord) {
    println!("{record}");
}

/// Print the description followed by derived metrics
pub fn display_summary(record: &ActivityRecord, summary: &ActivitySummary) {
    println!("{record}");
    if !record.name().is_empty() {
        println!("   Name: {}", record.name());
    }
    println!(
        "   Track points: {} ({} with position)",
        summary.track_points, summary.positioned_points
    );
    match summary.average_speed_kmh {
        Some(speed) => println!("   Average speed: {speed:.2} km/h"),
        None => println!("   Average speed: n/a"),
    }
    match summary.average_pace_min_per_km {
        Some(pace) => println!("   Average pace: {pace:.2} min/km"),
        None => println!("   Average pace: n/a"),
    }
    if summary.average_heart_rate_bpm > 0 {
        println!("   Average heart rate: {} bpm", summary.average_heart_rate_bpm);
    }
    println!(
        "   Recomputed distance: {:.1} m (recorded {:.1} m)",
        summary.recomputed_distance_meters, summary.distance_meters
    );
}

/// Print an error with its status code to stderr
pub fn display_error(error: &TcxError) {
    let response = ErrorResponse::from(error);
    eprintln!("error {}: {}", response.code, response.message);
}
