// ABOUTME: Main library entry point for the TCX activity reader
// ABOUTME: Decodes Training Center XML files and derives pace, speed, and distance metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TCX Activity Reader
//!
//! Reads TCX (Training Center XML) activity files written by GPS fitness
//! devices into a typed [`ActivityRecord`], and derives summary statistics
//! from it.
//!
//! ## Pipeline
//!
//! - **xml**: child lookup and zero-default coercion over `roxmltree` nodes
//! - **timestamp**: normalizes device timestamps to whole-second UTC
//! - **decoder**: walks `Activity`, `Lap`, `Track`, and `Trackpoint`
//! - **metrics**: speed, pace, and geodesic distance
//!
//! ## Around the pipeline
//!
//! - **scanner**: decodes every TCX-named file in a directory
//! - **export**: CSV rows of track points
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tcx_activity::{decoder, metrics};
//!
//! let record = decoder::decode_file(Path::new("morning_run.tcx"))?;
//! println!("{record}");
//! if let Some(pace) = metrics::average_pace(&record) {
//!     println!("{pace:.2} min/km");
//! }
//! # Ok::<(), tcx_activity::TcxError>(())
//! ```

/// XML tree navigation helpers
pub mod xml;

/// Timestamp normalization
pub mod timestamp;

/// TCX document decoder
pub mod decoder;

/// Derived metrics over decoded records
pub mod metrics;

/// Directory batch scanning
pub mod scanner;

/// CSV export of track points
pub mod export;

/// Environment configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

pub use decoder::{decode, decode_file, decode_str, DecodeOptions, LongitudeSource};
pub use tcx_core::errors::{ErrorResponse, StatusCode, TcxError, TcxResult};
pub use tcx_core::models::{ActivityRecord, ActivityRecordBuilder, TrackPoint};
