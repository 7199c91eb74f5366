// ABOUTME: Core types for the TCX activity reader
// ABOUTME: Foundation crate with the activity data model, error taxonomy, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TCX Core
//!
//! Foundation crate shared by the decoder, the batch scanner and the CLI.
//! It carries no parsing logic of its own, only the types the rest of the
//! workspace agrees on.
//!
//! ## Modules
//!
//! - **errors**: `TcxError`, the `StatusCode` compatibility codes, and `ErrorResponse`
//! - **models**: `ActivityRecord` and `TrackPoint`
//! - **constants**: unit conversion factors and TCX element names

/// Error taxonomy with numeric status codes
pub mod errors;

/// Parsed activity data model
pub mod models;

/// Unit conversion factors and TCX schema names
pub mod constants;

pub use errors::{ErrorResponse, StatusCode, TcxError, TcxResult};
pub use models::{ActivityRecord, TrackPoint};
