// ABOUTME: Data model module for parsed TCX activities
// ABOUTME: Re-exports ActivityRecord, its builder, and TrackPoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity record, builder, and track point types
pub mod activity;

pub use activity::{ActivityRecord, ActivityRecordBuilder, TrackPoint};
