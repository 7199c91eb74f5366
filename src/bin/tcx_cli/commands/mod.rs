// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for tcx-cli
// ABOUTME: Provides access to activity, scan, and export commands

pub mod activity;
pub mod export;
pub mod scan;
