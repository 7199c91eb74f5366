// ABOUTME: Configuration module for the TCX reader and CLI
// ABOUTME: Environment-driven settings for scanning, decoding, and log verbosity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! All settings come from environment variables; there is no config file.

/// Environment variable configuration
pub mod environment;

pub use environment::{LogLevel, TcxConfig};
