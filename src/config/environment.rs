// ABOUTME: Environment configuration for batch scanning, decoding options, and log level
// ABOUTME: Parses TCX_* environment variables into typed settings with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tcx_core::constants::scan::DEFAULT_FILE_PATTERN;

use crate::decoder::{DecodeOptions, LongitudeSource};
use crate::scanner::ScanOptions;

/// Default directory for `scan` when none is given
pub const ENV_DATA_DIR: &str = "TCX_DATA_DIR";
/// Filename substring selecting files in a batch scan
pub const ENV_FILE_PATTERN: &str = "TCX_FILE_PATTERN";
/// `true`/`false` toggle for parallel decoding
pub const ENV_PARALLEL_SCAN: &str = "TCX_PARALLEL_SCAN";
/// Opt-in for the legacy latitude-mirror longitude
pub const ENV_LEGACY_LONGITUDE: &str = "TCX_LEGACY_LONGITUDE";
/// Log level for the CLI
pub const ENV_LOG_LEVEL: &str = "TCX_LOG_LEVEL";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcxConfig {
    /// Default scan directory
    pub data_dir: PathBuf,
    /// Filename substring for batch scans
    pub file_pattern: String,
    /// Decode scanned files in parallel
    pub parallel_scan: bool,
    /// Copy latitude into longitude, as older readers did
    pub legacy_longitude: bool,
    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for TcxConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            file_pattern: DEFAULT_FILE_PATTERN.to_owned(),
            parallel_scan: true,
            legacy_longitude: false,
            log_level: LogLevel::Info,
        }
    }
}

impl TcxConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds something other than
    /// `true`/`false`/`1`/`0`, or if the file pattern is empty
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            data_dir: env::var(ENV_DATA_DIR).map_or(defaults.data_dir, PathBuf::from),
            file_pattern: env_var_or(ENV_FILE_PATTERN, &defaults.file_pattern),
            parallel_scan: parse_bool(&env_var_or(ENV_PARALLEL_SCAN, "true"))
                .with_context(|| format!("Invalid {ENV_PARALLEL_SCAN} value"))?,
            legacy_longitude: parse_bool(&env_var_or(ENV_LEGACY_LONGITUDE, "false"))
                .with_context(|| format!("Invalid {ENV_LEGACY_LONGITUDE} value"))?,
            log_level: LogLevel::from_str_or_default(&env_var_or(ENV_LOG_LEVEL, "info")),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that the type system does not
    ///
    /// # Errors
    ///
    /// Returns an error if the file pattern is empty
    pub fn validate(&self) -> Result<()> {
        if self.file_pattern.is_empty() {
            anyhow::bail!("{ENV_FILE_PATTERN} must not be empty");
        }
        Ok(())
    }

    /// Decoder options implied by this configuration
    #[must_use]
    pub const fn decode_options(&self) -> DecodeOptions {
        if self.legacy_longitude {
            DecodeOptions::legacy()
        } else {
            DecodeOptions {
                longitude_source: LongitudeSource::LongitudeDegrees,
            }
        }
    }

    /// Scan options implied by this configuration
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            file_pattern: self.file_pattern.clone(),
            parallel: self.parallel_scan,
            decode: self.decode_options(),
        }
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "TCX reader configuration: data_dir={}, file_pattern={:?}, parallel_scan={}, longitude={}, log_level={}",
            self.data_dir.display(),
            self.file_pattern,
            self.parallel_scan,
            if self.legacy_longitude {
                "latitude_mirror"
            } else {
                "longitude_degrees"
            },
            self.log_level
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
