// ABOUTME: Unified error handling for TCX decoding, batch scanning, and export
// ABOUTME: Maps every failure onto a stable numeric status code for external callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every operation in the workspace returns [`TcxResult`]. Each [`TcxError`]
//! variant maps onto one of the [`StatusCode`] values that existing consumers
//! of the reader already key on (`200`, `400`, `401`, `404`, `500`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Numeric outcome codes kept stable for external consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// Decode succeeded
    #[serde(rename = "OK")]
    Ok = 200,
    /// Input was malformed or unparseable
    #[serde(rename = "CLIENT_ERROR")]
    ClientError = 400,
    /// Well-formed XML with the wrong root element
    #[serde(rename = "TCX_SCHEMA_ERROR")]
    TcxSchemaError = 401,
    /// Path does not exist or no matching files decoded
    #[serde(rename = "NOT_FOUND")]
    NotFound = 404,
    /// Invalid directory given to a batch scan, or an I/O failure
    #[serde(rename = "SERVER_ERROR")]
    ServerError = 500,
}

impl StatusCode {
    /// Numeric value of this status
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Short user-facing description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "Activity decoded successfully",
            Self::ClientError => "The input could not be parsed",
            Self::TcxSchemaError => "The document is not a TCX file",
            Self::NotFound => "No activity was found",
            Self::ServerError => "The request could not be processed",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failures produced while reading, decoding, scanning, or exporting activities
#[derive(Debug, Error)]
pub enum TcxError {
    /// Document root is not `TrainingCenterDatabase`
    #[error("expected root element 'TrainingCenterDatabase', found '{root}'")]
    NotTcx {
        /// Tag name of the root element actually found
        root: String,
    },

    /// Input text is not well-formed XML
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// A required child element is absent
    #[error("missing required element '{element}' in '{parent}'")]
    MissingElement {
        /// Name of the missing element
        element: String,
        /// Name of the element that should contain it
        parent: String,
    },

    /// A required attribute is absent
    #[error("missing required attribute '{attribute}' on '{element}'")]
    MissingAttribute {
        /// Name of the missing attribute
        attribute: String,
        /// Element that should carry it
        element: String,
    },

    /// Element text is present but not a valid number
    #[error("invalid numeric value '{value}' in '{element}'")]
    InvalidNumber {
        /// Element whose text failed to parse
        element: String,
        /// Offending text
        value: String,
    },

    /// Timestamp text does not match the accepted shape
    #[error("invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SS with optional .fff and Z suffix")]
    InvalidTimestamp {
        /// Offending text
        value: String,
    },

    /// Input file does not exist
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A batch scan decoded nothing
    #[error("no activities decoded from {}", .0.display())]
    NoActivities(PathBuf),

    /// Batch scan target is not an existing directory
    #[error("invalid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// Reading a file or directory failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing tabular output failed
    #[error("export failed: {0}")]
    Export(String),

    /// Internal invariant failure (e.g. a built-in pattern failed to compile)
    #[error("internal error: {0}")]
    Internal(String),
}

impl TcxError {
    /// Create a missing-element error
    #[must_use]
    pub fn missing_element(element: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            parent: parent.into(),
        }
    }

    /// Create a missing-attribute error
    #[must_use]
    pub fn missing_attribute(attribute: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
            element: element.into(),
        }
    }

    /// Create an invalid-number error
    #[must_use]
    pub fn invalid_number(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            element: element.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-timestamp error
    #[must_use]
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create an I/O error bound to the path being read
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Compatibility status code for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedXml(_)
            | Self::MissingElement { .. }
            | Self::MissingAttribute { .. }
            | Self::InvalidNumber { .. }
            | Self::InvalidTimestamp { .. } => StatusCode::ClientError,

            Self::NotTcx { .. } => StatusCode::TcxSchemaError,

            Self::PathNotFound(_) | Self::NoActivities(_) => StatusCode::NotFound,

            Self::InvalidDirectory(_) | Self::Io { .. } | Self::Export(_) | Self::Internal(_) => {
                StatusCode::ServerError
            }
        }
    }

    /// Whether a batch run should skip this file and continue
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotTcx { .. }
                | Self::MalformedXml(_)
                | Self::MissingElement { .. }
                | Self::MissingAttribute { .. }
                | Self::InvalidNumber { .. }
                | Self::InvalidTimestamp { .. }
                | Self::PathNotFound(_)
                | Self::Io { .. }
        )
    }
}

/// Result type alias for convenience
pub type TcxResult<T> = Result<T, TcxError>;

/// Serializable error view for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Named status
    pub status: StatusCode,
    /// Numeric status
    pub code: u16,
    /// Human-readable message
    pub message: String,
}

impl From<&TcxError> for ErrorResponse {
    fn from(error: &TcxError) -> Self {
        let status = error.status();
        Self {
            status,
            code: status.code(),
            message: error.to_string(),
        }
    }
}

impl From<TcxError> for ErrorResponse {
    fn from(error: TcxError) -> Self {
        Self::from(&error)
    }
}
