// ABOUTME: Normalizes ISO-8601-like TCX timestamps into canonical UTC datetimes
// ABOUTME: Absorbs firmware quirks such as optional fractional seconds and a trailing Z
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Timestamp normalization
//!
//! Device firmware writes `Time` and `Id` values as `YYYY-MM-DDTHH:MM:SS`
//! followed by nothing, `Z`, or a 1 to 3 digit fraction with an optional `Z`.
//! The shape is extracted with a regex, a `chrono` format template is built
//! from whatever suffix was captured, and parsing falls back once to the
//! template without the zone designator. Results are stored at whole-second
//! precision in UTC.

use std::sync::OnceLock;

use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use regex::Regex;
use tcx_core::errors::{TcxError, TcxResult};
use tracing::debug;

/// Accepted timestamp shape: base date-time, then the fraction and `Z` suffix as group 1
///
/// ASCII digit classes only; `\d` would also accept other scripts' digits.
const TIMESTAMP_PATTERN: &str =
    r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}((?:\.[0-9]{1,3})?Z?)";

/// `chrono` template for the base `YYYY-MM-DDTHH:MM:SS` part
const BASE_TEMPLATE: &str = "%Y-%m-%dT%H:%M:%S";

static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn pattern() -> TcxResult<&'static Regex> {
    PATTERN
        .get_or_init(|| Regex::new(TIMESTAMP_PATTERN))
        .as_ref()
        .map_err(|e| TcxError::Internal(format!("timestamp pattern failed to compile: {e}")))
}

/// Convert a TCX timestamp string into a UTC datetime truncated to whole seconds
///
/// # Errors
///
/// Returns [`TcxError::InvalidTimestamp`] if `text` contains no substring of
/// the accepted shape, or if the matched text is not a valid calendar time.
pub fn normalize(text: &str) -> TcxResult<DateTime<Utc>> {
    let captures = pattern()?
        .captures(text)
        .ok_or_else(|| TcxError::invalid_timestamp(text))?;
    let matched = captures.get(0).map_or("", |m| m.as_str());
    let suffix = captures.get(1).map_or("", |m| m.as_str());

    let suffix_template = suffix_template(suffix);
    let parsed = match parse_with_template(matched, &suffix_template) {
        Ok(parsed) => parsed,
        Err(kind) if is_format_mismatch(kind) && suffix_template.ends_with('Z') => {
            debug!(
                timestamp = matched,
                "Retrying timestamp parse without zone designator"
            );
            parse_without_designator(matched, &suffix_template)?
        }
        Err(_) => return Err(TcxError::invalid_timestamp(text)),
    };

    Ok(truncate_to_seconds(parsed).and_utc())
}

/// Template placeholders for the captured fraction and zone suffix
fn suffix_template(suffix: &str) -> String {
    let mut template = String::new();
    let fraction_len = suffix
        .strip_prefix('.')
        .map_or(0, |rest| rest.chars().take_while(char::is_ascii_digit).count());

    if fraction_len > 0 {
        template.push_str("%.f");
    }
    if suffix.ends_with('Z') {
        template.push('Z');
    }
    template
}

/// First attempt: the full matched text against the derived template
fn parse_with_template(
    matched: &str,
    suffix_template: &str,
) -> Result<NaiveDateTime, ParseErrorKind> {
    let template = format!("{BASE_TEMPLATE}{suffix_template}");
    NaiveDateTime::parse_from_str(matched, &template).map_err(|e| e.kind())
}

/// Second attempt: drop the final character from both text and template
fn parse_without_designator(matched: &str, suffix_template: &str) -> TcxResult<NaiveDateTime> {
    let text = matched.strip_suffix('Z').unwrap_or(matched);
    let template = suffix_template.strip_suffix('Z').unwrap_or(suffix_template);
    parse_with_template(text, template).map_err(|_| TcxError::invalid_timestamp(matched))
}

const fn is_format_mismatch(kind: ParseErrorKind) -> bool {
    matches!(
        kind,
        ParseErrorKind::Invalid | ParseErrorKind::TooLong | ParseErrorKind::TooShort
    )
}

fn truncate_to_seconds(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime.with_nanosecond(0).unwrap_or(datetime)
}
