//! Wire representation of timestamps.
//!
//! Every timestamp leaving the API is rendered as `YYYY-MM-DDTHH:mm:ss.sssZ`.
//! Inbound values are accepted in RFC 3339 / ISO-8601 and a handful of common
//! date-time layouts, then normalized to UTC.

use super::timestamp::{Timestamp, unset};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// `chrono` format string for the canonical wire layout.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Layouts that carry an explicit offset. Parsed values are converted to UTC.
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Layouts without offset information. Parsed values are reinterpreted as UTC.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised date-time value: {input:?}")]
pub struct TimestampParseError {
    input: String,
}

impl TimestampParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse an inbound wire value into a UTC instant.
///
/// `None` and `""` yield the [`unset`] sentinel. Values with an offset are
/// converted to UTC; values without one keep their wall-clock fields and are
/// read as UTC.
///
/// # Errors
///
/// Returns [`TimestampParseError`] when a non-empty value matches none of the
/// accepted layouts.
pub fn parse(input: Option<&str>) -> Result<DateTime<Utc>, TimestampParseError> {
    match input {
        None | Some("") => Ok(unset()),
        Some(raw) => classify(raw.trim()).map(DateTime::<Utc>::from).ok_or_else(|| {
            tracing::debug!(input = %raw, "rejected wire timestamp");
            TimestampParseError::new(raw)
        }),
    }
}

/// Render a timestamp in the canonical wire layout.
///
/// Naive values are reinterpreted as UTC; nothing is shifted on the write path.
#[must_use]
pub fn format(value: impl Into<Timestamp>) -> String {
    value.into().into_utc().format(WIRE_FORMAT).to_string()
}

fn classify(raw: &str) -> Option<Timestamp> {
    if raw.is_empty() {
        return None;
    }

    if let Some(instant) = parse_with_offset(raw) {
        return Some(Timestamp::Utc(instant.with_timezone(&Utc)));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS.iter().find_map(|layout| {
                NaiveDate::parse_from_str(raw, layout)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
        .map(Timestamp::Naive)
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            OFFSET_LAYOUTS
                .iter()
                .find_map(|layout| DateTime::parse_from_str(raw, layout).ok())
        })
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok())
}
