//! Time and timestamp helpers.
//!
//! Relative labels are computed against an explicit `now` so that callers
//! (and tests) control the clock.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::TimestampError;

/// UTC timestamp used for `last_seen`, result times, etc.
pub type Timestamp = DateTime<Utc>;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an ISO-8601 timestamp as sent by the backend.
///
/// Strings carrying an offset are taken as-is. Naive strings (no offset, as
/// produced by the backend's `isoformat()`) are interpreted in the local time
/// zone, the same way a browser's `Date` constructor reads them.
///
/// # Errors
///
/// Returns [`TimestampError`] when `raw` matches neither form.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, TimestampError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let invalid = || TimestampError {
        raw: raw.to_string(),
    };
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| invalid())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// Milliseconds elapsed from `then` to `now`, clamped at zero.
#[must_use]
pub fn elapsed_millis(then: Timestamp, now: Timestamp) -> i64 {
    (now - then).num_milliseconds().max(0)
}

/// Human-readable relative time ("5 seconds ago", "1 minute ago", "3 hours ago").
///
/// Anything a day old or more falls back to [`format_absolute`].
#[must_use]
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    let seconds = elapsed_millis(then, now) / 1_000;

    if seconds < SECONDS_PER_MINUTE {
        format!("{seconds} seconds ago")
    } else if seconds < SECONDS_PER_HOUR {
        pluralize(seconds / SECONDS_PER_MINUTE, "minute")
    } else if seconds < SECONDS_PER_DAY {
        pluralize(seconds / SECONDS_PER_HOUR, "hour")
    } else {
        format_absolute(then)
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{count} {unit}s ago")
    } else {
        format!("{count} {unit} ago")
    }
}

/// Absolute local date-time, e.g. `5/1/2024, 2:07:09 PM`.
#[must_use]
pub fn format_absolute(ts: Timestamp) -> String {
    ts.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
