//! Timestamp formatting for log entries.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// ISO 8601 without offset, microsecond precision.
///
/// Example: "2026-01-31T12:45:31.053120"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn local_timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp produced by [`format_timestamp`].
pub fn parse_timestamp(ts: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).ok()
}
