//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

use crate::Error;

/// DateTime used across prodsign, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with second precision: "2009-01-01T12:00:00Z"
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an ISO 8601 timestamp like "2009-01-01T12:00:00Z".
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("invalid timestamp {s:?}")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}
