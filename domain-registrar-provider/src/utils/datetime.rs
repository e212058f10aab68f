//! RFC 3339 helpers shared by the expander and the flattener.
//!
//! State always carries timestamps as RFC 3339 text with whole seconds and a `Z`
//! suffix for UTC (`2025-01-02T03:04:05Z`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a timestamp the way it is stored in flat state.
pub fn format_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses an RFC 3339 timestamp (any offset) into UTC.
///
/// Returns `None` instead of an error: callers drop unparsable values.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
