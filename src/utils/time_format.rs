//! Canonical timestamp formatting for postback macros.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp in the single canonical form used by every timestamp
/// macro: RFC 3339 with seconds precision, UTC `Z` suffix.
pub fn format_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats an optional timestamp.
///
/// An unset funnel stage renders as the empty string, never as an epoch or
/// any other in-range date.
pub fn format_opt_time(t: Option<DateTime<Utc>>) -> String {
    t.map(format_time).unwrap_or_default()
}
