//! Timestamp formatting and the injectable clock.
//!
//! Stored timestamps are RFC 3339 UTC strings with millisecond precision, so
//! lexicographic order equals chronological order.

use chrono::{DateTime, SecondsFormat, Utc};

const DISPLAY_FORMAT: &str = "%d-%b-%Y %H:%M";

/// Source of "now" for timestamp assignment.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats an instant in the stored representation.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored timestamp. Returns `None` for foreign formats.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Renders a stored timestamp as `dd-MMM-yyyy HH:mm`.
///
/// Strings written in the legacy display format, or anything else that does
/// not parse, are returned unchanged.
pub fn display_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(at) => at.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stored_format_has_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2026-10-19T08:30:00.000Z");
    }

    #[test]
    fn stored_format_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 9, 30, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        assert!(format_timestamp(earlier) < format_timestamp(later));
    }

    #[test]
    fn display_uses_day_month_year() {
        assert_eq!(
            display_timestamp("2026-10-19T08:30:00.000Z"),
            "19-Oct-2026 08:30"
        );
    }

    #[test]
    fn display_passes_through_unknown_strings() {
        assert_eq!(display_timestamp("19-Oct-2026 08:30"), "19-Oct-2026 08:30");
    }
}
