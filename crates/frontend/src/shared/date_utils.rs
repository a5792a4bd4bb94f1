//! Utilities for date and time formatting
//!
//! Instants arrive from the backend in UTC and are always shown in the
//! viewer's time zone.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Format an instant as DD.MM.YYYY HH:MM:SS in `tz`
/// Example: 2024-03-15T09:02:26Z at UTC+5 -> "15.03.2024 14:02:26"
pub fn format_datetime<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String {
    at.with_timezone(tz)
        .naive_local()
        .format("%d.%m.%Y %H:%M:%S")
        .to_string()
}

/// Value for an `<input type="date">`: YYYY-MM-DD, or empty when unset
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_datetime() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(
            format_datetime(&utc("2024-03-15T09:02:26.123Z"), &tz),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime(&utc("2024-12-31T23:59:59Z"), &Utc),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_datetime_crosses_midnight() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        assert_eq!(
            format_datetime(&utc("2024-12-31T20:00:00Z"), &tz),
            "01.01.2025 01:00:00"
        );
    }

    #[test]
    fn test_date_input_value() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(date_input_value(Some(date)), "2025-03-15");
        assert_eq!(date_input_value(None), "");
    }
}
