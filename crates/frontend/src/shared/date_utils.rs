/// Utilities for date and time formatting
///
/// Cells receive ISO 8601 strings from the API and render them with the
/// conventions of the active locale.
use super::locale::Locale;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parsed ISO value: calendar date or date with time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IsoValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Recognize `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 with offset.
/// Offsets are dropped: the API sends warehouse-local times.
pub fn parse_iso(s: &str) -> Option<IsoValue> {
    if s.len() < 10 || !s.as_bytes()[0].is_ascii_digit() {
        return None;
    }
    if s.len() == 10 {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(IsoValue::Date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(IsoValue::DateTime(dt.naive_local()));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(IsoValue::DateTime)
}

/// Format ISO datetime string with the locale's date and time pattern
/// Example (de-DE): "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str, locale: Locale) -> String {
    match parse_iso(datetime_str) {
        Some(IsoValue::DateTime(dt)) => dt.format(locale.datetime_format()).to_string(),
        Some(IsoValue::Date(d)) => d.format(locale.date_format()).to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date string with the locale's date pattern
/// Example (de-DE): "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str, locale: Locale) -> String {
    match parse_iso(date_str) {
        Some(IsoValue::DateTime(dt)) => dt.date().format(locale.date_format()).to_string(),
        Some(IsoValue::Date(d)) => d.format(locale.date_format()).to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z", Locale::DeDe),
            "15.03.2024 14:02"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59", Locale::EnUs),
            "12/31/2024 11:59 PM"
        );
        assert_eq!(
            format_datetime("2024-12-31T08:05:00+02:00", Locale::FrFr),
            "31/12/2024 08:05"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15", Locale::RuRu), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z", Locale::EnUs), "03/15/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid", Locale::EnUs), "invalid");
        assert_eq!(format_date("2024-13-45", Locale::EnUs), "2024-13-45");
        assert_eq!(parse_iso("1234567890"), None);
    }
}
