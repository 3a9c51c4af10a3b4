//! Utilities for date and time formatting
//!
//! Timestamps travel as ISO-8601 text and live as `DateTime<Utc>` values;
//! these helpers render them for table cells and bridge them to
//! `<input type="datetime-local">` values.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Render a timestamp for display. Empty when unset.
pub fn format_datetime(value: &Option<DateTime<Utc>>) -> String {
    match value {
        Some(value) => value.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// Value for a `datetime-local` input (minute precision, no zone suffix).
pub fn to_input_value(value: &Option<DateTime<Utc>>) -> String {
    match value {
        Some(value) => value.format("%Y-%m-%dT%H:%M").to_string(),
        None => String::new(),
    }
}

/// Parse a `datetime-local` input value back; `None` when empty or malformed.
pub fn from_input_value(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Some(Utc.with_ymd_and_hms(2025, 3, 15, 14, 2, 0).unwrap());
        assert_eq!(format_datetime(&value), "2025-03-15 14:02");
        assert_eq!(format_datetime(&None), "");
    }

    #[test]
    fn test_input_round_trip() {
        let value = Some(Utc.with_ymd_and_hms(2025, 3, 15, 14, 2, 0).unwrap());
        let raw = to_input_value(&value);
        assert_eq!(raw, "2025-03-15T14:02");
        assert_eq!(from_input_value(&raw), value);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("not a date"), None);
    }
}
