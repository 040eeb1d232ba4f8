//! Calendar helpers: lenient day parsing, month keys, timezone-aware "today".
//!
//! Transaction dates arrive as raw strings and are parsed on demand. A date
//! that fails to parse is not an error; the record simply drops out of every
//! date-keyed view (see the crate docs for the tolerant/strict split).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parse a calendar day from a raw store value.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a bare
/// `YYYY-MM-DDTHH:MM:SS[.fff]` datetime (the date part is taken). Returns
/// `None` for anything else.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

/// `YYYY-MM` bucket key; lexicographic order equals chronological order.
pub fn month_key(day: NaiveDate) -> String {
    day.format("%Y-%m").to_string()
}

/// `YYYY-MM-DD` key for daily buckets.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// `(year, month)` of the calendar month before `day`, wrapping at January.
pub fn previous_month(day: NaiveDate) -> (i32, u32) {
    if day.month() == 1 {
        (day.year() - 1, 12)
    } else {
        (day.year(), day.month() - 1)
    }
}

/// Today's date as seen in the account's configured timezone.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_days_and_timestamps() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_day("2024-01-05"), Some(day));
        assert_eq!(parse_day(" 2024-01-05 "), Some(day));
        assert_eq!(parse_day("2024-01-05T00:00:00.000Z"), Some(day));
        assert_eq!(parse_day("2024-01-05T17:30:00"), Some(day));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day("05/01/2024"), None);
    }

    #[test]
    fn month_keys_sort_chronologically() {
        let january = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let february = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(month_key(january), "2024-01");
        assert!(month_key(january) < month_key(february));
    }

    #[test]
    fn previous_month_wraps_the_year() {
        let mid_february = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(previous_month(mid_february), (2024, 1));
        let mid_january = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(previous_month(mid_january), (2023, 12));
    }
}
