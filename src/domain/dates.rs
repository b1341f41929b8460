//! Calendar-day helpers shared by the ledger and the add-transaction form.
//!
//! Stored dates come in several shapes (`2024-03-01`, RFC 3339 timestamps,
//! naive date-times). Comparisons only ever look at the calendar day as it
//! was written, never at the time of day or the offset.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Extracts the calendar day from a stored date string.
pub fn calendar_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT) {
        return Some(stamp.date());
    }
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
}

/// Canonical `YYYY-MM-DD` rendering used for stored transaction dates.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ISO date-time rendering of a selected day (UTC midnight).
pub fn format_selected_day(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", format_date(date))
}

/// Short English weekday label (`Mon`, `Tue`, ...).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Moves `date` by `days`, saturating at the calendar bounds chrono supports.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}
