//! End-date parsing and the "urgent" deadline window.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::types::Timestamp;

/// A project is urgent when its end date falls within this many days from now.
pub const URGENT_WINDOW_DAYS: i64 = 30;

/// Parse a stored date string.
///
/// A bare `YYYY-MM-DD` is read as midnight UTC of that day; a full RFC 3339
/// timestamp is also accepted. Anything else, including impossible calendar
/// dates, yields `None`.
pub fn parse_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whether `end_date` lies in `[now, now + 30 days]`, both ends inclusive.
///
/// Missing or unparseable dates are never urgent.
pub fn is_urgent(end_date: Option<&str>, now: Timestamp) -> bool {
    let Some(end) = end_date.and_then(parse_date) else {
        return false;
    };
    let horizon = now + TimeDelta::days(URGENT_WINDOW_DAYS);
    end >= now && end <= horizon
}
