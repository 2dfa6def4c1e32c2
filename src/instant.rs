// src/instant.rs

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::core::sanitize::normalize_ws;

/// Parse one extracted timestamp string into a comparable instant.
///
/// Accepted shapes, in order: RFC 3339, naive `%Y-%m-%dT%H:%M:%S`
/// (assumed UTC), naive `%Y-%m-%d %H:%M:%S`, integer epoch seconds.
/// Values like `2024-05-08T21:32:38 1715203958` (ISO followed by epoch)
/// fall back to their first token. Empty or whitespace-only input is
/// unparseable, never a zero instant.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = normalize_ws(raw);
    if s.is_empty() {
        return None;
    }
    if let Some(dt) = parse_datetime(&s) {
        return Some(dt);
    }
    if let Ok(secs) = s.parse::<i64>() {
        return Utc.timestamp_opt(secs, 0).single();
    }
    // "ISO epoch" pairs: only the date-time shapes qualify for the first
    // token, otherwise "3 hours ago" would read as epoch 3.
    match s.split_once(' ') {
        Some((first, _rest)) => parse_datetime(first),
        None => None,
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(n) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&n));
    }
    if let Ok(n) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&n));
    }
    None
}
