//! Short Swedish date and time formatting for observation timestamps.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};

/// Swedish month abbreviations without the trailing period.
const MONTHS_SHORT: [&str; 12] = [
    "jan", "feb", "mars", "apr", "maj", "juni", "juli", "aug", "sep", "okt", "nov", "dec",
];

/// Parse an observation timestamp into local wall-clock time.
///
/// Offset-carrying timestamps are converted to the local zone; bare ones are
/// taken as already local. Returns `None` for anything unrecognizable.
pub fn parse_valid_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Day-of-month plus month abbreviation, like "5 juli".
///
/// Empty input stays empty and unparsable input comes back verbatim, so the
/// result is always printable.
pub fn format_date_short(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_valid_time(raw) {
        Some(dt) => format!("{} {}", dt.day(), MONTHS_SHORT[dt.month0() as usize]),
        None => raw.to_string(),
    }
}

/// Zero-padded 24-hour clock time, like "08:05".
pub fn format_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_valid_time(raw) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => raw.to_string(),
    }
}

/// Short date and time joined with a space, like "5 juli 08:05".
pub fn format_date_time_short(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if parse_valid_time(raw).is_none() {
        return raw.to_string();
    }
    format!("{} {}", format_date_short(raw), format_time(raw))
        .trim()
        .to_string()
}
