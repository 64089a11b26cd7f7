//! Timestamp Display
//!
//! Medium date/time formatting for record timestamps (en-US style,
//! e.g. `Jan 15, 2024, 10:30:00 AM`).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

const MEDIUM_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Offset-less layouts the backend is known to emit
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a payload timestamp for display in `offset`.
///
/// Values carrying an offset are converted; offset-less values are taken to
/// already be in `offset`. Anything unparseable is returned verbatim.
pub fn format_medium(raw: &str, offset: FixedOffset) -> String {
    match parse_timestamp(raw, offset) {
        Some(dt) => dt.format(MEDIUM_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&offset));
    }

    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset.from_local_datetime(&naive).single()
}
