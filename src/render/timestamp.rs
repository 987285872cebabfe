// src/render/timestamp.rs
//
// metadata.last_updated → "December 19, 2025 at 6:30 PM EST".
// The producing scraper writes datetime.isoformat() (naive, Eastern
// wall-clock); full RFC 3339 stamps are accepted too and converted.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use crate::config::consts::EASTERN_OFFSET_HOURS;

pub const UNKNOWN: &str = "Unknown";

/// Human-readable last-updated line; `Unknown` when absent or unparseable.
pub fn format_last_updated(raw: Option<&str>) -> String {
    match raw.and_then(parse_eastern) {
        Some(dt) => format!("{} EST", dt.format("%B %-d, %Y at %-I:%M %p")),
        None => s!(UNKNOWN),
    }
}

fn eastern() -> FixedOffset {
    // -5h is always a valid offset
    FixedOffset::east_opt(EASTERN_OFFSET_HOURS * 3600).unwrap()
}

fn parse_eastern(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // Zoned stamp: convert into Eastern
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&eastern()));
    }

    // Naive stamp: already Eastern wall-clock
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return eastern().from_local_datetime(&naive).single();
        }
    }

    // Bare date: midnight
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return eastern().from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single();
    }

    None
}
