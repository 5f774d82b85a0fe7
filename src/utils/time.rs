// Timestamp helpers. All timestamps in this crate are UNIX milliseconds,
// matching the records written by earlier builds of the app.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};

/// Current UNIX timestamp in milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Human-relative label for `timestamp_ms` measured against the wall clock.
pub fn time_ago(timestamp_ms: i64) -> String {
    time_ago_at(timestamp_ms, now_ms())
}

/// Human-relative label for `timestamp_ms` measured against `now_ms`.
///
/// Buckets: "just now" under a minute, minutes under an hour, hours under a
/// day, days under a week, then a calendar date.
pub fn time_ago_at(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);

    let seconds = diff / 1_000;
    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if seconds < 60 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    if days < 7 {
        return format!("{}d ago", days);
    }

    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(date) => date.format("%b %e, %Y").to_string(),
        None => "just now".to_string(),
    }
}
