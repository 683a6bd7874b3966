//! Reusable formatting utilities for CLI output

use std::time::Duration;

use chrono::DateTime;

/// Format epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Returns "N/A" if the timestamp is zero or out of range.
pub fn format_millis(millis: i64) -> String {
    if millis == 0 {
        return "N/A".to_string();
    }
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        None => "N/A".to_string(),
    }
}

/// Format a duration the compact way: `1h30m0s`, `5m10s`, `45s`, `0s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
