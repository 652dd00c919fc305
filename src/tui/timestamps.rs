use chrono::{DateTime, Datelike, Utc};

/// Format a transcript timestamp for display:
/// - Same year as now: "Jan 15 14:03"
/// - Other years: "Dec 3, 2024 14:03"
/// - Missing or out of range: "--:--"
pub fn format_entry_time(timestamp_ms: Option<i64>) -> String {
    format_entry_time_at(timestamp_ms, &Utc::now())
}

fn format_entry_time_at(timestamp_ms: Option<i64>, now: &DateTime<Utc>) -> String {
    let Some(timestamp) = timestamp_ms.and_then(DateTime::from_timestamp_millis) else {
        return "--:--".to_string();
    };

    if timestamp.year() == now.year() {
        timestamp.format("%b %-d %H:%M").to_string()
    } else {
        timestamp.format("%b %-d, %Y %H:%M").to_string()
    }
}

/// Clock time only ("14:03"), as shown under each message bubble
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}
