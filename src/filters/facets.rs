use chrono::{DateTime, Datelike};

use crate::models::Facets;

/// Facet label used when a timestamp is missing or out of range
pub const UNKNOWN_FACET: &str = "Unknown";

const WEEK_PREFIX: &str = "Week ";

/// Derive month and week facets from an epoch-milliseconds timestamp
///
/// - Month: full English month name of the UTC calendar date ("January")
/// - Week: "Week N" with N = ceil(day_of_month / 7), so days 1-7 are Week 1, 8-14 Week 2,
///   and 29-31 Week 5. This is a day-of-month bucket, not an ISO week number.
///
/// Missing or unrepresentable timestamps yield "Unknown" for both facets.
pub fn derive_facets(timestamp_ms: Option<i64>) -> Facets {
    let Some(datetime) = timestamp_ms.and_then(DateTime::from_timestamp_millis) else {
        return Facets { month: UNKNOWN_FACET.to_string(), week: UNKNOWN_FACET.to_string() };
    };

    let week = datetime.day().div_ceil(7);
    Facets { month: datetime.format("%B").to_string(), week: format!("{WEEK_PREFIX}{week}") }
}

/// Numeric index of a week label ("Week 3" -> 3); `None` for "Unknown" or anything else
pub fn week_index(label: &str) -> Option<u32> {
    label.strip_prefix(WEEK_PREFIX)?.parse().ok()
}
