use std::collections::HashSet;

use super::facets::week_index;
use super::state::{ALL_MONTHS, ALL_WEEKS, FilterState};
use crate::models::TimelineEntry;

/// Apply month, week and search filters, returning matching entries in transcript order
///
/// Filter logic:
/// - Month: sentinel or exact facet match
/// - Week: sentinel or exact facet match
/// - Search: case-insensitive substring of the message text
///
/// An entry is kept only when all three match.
pub fn filter_entries<'a>(
    entries: &'a [TimelineEntry],
    state: &FilterState,
) -> Vec<&'a TimelineEntry> {
    if state.is_empty() {
        return entries.iter().collect();
    }

    let needle = state.search_text.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            match_month(entry, &state.selected_month)
                && match_week(entry, &state.selected_week)
                && match_search(entry, &needle)
        })
        .collect()
}

/// Month facet match (exact, case-sensitive)
fn match_month(entry: &TimelineEntry, month: &str) -> bool {
    month == ALL_MONTHS || entry.facets.month == month
}

/// Week facet match (exact, case-sensitive)
fn match_week(entry: &TimelineEntry, week: &str) -> bool {
    week == ALL_WEEKS || entry.facets.week == week
}

/// Substring match against an already lowercased needle
fn match_search(entry: &TimelineEntry, lower_needle: &str) -> bool {
    lower_needle.is_empty() || entry.entry.text.to_lowercase().contains(lower_needle)
}

/// Month options: the sentinel followed by distinct months in first-seen order
pub fn month_options(entries: &[TimelineEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_MONTHS.to_string()];
    for entry in entries {
        if seen.insert(entry.facets.month.as_str()) {
            options.push(entry.facets.month.clone());
        }
    }
    options
}

/// Week options for the selected month: the sentinel followed by distinct weeks sorted by
/// week number, with "Unknown" last
pub fn week_options(entries: &[TimelineEntry], selected_month: &str) -> Vec<String> {
    let mut weeks: Vec<&str> = Vec::new();
    for entry in entries.iter().filter(|entry| match_month(entry, selected_month)) {
        if !weeks.contains(&entry.facets.week.as_str()) {
            weeks.push(entry.facets.week.as_str());
        }
    }

    // None (Unknown) sorts after every numbered week
    weeks.sort_by_key(|week| (week_index(week).is_none(), week_index(week)));

    std::iter::once(ALL_WEEKS.to_string()).chain(weeks.into_iter().map(String::from)).collect()
}
