use tracing::debug;

use super::apply::{filter_entries, month_options, week_options};
use super::facets::derive_facets;
use super::state::{ALL_MONTHS, ALL_WEEKS, FilterState};
use crate::models::{TimelineEntry, TranscriptEntry};

/// Faceted view over a static transcript
///
/// Facets are derived once per entry at construction. The engine keeps the filter state
/// and the week options for the selected month in sync: every transition re-validates the
/// selected week, so it is always one of [`week_options`](Self::week_options).
#[derive(Debug, Clone)]
pub struct TimelineFilterEngine {
    entries: Vec<TimelineEntry>,
    month_options: Vec<String>,
    week_options: Vec<String>,
    state: FilterState,
}

impl TimelineFilterEngine {
    pub fn new(transcript: Vec<TranscriptEntry>) -> Self {
        let entries: Vec<TimelineEntry> = transcript
            .into_iter()
            .map(|entry| {
                let facets = derive_facets(entry.timestamp_ms);
                TimelineEntry { entry, facets }
            })
            .collect();

        // The transcript never changes, so month options are fixed
        let month_options = month_options(&entries);
        let week_options = week_options(&entries, ALL_MONTHS);

        Self { entries, month_options, week_options, state: FilterState::new() }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn month_options(&self) -> &[String] {
        &self.month_options
    }

    pub fn week_options(&self) -> &[String] {
        &self.week_options
    }

    /// Entries matching the current state, in transcript order
    pub fn filtered(&self) -> Vec<&TimelineEntry> {
        filter_entries(&self.entries, &self.state)
    }

    /// Select a month, recompute the week options and drop a week that no longer applies
    ///
    /// A month that is not among the month options selects "All Months".
    pub fn set_month(&mut self, month: &str) {
        let month = if self.month_options.iter().any(|m| m == month) {
            month
        } else {
            debug!(month, "Unknown month selected, showing all months");
            ALL_MONTHS
        };

        self.state.selected_month = month.to_string();
        self.week_options = week_options(&self.entries, month);
        self.revalidate_week();
    }

    /// Select a week; a week outside the current options selects "All Weeks"
    pub fn set_week(&mut self, week: &str) {
        self.state.selected_week = week.to_string();
        self.revalidate_week();
    }

    pub fn set_search(&mut self, search: &str) {
        self.state.search_text = search.to_string();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.state.search_text.push(c);
    }

    pub fn pop_search_char(&mut self) -> bool {
        self.state.search_text.pop().is_some()
    }

    /// Apply a whole filter state; month is applied first so the week is checked against
    /// the new month's options
    pub fn apply(&mut self, state: FilterState) {
        self.set_month(&state.selected_month);
        self.set_week(&state.selected_week);
        self.state.search_text = state.search_text;
    }

    pub fn reset(&mut self) {
        self.apply(FilterState::new());
    }

    /// Move the month selection to the next (or previous) option, wrapping around
    pub fn cycle_month(&mut self, forward: bool) {
        let next = cycle(&self.month_options, &self.state.selected_month, forward);
        self.set_month(&next);
    }

    /// Move the week selection to the next (or previous) option, wrapping around
    pub fn cycle_week(&mut self, forward: bool) {
        let next = cycle(&self.week_options, &self.state.selected_week, forward);
        self.set_week(&next);
    }

    fn revalidate_week(&mut self) {
        if !self.week_options.contains(&self.state.selected_week) {
            debug!(
                week = %self.state.selected_week,
                month = %self.state.selected_month,
                "Selected week not available for month, resetting"
            );
            self.state.selected_week = ALL_WEEKS.to_string();
        }
    }
}

fn cycle(options: &[String], current: &str, forward: bool) -> String {
    let len = options.len();
    let idx = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    options[next].clone()
}
