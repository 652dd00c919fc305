/// Month option that disables month filtering
pub const ALL_MONTHS: &str = "All Months";
/// Week option that disables week filtering
pub const ALL_WEEKS: &str = "All Weeks";

/// Timeline filter inputs
///
/// - Month and week are exact, case-sensitive facet matches unless set to their sentinel
/// - Search is a case-insensitive substring match on the message text (empty matches all)
///
/// The three inputs are combined with AND.
///
/// Nothing here checks that the week exists within the selected month; use
/// [`TimelineFilterEngine`](super::TimelineFilterEngine) to keep the week valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected_month: String,
    pub selected_week: String,
    pub search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            selected_month: ALL_MONTHS.to_string(),
            selected_week: ALL_WEEKS.to_string(),
            search_text: String::new(),
        }
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.selected_month = month.into();
        self
    }

    pub fn with_week(mut self, week: impl Into<String>) -> Self {
        self.selected_week = week.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_text = search.into();
        self
    }

    pub fn all_months(&self) -> bool {
        self.selected_month == ALL_MONTHS
    }

    pub fn all_weeks(&self) -> bool {
        self.selected_week == ALL_WEEKS
    }

    /// True when no input narrows the transcript
    pub fn is_empty(&self) -> bool {
        self.all_months() && self.all_weeks() && self.search_text.is_empty()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
