use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Timeline browser layout
pub struct AppLayout {
    pub facet_area: Rect,
    pub timeline_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the layout:
    /// - Facet bar: top 3 rows (month, week, search)
    /// - Timeline: 60% width (left)
    /// - Preview pane: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Facet bar
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical_chunks[1]);

        Self {
            facet_area: vertical_chunks[0],
            timeline_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
