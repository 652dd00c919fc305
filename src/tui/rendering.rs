use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::layout::AppLayout;
use super::timestamps::format_entry_time;
use crate::filters::FilterState;
use crate::models::{Side, TimelineEntry};
use crate::utils::sanitize_for_terminal;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Characters of message text shown per list row
const LIST_PREVIEW_CHARS: usize = 60;

/// Values shown around the timeline that do not come from the filtered entries
pub struct RenderState<'a> {
    pub filter: &'a FilterState,
    pub total_count: usize,
    /// Months present in the transcript, excluding "All Months"
    pub month_count: usize,
    /// Weeks present in the selected month, excluding "All Weeks"
    pub week_count: usize,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    entries: &[&TimelineEntry],
    selected_idx: usize,
    state: &RenderState,
) {
    let layout = AppLayout::new(frame.area());

    render_facet_bar(frame, layout.facet_area, state);
    render_timeline(frame, layout.timeline_area, entries, selected_idx);
    render_preview(frame, layout.preview_area, entries.get(selected_idx).copied());
    render_status_bar(frame, layout.status_area, entries.len(), selected_idx, state);
}

fn label<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    Span::styled(text, Style::default().fg(MUTED))
}

fn render_facet_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let value_style = Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        label("Month: "),
        Span::styled(state.filter.selected_month.clone(), value_style),
        label(format!("  ({})   ", state.month_count)),
        label("Week: "),
        Span::styled(state.filter.selected_week.clone(), value_style),
        label(format!("  ({})   ", state.week_count)),
        label("Search: "),
        Span::styled(format!("{}_", state.filter.search_text), Style::default().fg(ACCENT)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Filters "),
    );

    frame.render_widget(paragraph, area);
}

fn render_timeline(
    frame: &mut Frame,
    area: Rect,
    entries: &[&TimelineEntry],
    selected_idx: usize,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, timeline_entry)| {
            let entry = &timeline_entry.entry;
            let first_line = sanitize_for_terminal(entry.text.lines().next().unwrap_or(""))
                .chars()
                .take(LIST_PREVIEW_CHARS)
                .collect::<String>();

            let (content, alignment) = match entry.side {
                Side::Left => (
                    format!(
                        "{} {}: {}",
                        format_entry_time(entry.timestamp_ms),
                        sanitize_for_terminal(&entry.sender),
                        first_line
                    ),
                    Alignment::Left,
                ),
                Side::Right => (
                    format!(
                        "{} :{} {}",
                        first_line,
                        sanitize_for_terminal(&entry.sender),
                        format_entry_time(entry.timestamp_ms)
                    ),
                    Alignment::Right,
                ),
            };

            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(Line::from(content).alignment(alignment)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Timeline "),
    );

    // Keeps the selected row scrolled into view
    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(selected_idx.min(entries.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, entry: Option<&TimelineEntry>) {
    let content = if let Some(timeline_entry) = entry {
        let entry = &timeline_entry.entry;
        let side = match entry.side {
            Side::Left => "left",
            Side::Right => "right",
        };

        let mut lines = vec![
            Line::from(vec![label("From: "), Span::raw(sanitize_for_terminal(&entry.sender))]),
            Line::from(vec![label("Time: "), Span::raw(format_entry_time(entry.timestamp_ms))]),
            Line::from(vec![
                label("Month: "),
                Span::raw(timeline_entry.facets.month.clone()),
                label("  Week: "),
                Span::raw(timeline_entry.facets.week.clone()),
            ]),
            Line::from(vec![label("Side: "), Span::raw(side)]),
            Line::from(""),
        ];

        for line in sanitize_for_terminal(&entry.text).lines() {
            lines.push(Line::from(line.to_string()));
        }

        Text::from(lines)
    } else {
        Text::from("No entry selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Message "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    filtered_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let status_text = if filtered_count == 0 {
        " No matching entries | Esc: clear search | Ctrl+C: quit ".to_string()
    } else {
        let mut parts = vec![];

        if filtered_count < state.total_count {
            parts.push(format!("{}/{} entries", filtered_count, state.total_count));
        } else {
            parts.push(format!("{} entries", state.total_count));
        }
        parts.push(format!("entry {}/{}", selected_idx + 1, filtered_count));
        parts.push("Tab: month".to_string());
        parts.push("Ctrl+W/E: week".to_string());
        if !state.filter.search_text.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        format!(" {} ", parts.join(" | "))
    };

    let paragraph = Paragraph::new(status_text).style(Style::default().fg(BRIGHT).bg(BAR_BG));

    frame.render_widget(paragraph, area);
}
