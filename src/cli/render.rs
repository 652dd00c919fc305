//! Plain-text rendering of conversation messages and timeline entries for stdout.

use crate::models::{Message, Role, SegmentKind, Side, TimelineEntry};
use crate::parsers::parse_segments;
use crate::tui::timestamps::{format_clock, format_entry_time};
use crate::utils::sanitize_for_terminal;

const USER_LABEL: &str = "You";
const ASSISTANT_LABEL: &str = "AskWhy";

/// Render one conversation message
///
/// Reply text is split into segments so inline `<context>` blocks show as quoted recalled
/// lines; the structured context items follow under their own heading.
pub fn render_message(message: &Message) -> String {
    let label = match message.role {
        Role::User => USER_LABEL,
        Role::Assistant => ASSISTANT_LABEL,
    };
    let mut out = format!("[{}] {}:", format_clock(&message.created_at), label);

    if message.role == Role::User {
        out.push(' ');
        out.push_str(&sanitize_for_terminal(&message.text));
        return out;
    }

    for segment in parse_segments(&message.text) {
        match segment.kind {
            SegmentKind::Text => {
                let text = sanitize_for_terminal(&segment.content);
                if !text.trim().is_empty() {
                    if !out.ends_with('\n') {
                        out.push(' ');
                    }
                    out.push_str(text.trim());
                }
            }
            SegmentKind::Context => {
                for line in sanitize_for_terminal(&segment.content).lines() {
                    out.push_str("\n  │ ");
                    out.push_str(line);
                }
                out.push('\n');
            }
        }
    }

    if !message.context_items.is_empty() {
        out.push_str(&format!("\n  Recalled context ({}):", message.context_items.len()));
        for item in &message.context_items {
            out.push_str("\n    - ");
            out.push_str(&sanitize_for_terminal(item));
        }
    }

    out.trim_end().to_string()
}

/// Render one timeline entry on a single line
pub fn render_timeline_entry(entry: &TimelineEntry) -> String {
    let marker = match entry.entry.side {
        Side::Left => "◀",
        Side::Right => "▶",
    };
    format!(
        "{} {} {}: {}",
        format_entry_time(entry.entry.timestamp_ms),
        marker,
        sanitize_for_terminal(&entry.entry.sender),
        sanitize_for_terminal(&entry.entry.text).replace('\n', " ")
    )
}
