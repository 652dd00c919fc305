//! Timeline browser state and event handling.
//!
//! [`TimelineApp`] wraps a [`TimelineFilterEngine`] and turns key actions into filter
//! transitions: typed characters edit the search, Tab / Shift-Tab cycle the month and
//! Ctrl-W / Ctrl-E cycle the week. Every transition re-reads the filtered entries, keeps
//! the selection in range and marks the screen dirty.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::filters::TimelineFilterEngine;

/// Longest search the browser accepts
const MAX_SEARCH_LEN: usize = 256;
/// Entries skipped by PageUp / PageDown
const PAGE_SIZE: isize = 10;

pub struct TimelineApp {
    engine: TimelineFilterEngine,
    selected_idx: usize,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl TimelineApp {
    pub fn new(engine: TimelineFilterEngine) -> Self {
        Self {
            engine,
            selected_idx: 0,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn engine(&self) -> &TimelineFilterEngine {
        &self.engine
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let entries = self.engine.filtered();
                    let state = RenderState {
                        filter: self.engine.state(),
                        total_count: self.engine.entries().len(),
                        month_count: self.engine.month_options().len().saturating_sub(1),
                        week_count: self.engine.week_options().len().saturating_sub(1),
                    };
                    render_ui(f, &entries, self.selected_idx, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.engine.state().search_text.is_empty() {
                    self.should_quit = true;
                } else {
                    self.engine.set_search("");
                    self.filters_changed();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::NextMonth => {
                self.engine.cycle_month(true);
                self.filters_changed();
            }
            Action::PrevMonth => {
                self.engine.cycle_month(false);
                self.filters_changed();
            }
            Action::NextWeek => {
                self.engine.cycle_week(true);
                self.filters_changed();
            }
            Action::PrevWeek => {
                self.engine.cycle_week(false);
                self.filters_changed();
            }
            Action::UpdateSearch(c) => {
                if self.engine.state().search_text.len() < MAX_SEARCH_LEN {
                    self.engine.push_search_char(c);
                    self.filters_changed();
                }
            }
            Action::DeleteChar => {
                if self.engine.pop_search_char() {
                    self.filters_changed();
                }
            }
            Action::None => {}
        }
    }

    fn filters_changed(&mut self) {
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.engine.filtered().len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }
}
