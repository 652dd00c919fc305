// TUI module for browsing a transcript timeline
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
pub mod timestamps;

use anyhow::Result;
pub use app::TimelineApp;
use terminal::TerminalManager;

use crate::filters::TimelineFilterEngine;

/// Run the interactive timeline browser until the user quits
pub fn run_interactive(engine: TimelineFilterEngine) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = TimelineApp::new(engine);

    let res = app.run(manager.terminal_mut());

    // Restore before reporting a run error so it prints on the normal screen
    manager.restore()?;
    res
}
