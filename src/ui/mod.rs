//! UI rendering for qflash
//!
//! Two screens, chosen from the session phase:
//! - Home: word-count limit selector and category list
//! - Study: top bar, flashcard (or loading / empty placeholder), controls
//!
//! The word detail dialog is drawn over the study screen when an entry is
//! selected.

mod detail;
mod helpers;
mod home;
mod study;
mod theme;

pub use study::{EMPTY_DECK_TEXT, LOADING_TEXT};

use ratatui::Frame;

use crate::app::{App, Screen};
use detail::render_detail;
use home::render_home;
use study::render_study;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Home => render_home(frame, app),
        Screen::Study => {
            render_study(frame, app);
            render_detail(frame, app);
        }
    }
}
