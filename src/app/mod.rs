//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`HomeOption`] - Category choices on the home screen
//! - [`AppMessage`] - Messages for async communication
//!
//! The [`App`] is the single owner of the study [`Session`]. Every mutation
//! happens on the UI task, either in response to a key press or to an
//! [`AppMessage`] posted by the [`DelayScheduler`].

mod handlers;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{HomeOption, Screen, HOME_OPTIONS};

use tokio::sync::mpsc;

use crate::config::StudyConfig;
use crate::deck::WordLimit;
use crate::session::{Phase, Session};
use crate::timer::DelayScheduler;
use crate::vocabulary::VocabularyStore;

/// Main application state
pub struct App {
    /// Study session (deck, index, flip and detail state)
    pub session: Session,
    /// Timer tasks for delayed session transitions
    pub scheduler: DelayScheduler,
    pub config: StudyConfig,
    /// Words per category selected on the home screen
    pub limit: WordLimit,
    /// Highlighted entry in [`HOME_OPTIONS`]
    pub home_cursor: usize,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for animations (loading spinner)
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create a new App over `store`.
    pub fn new(config: StudyConfig, store: VocabularyStore) -> Self {
        Self::with_session(config, Session::new(store))
    }

    /// Create an App around an existing session (e.g. one with a seeded shuffle).
    pub fn with_session(config: StudyConfig, session: Session) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            session,
            scheduler: DelayScheduler::new(message_tx.clone()),
            limit: config.default_limit,
            config,
            home_cursor: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Screen derived from the session phase.
    pub fn screen(&self) -> Screen {
        match self.session.phase() {
            Phase::Idle => Screen::Home,
            Phase::Loading | Phase::Ready => Screen::Study,
        }
    }

    /// Option currently highlighted on the home screen.
    pub fn highlighted_option(&self) -> HomeOption {
        HOME_OPTIONS[self.home_cursor.min(HOME_OPTIONS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(StudyConfig::default(), VocabularyStore::embedded().unwrap())
    }

    #[test]
    fn test_app_starts_on_home() {
        let app = test_app();
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(app.limit, WordLimit::DEFAULT);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
    }

    #[test]
    fn test_limit_comes_from_config() {
        let config = StudyConfig::default().with_default_limit(WordLimit::from_preset(10).unwrap());
        let app = App::new(config, VocabularyStore::embedded().unwrap());
        assert_eq!(app.limit.get(), 10);
    }
}
