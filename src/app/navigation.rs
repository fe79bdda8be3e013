//! Session and screen navigation for the App.
//!
//! Each method forwards to the [`Session`](crate::session::Session) and hands
//! any returned ticket to the scheduler with the configured delay.

use tracing::{debug, info};

use super::{App, HOME_OPTIONS};
use crate::session::DelayKind;
use crate::vocabulary::CategorySelector;

impl App {
    /// Start a session for `selector` with the current limit.
    ///
    /// Pending navigation is cancelled before the build delay is scheduled.
    pub fn select_category(&mut self, selector: CategorySelector) {
        self.scheduler.cancel(DelayKind::Navigate);

        let ticket = self.session.select_category(selector, self.limit.get());
        self.scheduler.schedule(ticket, self.config.build_delay);

        info!("Starting {} session (top {})", selector.label(), self.limit);
        self.mark_dirty();
    }

    /// Start a session for the highlighted home option.
    pub fn start_highlighted(&mut self) {
        let option = self.highlighted_option();
        self.select_category(option.selector);
    }

    /// Highlight and start the option at `index`, if it exists.
    pub fn start_option(&mut self, index: usize) {
        if let Some(option) = HOME_OPTIONS.get(index) {
            self.home_cursor = index;
            self.select_category(option.selector);
        }
    }

    pub fn flip_card(&mut self) {
        if self.session.flip() {
            self.mark_dirty();
        }
    }

    pub fn next_card(&mut self) {
        if let Some(ticket) = self.session.next() {
            self.scheduler.schedule(ticket, self.config.navigation_delay);
            self.mark_dirty();
        }
    }

    pub fn prev_card(&mut self) {
        if let Some(ticket) = self.session.prev() {
            self.scheduler.schedule(ticket, self.config.navigation_delay);
            self.mark_dirty();
        }
    }

    /// Open the detail overlay for the current card.
    pub fn open_detail(&mut self) {
        if self.session.open_current_detail() {
            self.mark_dirty();
        }
    }

    pub fn close_detail(&mut self) {
        if self.session.detail().is_some() {
            self.session.close_detail();
            self.mark_dirty();
        }
    }

    /// Leave the session and return to category selection.
    pub fn back_to_home(&mut self) {
        self.scheduler.cancel_all();
        self.session.leave();
        info!("Session ended");
        self.mark_dirty();
    }

    // ========================================================================
    // Home screen
    // ========================================================================

    pub fn move_up(&mut self) {
        if self.home_cursor > 0 {
            self.home_cursor -= 1;
            self.mark_dirty();
        }
    }

    pub fn move_down(&mut self) {
        if self.home_cursor + 1 < HOME_OPTIONS.len() {
            self.home_cursor += 1;
            self.mark_dirty();
        }
    }

    pub fn increase_limit(&mut self) {
        self.limit = self.limit.next();
        debug!("Word limit set to {}", self.limit);
        self.mark_dirty();
    }

    pub fn decrease_limit(&mut self) {
        self.limit = self.limit.prev();
        debug!("Word limit set to {}", self.limit);
        self.mark_dirty();
    }
}
