//! Redraw and terminal bookkeeping for the App.

use super::App;

impl App {
    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick.
    ///
    /// Only the loading placeholder animates, so ticks outside of loading do
    /// not request a redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.session.is_loading() {
            self.mark_dirty();
        }
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        self.scheduler.cancel_all();
        self.should_quit = true;
    }

    /// Record a terminal resize. Marks dirty only when the size changed.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }
}
