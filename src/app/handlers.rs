//! Key and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{App, AppMessage, Screen};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DelayElapsed(ticket) => {
                if self.session.complete(ticket) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Route a key press to the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        debug!("Key: code={:?} mods={:?} screen={:?}", key.code, key.modifiers, self.screen());

        match self.screen() {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Study if self.session.detail().is_some() => self.handle_detail_key(key.code),
            Screen::Study => self.handle_study_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.decrease_limit(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.increase_limit(),
            KeyCode::Enter | KeyCode::Char(' ') => self.start_highlighted(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.start_option(index);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_study_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => self.flip_card(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => self.next_card(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => self.prev_card(),
            KeyCode::Char('d') => self.open_detail(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.back_to_home(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// The detail overlay is modal: only closing keys are handled.
    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('d') | KeyCode::Enter | KeyCode::Backspace => {
                self.close_detail()
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
