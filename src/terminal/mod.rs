//! Terminal ownership for the TUI.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and puts it back when dropped. [`setup_panic_hook`] covers panics,
//! where the manager may never be dropped.
//!
//! ```no_run
//! use qflash::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term = TerminalManager::new()?;
//!     term.terminal().draw(|frame| {
//!         // render widgets
//!         let _ = frame.area();
//!     })?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

type StdoutTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate-screen terminal, restored on drop.
pub struct TerminalManager {
    terminal: StdoutTerminal,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = match enter_tui_mode(&mut stdout)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        {
            Ok(terminal) => terminal,
            Err(e) => {
                leave_tui_mode(&mut stdout);
                return Err(e.into());
            }
        };

        let mut manager = Self {
            terminal,
            restored: false,
        };
        // From here on Drop restores the terminal on error
        manager.terminal.clear()?;
        Ok(manager)
    }

    pub fn terminal(&mut self) -> &mut StdoutTerminal {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    /// Leave TUI mode now. Later calls, and the drop, do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
