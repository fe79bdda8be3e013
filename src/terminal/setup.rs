//! Escape sequences for entering and leaving the TUI.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch `writer` to the alternate screen and hide the cursor.
///
/// Raw mode is the caller's job.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored, so this is safe
/// to call on a terminal that was never set up.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    write_leave_sequence(writer);
}

/// Leave the alternate screen and show the cursor on `writer`.
fn write_leave_sequence<W: Write>(writer: &mut W) {
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// [`leave_tui_mode`] on stdout, for panic paths.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
