//! Panic hook that gives the shell back its terminal.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Install after `color_eyre::install()`, so the eyre report is printed to a
/// restored terminal:
///
/// ```no_run
/// color_eyre::install().unwrap();
/// qflash::terminal::setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
