//! CLI module for qflash.
//!
//! The CLI dispatcher is called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use qflash::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `false` for `RunTui` (no CLI action taken) and `true` when the
/// command was handled and the program should exit.
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            handle_help_command();
            true
        }
        CliCommand::RunTui(_) => false,
    }
}
