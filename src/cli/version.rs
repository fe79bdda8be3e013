//! Version command for qflash.

/// The current version of qflash, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("qflash {}", VERSION);
    std::process::exit(0)
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
qflash - Quranic vocabulary flashcards

USAGE:
    qflash [OPTIONS]

OPTIONS:
    -n, --limit <N>      Words per category (10, 30, 50, 100, 300)
        --vocab <PATH>   Vocabulary JSON file (env: QFLASH_VOCAB)
        --log <PATH>     Write logs to PATH (env: QFLASH_LOG, filter: RUST_LOG)
    -h, --help           Print help
    -V, --version        Print version
";

pub fn handle_help_command() {
    print!("{}", USAGE);
}
