//! Command-line argument parsing for qflash.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::StudyConfig;
use crate::deck::WordLimit;

/// Error produced by malformed arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    /// A flag that takes a value was last on the command line
    #[error("Missing value for {0}")]
    MissingValue(String),

    /// `--limit` was not one of the recognised presets
    #[error("Invalid word limit '{0}' (expected one of 10, 30, 50, 100, 300)")]
    InvalidLimit(String),
}

/// Options that customise a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub limit: Option<WordLimit>,
    pub vocabulary_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Layer these options over `config`.
    pub fn apply(&self, mut config: StudyConfig) -> StudyConfig {
        if let Some(limit) = self.limit {
            config.default_limit = limit;
        }
        if let Some(path) = &self.vocabulary_path {
            config.vocabulary_path = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name. Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use qflash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["qflash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--limit" | "-n" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                let limit = value
                    .parse::<usize>()
                    .ok()
                    .and_then(WordLimit::from_preset)
                    .ok_or(ArgsError::InvalidLimit(value))?;
                options.limit = Some(limit);
            }
            "--vocab" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.vocabulary_path = Some(PathBuf::from(value));
            }
            "--log" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.log_file = Some(PathBuf::from(value));
            }
            _ => {}
        }
    }

    Ok(CliCommand::RunTui(options))
}
