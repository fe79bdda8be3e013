//! Study configuration.
//!
//! Defaults can be overridden from the environment and then from command-line
//! options.
//!
//! # Example
//!
//! ```
//! use qflash::config::StudyConfig;
//! use std::time::Duration;
//!
//! let config = StudyConfig::default()
//!     .with_navigation_delay(Duration::from_millis(100));
//! assert_eq!(config.default_limit.get(), 50);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::deck::WordLimit;

/// Environment variable naming a vocabulary JSON file.
pub const ENV_VOCABULARY: &str = "QFLASH_VOCAB";

/// Environment variable naming a log file.
pub const ENV_LOG_FILE: &str = "QFLASH_LOG";

/// File name looked up in the user config directory.
pub const VOCABULARY_FILE_NAME: &str = "vocabulary.json";

#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Limit preselected on the home screen (default: 50)
    pub default_limit: WordLimit,
    /// Loading pause before a deck appears (default: 400ms)
    pub build_delay: Duration,
    /// Pause between flipping a card back and showing the next one (default: 200ms)
    pub navigation_delay: Duration,
    /// Vocabulary file; the embedded dataset is used when unset
    pub vocabulary_path: Option<PathBuf>,
    /// Log file; logging is disabled when unset
    pub log_file: Option<PathBuf>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            default_limit: WordLimit::DEFAULT,
            build_delay: Duration::from_millis(400),
            navigation_delay: Duration::from_millis(200),
            vocabulary_path: None,
            log_file: None,
        }
    }
}

impl StudyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_limit(mut self, limit: WordLimit) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_build_delay(mut self, delay: Duration) -> Self {
        self.build_delay = delay;
        self
    }

    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = delay;
        self
    }

    pub fn with_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = Some(path.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults plus `QFLASH_VOCAB` / `QFLASH_LOG`, then the config directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env_path(ENV_VOCABULARY) {
            config.vocabulary_path = Some(path);
        } else if let Some(path) = user_vocabulary_file() {
            config.vocabulary_path = Some(path);
        }

        if let Some(path) = env_path(ENV_LOG_FILE) {
            config.log_file = Some(path);
        }

        config
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// `<config_dir>/qflash/vocabulary.json`, when that file exists.
pub fn user_vocabulary_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("qflash").join(VOCABULARY_FILE_NAME);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = StudyConfig::default();
        assert_eq!(config.default_limit, WordLimit::DEFAULT);
        assert_eq!(config.build_delay, Duration::from_millis(400));
        assert_eq!(config.navigation_delay, Duration::from_millis(200));
        assert!(config.vocabulary_path.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = StudyConfig::new()
            .with_default_limit(WordLimit::from_preset(10).unwrap())
            .with_build_delay(Duration::ZERO)
            .with_vocabulary_path("/tmp/words.json")
            .with_log_file("/tmp/qflash.log");

        assert_eq!(config.default_limit.get(), 10);
        assert_eq!(config.build_delay, Duration::ZERO);
        assert_eq!(config.vocabulary_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/qflash.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        std::env::set_var(ENV_VOCABULARY, "/tmp/env-words.json");
        std::env::set_var(ENV_LOG_FILE, "/tmp/env.log");

        let config = StudyConfig::from_env();

        std::env::remove_var(ENV_VOCABULARY);
        std::env::remove_var(ENV_LOG_FILE);

        assert_eq!(config.vocabulary_path, Some(PathBuf::from("/tmp/env-words.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/env.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_empty_values() {
        std::env::set_var(ENV_LOG_FILE, "");
        let config = StudyConfig::from_env();
        std::env::remove_var(ENV_LOG_FILE);

        assert!(config.log_file.is_none());
    }
}
