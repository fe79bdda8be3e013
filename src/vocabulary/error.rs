//! Errors raised while loading a vocabulary dataset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read
    #[error("Failed to read vocabulary file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a valid JSON array of entries
    #[error("Invalid vocabulary data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset contains no entries
    #[error("Vocabulary dataset is empty")]
    Empty,

    /// Two entries share an identifier
    #[error("Duplicate vocabulary id: {0}")]
    DuplicateId(String),
}
