//! Vocabulary store.
//!
//! The store is an immutable, ordered list of [`WordEntry`] values. It is
//! cheap to clone (entries live behind one shared `Arc`) and is only ever
//! read by the deck builder and the UI.
//!
//! A dataset ships with the binary; a different one can be loaded from a JSON
//! file with the same shape:
//!
//! ```
//! use qflash::vocabulary::VocabularyStore;
//!
//! let store = VocabularyStore::embedded().unwrap();
//! assert!(!store.is_empty());
//! ```

mod error;
mod word;

pub use error::VocabularyError;
pub use word::{CategorySelector, WordCategory, WordEntry, UNRANKED};

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Dataset compiled into the binary.
const EMBEDDED_VOCABULARY: &str = include_str!("../../assets/vocabulary.json");

/// Read-only, shared sequence of vocabulary entries.
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    entries: Arc<[Arc<WordEntry>]>,
}

impl VocabularyStore {
    /// Build a store from entries, rejecting duplicate ids.
    ///
    /// An empty list is accepted here; file loaders reject it separately.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, VocabularyError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(VocabularyError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let entries: Vec<WordEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Self::new(entries)
    }

    /// Load a JSON vocabulary file.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let json = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        tracing::info!("Loaded {} vocabulary entries from {}", store.len(), path.display());
        Ok(store)
    }

    /// The dataset bundled with the application.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::from_json(EMBEDDED_VOCABULARY)
    }

    /// Load `path` when given, otherwise fall back to the embedded dataset.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, VocabularyError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    pub fn entries(&self) -> &[Arc<WordEntry>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<WordEntry>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<WordEntry>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries in `category`.
    pub fn count(&self, category: WordCategory) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }
}
