//! Vocabulary entry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank used for entries without a frequency rank when sorting.
pub const UNRANKED: u32 = 9999;

/// Grammatical category of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
    Noun,
    Verb,
    /// Conjunctions, prepositions and other function words
    Particle,
    Adjective,
}

impl WordCategory {
    /// Categories combined by [`CategorySelector::All`], in deck order.
    ///
    /// Adjectives are not part of the mixed review.
    pub const MIXED: [WordCategory; 3] = [
        WordCategory::Noun,
        WordCategory::Verb,
        WordCategory::Particle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Noun => "Noun",
            WordCategory::Verb => "Verb",
            WordCategory::Particle => "Particle",
            WordCategory::Adjective => "Adjective",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vocabulary word.
///
/// Entries are immutable once loaded; decks hold them behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Unique identifier within the store
    pub id: String,
    /// Arabic script form
    pub arabic: String,
    /// Latin transliteration
    pub transliteration: String,
    /// English gloss
    pub english: String,
    pub category: WordCategory,
    /// Triliteral root, space separated (e.g. "ك ت ب")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_word: Option<String>,
    /// Approximate frequency rank; lower is more frequent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<u32>,
    /// Short ayah snippet using the word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_ayah: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
}

impl WordEntry {
    /// Create an entry with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        arabic: impl Into<String>,
        transliteration: impl Into<String>,
        english: impl Into<String>,
        category: WordCategory,
    ) -> Self {
        Self {
            id: id.into(),
            arabic: arabic.into(),
            transliteration: transliteration.into(),
            english: english.into(),
            category,
            root_word: None,
            frequency_rank: None,
            example_ayah: None,
            example_translation: None,
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.frequency_rank = Some(rank);
        self
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root_word = Some(root.into());
        self
    }

    pub fn with_example(
        mut self,
        ayah: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.example_ayah = Some(ayah.into());
        self.example_translation = Some(translation.into());
        self
    }

    /// Rank used for ordering. Missing (or zero) ranks sort last.
    pub fn sort_rank(&self) -> u32 {
        match self.frequency_rank {
            Some(rank) if rank > 0 => rank,
            _ => UNRANKED,
        }
    }

    pub fn is_verb(&self) -> bool {
        self.category == WordCategory::Verb
    }
}

/// Which categories a study session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// Mixed review: nouns, verbs and particles combined
    All,
    Only(WordCategory),
}

impl CategorySelector {
    /// Short label for the study screen header.
    pub fn label(&self) -> &'static str {
        match self {
            CategorySelector::All => "Mixed",
            CategorySelector::Only(category) => category.as_str(),
        }
    }
}

impl From<WordCategory> for CategorySelector {
    fn from(category: WordCategory) -> Self {
        CategorySelector::Only(category)
    }
}
