//! Deck construction.
//!
//! A deck is the shuffled list of entries studied in one session. It is built
//! by filtering the store by category, keeping the `limit` most frequent
//! entries of each category, and shuffling the result.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

use crate::vocabulary::{CategorySelector, VocabularyStore, WordCategory, WordEntry};

/// Ordered entries for one study session.
pub type Deck = Vec<Arc<WordEntry>>;

/// Build a shuffled deck for `selector`.
///
/// For a single category the deck holds at most `limit` entries. For
/// [`CategorySelector::All`] each mixed category contributes at most `limit`
/// entries, so the deck holds at most `3 * limit`. A selection with no
/// matching entries yields an empty deck.
pub fn build_deck<R: Rng + ?Sized>(
    store: &VocabularyStore,
    selector: CategorySelector,
    limit: usize,
    rng: &mut R,
) -> Deck {
    let mut deck = match selector {
        CategorySelector::Only(category) => ranked_candidates(store, category, limit),
        CategorySelector::All => WordCategory::MIXED
            .iter()
            .flat_map(|category| ranked_candidates(store, *category, limit))
            .collect(),
    };

    deck.shuffle(rng);
    deck
}

/// [`build_deck`] with the thread-local RNG.
pub fn build_deck_random(
    store: &VocabularyStore,
    selector: CategorySelector,
    limit: usize,
) -> Deck {
    build_deck(store, selector, limit, &mut rand::thread_rng())
}

/// The `limit` most frequent entries of `category`, in rank order.
///
/// Unranked entries sort after every ranked one. The sort is stable, so
/// entries with equal rank keep their store order.
pub fn ranked_candidates(store: &VocabularyStore, category: WordCategory, limit: usize) -> Deck {
    let mut candidates: Deck = store
        .iter()
        .filter(|entry| entry.category == category)
        .cloned()
        .collect();

    candidates.sort_by_key(|entry| entry.sort_rank());
    candidates.truncate(limit);
    candidates
}

/// Length of the deck [`build_deck`] will produce.
pub fn expected_deck_len(
    store: &VocabularyStore,
    selector: CategorySelector,
    limit: usize,
) -> usize {
    match selector {
        CategorySelector::Only(category) => store.count(category).min(limit),
        CategorySelector::All => WordCategory::MIXED
            .iter()
            .map(|category| store.count(*category).min(limit))
            .sum(),
    }
}

/// Per-category word-count limit offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordLimit(usize);

impl WordLimit {
    /// Recognised limits, smallest first.
    pub const PRESETS: [usize; 5] = [10, 30, 50, 100, 300];

    pub const DEFAULT: WordLimit = WordLimit(50);

    /// Accept only one of the recognised presets.
    pub fn from_preset(value: usize) -> Option<Self> {
        Self::PRESETS.contains(&value).then_some(WordLimit(value))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    fn preset_index(&self) -> usize {
        Self::PRESETS
            .iter()
            .position(|preset| *preset == self.0)
            .unwrap_or(0)
    }

    /// Next larger preset, wrapping to the smallest.
    pub fn next(&self) -> Self {
        let idx = (self.preset_index() + 1) % Self::PRESETS.len();
        WordLimit(Self::PRESETS[idx])
    }

    /// Next smaller preset, wrapping to the largest.
    pub fn prev(&self) -> Self {
        let len = Self::PRESETS.len();
        let idx = (self.preset_index() + len - 1) % len;
        WordLimit(Self::PRESETS[idx])
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn nouns_ranked(count: u32) -> Vec<WordEntry> {
        (1..=count)
            .map(|rank| {
                WordEntry::new(format!("n{rank}"), "ا", "a", "a", WordCategory::Noun)
                    .with_rank(rank)
            })
            .collect()
    }

    fn ids(deck: &Deck) -> HashSet<String> {
        deck.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_single_category_keeps_lowest_ranks() {
        // Store order deliberately reversed so sorting matters
        let mut entries = nouns_ranked(5);
        entries.reverse();
        entries.push(WordEntry::new("v1", "ف", "f", "f", WordCategory::Verb).with_rank(1));
        let store = VocabularyStore::new(entries).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let deck = build_deck(&store, WordCategory::Noun.into(), 3, &mut rng);

        assert_eq!(deck.len(), 3);
        let expected: HashSet<String> = ["n1", "n2", "n3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ids(&deck), expected);
    }

    #[test]
    fn test_unranked_sorted_last() {
        let entries = vec![
            WordEntry::new("u", "ا", "a", "a", WordCategory::Verb),
            WordEntry::new("r9", "ب", "b", "b", WordCategory::Verb).with_rank(9),
            WordEntry::new("r2", "ت", "t", "t", WordCategory::Verb).with_rank(2),
        ];
        let store = VocabularyStore::new(entries).unwrap();

        let ranked = ranked_candidates(&store, WordCategory::Verb, 10);
        let order: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["r2", "r9", "u"]);

        let truncated = ranked_candidates(&store, WordCategory::Verb, 2);
        assert!(truncated.iter().all(|e| e.id != "u"));
    }

    #[test]
    fn test_all_concatenates_mixed_categories() {
        let mut entries = nouns_ranked(4);
        entries.push(WordEntry::new("v1", "ف", "f", "f", WordCategory::Verb).with_rank(1));
        entries.push(WordEntry::new("p1", "في", "fi", "in", WordCategory::Particle).with_rank(1));
        entries.push(
            WordEntry::new("p2", "من", "min", "from", WordCategory::Particle).with_rank(2),
        );
        entries.push(
            WordEntry::new("a1", "كبير", "kabir", "big", WordCategory::Adjective).with_rank(1),
        );
        let store = VocabularyStore::new(entries).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let deck = build_deck(&store, CategorySelector::All, 2, &mut rng);

        // min(2,4) nouns + min(2,1) verbs + min(2,2) particles
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.len(), expected_deck_len(&store, CategorySelector::All, 2));
        assert!(deck.iter().all(|e| e.category != WordCategory::Adjective));
        assert_eq!(ids(&deck).len(), deck.len());
    }

    #[test]
    fn test_empty_selection_is_empty_deck() {
        let store = VocabularyStore::new(nouns_ranked(3)).unwrap();
        let deck = build_deck_random(&store, WordCategory::Particle.into(), 10);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_zero_limit_is_empty_deck() {
        let store = VocabularyStore::new(nouns_ranked(3)).unwrap();
        assert!(build_deck_random(&store, CategorySelector::All, 0).is_empty());
    }

    #[test]
    fn test_deck_shares_store_entries() {
        let store = VocabularyStore::new(nouns_ranked(2)).unwrap();
        let deck = build_deck_random(&store, WordCategory::Noun.into(), 10);
        for entry in &deck {
            let original = store.get(&entry.id).unwrap();
            assert!(Arc::ptr_eq(entry, original));
        }
    }

    #[test]
    fn test_word_limit_presets() {
        assert_eq!(WordLimit::default().get(), 50);
        assert_eq!(WordLimit::from_preset(300).map(|l| l.get()), Some(300));
        assert!(WordLimit::from_preset(42).is_none());
    }

    #[test]
    fn test_word_limit_cycles() {
        let limit = WordLimit::DEFAULT;
        assert_eq!(limit.next().get(), 100);
        assert_eq!(limit.prev().get(), 30);

        let largest = WordLimit::from_preset(300).unwrap();
        assert_eq!(largest.next().get(), 10);
        let smallest = WordLimit::from_preset(10).unwrap();
        assert_eq!(smallest.prev().get(), 300);
    }
}
