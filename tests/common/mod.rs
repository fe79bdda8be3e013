//! Common test utilities for integration tests.
//!
//! Small vocabulary fixtures with known categories and ranks, plus helpers
//! for driving an [`App`] without a terminal.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qflash::app::{App, AppMessage};
use qflash::config::StudyConfig;
use qflash::session::Session;
use qflash::vocabulary::{VocabularyStore, WordCategory, WordEntry};
use tokio::sync::mpsc::UnboundedReceiver;

/// Entry with a derived Arabic placeholder and optional rank.
pub fn word(id: &str, category: WordCategory, rank: Option<u32>) -> WordEntry {
    let entry = WordEntry::new(id, format!("ع{}", id), id, format!("gloss of {}", id), category);
    match rank {
        Some(rank) => entry.with_rank(rank),
        None => entry,
    }
}

/// `count` entries of `category` ranked 1..=count, ids `<prefix>1`, `<prefix>2`...
pub fn ranked_words(prefix: &str, category: WordCategory, count: u32) -> Vec<WordEntry> {
    (1..=count)
        .map(|rank| word(&format!("{}{}", prefix, rank), category, Some(rank)))
        .collect()
}

pub fn store(entries: Vec<WordEntry>) -> VocabularyStore {
    VocabularyStore::new(entries).expect("fixture ids are unique")
}

/// 6 nouns, 4 verbs, 2 particles and 3 adjectives, some unranked.
pub fn mixed_store() -> VocabularyStore {
    let mut entries = ranked_words("n", WordCategory::Noun, 5);
    entries.push(word("n-unranked", WordCategory::Noun, None));
    entries.extend(ranked_words("v", WordCategory::Verb, 4));
    entries.extend(ranked_words("p", WordCategory::Particle, 2));
    entries.extend(ranked_words("a", WordCategory::Adjective, 3));
    store(entries)
}

/// App with default delays and a seeded shuffle.
pub fn test_app(store: VocabularyStore) -> App {
    App::with_session(StudyConfig::default(), Session::with_seed(store, 42))
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Deliver every message already queued on the app channel.
pub fn drain_messages(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> usize {
    let mut delivered = 0;
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
        delivered += 1;
    }
    delivered
}
