//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`HomeOption`] - Category choices offered on the home screen

use crate::deck::WordLimit;
use crate::vocabulary::{CategorySelector, WordCategory};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Category and limit selection
    Home,
    /// Card view for the active session
    Study,
}

/// A category card on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeOption {
    pub selector: CategorySelector,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Home screen choices, in display order.
pub const HOME_OPTIONS: [HomeOption; 4] = [
    HomeOption {
        selector: CategorySelector::All,
        title: "Mixed Review",
        icon: "∞",
    },
    HomeOption {
        selector: CategorySelector::Only(WordCategory::Noun),
        title: "Nouns (Ism)",
        icon: "N",
    },
    HomeOption {
        selector: CategorySelector::Only(WordCategory::Verb),
        title: "Verbs (Fi'l)",
        icon: "V",
    },
    HomeOption {
        selector: CategorySelector::Only(WordCategory::Particle),
        title: "Particles (Harf)",
        icon: "P",
    },
];

impl HomeOption {
    /// One-line summary of the deck this option builds.
    pub fn description(&self, limit: WordLimit) -> String {
        match self.selector {
            CategorySelector::All => format!("~{} words total", limit.get() * 3),
            CategorySelector::Only(category) => {
                format!("Top {} {}s", limit, category.as_str().to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions_follow_limit() {
        let limit = WordLimit::from_preset(30).unwrap();
        assert_eq!(HOME_OPTIONS[0].description(limit), "~90 words total");
        assert_eq!(HOME_OPTIONS[1].description(limit), "Top 30 nouns");
        assert_eq!(HOME_OPTIONS[3].description(limit), "Top 30 particles");
    }

    #[test]
    fn test_mixed_review_is_first() {
        assert_eq!(HOME_OPTIONS[0].selector, CategorySelector::All);
    }
}
