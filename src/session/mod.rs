//! Study session state machine.
//!
//! A session moves through three phases:
//!
//! - [`Phase::Idle`]: no category chosen, no deck
//! - [`Phase::Loading`]: category chosen, deck build pending
//! - [`Phase::Ready`]: deck built (possibly empty)
//!
//! Transitions that the UI delays (deck build, index change) are split in
//! two: the request returns a [`Ticket`], and [`Session::complete`] applies
//! the change once the delay has elapsed. Only the newest ticket of each
//! [`DelayKind`] is honoured, so a superseded timer can never change state.

mod ticket;

pub use ticket::{DelayKind, Ticket};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::debug;

use crate::deck::{build_deck, Deck};
use crate::vocabulary::{CategorySelector, VocabularyStore, WordEntry};

/// Coarse session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Direction of a pending navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Advance, wrapping from the last card to the first
    Forward,
    /// Go back, stopping at the first card
    Back,
}

/// Observable session data.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// `None` until a category is chosen
    pub selector: Option<CategorySelector>,
    /// Per-category limit the current deck was requested with
    pub limit: usize,
    pub deck: Deck,
    /// Always a valid position when `deck` is non-empty, 0 otherwise
    pub index: usize,
    pub flipped: bool,
    pub loading: bool,
    /// Entry shown in the detail overlay
    pub detail: Option<Arc<WordEntry>>,
}

#[derive(Debug, Clone, Copy)]
struct PendingBuild {
    ticket: Ticket,
    selector: CategorySelector,
    limit: usize,
}

#[derive(Debug, Clone, Copy)]
struct PendingNav {
    ticket: Ticket,
    step: Step,
}

/// Owner of the [`SessionState`] and its transitions.
pub struct Session {
    store: VocabularyStore,
    rng: StdRng,
    state: SessionState,
    pending_build: Option<PendingBuild>,
    pending_nav: Option<PendingNav>,
    next_ticket_id: u64,
}

impl Session {
    /// Create an idle session over `store`.
    pub fn new(store: VocabularyStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create an idle session with a seeded shuffle, for reproducible decks.
    pub fn with_seed(store: VocabularyStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: VocabularyStore, rng: StdRng) -> Self {
        Self {
            store,
            rng,
            state: SessionState::default(),
            pending_build: None,
            pending_nav: None,
            next_ticket_id: 0,
        }
    }

    fn issue(&mut self, kind: DelayKind) -> Ticket {
        self.next_ticket_id += 1;
        Ticket::new(kind, self.next_ticket_id)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start a new session for `selector`.
    ///
    /// The old deck is discarded immediately and any pending navigation is
    /// dropped. The returned ticket must be passed to [`Session::complete`]
    /// once the build delay has elapsed.
    pub fn select_category(&mut self, selector: CategorySelector, limit: usize) -> Ticket {
        self.pending_nav = None;

        let ticket = self.issue(DelayKind::Build);
        self.pending_build = Some(PendingBuild {
            ticket,
            selector,
            limit,
        });

        self.state.selector = Some(selector);
        self.state.limit = limit;
        self.state.deck.clear();
        self.state.index = 0;
        self.state.flipped = false;
        self.state.loading = true;

        debug!("Session: building {:?} deck (limit {}), ticket {}", selector, limit, ticket.id());
        ticket
    }

    /// Toggle the card face. No-op on an empty deck.
    pub fn flip(&mut self) -> bool {
        if self.state.deck.is_empty() {
            return false;
        }
        self.state.flipped = !self.state.flipped;
        true
    }

    /// Request the next card.
    ///
    /// The card flips back immediately; the index changes when the returned
    /// ticket completes. Returns `None` on an empty deck.
    pub fn next(&mut self) -> Option<Ticket> {
        if self.state.deck.is_empty() {
            return None;
        }
        Some(self.request_step(Step::Forward))
    }

    /// Request the previous card.
    ///
    /// Returns `None` on the first card or an empty deck. Unlike
    /// [`Session::next`] this never wraps.
    pub fn prev(&mut self) -> Option<Ticket> {
        if self.state.deck.is_empty() || self.state.index == 0 {
            return None;
        }
        Some(self.request_step(Step::Back))
    }

    fn request_step(&mut self, step: Step) -> Ticket {
        self.state.flipped = false;
        let ticket = self.issue(DelayKind::Navigate);
        self.pending_nav = Some(PendingNav { ticket, step });
        ticket
    }

    /// Apply the delayed transition for `ticket`.
    ///
    /// Returns `false` without touching state when `ticket` is not the
    /// pending ticket of its kind.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        match ticket.kind() {
            DelayKind::Build => {
                let Some(pending) = self.pending_build.filter(|p| p.ticket == ticket) else {
                    debug!("Session: ignoring stale build ticket {}", ticket.id());
                    return false;
                };
                self.pending_build = None;

                let deck = build_deck(&self.store, pending.selector, pending.limit, &mut self.rng);
                debug!("Session: deck ready with {} cards", deck.len());

                self.state.deck = deck;
                self.state.index = 0;
                self.state.flipped = false;
                self.state.loading = false;
                true
            }
            DelayKind::Navigate => {
                let Some(pending) = self.pending_nav.filter(|p| p.ticket == ticket) else {
                    debug!("Session: ignoring stale navigation ticket {}", ticket.id());
                    return false;
                };
                self.pending_nav = None;

                let len = self.state.deck.len();
                if len == 0 {
                    return false;
                }
                self.state.index = match pending.step {
                    Step::Forward if self.state.index + 1 < len => self.state.index + 1,
                    Step::Forward => 0,
                    Step::Back => self.state.index.saturating_sub(1),
                };
                true
            }
        }
    }

    /// Return to category selection, discarding the deck and pending work.
    pub fn leave(&mut self) {
        self.pending_build = None;
        self.pending_nav = None;
        self.state = SessionState::default();
        debug!("Session: back to category selection");
    }

    /// Show `entry` in the detail overlay.
    pub fn open_detail(&mut self, entry: Arc<WordEntry>) {
        self.state.detail = Some(entry);
    }

    /// Show the current card in the detail overlay. Returns false without a card.
    pub fn open_current_detail(&mut self) -> bool {
        match self.current().cloned() {
            Some(entry) => {
                self.open_detail(entry);
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.state.detail = None;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn phase(&self) -> Phase {
        match self.state.selector {
            None => Phase::Idle,
            Some(_) if self.state.loading => Phase::Loading,
            Some(_) => Phase::Ready,
        }
    }

    /// Entry at the current index, if any.
    pub fn current(&self) -> Option<&Arc<WordEntry>> {
        self.state.deck.get(self.state.index)
    }

    /// 1-based display position, 0 for an empty deck.
    pub fn position(&self) -> usize {
        if self.state.deck.is_empty() {
            0
        } else {
            self.state.index + 1
        }
    }

    pub fn len(&self) -> usize {
        self.state.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.deck.is_empty()
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn is_flipped(&self) -> bool {
        self.state.flipped
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn selector(&self) -> Option<CategorySelector> {
        self.state.selector
    }

    pub fn limit(&self) -> usize {
        self.state.limit
    }

    pub fn detail(&self) -> Option<&Arc<WordEntry>> {
        self.state.detail.as_ref()
    }

    /// Ticket currently pending for `kind`.
    pub fn pending(&self, kind: DelayKind) -> Option<Ticket> {
        match kind {
            DelayKind::Build => self.pending_build.map(|p| p.ticket),
            DelayKind::Navigate => self.pending_nav.map(|p| p.ticket),
        }
    }

    /// Whether `next` is allowed (the UI disables the control otherwise).
    pub fn can_advance(&self) -> bool {
        !self.state.deck.is_empty()
    }

    /// Whether `prev` is allowed.
    pub fn can_go_back(&self) -> bool {
        !self.state.deck.is_empty() && self.state.index > 0
    }
}
