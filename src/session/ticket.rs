//! Identifiers for delayed session transitions.

/// Category of delayed work. At most one delay of each kind is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayKind {
    /// Deck construction after a category is chosen
    Build,
    /// Index change after the card has flipped back
    Navigate,
}

/// Handle for one scheduled transition.
///
/// Tickets are issued with increasing ids. A session only honours the newest
/// ticket of each kind, so a timer that fires after being superseded is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    kind: DelayKind,
    id: u64,
}

impl Ticket {
    pub(crate) fn new(kind: DelayKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> DelayKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}
