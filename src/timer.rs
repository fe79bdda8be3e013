//! Cancel-replace scheduling of delayed session transitions.
//!
//! Each scheduled delay runs as a tokio task that sleeps and then posts
//! [`AppMessage::DelayElapsed`] on the app channel. Scheduling a delay of a
//! kind first aborts the outstanding task of that kind, so at most one task
//! per [`DelayKind`] is alive. A message that was already queued before the
//! abort is rejected by the session because its ticket is no longer current.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::session::{DelayKind, Ticket};

/// Owns the timer task handles for one session.
#[derive(Debug)]
pub struct DelayScheduler {
    message_tx: mpsc::UnboundedSender<AppMessage>,
    handles: HashMap<DelayKind, JoinHandle<()>>,
}

impl DelayScheduler {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            message_tx,
            handles: HashMap::new(),
        }
    }

    /// Deliver `ticket` after `delay`, replacing any delay of the same kind.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: Ticket, delay: Duration) {
        self.cancel(ticket.kind());

        let tx = self.message_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::DelayElapsed(ticket));
        });
        self.handles.insert(ticket.kind(), handle);
    }

    /// Abort the outstanding delay of `kind`, if any. Idempotent.
    pub fn cancel(&mut self, kind: DelayKind) {
        if let Some(handle) = self.handles.remove(&kind) {
            if !handle.is_finished() {
                tracing::debug!("Cancelling pending {:?} delay", kind);
            }
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel(DelayKind::Build);
        self.cancel(DelayKind::Navigate);
    }

    /// Whether a delay of `kind` is still sleeping.
    pub fn is_pending(&self, kind: DelayKind) -> bool {
        self.handles
            .get(&kind)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
