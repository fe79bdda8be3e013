//! AppMessage enum for async communication within the application.

use crate::session::Ticket;

/// Messages received from background tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A scheduled session delay has elapsed
    DelayElapsed(Ticket),
}
