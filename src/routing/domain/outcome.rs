//! Route outcomes reported to callers.

use super::MessageId;
use crate::agent::Payload;
use crate::registry::domain::AgentId;

/// Outcome of routing a single message to one recipient.
///
/// All three cases are reported conditions rather than faults: the
/// caller decides what an unknown or busy recipient means for it.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The recipient was available; its reply is returned verbatim.
    Delivered(Payload),
    /// The recipient was busy; the message was queued under the id.
    Queued(MessageId),
    /// No agent is registered under the recipient id.
    NotFound(AgentId),
}

impl RouteOutcome {
    /// Returns whether the message was delivered.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }

    /// Returns whether the message was queued for a busy recipient.
    #[must_use]
    pub const fn is_queued(&self) -> bool {
        matches!(self, Self::Queued(_))
    }

    /// Returns whether the recipient was not registered.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
