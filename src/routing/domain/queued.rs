//! Queued message records for busy recipients.

use super::MessageId;
use crate::agent::Payload;
use crate::registry::domain::AgentId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message recorded because its recipient was busy at route time.
///
/// Queued messages are an audit log: nothing in this crate dequeues,
/// retries, or expires them. The sender id is recorded as given and is
/// never checked against the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMessage {
    id: MessageId,
    sender: AgentId,
    recipient: AgentId,
    payload: Payload,
    queued_at: DateTime<Utc>,
}

impl QueuedMessage {
    /// Records a message addressed to a busy recipient.
    #[must_use]
    pub fn new(sender: AgentId, recipient: AgentId, payload: Payload, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            recipient,
            payload,
            queued_at: clock.utc(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender id.
    #[must_use]
    pub const fn sender(&self) -> &AgentId {
        &self.sender
    }

    /// Returns the recipient id.
    #[must_use]
    pub const fn recipient(&self) -> &AgentId {
        &self.recipient
    }

    /// Returns the message payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns when the message was queued.
    #[must_use]
    pub const fn queued_at(&self) -> DateTime<Utc> {
        self.queued_at
    }
}
