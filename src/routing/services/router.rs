//! Router service: the deliver-or-queue decision for one message.

use crate::agent::{AgentFault, Payload};
use crate::registry::{
    domain::AgentId,
    ports::{AgentDirectory, DirectoryError},
};
use crate::routing::{
    domain::{QueuedMessage, RouteOutcome},
    ports::{MessageQueue, QueueError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for routing operations.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The recipient raised a fault while processing the message.
    #[error("agent '{agent_id}' faulted while processing a message: {source}")]
    AgentFault {
        /// The faulting recipient.
        agent_id: AgentId,
        /// The fault the agent raised.
        #[source]
        source: AgentFault,
    },

    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Queue operation failed.
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Point-to-point message router.
///
/// Reads the same directory the coordinator mutates; the
/// deliver-or-queue decision depends only on the recipient's status at
/// route time.
#[derive(Clone)]
pub struct MessageRouter<D, Q, C>
where
    D: AgentDirectory,
    Q: MessageQueue,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    queue: Arc<Q>,
    clock: Arc<C>,
}

impl<D, Q, C> MessageRouter<D, Q, C>
where
    D: AgentDirectory,
    Q: MessageQueue,
    C: Clock + Send + Sync,
{
    /// Creates a new message router.
    #[must_use]
    pub const fn new(directory: Arc<D>, queue: Arc<Q>, clock: Arc<C>) -> Self {
        Self {
            directory,
            queue,
            clock,
        }
    }

    /// Routes one message from `from` to `to`.
    ///
    /// The sender is never checked against the directory; routing from
    /// an unregistered sender is legal and leaves the sender untouched.
    /// An available recipient processes the message synchronously, and
    /// its status is not changed around the call: message processing is
    /// lightweight and non-exclusive, unlike task execution. A busy
    /// recipient has the message queued instead; nothing in this crate
    /// delivers it later.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::AgentFault`] when an available recipient
    /// fails to process the message, or [`RoutingError::Directory`] /
    /// [`RoutingError::Queue`] when a backing store fails.
    pub async fn route(
        &self,
        from: &AgentId,
        to: &AgentId,
        payload: Payload,
    ) -> RoutingResult<RouteOutcome> {
        let Some(recipient) = self.directory.find(to).await? else {
            debug!(recipient = %to, "route target not registered");
            return Ok(RouteOutcome::NotFound(to.clone()));
        };

        if !recipient.record().is_available() {
            let message = QueuedMessage::new(from.clone(), to.clone(), payload, &*self.clock);
            let message_id = message.id();
            self.queue.append(&message).await?;
            debug!(recipient = %to, message_id = %message_id, "recipient busy, message queued");
            return Ok(RouteOutcome::Queued(message_id));
        }

        let reply = recipient
            .handle()
            .process_message(&payload)
            .await
            .map_err(|source| RoutingError::AgentFault {
                agent_id: to.clone(),
                source,
            })?;
        debug!(recipient = %to, "message delivered");
        Ok(RouteOutcome::Delivered(reply))
    }
}
