//! Queue port for messages awaiting busy recipients.

use crate::registry::domain::AgentId;
use crate::routing::domain::QueuedMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Message queue contract.
///
/// Append-only in the routing path; the remaining operations exist so
/// tests and operators can inspect what was recorded. Implementations
/// must support concurrent appends and preserve arrival order.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Appends a message in arrival order.
    async fn append(&self, message: &QueuedMessage) -> QueueResult<()>;

    /// Returns queued messages addressed to the given recipient, oldest
    /// first.
    async fn for_recipient(&self, id: &AgentId) -> QueueResult<Vec<QueuedMessage>>;

    /// Returns every queued message in arrival order.
    async fn all(&self) -> QueueResult<Vec<QueuedMessage>>;

    /// Returns the number of queued messages.
    async fn len(&self) -> QueueResult<usize>;

    /// Returns whether the queue holds no messages.
    async fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Errors returned by message queue implementations.
#[derive(Debug, Clone, Error)]
pub enum QueueError {
    /// Storage-layer failure.
    #[error("queue storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl QueueError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
