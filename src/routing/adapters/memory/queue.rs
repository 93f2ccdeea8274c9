//! In-memory message queue adapter.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::registry::domain::AgentId;
use crate::routing::{
    domain::QueuedMessage,
    ports::{MessageQueue, QueueError, QueueResult},
};

/// Thread-safe in-memory message queue preserving arrival order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageQueue {
    state: Arc<RwLock<Vec<QueuedMessage>>>,
}

impl InMemoryMessageQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageQueue for InMemoryMessageQueue {
    async fn append(&self, message: &QueuedMessage) -> QueueResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| QueueError::storage(std::io::Error::other(err.to_string())))?;
        state.push(message.clone());
        Ok(())
    }

    async fn for_recipient(&self, id: &AgentId) -> QueueResult<Vec<QueuedMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| QueueError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state
            .iter()
            .filter(|message| message.recipient() == id)
            .cloned()
            .collect())
    }

    async fn all(&self) -> QueueResult<Vec<QueuedMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| QueueError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }

    async fn len(&self) -> QueueResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| QueueError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.len())
    }
}
