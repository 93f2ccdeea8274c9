//! In-memory agent directory adapter.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::agent::Agent;
use crate::registry::{
    domain::{AgentId, AgentRecord},
    ports::{AcquireOutcome, AgentDirectory, DirectoryError, DirectoryResult, RegisteredAgent},
};

/// Thread-safe in-memory agent directory.
///
/// The sole store for registry state: the router and coordinator share
/// one directory instance instead of hidden module-level state.
#[derive(Clone)]
pub struct InMemoryAgentDirectory<C> {
    state: Arc<RwLock<DirectoryState>>,
    clock: Arc<C>,
}

#[derive(Default)]
struct DirectoryState {
    agents: HashMap<AgentId, DirectoryEntry>,
}

struct DirectoryEntry {
    record: AgentRecord,
    handle: Arc<dyn Agent>,
}

impl<C> InMemoryAgentDirectory<C> {
    /// Creates an empty directory stamping status transitions with the
    /// given clock.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DirectoryState::default())),
            clock,
        }
    }
}

impl<C> fmt::Debug for InMemoryAgentDirectory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryAgentDirectory")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> AgentDirectory for InMemoryAgentDirectory<C> {
    async fn upsert(&self, record: AgentRecord, handle: Arc<dyn Agent>) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;

        state
            .agents
            .insert(record.id().clone(), DirectoryEntry { record, handle });
        Ok(())
    }

    async fn find(&self, id: &AgentId) -> DirectoryResult<Option<RegisteredAgent>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;
        let registered = state
            .agents
            .get(id)
            .map(|entry| RegisteredAgent::new(entry.record.clone(), Arc::clone(&entry.handle)));
        Ok(registered)
    }

    async fn find_record(&self, id: &AgentId) -> DirectoryResult<Option<AgentRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.agents.get(id).map(|entry| entry.record.clone()))
    }

    async fn list(&self) -> DirectoryResult<Vec<AgentRecord>> {
        let state = self
            .state
            .read()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state
            .agents
            .values()
            .map(|entry| entry.record.clone())
            .collect())
    }

    async fn try_acquire(&self, id: &AgentId) -> DirectoryResult<AcquireOutcome> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;

        let Some(entry) = state.agents.get_mut(id) else {
            return Ok(AcquireOutcome::NotFound);
        };

        if !entry.record.is_available() {
            return Ok(AcquireOutcome::Busy);
        }

        entry.record.mark_busy(&*self.clock);
        Ok(AcquireOutcome::Acquired(Arc::clone(&entry.handle)))
    }

    async fn release(&self, id: &AgentId) -> DirectoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DirectoryError::storage(std::io::Error::other(err.to_string())))?;

        let entry = state
            .agents
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        entry.record.mark_available(&*self.clock);
        Ok(())
    }
}
