//! Directory port for agent registration storage and dispatch lookup.

use crate::agent::Agent;
use crate::registry::domain::{AgentId, AgentRecord};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// A registered agent: its record plus the handle used for dispatch.
///
/// The directory holds the sole dispatch reference; callers keep their
/// own [`Arc`] for as long as they need one.
#[derive(Clone)]
pub struct RegisteredAgent {
    record: AgentRecord,
    handle: Arc<dyn Agent>,
}

impl RegisteredAgent {
    /// Creates a registered agent from its record and dispatch handle.
    #[must_use]
    pub const fn new(record: AgentRecord, handle: Arc<dyn Agent>) -> Self {
        Self { record, handle }
    }

    /// Returns the registration record.
    #[must_use]
    pub const fn record(&self) -> &AgentRecord {
        &self.record
    }

    /// Returns the dispatch handle.
    #[must_use]
    pub fn handle(&self) -> Arc<dyn Agent> {
        Arc::clone(&self.handle)
    }
}

impl fmt::Debug for RegisteredAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredAgent")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

/// Outcome of an atomic available-to-busy acquisition attempt.
pub enum AcquireOutcome {
    /// The agent was available and is now marked busy; the handle may
    /// be used for dispatch until released.
    Acquired(Arc<dyn Agent>),
    /// The agent is already busy; no state was changed.
    Busy,
    /// No agent is registered under the id; no state was changed.
    NotFound,
}

impl fmt::Debug for AcquireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquired(_) => f.write_str("Acquired(..)"),
            Self::Busy => f.write_str("Busy"),
            Self::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Agent directory storage contract.
///
/// Implementations must allow concurrent reads and must serialise
/// status transitions per agent id: [`AgentDirectory::try_acquire`] is
/// a test-and-set, so two concurrent coordinators can never both win
/// the same agent.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Stores a record and its dispatch handle, silently overwriting
    /// any existing registration under the same id.
    async fn upsert(&self, record: AgentRecord, handle: Arc<dyn Agent>) -> DirectoryResult<()>;

    /// Finds a registered agent by id.
    ///
    /// Returns `None` when no agent is registered under the id.
    async fn find(&self, id: &AgentId) -> DirectoryResult<Option<RegisteredAgent>>;

    /// Finds a registration record by id, without the dispatch handle.
    ///
    /// Returns `None` when no agent is registered under the id.
    async fn find_record(&self, id: &AgentId) -> DirectoryResult<Option<AgentRecord>>;

    /// Returns all registration records.
    async fn list(&self) -> DirectoryResult<Vec<AgentRecord>>;

    /// Atomically marks an available agent busy and returns its handle.
    async fn try_acquire(&self, id: &AgentId) -> DirectoryResult<AcquireOutcome>;

    /// Marks a previously acquired agent available again.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when the id is not
    /// registered; only callers that acquired an agent may release it.
    async fn release(&self, id: &AgentId) -> DirectoryResult<()>;
}

/// Errors returned by agent directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The agent was not found.
    #[error("agent not found: {0}")]
    NotFound(AgentId),

    /// Storage-layer failure.
    #[error("directory storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
