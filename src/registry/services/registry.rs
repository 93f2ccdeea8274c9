//! Service layer for agent registration and lookup.
//!
//! Provides [`AgentRegistryService`] which coordinates id validation,
//! the one-time capability query, and directory writes.

use crate::agent::Agent;
use crate::registry::{
    domain::{AgentDomainError, AgentId, AgentRecord},
    ports::{AgentDirectory, DirectoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum RegistryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AgentDomainError),
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for registry service operations.
pub type RegistryServiceResult<T> = Result<T, RegistryServiceError>;

/// Agent registration and lookup orchestration service.
#[derive(Clone)]
pub struct AgentRegistryService<D, C>
where
    D: AgentDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<D, C> AgentRegistryService<D, C>
where
    D: AgentDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Registers an agent under the given id.
    ///
    /// The agent's capabilities are queried exactly once and captured
    /// in the stored record, which starts available. Registering an id
    /// that already exists silently replaces the prior record and
    /// handle; dispatch already in flight against the old handle
    /// finishes against whatever reference its caller retained.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the id fails
    /// validation, or [`RegistryServiceError::Directory`] when the
    /// store rejects the write.
    pub async fn register(
        &self,
        id: impl Into<String> + Send,
        agent: Arc<dyn Agent>,
    ) -> RegistryServiceResult<AgentRecord> {
        let agent_id = AgentId::new(id)?;
        let capabilities = agent.capabilities().await;
        let record = AgentRecord::new(agent_id, capabilities, &*self.clock);
        self.directory.upsert(record.clone(), agent).await?;
        info!(
            agent_id = %record.id(),
            capabilities = record.capabilities().len(),
            "registered agent"
        );
        Ok(record)
    }

    /// Looks up the registration record for an id.
    ///
    /// Returns `Ok(None)` when no agent is registered under the id;
    /// absence is not a fault.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the id string
    /// fails validation, or [`RegistryServiceError::Directory`] when
    /// the store lookup fails.
    pub async fn lookup(&self, id: &str) -> RegistryServiceResult<Option<AgentRecord>> {
        let agent_id = AgentId::new(id)?;
        Ok(self.directory.find_record(&agent_id).await?)
    }

    /// Returns all registration records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Directory`] when the store
    /// lookup fails.
    pub async fn list(&self) -> RegistryServiceResult<Vec<AgentRecord>> {
        Ok(self.directory.list().await?)
    }
}
