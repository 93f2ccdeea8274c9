//! Agent registration record aggregate.

use super::{AgentId, AgentStatus};
use crate::agent::CapabilitySet;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registration record for a single agent.
///
/// # Invariants
///
/// - the id is assigned at registration and immutable thereafter
/// - the status is always exactly one of available or busy
/// - capabilities are queried once at registration and never refreshed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    id: AgentId,
    status: AgentStatus,
    capabilities: CapabilitySet,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AgentRecord {
    /// Creates a fresh record with [`AgentStatus::Available`] status.
    #[must_use]
    pub fn new(id: AgentId, capabilities: CapabilitySet, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            status: AgentStatus::Available,
            capabilities,
            registered_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the agent id.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the availability status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns whether the agent is available for dispatch.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == AgentStatus::Available
    }

    /// Returns the capabilities declared at registration.
    #[must_use]
    pub const fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns the latest status transition timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Marks the agent busy for the duration of a task.
    pub fn mark_busy(&mut self, clock: &impl Clock) {
        self.status = AgentStatus::Busy;
        self.touch(clock);
    }

    /// Marks the agent available again.
    pub fn mark_available(&mut self, clock: &impl Clock) {
        self.status = AgentStatus::Available;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
