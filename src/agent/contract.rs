//! The capability contract implemented by external agents.

use super::{AgentFault, CapabilitySet, Payload};
use async_trait::async_trait;

/// Contract implemented by every unit the coordinator can drive.
///
/// Registration queries [`Agent::capabilities`] exactly once; the
/// router awaits [`Agent::process_message`] while the agent is
/// available; the coordinator awaits [`Agent::execute_task`] while the
/// agent's record is busy.
///
/// Implementations must not re-enter routing or coordination for their
/// own id from `execute_task`: the record is busy for the whole call,
/// so the router would queue rather than deliver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Agent: Send + Sync {
    /// Returns the capability names this agent declares.
    async fn capabilities(&self) -> CapabilitySet;

    /// Handles a message routed to this agent, returning its reply.
    ///
    /// # Errors
    ///
    /// Returns [`AgentFault`] when the agent cannot handle the message.
    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault>;

    /// Executes a task fanned out by the coordinator, returning its
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`AgentFault`] when the task cannot be completed.
    async fn execute_task(&self, task: &Payload) -> Result<Payload, AgentFault>;
}
