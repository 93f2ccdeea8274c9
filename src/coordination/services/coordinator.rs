//! Coordinator service: single-task fan-out with per-agent isolation.

use crate::agent::Payload;
use crate::coordination::domain::CoordinationReport;
use crate::registry::{
    domain::AgentId,
    ports::{AcquireOutcome, AgentDirectory, DirectoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for coordination operations.
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Result type for coordination operations.
pub type CoordinationResult<T> = Result<T, CoordinationError>;

/// Single-task fan-out coordinator.
///
/// Drives `execute_task` on each requested agent directly, bypassing
/// the router, and collects per-agent outcomes into a
/// [`CoordinationReport`].
#[derive(Clone)]
pub struct TaskCoordinator<D>
where
    D: AgentDirectory,
{
    directory: Arc<D>,
}

impl<D> TaskCoordinator<D>
where
    D: AgentDirectory,
{
    /// Creates a new coordinator over the shared directory.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Fans `task` out to `agent_ids` in the given order and collects
    /// per-agent results.
    ///
    /// Each registered agent is busy for exactly the duration of its
    /// `execute_task` call: acquisition is an atomic
    /// available-to-busy test-and-set, and the busy state is released
    /// before the outcome is inspected, on the fault path as well as
    /// the success path. Ids that are not registered, or that lost the
    /// acquisition race, are reported in the skipped and busy lists
    /// rather than dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinationError::Directory`] when the directory
    /// itself fails. Per-agent faults never abort the remaining ids;
    /// they are reported in [`CoordinationReport::faults`].
    pub async fn coordinate(
        &self,
        task: &Payload,
        agent_ids: &[AgentId],
    ) -> CoordinationResult<CoordinationReport> {
        let mut report = CoordinationReport::new();
        for agent_id in agent_ids {
            self.dispatch(task, agent_id, &mut report).await?;
        }
        info!(
            requested = agent_ids.len(),
            completed = report.results().len(),
            "coordination finished"
        );
        Ok(report)
    }

    async fn dispatch(
        &self,
        task: &Payload,
        agent_id: &AgentId,
        report: &mut CoordinationReport,
    ) -> CoordinationResult<()> {
        match self.directory.try_acquire(agent_id).await? {
            AcquireOutcome::NotFound => {
                debug!(agent_id = %agent_id, "agent not registered, skipping");
                report.record_skipped(agent_id.clone());
            }
            AcquireOutcome::Busy => {
                debug!(agent_id = %agent_id, "agent busy, not dispatching");
                report.record_busy(agent_id.clone());
            }
            AcquireOutcome::Acquired(handle) => {
                let outcome = handle.execute_task(task).await;
                self.directory.release(agent_id).await?;
                match outcome {
                    Ok(result) => report.record_result(agent_id.clone(), result),
                    Err(fault) => {
                        warn!(agent_id = %agent_id, fault = %fault, "agent faulted during task");
                        report.record_fault(agent_id.clone(), fault);
                    }
                }
            }
        }
        Ok(())
    }
}
