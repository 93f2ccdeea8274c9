//! Per-agent outcomes of one task fan-out.

use crate::agent::{AgentFault, Payload};
use crate::registry::domain::AgentId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated outcome of one `coordinate` call.
///
/// The results map holds agents that completed the task; skipped, busy,
/// and faulting agents are reported alongside it so absence from the
/// results is never silent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinationReport {
    results: HashMap<AgentId, Payload>,
    skipped: Vec<AgentId>,
    busy: Vec<AgentId>,
    faults: HashMap<AgentId, AgentFault>,
}

impl CoordinationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the task results keyed by agent id.
    #[must_use]
    pub const fn results(&self) -> &HashMap<AgentId, Payload> {
        &self.results
    }

    /// Returns the result recorded for one agent, if it completed.
    #[must_use]
    pub fn result_for(&self, id: &AgentId) -> Option<&Payload> {
        self.results.get(id)
    }

    /// Returns ids that were not registered at dispatch time, in
    /// request order.
    #[must_use]
    pub fn skipped(&self) -> &[AgentId] {
        &self.skipped
    }

    /// Returns ids that were already busy at dispatch time, in request
    /// order.
    #[must_use]
    pub fn busy(&self) -> &[AgentId] {
        &self.busy
    }

    /// Returns faults raised during task execution, keyed by agent id.
    #[must_use]
    pub const fn faults(&self) -> &HashMap<AgentId, AgentFault> {
        &self.faults
    }

    /// Returns whether every requested agent completed the task.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.busy.is_empty() && self.faults.is_empty()
    }

    pub(crate) fn record_result(&mut self, id: AgentId, result: Payload) {
        self.results.insert(id, result);
    }

    pub(crate) fn record_skipped(&mut self, id: AgentId) {
        self.skipped.push(id);
    }

    pub(crate) fn record_busy(&mut self, id: AgentId) {
        self.busy.push(id);
    }

    pub(crate) fn record_fault(&mut self, id: AgentId, fault: AgentFault) {
        self.faults.insert(id, fault);
    }
}
