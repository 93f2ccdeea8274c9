//! Agent-raised fault type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure signalled by an agent from `process_message` or
/// `execute_task`.
///
/// Faults carry an agent-supplied description and nothing else; the
/// router and coordinator report them without interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AgentFault {
    message: String,
}

impl AgentFault {
    /// Creates a fault with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the fault description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
