//! Agent availability status.

use super::ParseAgentStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability status of a registered agent.
///
/// A record is always in exactly one of the two states. Only the
/// coordinator moves a record to [`AgentStatus::Busy`]; the router
/// reads the status but never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// The agent can receive messages and be dispatched tasks.
    Available,
    /// The agent is executing a task; messages addressed to it are
    /// queued instead of delivered.
    Busy,
}

impl AgentStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentStatus {
    type Error = ParseAgentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            _ => Err(ParseAgentStatusError(value.to_owned())),
        }
    }
}
