//! Error types for registry domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent id is empty after trimming.
    #[error("agent id must not be empty")]
    EmptyAgentId,

    /// The agent id contains characters outside `[a-z0-9_]`.
    #[error(
        "agent id '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidAgentId(String),

    /// The agent id exceeds the 64-character limit.
    #[error("agent id exceeds 64 character limit: {0}")]
    AgentIdTooLong(String),
}

/// Error returned while parsing an agent status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);
