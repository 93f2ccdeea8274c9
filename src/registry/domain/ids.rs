//! Identifier types for the registry domain.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an agent identifier.
const MAX_ID_LENGTH: usize = 64;

/// Validated, lowercase alphanumeric-plus-underscores agent identifier.
///
/// Agent ids are the unique names agents register under (e.g.
/// `researcher`, `budgeter`). Message senders carry the same type, but
/// senders are never checked against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates a validated agent id.
    ///
    /// The input is trimmed and lowercased. Only characters in
    /// `[a-z0-9_]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentId`] when the value is
    /// empty after trimming, [`AgentDomainError::InvalidAgentId`] when
    /// it contains characters outside `[a-z0-9_]`, or
    /// [`AgentDomainError::AgentIdTooLong`] when it exceeds 64
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyAgentId);
        }

        if normalized.len() > MAX_ID_LENGTH {
            return Err(AgentDomainError::AgentIdTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(AgentDomainError::InvalidAgentId(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the agent id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
