//! Domain model for agent registration.
//!
//! The registry domain models agent identity, availability status, and
//! the registration record binding them to the capabilities an agent
//! declared. All infrastructure concerns stay outside the domain
//! boundary.

mod error;
mod ids;
mod record;
mod status;

pub use error::{AgentDomainError, ParseAgentStatusError};
pub use ids::AgentId;
pub use record::AgentRecord;
pub use status::AgentStatus;
