//! Port contracts for the registry module.

mod directory;

pub use directory::{
    AcquireOutcome, AgentDirectory, DirectoryError, DirectoryResult, RegisteredAgent,
};
