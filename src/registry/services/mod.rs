//! Orchestration services for the registry module.

mod registry;

pub use registry::{AgentRegistryService, RegistryServiceError, RegistryServiceResult};
