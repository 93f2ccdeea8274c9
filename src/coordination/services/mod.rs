//! Orchestration services for the coordination module.

mod coordinator;

pub use coordinator::{CoordinationError, CoordinationResult, TaskCoordinator};
