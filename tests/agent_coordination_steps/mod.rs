//! Step definitions for agent coordination behaviour scenarios.

pub mod given;
pub mod then;
pub mod world;
