//! Task fan-out and result collection for Concourse.
//!
//! The coordinator takes one task and an ordered list of agent ids,
//! marks each registered agent busy for the duration of its
//! `execute_task` call, and collects the per-agent outcomes into a
//! single report. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! Coordination shares the registry's directory port and needs no
//! ports or adapters of its own.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
