//! Point-to-point message routing for Concourse.
//!
//! A message addressed to a registered, available agent is delivered
//! synchronously; a message addressed to a busy agent is queued and
//! never drained by this crate; a message addressed to an unknown id is
//! reported back to the caller. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
