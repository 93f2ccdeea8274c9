//! Agent capability contract for Concourse.
//!
//! Every unit the coordinator can drive implements the [`Agent`] trait:
//! a capability declaration queried once at registration, a message
//! handler invoked by the router, and a task executor invoked by the
//! coordinator. Payloads stay opaque so the routing and coordination
//! layers never depend on payload shape.

mod capabilities;
mod contract;
mod fault;
mod payload;

pub use capabilities::CapabilitySet;
pub use contract::Agent;
#[cfg(test)]
pub(crate) use contract::MockAgent;
pub use fault::AgentFault;
pub use payload::Payload;

#[cfg(test)]
mod tests;
