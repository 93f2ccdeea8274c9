//! Orchestration services for the routing module.

mod router;

pub use router::{MessageRouter, RoutingError, RoutingResult};
