//! Port contracts for the routing module.

mod queue;

pub use queue::{MessageQueue, QueueError, QueueResult};
