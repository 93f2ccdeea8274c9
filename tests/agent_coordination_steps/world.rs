//! Shared world state for agent coordination BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use concourse::agent::{Agent, AgentFault, CapabilitySet, Payload};
use concourse::coordination::domain::CoordinationReport;
use concourse::coordination::services::TaskCoordinator;
use concourse::registry::adapters::memory::InMemoryAgentDirectory;
use concourse::registry::services::AgentRegistryService;
use concourse::routing::adapters::memory::InMemoryMessageQueue;
use concourse::routing::domain::RouteOutcome;
use concourse::routing::services::MessageRouter;
use mockable::DefaultClock;
use rstest::fixture;

/// Directory type used by the BDD world.
pub type TestDirectory = InMemoryAgentDirectory<DefaultClock>;

/// Scenario world for agent coordination behaviour tests.
pub struct CoordinationWorld {
    /// Shared agent directory.
    pub directory: Arc<TestDirectory>,
    /// Shared message queue.
    pub queue: Arc<InMemoryMessageQueue>,
    /// The registry service under test.
    pub registry: AgentRegistryService<TestDirectory, DefaultClock>,
    /// The router service under test.
    pub router: MessageRouter<TestDirectory, InMemoryMessageQueue, DefaultClock>,
    /// The coordinator service under test.
    pub coordinator: TaskCoordinator<TestDirectory>,
    /// Outcome of the last route call.
    pub last_route_outcome: Option<RouteOutcome>,
    /// Report of the last coordinate call.
    pub last_report: Option<CoordinationReport>,
}

impl CoordinationWorld {
    /// Creates a world with a freshly wired service stack.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let directory = Arc::new(InMemoryAgentDirectory::new(Arc::clone(&clock)));
        let queue = Arc::new(InMemoryMessageQueue::new());
        let registry = AgentRegistryService::new(Arc::clone(&directory), Arc::clone(&clock));
        let router = MessageRouter::new(Arc::clone(&directory), Arc::clone(&queue), clock);
        let coordinator = TaskCoordinator::new(Arc::clone(&directory));
        Self {
            directory,
            queue,
            registry,
            router,
            coordinator,
            last_route_outcome: None,
            last_report: None,
        }
    }
}

impl Default for CoordinationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CoordinationWorld {
    CoordinationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Scripted agent used by scenarios; replies echo the incoming value.
pub struct EchoAgent {
    name: String,
}

impl EchoAgent {
    /// Creates an echo agent that labels replies with its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Agent for EchoAgent {
    async fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::from_names(["echo"])
    }

    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("{} heard: {message}", self.name)))
    }

    async fn execute_task(&self, task: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("{} finished: {task}", self.name)))
    }
}
