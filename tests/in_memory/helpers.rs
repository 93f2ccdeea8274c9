//! Shared helpers for in-memory integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use concourse::agent::{Agent, AgentFault, CapabilitySet, Payload};
use concourse::coordination::services::TaskCoordinator;
use concourse::registry::adapters::memory::InMemoryAgentDirectory;
use concourse::registry::domain::{AgentId, AgentStatus};
use concourse::registry::ports::AgentDirectory;
use concourse::registry::services::AgentRegistryService;
use concourse::routing::adapters::memory::InMemoryMessageQueue;
use concourse::routing::services::MessageRouter;
use mockable::DefaultClock;
use rstest::fixture;

/// Directory type shared by every integration suite.
pub type TestDirectory = InMemoryAgentDirectory<DefaultClock>;

/// The full service stack wired over one shared directory and queue.
pub struct Stack {
    /// Shared agent directory.
    pub directory: Arc<TestDirectory>,
    /// Shared message queue.
    pub queue: Arc<InMemoryMessageQueue>,
    /// Registration service.
    pub registry: AgentRegistryService<TestDirectory, DefaultClock>,
    /// Message router.
    pub router: MessageRouter<TestDirectory, InMemoryMessageQueue, DefaultClock>,
    /// Task coordinator.
    pub coordinator: TaskCoordinator<TestDirectory>,
}

/// Provides a freshly wired service stack for each test.
#[fixture]
pub fn stack() -> Stack {
    let clock = Arc::new(DefaultClock);
    let directory = Arc::new(InMemoryAgentDirectory::new(Arc::clone(&clock)));
    let queue = Arc::new(InMemoryMessageQueue::new());
    let registry = AgentRegistryService::new(Arc::clone(&directory), Arc::clone(&clock));
    let router = MessageRouter::new(Arc::clone(&directory), Arc::clone(&queue), clock);
    let coordinator = TaskCoordinator::new(Arc::clone(&directory));
    Stack {
        directory,
        queue,
        registry,
        router,
        coordinator,
    }
}

/// Builds a validated agent id from a literal.
pub fn agent_id(raw: &str) -> AgentId {
    AgentId::new(raw).expect("valid agent id")
}

/// Scripted agent replying with fixed prefixes, the shape of the demo
/// agents.
pub struct ScriptedAgent {
    capabilities: CapabilitySet,
    message_prefix: &'static str,
    task_prefix: &'static str,
}

impl ScriptedAgent {
    /// Creates a scripted agent.
    pub fn new<const N: usize>(
        capabilities: [&str; N],
        message_prefix: &'static str,
        task_prefix: &'static str,
    ) -> Self {
        Self {
            capabilities: CapabilitySet::from_names(capabilities),
            message_prefix,
            task_prefix,
        }
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    async fn capabilities(&self) -> CapabilitySet {
        self.capabilities.clone()
    }

    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("{}{message}", self.message_prefix)))
    }

    async fn execute_task(&self, task: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("{}{task}", self.task_prefix)))
    }
}

/// Agent whose task execution always faults.
pub struct FaultyAgent;

#[async_trait]
impl Agent for FaultyAgent {
    async fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::from_names(["chaos"])
    }

    async fn process_message(&self, _message: &Payload) -> Result<Payload, AgentFault> {
        Err(AgentFault::new("refused the message"))
    }

    async fn execute_task(&self, _task: &Payload) -> Result<Payload, AgentFault> {
        Err(AgentFault::new("dropped the task"))
    }
}

/// Agent that observes its own directory status while executing, so
/// tests can assert it reads busy mid-task.
pub struct ProbeAgent {
    directory: Arc<TestDirectory>,
    own_id: AgentId,
    observed: Arc<Mutex<Vec<AgentStatus>>>,
}

impl ProbeAgent {
    /// Creates a probe watching its own record in `directory`.
    pub fn new(directory: Arc<TestDirectory>, own_id: AgentId) -> Self {
        Self {
            directory,
            own_id,
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the statuses observed during execution.
    pub fn observations(&self) -> Arc<Mutex<Vec<AgentStatus>>> {
        Arc::clone(&self.observed)
    }
}

#[async_trait]
impl Agent for ProbeAgent {
    async fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::from_names(["introspection"])
    }

    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("seen: {message}")))
    }

    async fn execute_task(&self, _task: &Payload) -> Result<Payload, AgentFault> {
        let record = self
            .directory
            .find_record(&self.own_id)
            .await
            .map_err(|err| AgentFault::new(err.to_string()))?
            .ok_or_else(|| AgentFault::new("probe record missing"))?;
        self.observed
            .lock()
            .map_err(|err| AgentFault::new(err.to_string()))?
            .push(record.status());
        Ok(Payload::text("probe done"))
    }
}
