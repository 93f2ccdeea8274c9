//! Registers two example agents and coordinates a travel planning task.
//!
//! Usage:
//!
//! ```text
//! trip_planner
//! ```
//!
//! The binary wires the in-memory directory and queue into the registry,
//! router, and coordinator services, registers a research agent and a
//! budget agent, routes one warm-up message, and fans a single planning
//! task out to both agents. Results are emitted through `tracing`;
//! verbosity is controlled with `RUST_LOG` (default `info`).

use std::sync::Arc;

use async_trait::async_trait;
use concourse::agent::{Agent, AgentFault, CapabilitySet, Payload};
use concourse::coordination::services::{CoordinationError, TaskCoordinator};
use concourse::registry::adapters::memory::InMemoryAgentDirectory;
use concourse::registry::domain::{AgentDomainError, AgentId};
use concourse::registry::services::{AgentRegistryService, RegistryServiceError};
use concourse::routing::adapters::memory::InMemoryMessageQueue;
use concourse::routing::services::{MessageRouter, RoutingError};
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid demo agent id: {0}")]
    Id(#[from] AgentDomainError),
    #[error("registration failed: {0}")]
    Registration(#[from] RegistryServiceError),
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
    #[error("coordination failed: {0}")]
    Coordination(#[from] CoordinationError),
}

/// Gathers destination research for routed messages and fanned-out
/// tasks.
struct ResearchAgent;

#[async_trait]
impl Agent for ResearchAgent {
    async fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::from_names(["web_search", "data_analysis", "fact_checking"])
    }

    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("Research completed: {message}")))
    }

    async fn execute_task(&self, task: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("Research results for: {task}")))
    }
}

/// Produces cost breakdowns for fanned-out tasks.
struct BudgetAgent;

#[async_trait]
impl Agent for BudgetAgent {
    async fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::from_names([
            "cost_calculation",
            "budget_planning",
            "financial_analysis",
        ])
    }

    async fn process_message(&self, message: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("Budget analysis: {message}")))
    }

    async fn execute_task(&self, task: &Payload) -> Result<Payload, AgentFault> {
        Ok(Payload::text(format!("Budget breakdown for: {task}")))
    }
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let clock = Arc::new(DefaultClock);
    let directory = Arc::new(InMemoryAgentDirectory::new(Arc::clone(&clock)));
    let queue = Arc::new(InMemoryMessageQueue::new());
    let registry = AgentRegistryService::new(Arc::clone(&directory), Arc::clone(&clock));
    let router = MessageRouter::new(Arc::clone(&directory), queue, clock);
    let coordinator = TaskCoordinator::new(directory);

    registry.register("researcher", Arc::new(ResearchAgent)).await?;
    registry.register("budgeter", Arc::new(BudgetAgent)).await?;

    let planner = AgentId::new("planner")?;
    let researcher = AgentId::new("researcher")?;
    let budgeter = AgentId::new("budgeter")?;

    let outcome = router
        .route(&planner, &researcher, Payload::text("top sights in Paris"))
        .await?;
    info!(outcome = ?outcome, "routed warm-up message");

    let task = Payload::text("Plan 3-day Paris trip for 2 people, $2000 budget");
    let report = coordinator.coordinate(&task, &[researcher, budgeter]).await?;

    for (agent_id, result) in report.results() {
        info!(agent = %agent_id, result = %result, "task result");
    }
    Ok(())
}
