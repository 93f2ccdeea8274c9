//! Given steps for agent coordination BDD scenarios.

use super::world::{CoordinationWorld, EchoAgent, run_async};
use concourse::registry::domain::AgentId;
use concourse::registry::ports::{AcquireOutcome, AgentDirectory};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given(r#"a registered agent named "{name}""#)]
fn registered_agent_named(world: &mut CoordinationWorld, name: String) -> Result<(), eyre::Report> {
    run_async(
        world
            .registry
            .register(name.as_str(), Arc::new(EchoAgent::new(name.as_str()))),
    )
    .wrap_err("register agent for scenario")?;
    Ok(())
}

#[given(r#"the agent "{name}" is marked busy"#)]
fn agent_marked_busy(world: &mut CoordinationWorld, name: String) -> Result<(), eyre::Report> {
    let id = AgentId::new(name).wrap_err("parse agent id")?;
    let outcome = run_async(world.directory.try_acquire(&id)).wrap_err("acquire agent")?;
    if !matches!(outcome, AcquireOutcome::Acquired(_)) {
        return Err(eyre::eyre!("expected to acquire '{id}', got {outcome:?}"));
    }
    Ok(())
}
