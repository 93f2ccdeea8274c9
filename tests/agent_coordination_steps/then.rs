//! Then steps for agent coordination BDD scenarios.

use super::world::{CoordinationWorld, run_async};
use concourse::registry::domain::{AgentId, AgentStatus};
use concourse::routing::domain::RouteOutcome;
use concourse::routing::ports::MessageQueue;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then("the report holds {count:usize} results")]
fn report_holds_results(world: &CoordinationWorld, count: usize) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no coordination report in scenario world"))?;
    if report.results().len() != count {
        return Err(eyre::eyre!(
            "expected {count} results, found {}",
            report.results().len()
        ));
    }
    Ok(())
}

#[then(r#"the agent "{name}" reads {status}"#)]
fn agent_reads_status(
    world: &CoordinationWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = AgentStatus::try_from(status.as_str()).wrap_err("parse expected status")?;
    let record = run_async(world.registry.lookup(&name))
        .wrap_err("lookup agent")?
        .ok_or_else(|| eyre::eyre!("expected agent '{name}' to be registered"))?;
    if record.status() != expected {
        return Err(eyre::eyre!(
            "expected '{name}' to read {expected}, found {}",
            record.status()
        ));
    }
    Ok(())
}

#[then(r#"the report lists "{id}" as skipped"#)]
fn report_lists_skipped(world: &CoordinationWorld, id: String) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no coordination report in scenario world"))?;
    let skipped_id = AgentId::new(id).wrap_err("parse skipped id")?;
    if !report.skipped().contains(&skipped_id) {
        return Err(eyre::eyre!(
            "expected '{skipped_id}' in skipped list, found {:?}",
            report.skipped()
        ));
    }
    Ok(())
}

#[then("the route outcome is queued")]
fn route_outcome_is_queued(world: &CoordinationWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_route_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no route outcome in scenario world"))?;
    if !outcome.is_queued() {
        return Err(eyre::eyre!("expected a queued outcome, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"{count:usize} messages are queued for "{name}""#)]
fn messages_queued_for(
    world: &CoordinationWorld,
    count: usize,
    name: String,
) -> Result<(), eyre::Report> {
    let id = AgentId::new(name).wrap_err("parse recipient id")?;
    let queued = run_async(world.queue.for_recipient(&id)).wrap_err("inspect queue")?;
    if queued.len() != count {
        return Err(eyre::eyre!(
            "expected {count} queued messages for '{id}', found {}",
            queued.len()
        ));
    }
    Ok(())
}

#[then(r#"the route outcome names the missing agent "{id}""#)]
fn route_outcome_names_missing(world: &CoordinationWorld, id: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_route_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no route outcome in scenario world"))?;
    let expected = AgentId::new(id).wrap_err("parse missing id")?;
    match outcome {
        RouteOutcome::NotFound(missing) if *missing == expected => Ok(()),
        other => Err(eyre::eyre!(
            "expected not-found naming '{expected}', got {other:?}"
        )),
    }
}
