//! Then steps for IMS registration BDD scenarios.

use super::world::{SimulatorWorld, parse_capability, parse_tech};
use ims_simulator::ims::ports::ImsError;
use rstest_bdd_macros::then;

#[then("the listener observed {count:usize} callbacks")]
fn listener_observed(world: &SimulatorWorld, count: usize) -> Result<(), eyre::Report> {
    let observed = world.registration_recorder.len();
    if observed != count {
        return Err(eyre::eyre!(
            "expected {count} registration callbacks, found {observed}: {:?}",
            world.registration_recorder.events()
        ));
    }
    Ok(())
}

#[then("the capability listener observed {count:usize} callbacks")]
fn capability_listener_observed(world: &SimulatorWorld, count: usize) -> Result<(), eyre::Report> {
    let observed = world.capability_recorder.len();
    if observed != count {
        return Err(eyre::eyre!("expected {count} capability callbacks, found {observed}"));
    }
    Ok(())
}

#[then(r#"the registration technology is "{tech}""#)]
fn registration_technology_is(world: &SimulatorWorld, tech: String) -> Result<(), eyre::Report> {
    let expected = parse_tech(&tech)?;
    let actual = world.simulator.registration_tech();
    if actual != expected {
        return Err(eyre::eyre!("expected registration over {expected}, found {actual}"));
    }
    Ok(())
}

#[then("registration fails as unsupported")]
fn registration_fails_unsupported(world: &SimulatorWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(ImsError::Unsupported { .. })) {
        return Err(eyre::eyre!("expected unsupported error, got {result:?}"));
    }
    if world.simulator.registration_listener_count() != 0 {
        return Err(eyre::eyre!("rejected listener should not be registered"));
    }
    Ok(())
}

#[then(r#""{capability}" is available over "{tech}""#)]
fn capability_is_available(
    world: &SimulatorWorld,
    capability: String,
    tech: String,
) -> Result<(), eyre::Report> {
    let available = world
        .simulator
        .is_available(parse_capability(&capability)?, parse_tech(&tech)?)
        .map_err(|err| eyre::eyre!("availability query failed: {err}"))?;
    if !available {
        return Err(eyre::eyre!("expected {capability} available over {tech}"));
    }
    Ok(())
}

#[then(r#""{capability}" is not available over "{tech}""#)]
fn capability_is_not_available(
    world: &SimulatorWorld,
    capability: String,
    tech: String,
) -> Result<(), eyre::Report> {
    let available = world
        .simulator
        .is_available(parse_capability(&capability)?, parse_tech(&tech)?)
        .map_err(|err| eyre::eyre!("availability query failed: {err}"))?;
    if available {
        return Err(eyre::eyre!("expected {capability} unavailable over {tech}"));
    }
    Ok(())
}

#[then("the query fails with a precondition error")]
fn query_fails_precondition(world: &SimulatorWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_query_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing query result in scenario world"))?;
    if !matches!(result, Err(ImsError::Precondition(_))) {
        return Err(eyre::eyre!("expected precondition error, got {result:?}"));
    }
    Ok(())
}
