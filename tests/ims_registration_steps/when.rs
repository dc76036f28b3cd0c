//! When steps for IMS registration BDD scenarios.

use std::sync::Arc;

use super::world::{SimulatorWorld, inline, parse_capabilities, parse_capability, parse_tech};
use ims_simulator::ims::domain::ImsReasonInfo;
use rstest_bdd_macros::when;

#[when("a registration listener registers")]
fn registration_listener_registers(world: &mut SimulatorWorld) {
    let result = world
        .simulator
        .register_registration_listener(inline(), Arc::new(world.registration_recorder.clone()));
    world.last_register_result = Some(result);
}

#[when(r#"IMS starts registering over "{tech}""#)]
fn ims_registering(world: &mut SimulatorWorld, tech: String) -> Result<(), eyre::Report> {
    world.simulator.trigger_registering(parse_tech(&tech)?);
    Ok(())
}

#[when(r#"IMS registers over "{tech}""#)]
fn ims_registers(world: &mut SimulatorWorld, tech: String) -> Result<(), eyre::Report> {
    world.simulator.trigger_registered(parse_tech(&tech)?);
    Ok(())
}

#[when("IMS unregisters with reason code {code:i32}")]
fn ims_unregisters(world: &mut SimulatorWorld, code: i32) {
    world.simulator.trigger_unregistered(ImsReasonInfo::new(code, 0));
}

#[when(r#"capabilities "{list}" become available"#)]
fn capabilities_available(world: &mut SimulatorWorld, list: String) -> Result<(), eyre::Report> {
    world.simulator.set_capabilities_available(parse_capabilities(&list)?);
    Ok(())
}

#[when(r#"capability "{capability}" is queried over "{tech}""#)]
fn capability_queried(
    world: &mut SimulatorWorld,
    capability: String,
    tech: String,
) -> Result<(), eyre::Report> {
    let result = world
        .simulator
        .is_available(parse_capability(&capability)?, parse_tech(&tech)?);
    world.last_query_result = Some(result);
    Ok(())
}
