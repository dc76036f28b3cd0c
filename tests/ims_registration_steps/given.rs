//! Given steps for IMS registration BDD scenarios.

use std::sync::Arc;

use super::world::{SimulatorWorld, inline};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a registered registration listener")]
fn registered_registration_listener(world: &mut SimulatorWorld) -> Result<(), eyre::Report> {
    world
        .simulator
        .register_registration_listener(inline(), Arc::new(world.registration_recorder.clone()))
        .wrap_err("register registration listener for scenario")
}

#[given("a registered capability listener")]
fn registered_capability_listener(world: &mut SimulatorWorld) -> Result<(), eyre::Report> {
    world
        .simulator
        .register_capability_listener(inline(), Arc::new(world.capability_recorder.clone()))
        .wrap_err("register capability listener for scenario")
}

#[given("IMS is not available on the device")]
fn ims_not_available(world: &mut SimulatorWorld) {
    world.simulator.set_ims_available_on_device(false);
}
