//! Behaviour tests for IMS registration and capability callbacks.

mod ims_registration_steps;

use ims_registration_steps::world::{SimulatorWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/ims_registration.feature",
    name = "Registration lifecycle reaches a listener"
)]
fn registration_lifecycle(world: SimulatorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ims_registration.feature",
    name = "Device without IMS rejects listeners"
)]
fn unsupported_device(world: SimulatorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ims_registration.feature",
    name = "Capability changes are only reported while registered"
)]
fn capability_gating(world: SimulatorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ims_registration.feature",
    name = "Capability query before any snapshot fails"
)]
fn query_before_snapshot(world: SimulatorWorld) {
    let _ = world;
}
