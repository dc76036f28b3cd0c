//! Shared world state for IMS registration BDD scenarios.

use std::sync::Arc;

use ims_simulator::ims::{
    adapters::{InlineExecutor, RecordingCapabilityListener, RecordingRegistrationListener},
    domain::{MmTelCapabilities, MmTelCapability, RegistrationTech},
    ports::{CallbackExecutor, ImsResult},
    services::ImsMmTelSimulator,
};
use rstest::fixture;

/// Scenario world for IMS registration behaviour tests.
pub struct SimulatorWorld {
    /// The simulator under test.
    pub simulator: ImsMmTelSimulator,
    /// Registration listener observed by the scenario.
    pub registration_recorder: RecordingRegistrationListener,
    /// Capability listener observed by the scenario.
    pub capability_recorder: RecordingCapabilityListener,
    /// Result of the last listener registration attempt.
    pub last_register_result: Option<ImsResult<()>>,
    /// Result of the last capability availability query.
    pub last_query_result: Option<ImsResult<bool>>,
}

impl SimulatorWorld {
    /// Creates a world around a fresh simulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            simulator: ImsMmTelSimulator::new(),
            registration_recorder: RecordingRegistrationListener::new(),
            capability_recorder: RecordingCapabilityListener::new(),
            last_register_result: None,
            last_query_result: None,
        }
    }
}

impl Default for SimulatorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SimulatorWorld {
    SimulatorWorld::default()
}

/// Returns an executor that delivers callbacks before the trigger returns.
pub fn inline() -> Arc<dyn CallbackExecutor> {
    Arc::new(InlineExecutor::new())
}

/// Parses a registration technology name used in feature files.
pub fn parse_tech(name: &str) -> Result<RegistrationTech, eyre::Report> {
    RegistrationTech::try_from(name).map_err(|err| eyre::eyre!("{err}"))
}

/// Parses a single capability name used in feature files.
pub fn parse_capability(name: &str) -> Result<MmTelCapability, eyre::Report> {
    MmTelCapability::ALL
        .into_iter()
        .find(|capability| capability.as_str() == name.trim())
        .ok_or_else(|| eyre::eyre!("unknown capability '{name}'"))
}

/// Parses a comma-separated capability list used in feature files.
pub fn parse_capabilities(list: &str) -> Result<MmTelCapabilities, eyre::Report> {
    list.split(',')
        .map(parse_capability)
        .collect::<Result<Vec<_>, _>>()
        .map(MmTelCapabilities::from_capabilities)
}
