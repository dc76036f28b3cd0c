//! Application services for IMS registration and capability simulation.

mod config;
mod registry;
mod simulator;

pub use config::SimulatorConfig;
pub use registry::{ListenerBinding, ListenerRegistry};
pub use simulator::ImsMmTelSimulator;
