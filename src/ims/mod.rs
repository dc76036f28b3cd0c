//! IMS MmTel registration and capability simulation.
//!
//! This module stands in for the platform IMS MmTel manager during
//! automated tests. A test driver flips availability, drives registration
//! transitions, and publishes capability snapshots; registered listeners
//! receive callbacks through the executor they registered with. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
