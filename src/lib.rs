//! IMS simulator: a test double for IMS MmTel registration and capability
//! callbacks.
//!
//! This crate stands in for a telephony stack's IMS MmTel manager during
//! automated testing. A test driver flips IMS availability, drives
//! registration transitions, and publishes capability snapshots; listeners
//! registered with the simulator observe the resulting callbacks on the
//! executor they supplied.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Registration technologies, capability snapshots, reasons
//! - **Ports**: Listener and executor traits consumed by the simulator
//! - **Adapters**: Inline, queued, and tokio executors plus recording
//!   listeners
//!
//! # Modules
//!
//! - [`ims`]: Registration and capability simulation

pub mod ims;
