//! Port contracts for IMS callback delivery.
//!
//! Listeners and executors are supplied by the test driver; the simulator
//! only ever talks to them through these traits.

pub mod error;
pub mod executor;
pub mod listener;

pub use error::{ImsError, ImsErrorCode, ImsResult};
pub use executor::{CallbackExecutor, CallbackTask};
pub use listener::{CapabilityListener, RegistrationListener};
