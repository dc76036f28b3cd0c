//! Adapter implementations for the IMS callback ports.

pub mod recording;

mod executor;
mod runtime;

pub use executor::{InlineExecutor, QueuedExecutor};
pub use recording::{
    CapabilityEvent, RecordingCapabilityListener, RecordingRegistrationListener,
    RegistrationEvent,
};
pub use runtime::TokioExecutor;
