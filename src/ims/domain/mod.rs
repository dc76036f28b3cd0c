//! Domain model for IMS registration and MmTel capabilities.
//!
//! These are immutable value types handed to listeners. They carry the
//! platform integer codes so tests can assert against the same constants
//! the real telephony stack reports.

mod capabilities;
mod error;
mod reason;
mod tech;

pub use capabilities::{MmTelCapabilities, MmTelCapability};
pub use error::ImsDomainError;
pub use reason::ImsReasonInfo;
pub use tech::RegistrationTech;
