//! Listener ports notified by the simulator.
//!
//! Every method has an empty default body so a listener only implements
//! the callbacks it cares about.

use crate::ims::domain::{ImsReasonInfo, MmTelCapabilities, RegistrationTech};

/// Receives IMS registration lifecycle callbacks.
pub trait RegistrationListener: Send + Sync {
    /// IMS is attempting to register over `tech`.
    fn on_registering(&self, tech: RegistrationTech) {
        let _ = tech;
    }

    /// IMS registered over `tech`.
    fn on_registered(&self, tech: RegistrationTech) {
        let _ = tech;
    }

    /// IMS is no longer registered.
    fn on_unregistered(&self, reason: &ImsReasonInfo) {
        let _ = reason;
    }
}

/// Receives MmTel capability status callbacks.
pub trait CapabilityListener: Send + Sync {
    /// The available MmTel capabilities changed while IMS was registered.
    fn on_capabilities_status_changed(&self, capabilities: &MmTelCapabilities) {
        let _ = capabilities;
    }
}
