//! Start-up configuration for the simulator.

/// Initial settings for an [`ImsMmTelSimulator`](super::ImsMmTelSimulator).
///
/// # Examples
///
/// ```
/// use ims_simulator::ims::services::SimulatorConfig;
///
/// let config = SimulatorConfig::default();
/// assert!(config.ims_available_on_device);
///
/// let unsupported = SimulatorConfig::unsupported();
/// assert!(!unsupported.ims_available_on_device);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Whether listener registration is accepted when the simulator starts.
    pub ims_available_on_device: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            ims_available_on_device: true,
        }
    }
}

impl SimulatorConfig {
    /// Creates a configuration for a device without IMS support.
    ///
    /// Every listener registration fails until availability is switched on.
    #[must_use]
    pub const fn unsupported() -> Self {
        Self {
            ims_available_on_device: false,
        }
    }
}
