//! Service layer for IMS registration and capability simulation.
//!
//! Provides [`ImsMmTelSimulator`], which a test driver uses to flip IMS
//! availability, drive registration transitions, and publish capability
//! snapshots while registered listeners observe the resulting callbacks.

use super::{ListenerBinding, ListenerRegistry, SimulatorConfig};
use crate::ims::{
    domain::{ImsReasonInfo, MmTelCapabilities, MmTelCapability, RegistrationTech},
    ports::{CallbackExecutor, CapabilityListener, ImsError, ImsResult, RegistrationListener},
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Test double for the platform IMS MmTel manager.
///
/// IMS is supported and unregistered when the simulator starts. Clones
/// share state, so a listener may hold a clone and query the simulator from
/// inside its own callback.
///
/// The simulator follows a single-writer contract: one test thread drives
/// the mutators. Calling mutators concurrently from several threads is not
/// supported and gives no ordering guarantee between the calls.
///
/// For every trigger the new state is committed, and the internal lock
/// released, before any callback is submitted. Callbacks for one trigger
/// are submitted in registration order.
#[derive(Debug, Clone, Default)]
pub struct ImsMmTelSimulator {
    state: Arc<RwLock<SimulatorState>>,
    config: SimulatorConfig,
}

#[derive(Debug)]
struct SimulatorState {
    ims_available_on_device: bool,
    registration_listeners: ListenerRegistry<dyn RegistrationListener>,
    capability_listeners: ListenerRegistry<dyn CapabilityListener>,
    registration_tech: RegistrationTech,
    capabilities: Option<MmTelCapabilities>,
}

impl SimulatorState {
    const fn new(config: SimulatorConfig) -> Self {
        Self {
            ims_available_on_device: config.ims_available_on_device,
            registration_listeners: ListenerRegistry::new(),
            capability_listeners: ListenerRegistry::new(),
            registration_tech: RegistrationTech::None,
            capabilities: None,
        }
    }

    fn ensure_ims_available(&self) -> ImsResult<()> {
        if self.ims_available_on_device {
            Ok(())
        } else {
            Err(ImsError::not_available_on_device())
        }
    }
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl ImsMmTelSimulator {
    /// Creates a simulator with IMS supported and unregistered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator from explicit start-up settings.
    #[must_use]
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(SimulatorState::new(config))),
            config,
        }
    }

    /// Returns the settings the simulator was created with.
    #[must_use]
    pub const fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Sets whether IMS is available on the simulated device.
    ///
    /// While unavailable, listener registration fails with
    /// [`ImsError::Unsupported`]. Listeners registered earlier stay
    /// registered.
    pub fn set_ims_available_on_device(&self, available: bool) {
        self.write().ims_available_on_device = available;
        debug!(available, "IMS device availability changed");
    }

    /// Returns whether IMS is available on the simulated device.
    #[must_use]
    pub fn is_ims_available_on_device(&self) -> bool {
        self.read().ims_available_on_device
    }

    /// Registers `listener` for registration callbacks delivered on
    /// `executor`.
    ///
    /// Registering the same listener again rebinds it to the new executor.
    /// No callback is delivered at registration time.
    ///
    /// # Errors
    ///
    /// Returns [`ImsError::Unsupported`] when IMS is not available on the
    /// device; the listener is not registered.
    pub fn register_registration_listener(
        &self,
        executor: Arc<dyn CallbackExecutor>,
        listener: Arc<dyn RegistrationListener>,
    ) -> ImsResult<()> {
        let mut state = self.write();
        if let Err(err) = state.ensure_ims_available() {
            warn!("registration listener rejected: IMS not available on device");
            return Err(err);
        }
        let replaced = state.registration_listeners.insert(listener, executor);
        debug!(
            replaced,
            listeners = state.registration_listeners.len(),
            "registration listener registered"
        );
        Ok(())
    }

    /// Removes `listener` from registration callbacks.
    ///
    /// Unknown listeners are ignored.
    pub fn unregister_registration_listener(&self, listener: &Arc<dyn RegistrationListener>) {
        let mut state = self.write();
        let removed = state.registration_listeners.remove(listener);
        debug!(
            removed,
            listeners = state.registration_listeners.len(),
            "registration listener unregistered"
        );
    }

    /// Notifies registration listeners that IMS is registering over `tech`.
    ///
    /// Registering is transient, so the current registration technology
    /// does not change.
    pub fn trigger_registering(&self, tech: RegistrationTech) {
        let bindings = self.read().registration_listeners.snapshot();
        info!(%tech, listeners = bindings.len(), "IMS registering");
        dispatch(bindings, move |listener| {
            listener.on_registering(tech);
        });
    }

    /// Marks IMS registered over `tech` and notifies registration listeners.
    pub fn trigger_registered(&self, tech: RegistrationTech) {
        let bindings = {
            let mut state = self.write();
            state.registration_tech = tech;
            state.registration_listeners.snapshot()
        };
        info!(%tech, listeners = bindings.len(), "IMS registered");
        dispatch(bindings, move |listener| {
            listener.on_registered(tech);
        });
    }

    /// Marks IMS unregistered and notifies registration listeners with
    /// `reason`.
    pub fn trigger_unregistered(&self, reason: ImsReasonInfo) {
        let bindings = {
            let mut state = self.write();
            state.registration_tech = RegistrationTech::None;
            state.registration_listeners.snapshot()
        };
        info!(
            code = reason.code(),
            extra_code = reason.extra_code(),
            listeners = bindings.len(),
            "IMS unregistered"
        );
        dispatch(bindings, move |listener| {
            listener.on_unregistered(&reason);
        });
    }

    /// Registers `listener` for capability callbacks delivered on
    /// `executor`.
    ///
    /// # Errors
    ///
    /// Returns [`ImsError::Unsupported`] when IMS is not available on the
    /// device; the listener is not registered.
    pub fn register_capability_listener(
        &self,
        executor: Arc<dyn CallbackExecutor>,
        listener: Arc<dyn CapabilityListener>,
    ) -> ImsResult<()> {
        let mut state = self.write();
        if let Err(err) = state.ensure_ims_available() {
            warn!("capability listener rejected: IMS not available on device");
            return Err(err);
        }
        let replaced = state.capability_listeners.insert(listener, executor);
        debug!(
            replaced,
            listeners = state.capability_listeners.len(),
            "capability listener registered"
        );
        Ok(())
    }

    /// Removes `listener` from capability callbacks.
    ///
    /// Unknown listeners are ignored.
    pub fn unregister_capability_listener(&self, listener: &Arc<dyn CapabilityListener>) {
        let mut state = self.write();
        let removed = state.capability_listeners.remove(listener);
        debug!(
            removed,
            listeners = state.capability_listeners.len(),
            "capability listener unregistered"
        );
    }

    /// Returns whether `capability` is available over `tech`.
    ///
    /// A capability is available when the latest snapshot asserts it and
    /// IMS is currently registered over exactly `tech`.
    ///
    /// # Errors
    ///
    /// Returns [`ImsError::Precondition`] when no capability snapshot has
    /// been set yet.
    pub fn is_available(
        &self,
        capability: MmTelCapability,
        tech: RegistrationTech,
    ) -> ImsResult<bool> {
        let state = self.read();
        let capabilities = state.capabilities.ok_or(ImsError::Precondition(
            "capability availability queried before any capabilities were set",
        ))?;
        Ok(capabilities.is_capable(capability) && tech == state.registration_tech)
    }

    /// Stores `capabilities` as the latest snapshot.
    ///
    /// Capability listeners are notified only while IMS is registered; the
    /// snapshot is stored either way.
    pub fn set_capabilities_available(&self, capabilities: MmTelCapabilities) {
        let (tech, bindings) = {
            let mut state = self.write();
            state.capabilities = Some(capabilities);
            (state.registration_tech, state.capability_listeners.snapshot())
        };
        if !tech.is_registered() {
            debug!(
                mask = capabilities.mask(),
                "capabilities stored while unregistered; no listeners notified"
            );
            return;
        }
        info!(
            mask = capabilities.mask(),
            %tech,
            listeners = bindings.len(),
            "MmTel capabilities changed"
        );
        dispatch(bindings, move |listener| {
            listener.on_capabilities_status_changed(&capabilities);
        });
    }

    /// Returns the technology IMS is currently registered over.
    #[must_use]
    pub fn registration_tech(&self) -> RegistrationTech {
        self.read().registration_tech
    }

    /// Returns the latest capability snapshot, if one has been set.
    #[must_use]
    pub fn capabilities(&self) -> Option<MmTelCapabilities> {
        self.read().capabilities
    }

    /// Returns the number of registered registration listeners.
    #[must_use]
    pub fn registration_listener_count(&self) -> usize {
        self.read().registration_listeners.len()
    }

    /// Returns the number of registered capability listeners.
    #[must_use]
    pub fn capability_listener_count(&self) -> usize {
        self.read().capability_listeners.len()
    }

    // State is plain data and every mutation is a single assignment, so a
    // panic in another holder cannot leave it half-written.
    fn read(&self) -> RwLockReadGuard<'_, SimulatorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SimulatorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn dispatch<L, F>(bindings: Vec<ListenerBinding<L>>, notify: F)
where
    L: ?Sized + Send + Sync + 'static,
    F: Fn(&L) + Send + Sync + 'static,
{
    let shared = Arc::new(notify);
    for binding in bindings {
        binding.submit(Arc::clone(&shared));
    }
}
