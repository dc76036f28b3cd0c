//! Recording listeners that capture callbacks for later assertions.
//!
//! Each recorder keeps its events in arrival order. Clones share the same
//! log, which lets a test keep a handle after moving the recorder into an
//! `Arc` for registration.

use crate::ims::{
    domain::{ImsReasonInfo, MmTelCapabilities, RegistrationTech},
    ports::{CapabilityListener, RegistrationListener},
};
use std::pin::pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// A registration callback observed by [`RecordingRegistrationListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// `on_registering` was invoked.
    Registering(RegistrationTech),
    /// `on_registered` was invoked.
    Registered(RegistrationTech),
    /// `on_unregistered` was invoked.
    Unregistered(ImsReasonInfo),
}

/// A capability callback observed by [`RecordingCapabilityListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityEvent {
    /// `on_capabilities_status_changed` was invoked.
    CapabilitiesStatusChanged(MmTelCapabilities),
}

#[derive(Debug)]
struct EventLog<E> {
    events: Mutex<Vec<E>>,
    recorded: Notify,
}

impl<E: Clone> EventLog<E> {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            recorded: Notify::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: E) {
        self.lock().push(event);
        self.recorded.notify_waiters();
    }

    fn snapshot(&self) -> Vec<E> {
        self.lock().clone()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn clear(&self) {
        self.lock().clear();
    }

    async fn wait_for(&self, count: usize) {
        loop {
            let mut notified = pin!(self.recorded.notified());
            // Register before checking so a push in between is not missed.
            notified.as_mut().enable();
            if self.len() >= count {
                return;
            }
            notified.await;
        }
    }
}

/// Registration listener that records every callback.
#[derive(Debug, Clone)]
pub struct RecordingRegistrationListener {
    log: Arc<EventLog<RegistrationEvent>>,
}

impl Default for RecordingRegistrationListener {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRegistrationListener {
    /// Creates a listener with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(EventLog::new()),
        }
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<RegistrationEvent> {
        self.log.snapshot()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every recorded event.
    pub fn clear(&self) {
        self.log.clear();
    }

    /// Waits until at least `count` events have been recorded.
    ///
    /// Intended for executors that deliver on another thread.
    pub async fn wait_for_events(&self, count: usize) {
        self.log.wait_for(count).await;
    }
}

impl RegistrationListener for RecordingRegistrationListener {
    fn on_registering(&self, tech: RegistrationTech) {
        self.log.push(RegistrationEvent::Registering(tech));
    }

    fn on_registered(&self, tech: RegistrationTech) {
        self.log.push(RegistrationEvent::Registered(tech));
    }

    fn on_unregistered(&self, reason: &ImsReasonInfo) {
        self.log.push(RegistrationEvent::Unregistered(reason.clone()));
    }
}

/// Capability listener that records every callback.
#[derive(Debug, Clone)]
pub struct RecordingCapabilityListener {
    log: Arc<EventLog<CapabilityEvent>>,
}

impl Default for RecordingCapabilityListener {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCapabilityListener {
    /// Creates a listener with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(EventLog::new()),
        }
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<CapabilityEvent> {
        self.log.snapshot()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every recorded event.
    pub fn clear(&self) {
        self.log.clear();
    }

    /// Waits until at least `count` events have been recorded.
    pub async fn wait_for_events(&self, count: usize) {
        self.log.wait_for(count).await;
    }
}

impl CapabilityListener for RecordingCapabilityListener {
    fn on_capabilities_status_changed(&self, capabilities: &MmTelCapabilities) {
        self.log.push(CapabilityEvent::CapabilitiesStatusChanged(*capabilities));
    }
}
