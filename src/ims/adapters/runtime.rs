//! Tokio-backed callback executor.

use crate::ims::ports::{CallbackExecutor, CallbackTask};
use tokio::runtime::Handle;

/// Spawns each callback as a task on a tokio runtime.
///
/// Tasks may run on any worker thread and in any order relative to each
/// other. Use [`QueuedExecutor`](super::QueuedExecutor) when a test needs
/// deterministic ordering.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    /// Creates an executor that spawns onto `handle`.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates an executor bound to the runtime the caller is running in.
    ///
    /// Returns `None` outside a tokio runtime context.
    #[must_use]
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl CallbackExecutor for TokioExecutor {
    fn execute(&self, task: CallbackTask) {
        // Detached: the simulator never waits on delivery.
        drop(self.handle.spawn(async move { task() }));
    }
}
