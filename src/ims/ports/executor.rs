//! Execution context port used to deliver listener callbacks.

/// A unit of callback work handed to an executor.
pub type CallbackTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs callback work on behalf of the simulator.
///
/// Implementations decide whether a task runs immediately on the calling
/// thread or later on a queue or worker. The contract is "accept
/// unconditionally": there is no error channel back to the simulator, and
/// the simulator never waits for a task to complete.
pub trait CallbackExecutor: Send + Sync {
    /// Accepts `task` for immediate or deferred execution.
    fn execute(&self, task: CallbackTask);
}

impl<F> CallbackExecutor for F
where
    F: Fn(CallbackTask) + Send + Sync,
{
    fn execute(&self, task: CallbackTask) {
        self(task);
    }
}
