//! In-process callback executors for deterministic tests.

use crate::ims::ports::{CallbackExecutor, CallbackTask};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Runs every task immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl InlineExecutor {
    /// Creates an inline executor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CallbackExecutor for InlineExecutor {
    fn execute(&self, task: CallbackTask) {
        task();
    }
}

/// Holds tasks in FIFO order until the test drains them.
///
/// Clones share the same queue, so a test can keep one handle while the
/// simulator holds another.
#[derive(Clone, Default)]
pub struct QueuedExecutor {
    queue: Arc<Mutex<VecDeque<CallbackTask>>>,
}

impl QueuedExecutor {
    /// Creates an executor with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Runs the oldest queued task.
    ///
    /// Returns `false` when the queue was empty.
    pub fn run_next(&self) -> bool {
        // Release the lock before running so the task may enqueue more work.
        let next = self.lock().pop_front();
        match next {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Runs queued tasks until the queue is empty, including tasks queued
    /// by the tasks themselves.
    ///
    /// Returns the number of tasks run.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<CallbackTask>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for QueuedExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedExecutor")
            .field("pending", &self.pending())
            .finish()
    }
}

impl CallbackExecutor for QueuedExecutor {
    fn execute(&self, task: CallbackTask) {
        self.lock().push_back(task);
    }
}
