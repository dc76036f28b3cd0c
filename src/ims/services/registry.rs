//! Listener-to-executor bindings with insertion-ordered iteration.

use crate::ims::ports::CallbackExecutor;
use std::fmt;
use std::sync::Arc;

/// A listener together with the executor its callbacks run on.
pub struct ListenerBinding<L: ?Sized> {
    listener: Arc<L>,
    executor: Arc<dyn CallbackExecutor>,
}

impl<L: ?Sized> Clone for ListenerBinding<L> {
    fn clone(&self) -> Self {
        Self {
            listener: Arc::clone(&self.listener),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<L: ?Sized> ListenerBinding<L> {
    /// Returns the bound listener.
    #[must_use]
    pub const fn listener(&self) -> &Arc<L> {
        &self.listener
    }

    /// Returns the executor callbacks are submitted to.
    #[must_use]
    pub const fn executor(&self) -> &Arc<dyn CallbackExecutor> {
        &self.executor
    }
}

impl<L> ListenerBinding<L>
where
    L: ?Sized + Send + Sync + 'static,
{
    /// Submits `notify` for this listener to the bound executor.
    pub fn submit<F>(&self, notify: Arc<F>)
    where
        F: Fn(&L) + Send + Sync + ?Sized + 'static,
    {
        let listener = Arc::clone(&self.listener);
        self.executor.execute(Box::new(move || (*notify)(&*listener)));
    }
}

/// Maps listeners to executors.
///
/// Identity is the `Arc` allocation, so two distinct listeners that
/// compare equal are still separate entries. Iteration follows first
/// insertion order; re-inserting a listener rebinds its executor in place.
pub struct ListenerRegistry<L: ?Sized> {
    bindings: Vec<ListenerBinding<L>>,
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.bindings.len())
            .finish()
    }
}

impl<L: ?Sized> ListenerRegistry<L> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `listener` to `executor`.
    ///
    /// Returns `true` when an existing binding for the same listener was
    /// replaced.
    pub fn insert(&mut self, listener: Arc<L>, executor: Arc<dyn CallbackExecutor>) -> bool {
        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|binding| Arc::ptr_eq(&binding.listener, &listener))
        {
            existing.executor = executor;
            return true;
        }
        self.bindings.push(ListenerBinding { listener, executor });
        false
    }

    /// Removes the binding for `listener`.
    ///
    /// Returns `false` when the listener was not registered.
    pub fn remove(&mut self, listener: &Arc<L>) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|binding| !Arc::ptr_eq(&binding.listener, listener));
        self.bindings.len() != before
    }

    /// Returns whether `listener` is registered.
    #[must_use]
    pub fn contains(&self, listener: &Arc<L>) -> bool {
        self.bindings
            .iter()
            .any(|binding| Arc::ptr_eq(&binding.listener, listener))
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ListenerBinding<L>> {
        self.bindings.iter()
    }

    /// Copies the current bindings so they can be dispatched after any
    /// lock guarding the registry is released.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ListenerBinding<L>> {
        self.bindings.clone()
    }
}
