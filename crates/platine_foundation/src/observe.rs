//! Listener registration for change-notifying values.
//!
//! Values that announce their own changes keep a [`Listeners`] registry of
//! boxed callbacks. Registration hands back a [`ListenerId`] that the caller
//! uses to unsubscribe later; removal of an unknown id is a no-op.

use std::fmt;

/// Handle identifying one registered listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Registry of boxed callbacks keyed by [`ListenerId`].
///
/// `F` is the unsized callback type, e.g. `dyn FnMut(&BoundedValue)`.
/// Callbacks are invoked in registration order. The registry is `Default`
/// so an owner can `mem::take` it for the duration of a notification pass,
/// which keeps the callbacks from aliasing the value they observe.
pub struct Listeners<F: ?Sized> {
    entries: Vec<(ListenerId, Box<F>)>,
    next: u64,
}

impl<F: ?Sized> Listeners<F> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next: 0,
        }
    }

    /// Registers a callback and returns its handle.
    pub fn insert(&mut self, callback: Box<F>) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    /// Removes the callback registered under `id`.
    ///
    /// Returns whether anything was removed; removing an id twice is
    /// harmless.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the callbacks in registration order.
    pub fn callbacks_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.entries.iter_mut().map(|(_, callback)| callback)
    }
}

impl<F: ?Sized> Default for Listeners<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for Listeners<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
