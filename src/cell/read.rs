use crate::cell::{Cell, Subscription};

/// A read-only view of a [`Cell`].
///
/// Components that should observe a value but never write it are handed a
/// `ReadCell` instead of the cell itself. Cloning the view clones a handle
/// to the same underlying slot.
pub struct ReadCell<T> {
    inner: Cell<T>,
}

impl<T: Clone + 'static> ReadCell<T> {
    pub(crate) fn new(inner: Cell<T>) -> Self {
        Self { inner }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }

    /// Read the current value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    /// Subscribe to value changes.
    ///
    /// Same contract as [`Cell::subscribe`].
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.subscribe(callback)
    }
}

impl<T> Clone for ReadCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
