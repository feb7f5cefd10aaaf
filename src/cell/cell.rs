use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::cell::ReadCell;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Entry<T> {
    id: usize,
    callback: Callback<T>,
}

/// A single-slot reactive container.
///
/// A cell holds exactly one value at any instant. Reads are synchronous and
/// side-effect free; writes replace the value and notify every registered
/// subscriber, in subscription order, before returning.
///
/// Cloning a `Cell` clones a handle to the same slot, never the value.
pub struct Cell<T> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<Entry<T>>>>,
    next_id: Arc<AtomicUsize>,
}

impl<T: Clone + 'static> Cell<T> {
    /// Create a new cell with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Read the current value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap();
        f(&value)
    }

    /// Replace the current value and notify all subscribers.
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap() = new_value;
        self.notify();
    }

    /// Update the value in place using a function.
    ///
    /// Same notification contract as [`set`](Cell::set).
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut value = self.value.write().unwrap();
            f(&mut value);
        }
        self.notify();
    }

    /// Subscribe to value changes.
    ///
    /// The callback is invoked once immediately with the current value, then
    /// again after every [`set`](Cell::set) or [`update`](Cell::update).
    /// Changes that happened before the call are not replayed.
    ///
    /// The returned [`Subscription`] removes the callback when invoked.
    /// Discarding it leaves the callback registered for as long as the cell
    /// is alive.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.write().unwrap().push(Entry {
            id,
            callback: Arc::clone(&callback),
        });

        let current = self.get();
        callback(&current);

        Subscription::new(id, &self.subscribers)
    }

    /// A read-only view of this cell.
    pub fn read_only(&self) -> ReadCell<T> {
        ReadCell::new(self.clone())
    }

    /// Notify all subscribers with the current value, in subscription order.
    fn notify(&self) {
        // Snapshot the list so a callback may subscribe or unsubscribe on
        // this cell without deadlocking on the subscriber lock. Subscribers
        // added during the pass do not receive this pass's value.
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .read()
            .unwrap()
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    /// Create a derived cell by applying a function to this cell's value.
    ///
    /// The derived cell recomputes whenever this cell changes and stays
    /// wired for as long as this cell is alive.
    pub fn map<U, F>(&self, f: F) -> Cell<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let initial = self.with(|value| f(value));
        let derived = Cell::new(initial);

        let target = derived.clone();
        self.subscribe(move |value| target.set(f(value)));

        derived
    }

    /// Combine two cells into one tracking both sources.
    pub fn zip<U>(&self, other: &Cell<U>) -> Cell<(T, U)>
    where
        U: Clone + Send + Sync + 'static,
    {
        let combined = Cell::new((self.get(), other.get()));

        let target = combined.clone();
        let right = other.clone();
        self.subscribe(move |value| target.set((value.clone(), right.get())));

        let target = combined.clone();
        let left = self.clone();
        other.subscribe(move |value| target.set((left.get(), value.clone())));

        combined
    }
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

/// Handle returned by [`Cell::subscribe`].
///
/// Invoking [`unsubscribe`](Subscription::unsubscribe) removes the callback
/// from the cell. The handle holds only a weak reference to the cell's
/// subscriber list, so it does not extend the cell's lifetime.
pub struct Subscription {
    cancel: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    fn new<T: 'static>(id: usize, subscribers: &Arc<RwLock<Vec<Entry<T>>>>) -> Self {
        let subscribers = Arc::downgrade(subscribers);
        Self {
            cancel: Box::new(move || {
                if let Some(subscribers) = subscribers.upgrade() {
                    subscribers.write().unwrap().retain(|entry| entry.id != id);
                }
            }),
        }
    }

    /// Remove the callback from the cell.
    ///
    /// Calling this more than once, or after the cell has been dropped, is a
    /// no-op.
    pub fn unsubscribe(&self) {
        (self.cancel)()
    }
}
