//! A single current value with any number of readers.
//!
//! The navigation bar reads the active section on every draw, and anything else interested in
//! transitions can subscribe. Subscribers only hear about actual changes: setting the same value
//! twice notifies once.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Holder for a value that notifies subscribers when it changes.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: Clone + PartialEq> Observable<T> {
    #[must_use]
    /// Wrap an initial value with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.clone()
    }

    #[must_use]
    /// Borrow the current value without cloning.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the value, notifying subscribers if it differs from the previous one.
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
        true
    }

    /// Register a callback invoked with each new value.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Drop every subscriber.
    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    #[must_use]
    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default + Clone + PartialEq> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/observable.rs"]
mod tests;
