//! Scoped registration with an explicit lifecycle.
//!
//! A [`ScopedRegistry`] holds values contributed by independent call sites
//! (e.g. a per-step wizard footer). Each registration is gated on a scope
//! key: it is eligible while its key matches the active key, or always if it
//! was registered without a key. The most recent eligible registration wins.
//!
//! Dropping a [`Registration`] deregisters it. A stale guard can never
//! remove a newer registration: entries are identified by a monotonically
//! increasing id, not by slot.

use std::sync::{Arc, Mutex, MutexGuard};

pub struct ScopedRegistry<K, V> {
    inner: Arc<Mutex<Inner<K, V>>>,
}

struct Inner<K, V> {
    next_id: u64,
    active: Option<K>,
    entries: Vec<Entry<K, V>>,
}

struct Entry<K, V> {
    id: u64,
    key: Option<K>,
    value: V,
}

impl<K, V> Clone for ScopedRegistry<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for ScopedRegistry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ScopedRegistry<K, V> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                next_id: 0,
                active: None,
                entries: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        // The registry holds plain data; a panic while the lock was held
        // cannot leave it in a torn state.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<K: PartialEq, V> ScopedRegistry<K, V> {
    /// Sets (or clears) the active scope key.
    pub fn set_active(&self, key: Option<K>) {
        self.lock().active = key;
    }

    /// Registers `value`, gated on `key` (`None` = always eligible).
    ///
    /// Returns a guard that deregisters the value when dropped.
    pub fn register(&self, key: Option<K>, value: V) -> Registration<K, V> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry { id, key, value });
        Registration {
            inner: Arc::clone(&self.inner),
            id,
        }
    }
}

impl<K: PartialEq, V: Clone> ScopedRegistry<K, V> {
    /// The currently installed value: the most recent live registration
    /// whose key gate passes under the active key.
    pub fn current(&self) -> Option<V> {
        let inner = self.lock();
        inner
            .entries
            .iter()
            .rev()
            .find(|e| match &e.key {
                None => true,
                Some(k) => inner.active.as_ref() == Some(k),
            })
            .map(|e| e.value.clone())
    }
}

impl<K: PartialEq + Clone, V: Clone> ScopedRegistry<K, V> {
    pub fn active(&self) -> Option<K> {
        self.lock().active.clone()
    }
}

/// RAII guard for one registration. Deregisters on drop.
#[must_use = "dropping the registration immediately deregisters the value"]
pub struct Registration<K, V> {
    inner: Arc<Mutex<Inner<K, V>>>,
    id: u64,
}

impl<K, V> Drop for Registration<K, V> {
    fn drop(&mut self) {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.entries.retain(|e| e.id != self.id);
    }
}
