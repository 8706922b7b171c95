//! Committed-model store with a per-key write reservation.
//!
//! Commit discipline: a writer reserves the destination key, builds the
//! model, then commits and releases in one step. Readers that arrive while
//! the reservation is held block until it is released, so no reader ever
//! observes a half-built model. A reservation dropped without committing
//! leaves the key exactly as it was.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Condvar, Mutex};

use tracing::info;

use super::Key;

struct Inner<M> {
    models: HashMap<Key, Arc<M>>,
    reserved: HashSet<Key>,
}

impl<M> Default for Inner<M> {
    fn default() -> Self {
        Self {
            models: HashMap::new(),
            reserved: HashSet::new(),
        }
    }
}

/// Store of fully-built models, keyed by destination key.
///
/// Models are immutable once committed; `get` hands out shared references.
pub struct ModelStore<M> {
    inner: Mutex<Inner<M>>,
    released: Condvar,
}

impl<M> Default for ModelStore<M> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            released: Condvar::new(),
        }
    }
}

impl<M> ModelStore<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive write access to `key`.
    ///
    /// Blocks while another writer holds the same key. The returned guard
    /// releases the reservation on every exit path; the model becomes
    /// visible only through [`WriteGuard::commit`].
    pub fn write_lock(&self, key: Key) -> WriteGuard<'_, M> {
        let mut inner = self.inner.lock().expect("model store lock poisoned");
        while inner.reserved.contains(&key) {
            inner = self
                .released
                .wait(inner)
                .expect("model store lock poisoned");
        }
        inner.reserved.insert(key.clone());
        WriteGuard { store: self, key }
    }

    /// Fetch a committed model. Blocks while a writer holds the key, so a
    /// reader sees either the fully committed model or, if the writer
    /// aborted, whatever was there before.
    pub fn get(&self, key: &Key) -> Option<Arc<M>> {
        let mut inner = self.inner.lock().expect("model store lock poisoned");
        while inner.reserved.contains(key) {
            inner = self
                .released
                .wait(inner)
                .expect("model store lock poisoned");
        }
        inner.models.get(key).cloned()
    }

    /// Whether a committed model exists under `key`. Blocks like [`get`](Self::get).
    pub fn contains(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Delete the model under `key`, returning it if present.
    pub fn remove(&self, key: &Key) -> Option<Arc<M>> {
        let mut inner = self.inner.lock().expect("model store lock poisoned");
        while inner.reserved.contains(key) {
            inner = self
                .released
                .wait(inner)
                .expect("model store lock poisoned");
        }
        inner.models.remove(key)
    }
}

/// Exclusive write reservation on one key, released on drop.
pub struct WriteGuard<'a, M> {
    store: &'a ModelStore<M>,
    key: Key,
}

impl<M> WriteGuard<'_, M> {
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Commit `model` under the reserved key and release the reservation.
    pub fn commit(self, model: M) -> Arc<M> {
        let model = Arc::new(model);
        {
            let mut inner = self.store.inner.lock().expect("model store lock poisoned");
            inner.models.insert(self.key.clone(), Arc::clone(&model));
        }
        info!(key = %self.key, "committed model");
        // Dropping `self` releases the reservation and wakes readers.
        model
    }
}

impl<M> Drop for WriteGuard<'_, M> {
    fn drop(&mut self) {
        let mut inner = self.store.inner.lock().expect("model store lock poisoned");
        inner.reserved.remove(&self.key);
        drop(inner);
        self.store.released.notify_all();
    }
}
