use parking_lot::{RwLock, RwLockReadGuard};
use slotmap::{Key, SlotMap};
use std::sync::Arc;

/// Thread-safe, append-only asset container.
///
/// Adding never requires `&mut self`, so overlapping loads can share one
/// storage behind an `Arc` without external locking.
pub struct AssetStorage<H: Key, T> {
    inner: RwLock<SlotMap<H, Arc<T>>>,
}

impl<H: Key, T> Default for AssetStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Key, T> AssetStorage<H, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::default(),
        }
    }

    /// [Write] Adds a resource and returns its handle.
    pub fn add(&self, asset: impl Into<T>) -> H {
        let mut guard = self.inner.write();
        guard.insert(Arc::new(asset.into()))
    }

    /// [Read] Gets a single resource as a cheap `Arc` clone.
    pub fn get(&self, handle: H) -> Option<Arc<T>> {
        let guard = self.inner.read();
        guard.get(handle).cloned()
    }

    pub fn contains(&self, handle: H) -> bool {
        self.inner.read().contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// [Read - Advanced] Acquires a read-lock guard for batch access.
    pub fn read_lock(&self) -> RwLockReadGuard<'_, SlotMap<H, Arc<T>>> {
        self.inner.read()
    }
}
