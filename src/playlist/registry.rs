//! Existence-gated playlist registry.
//!
//! [`PlaylistRegistry`] is the sole owner of playlist state. Every operation
//! takes the registry's single lock for its whole check-then-write, so two
//! concurrent `create` calls on one id can never both succeed, and a reader
//! never sees a heading from one `edit` paired with items from another.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::RegistryError;

use super::store::PlaylistStore;
use super::types::{Playlist, PlaylistSnapshot};

/// In-memory playlist registry. Share it across tool handlers with `Arc`.
pub struct PlaylistRegistry {
    store: Mutex<Box<dyn PlaylistStore>>,
}

impl Default for PlaylistRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlaylistRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistRegistry")
            .field("len", &self.len())
            .finish()
    }
}

impl PlaylistRegistry {
    /// Empty registry over an ordered in-memory map.
    pub fn new() -> Self {
        Self::with_store(BTreeMap::<String, Playlist>::new())
    }

    /// Registry over caller-supplied storage (which may be pre-seeded).
    pub fn with_store(store: impl PlaylistStore + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }

    // Every operation performs at most one store mutation, so a panic while
    // the lock is held cannot leave a half-applied write behind.
    fn lock(&self) -> MutexGuard<'_, Box<dyn PlaylistStore>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new playlist. Fails if `id` is already taken.
    pub fn create(
        &self,
        id: &str,
        heading: &str,
        items: Vec<String>,
    ) -> Result<(), RegistryError> {
        let mut store = self.lock();
        if store.contains(id) {
            tracing::warn!(list_id = %id, "create rejected: id already exists");
            return Err(RegistryError::AlreadyExists(id.to_string()));
        }
        store.put(id.to_string(), Playlist::new(heading, items));
        tracing::info!(list_id = %id, total = store.len(), "playlist created");
        Ok(())
    }

    /// Replace heading and items of an existing playlist. There is no partial
    /// update: callers resupply unchanged fields.
    pub fn edit(&self, id: &str, heading: &str, items: Vec<String>) -> Result<(), RegistryError> {
        let mut store = self.lock();
        if !store.contains(id) {
            tracing::warn!(list_id = %id, "edit rejected: id not found");
            return Err(RegistryError::NotFound(id.to_string()));
        }
        store.put(id.to_string(), Playlist::new(heading, items));
        tracing::info!(list_id = %id, "playlist updated");
        Ok(())
    }

    /// Delete an existing playlist.
    pub fn remove(&self, id: &str) -> Result<(), RegistryError> {
        let mut store = self.lock();
        match store.delete(id) {
            Some(_) => {
                tracing::info!(list_id = %id, total = store.len(), "playlist removed");
                Ok(())
            }
            None => {
                tracing::warn!(list_id = %id, "remove rejected: id not found");
                Err(RegistryError::NotFound(id.to_string()))
            }
        }
    }

    /// Consistent copy of every playlist. Empty map when nothing is stored.
    pub fn list_all(&self) -> PlaylistSnapshot {
        self.lock().snapshot()
    }

    pub fn get(&self, id: &str) -> Option<Playlist> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
