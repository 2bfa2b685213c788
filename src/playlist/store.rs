//! Storage backing for the playlist registry.
//!
//! The registry owns the locking; a [`PlaylistStore`] only has to be a plain
//! keyed container. An ordered map is the default so snapshots list playlists
//! in a stable order.

use std::collections::{BTreeMap, HashMap};

use super::types::{Playlist, PlaylistSnapshot};

/// Keyed container the registry mutates under its lock.
pub trait PlaylistStore: Send {
    fn contains(&self, id: &str) -> bool;

    fn get(&self, id: &str) -> Option<&Playlist>;

    /// Insert or overwrite. Existence checks are the registry's job.
    fn put(&mut self, id: String, playlist: Playlist);

    fn delete(&mut self, id: &str) -> Option<Playlist>;

    fn snapshot(&self) -> PlaylistSnapshot;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlaylistStore for BTreeMap<String, Playlist> {
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&Playlist> {
        BTreeMap::get(self, id)
    }

    fn put(&mut self, id: String, playlist: Playlist) {
        self.insert(id, playlist);
    }

    fn delete(&mut self, id: &str) -> Option<Playlist> {
        self.remove(id)
    }

    fn snapshot(&self) -> PlaylistSnapshot {
        self.clone()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl PlaylistStore for HashMap<String, Playlist> {
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&Playlist> {
        HashMap::get(self, id)
    }

    fn put(&mut self, id: String, playlist: Playlist) {
        self.insert(id, playlist);
    }

    fn delete(&mut self, id: &str) -> Option<Playlist> {
        self.remove(id)
    }

    fn snapshot(&self) -> PlaylistSnapshot {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
