//! Playlist state: the data type, pluggable storage, and the registry that
//! enforces existence checks over it.

pub mod registry;
pub mod store;
pub mod types;

pub use registry::PlaylistRegistry;
pub use store::PlaylistStore;
pub use types::{Playlist, PlaylistSnapshot};
