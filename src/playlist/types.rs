//! Playlist record definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A titled, ordered list of free-form entries (usually song descriptors,
/// often markdown links).
///
/// The id lives outside the record as the registry key. On the wire the
/// entries are called `list_array`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display title; may carry emoji.
    pub heading: String,
    /// Entries in display order. Duplicates are allowed.
    #[serde(rename = "list_array")]
    pub items: Vec<String>,
}

impl Playlist {
    pub fn new(heading: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            items,
        }
    }
}

/// Point-in-time copy of every playlist, keyed by id.
pub type PlaylistSnapshot = BTreeMap<String, Playlist>;
