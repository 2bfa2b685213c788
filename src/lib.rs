//! Music-assistant tool server: playlists and document retrieval over MCP.
//!
//! Encore gives a live-conversation model a small set of tools. The model
//! searches a music knowledge base with `retrieve_docs`, then builds and
//! maintains playlists with `create_list`, `edit_list`, `remove_list`, and
//! `look_at_lists`. Playlists live in memory for the life of the process.
//!
//! | Tool | Parameters | Fails with |
//! |------|------------|------------|
//! | `retrieve_docs` | `query` | retriever errors |
//! | `create_list` | `list_id`, `heading`, `list_array` | `AlreadyExists` |
//! | `edit_list` | `list_id`, `heading`, `list_array` | `NotFound` |
//! | `remove_list` | `list_id` | `NotFound` |
//! | `look_at_lists` | — | never |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — Error enums for each layer
//! - [`playlist`] — Playlist records, storage, and the existence-gated registry
//! - [`retrieval`] — Retriever seam, corpus and HTTP retrievers, context formatting
//! - [`session`] — Live-session setup: system instruction, function declarations, backend
//! - [`tools`] — Tool catalog, dispatcher, and the MCP handler
//! - [`server`] — stdio and HTTP transports

pub mod config;
pub mod error;
pub mod playlist;
pub mod retrieval;
pub mod server;
pub mod session;
pub mod tools;
