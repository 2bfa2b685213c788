//! Error types for registry, retrieval, and tool dispatch.
//!
//! Each layer has its own enum; [`ToolError`] wraps the lower two so the
//! dispatcher can propagate them unchanged.

use thiserror::Error;

/// Existence-check failures raised by the playlist registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("List with ID '{0}' already exists.")]
    AlreadyExists(String),

    #[error("List with ID '{0}' does not exist.")]
    NotFound(String),
}

/// Failures from the external document retriever. Opaque to the core.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retriever request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("retriever returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode retriever response: {0}")]
    Decode(String),
}

/// Errors surfaced by a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Backend resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("direct API mode selected but ${0} is not set")]
    MissingCredential(String),

    #[error("hosted mode selected but no project is configured (set model.project or GOOGLE_CLOUD_PROJECT)")]
    MissingProject,
}

/// Disagreement between the declared tool catalog and the tools actually served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("tool '{0}' is declared but not served")]
    NotServed(String),

    #[error("tool '{0}' is served but not declared")]
    Undeclared(String),

    #[error("tool '{tool}': {detail}")]
    Schema { tool: String, detail: String },
}
