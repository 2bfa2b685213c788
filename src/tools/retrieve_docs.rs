//! `retrieve_docs` tool parameters and result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RetrieveDocsParams {
    #[schemars(
        description = "Search query about songs, artists, moods, genres, or a user's listening history"
    )]
    pub query: String,
}

/// Formatted context block, wrapped under `output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveDocsOutput {
    pub output: String,
}
