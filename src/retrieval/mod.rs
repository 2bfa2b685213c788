//! Document retrieval: the [`DocumentRetriever`] seam, the concrete
//! retrievers, and the formatter that turns a batch of passages into model
//! context.
//!
//! Ranking and embedding happen outside this crate. A retriever only has to
//! hand back passages in the order it wants them shown.

pub mod corpus;
pub mod format;
pub mod http;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;

pub use format::format_docs;

/// A single retrieved unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub content: String,
}

impl Passage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Anything that can answer a free-text query with an ordered list of passages.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Passage>, RetrievalError>;
}

/// Build the retriever named by `config.provider`.
///
/// `"corpus"` reads a local passage file; `"http"` calls a remote search
/// endpoint.
pub fn create_retriever(config: &RetrievalConfig) -> Result<Box<dyn DocumentRetriever>> {
    match config.provider.as_str() {
        "corpus" => {
            let path = crate::config::expand_tilde(&config.corpus_path);
            let retriever = corpus::CorpusRetriever::load(&path, config.top_k)?;
            Ok(Box::new(retriever))
        }
        "http" => {
            let retriever = http::HttpRetriever::new(config)?;
            Ok(Box::new(retriever))
        }
        other => anyhow::bail!("unknown retrieval provider: {other}. Supported: corpus, http"),
    }
}
