//! File-backed retriever for local and offline use.
//!
//! Loads a JSON array of passages once at startup and answers every query
//! with the first `top_k` of them, in file order.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{DocumentRetriever, Passage};
use crate::error::RetrievalError;

/// Accepts both `{"content": "..."}` objects and bare strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusEntry {
    Passage(Passage),
    Text(String),
}

impl From<CorpusEntry> for Passage {
    fn from(entry: CorpusEntry) -> Self {
        match entry {
            CorpusEntry::Passage(p) => p,
            CorpusEntry::Text(content) => Passage { content },
        }
    }
}

pub struct CorpusRetriever {
    passages: Vec<Passage>,
    top_k: usize,
}

impl CorpusRetriever {
    pub fn new(passages: Vec<Passage>, top_k: usize) -> Self {
        Self { passages, top_k }
    }

    /// Load passages from `path`. A missing file yields an empty corpus so the
    /// playlist tools stay usable without one.
    pub fn load(path: &Path, top_k: usize) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "corpus file not found, retrieve_docs will return no passages"
            );
            return Ok(Self::new(Vec::new(), top_k));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus file {}", path.display()))?;
        let passages = parse_corpus(&contents)
            .with_context(|| format!("failed to parse corpus file {}", path.display()))?;

        tracing::info!(path = %path.display(), passages = passages.len(), "corpus loaded");
        Ok(Self::new(passages, top_k))
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

pub fn parse_corpus(json: &str) -> Result<Vec<Passage>> {
    let entries: Vec<CorpusEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(Passage::from).collect())
}

#[async_trait]
impl DocumentRetriever for CorpusRetriever {
    async fn search(&self, query: &str) -> Result<Vec<Passage>, RetrievalError> {
        let hits: Vec<Passage> = self.passages.iter().take(self.top_k).cloned().collect();
        tracing::debug!(query = %query, hits = hits.len(), "corpus search");
        Ok(hits)
    }
}
