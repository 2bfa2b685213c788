#![allow(dead_code)]

use async_trait::async_trait;
use encore::error::RetrievalError;
use encore::playlist::PlaylistRegistry;
use encore::retrieval::{DocumentRetriever, Passage};
use encore::tools::ToolDispatcher;
use std::sync::{Arc, Mutex};

/// Retriever that always answers with the same passages and records queries.
pub struct StaticRetriever {
    passages: Vec<Passage>,
    pub queries: Mutex<Vec<String>>,
}

impl StaticRetriever {
    pub fn new(contents: &[&str]) -> Self {
        Self {
            passages: contents.iter().map(|c| Passage::new(*c)).collect(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DocumentRetriever for StaticRetriever {
    async fn search(&self, query: &str) -> Result<Vec<Passage>, RetrievalError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.passages.clone())
    }
}

/// Retriever that always fails, standing in for an unreachable index.
pub struct FailingRetriever;

#[async_trait]
impl DocumentRetriever for FailingRetriever {
    async fn search(&self, _query: &str) -> Result<Vec<Passage>, RetrievalError> {
        Err(RetrievalError::Status {
            status: 503,
            body: "index offline".into(),
        })
    }
}

/// Dispatcher over a fresh registry and a static retriever.
pub fn test_dispatcher(contents: &[&str]) -> ToolDispatcher {
    ToolDispatcher::new(
        Arc::new(PlaylistRegistry::new()),
        Arc::new(StaticRetriever::new(contents)),
    )
}

pub fn songs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
