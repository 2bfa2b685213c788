//! Remote retriever that delegates search to an HTTP endpoint.
//!
//! Request: `POST {endpoint}` with `{"query": ..., "top_k": ...}`.
//! Response: either a bare `[{"content": ...}]` array or
//! `{"documents": [{"content": ...}]}`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DocumentRetriever, Passage};
use crate::config::RetrievalConfig;
use crate::error::RetrievalError;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    top_k: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Bare(Vec<Passage>),
    Wrapped { documents: Vec<Passage> },
}

pub struct HttpRetriever {
    client: reqwest::Client,
    endpoint: String,
    top_k: usize,
}

impl HttpRetriever {
    pub fn new(config: &RetrievalConfig) -> Result<Self> {
        anyhow::ensure!(
            !config.endpoint.is_empty(),
            "retrieval.provider = \"http\" requires retrieval.endpoint (or ENCORE_RETRIEVER_URL)"
        );
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            top_k: config.top_k,
        })
    }
}

#[async_trait]
impl DocumentRetriever for HttpRetriever {
    async fn search(&self, query: &str) -> Result<Vec<Passage>, RetrievalError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchRequest {
                query,
                top_k: self.top_k,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), endpoint = %self.endpoint, "retriever error");
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let passages = match serde_json::from_slice::<SearchResponse>(&bytes)
            .map_err(|e| RetrievalError::Decode(e.to_string()))?
        {
            SearchResponse::Bare(p) => p,
            SearchResponse::Wrapped { documents } => documents,
        };

        tracing::debug!(query = %query, hits = passages.len(), "http search");
        Ok(passages)
    }
}
