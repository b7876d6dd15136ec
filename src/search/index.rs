// ABOUTME: Exercise index trait plus HTTP implementation over embedding and vector search
// ABOUTME: Two-step flow: embed the query text, then nearest-neighbor search with payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::SearchConfig;
use crate::constants::timeouts;
use crate::errors::{AppError, AppResult};
use crate::models::SearchHit;

/// Seam to the externally hosted semantic exercise index.
///
/// Implementations return ranked hits for a free-text query. Errors are
/// real transport or protocol failures; the [`super::CandidateFetcher`]
/// converts them into empty result lists so they never cross the core
/// boundary.
#[async_trait]
pub trait ExerciseIndex: Send + Sync {
    /// Search for exercises ranked by relevance to `query`.
    ///
    /// # Errors
    ///
    /// Returns an error when the index cannot be reached or answers with a
    /// non-success status.
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<SearchHit>>;
}

#[async_trait]
impl<I: ExerciseIndex + ?Sized> ExerciseIndex for std::sync::Arc<I> {
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<SearchHit>> {
        (**self).search(query, limit).await
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default, alias = "vector")]
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct VectorSearchResponse {
    #[serde(default)]
    result: Vec<SearchHit>,
}

/// HTTP-backed exercise index: an embedding endpoint plus a vector search
/// endpoint with named-vector payloads.
pub struct HttpExerciseIndex {
    config: SearchConfig,
    client: Client,
}

impl HttpExerciseIndex {
    /// Create an index client from search configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeouts::SEARCH_SECS))
            .connect_timeout(Duration::from_secs(timeouts::CONNECT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("search client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        let response = self
            .client
            .post(&self.config.embedding_url)
            .json(&json!({ "text_inputs": text, "mode": "embedding" }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote_status("embedding", status.as_u16(), body));
        }

        let parsed: EmbeddingResponse = response.json().await?;
        if parsed.embedding.is_empty() {
            return Err(AppError::ModelResponse("empty embedding".into()));
        }
        Ok(parsed.embedding)
    }
}

#[async_trait]
impl ExerciseIndex for HttpExerciseIndex {
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<SearchHit>> {
        let vector = self.embed(query).await?;

        let body = json!({
            "vector": { "name": "text", "vector": vector },
            "limit": limit,
            "with_payload": true,
            "with_vector": false,
        });

        let mut request = self.client.post(&self.config.search_url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::remote_status("search", status.as_u16(), text));
        }

        let parsed: VectorSearchResponse = response.json().await?;
        debug!(count = parsed.result.len(), limit, "index search returned");
        Ok(parsed.result)
    }
}
