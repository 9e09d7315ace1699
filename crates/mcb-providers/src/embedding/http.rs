//! HTTP embedding-provider adapter.
//!
//! Targets the OpenAI-compatible `POST {base_url}/embeddings` endpoint shape
//! (`{"model": ..., "input": [...]}` -> `{"data": [{"embedding": [...]}]}`),
//! which most hosted and self-hosted embedding servers (OpenAI itself, many
//! `vLLM`/`TEI` deployments) speak without modification.

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::EmbeddingProvider;
use mcb_domain::value_objects::Embedding;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// HTTP client against an OpenAI-compatible embeddings endpoint.
pub struct HttpEmbeddingProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    dimensions: usize,
}

impl HttpEmbeddingProvider {
    /// Build a client against `base_url` (e.g. `https://api.openai.com/v1`)
    /// using `model`, which produces vectors of `dimensions` length.
    #[must_use]
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, dimensions: usize) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), api_key: None, model: model.into(), dimensions }
    }

    /// Attach a bearer API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn embed_all(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let url = format!("{}/embeddings", self.base_url.trim_end_matches('/'));
        let response = self
            .request(self.client.post(&url).json(&json!({"model": self.model, "input": texts})))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("embedding".to_owned(), e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream_unavailable(
                "embedding".to_owned(),
                format!("embeddings request failed with status {status}: {body}"),
            ));
        }
        let parsed: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream_unavailable("embedding".to_owned(), e.to_string()))?;
        Ok(parsed
            .data
            .into_iter()
            .map(|d| {
                let dimensions = d.embedding.len();
                Embedding { vector: d.embedding, model: self.model.clone(), dimensions }
            })
            .collect())
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let mut embeddings = self.embed_all(std::slice::from_ref(&text.to_owned())).await?;
        embeddings.pop().ok_or_else(|| Error::upstream_unavailable("embedding".to_owned(), "empty embeddings response".to_owned()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.embed_all(texts).await
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::embedding::{EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry};

fn http_embedding_factory(config: &EmbeddingProviderConfig) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = config.base_url.clone().ok_or_else(|| "http embedding provider requires base_url in config".to_owned())?;
    let model = config.model.clone().ok_or_else(|| "http embedding provider requires model in config".to_owned())?;
    let dimensions = config.dimensions.ok_or_else(|| "http embedding provider requires dimensions in config".to_owned())?;
    let mut provider = HttpEmbeddingProvider::new(base_url, model, dimensions);
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static HTTP_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "http",
    description: "OpenAI-compatible HTTP embeddings client",
    build: http_embedding_factory,
};
