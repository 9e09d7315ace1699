//! Embedding provider port.
//!
//! Abstraction over text-embedding backends (local `FastEmbed` models, hosted
//! APIs). The Embeddings Worker calls this to turn code chunks into vectors
//! before upserting them into the vector index.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Generates dense vector embeddings for text.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single piece of text.
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Embed a batch of texts in one round-trip.
    ///
    /// Implementations should prefer this over repeated [`Self::embed`] calls
    /// when the backend supports batching; the default falls back to
    /// sequential embedding.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    /// Number of dimensions produced by this provider's model.
    fn dimensions(&self) -> usize;

    /// Name of the underlying model (e.g. `"text-embedding-3-small"`).
    fn model_name(&self) -> &str;
}
