//! Vector embeddings and semantic search results.

use serde::{Deserialize, Serialize};

/// A dense vector embedding produced by an [`crate::ports::EmbeddingProvider`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    /// The embedding vector.
    pub vector: Vec<f32>,
    /// Name of the model that produced the embedding.
    pub model: String,
    /// Number of dimensions in `vector`.
    pub dimensions: usize,
}

/// A single match returned by a [`crate::ports::VectorStoreProvider`] search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifier of the matched vector/chunk.
    pub id: String,
    /// Path of the file the match was extracted from.
    pub file_path: String,
    /// Source text of the matched chunk.
    pub content: String,
    /// Similarity score against the query vector (higher is closer).
    pub score: f32,
    /// First line of the matched chunk.
    pub start_line: u32,
    /// Last line of the matched chunk.
    pub end_line: u32,
    /// Detected programming language.
    pub language: String,
    /// Arbitrary provider-specific metadata attached to the match.
    pub metadata: serde_json::Value,
}
