//! Language chunking provider port.
//!
//! Splits source file content into semantically meaningful [`CodeChunk`]s
//! (function, class, method, module, or a fallback line-window). The
//! Embeddings Worker calls this per file before requesting embeddings.

use std::path::Path;

use crate::entities::CodeChunk;
use crate::error::Result;

/// Splits source code into chunks suitable for embedding.
pub trait LanguageChunkingProvider: Send + Sync {
    /// Chunk a single file's content.
    ///
    /// `language` is the detected language identifier (e.g. `"rust"`,
    /// `"python"`); implementations that don't support it should return an
    /// empty vector rather than erroring, so the caller can fall back to a
    /// generic line-window chunker.
    fn chunk_file(&self, path: &Path, content: &str, language: &str) -> Result<Vec<CodeChunk>>;

    /// Language identifiers this provider can chunk with symbol-level
    /// precision (as opposed to falling back to line windows).
    fn supported_languages(&self) -> &[&str];
}
