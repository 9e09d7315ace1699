//! Core entity representing a semantically meaningful code segment.

use serde::{Deserialize, Serialize};

/// A chunk of source code extracted for embedding and semantic search.
///
/// Chunks are the unit of indexing: a function, a class, or a fallback
/// line-window when no finer boundary is detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChunk {
    /// Stable identifier for the chunk.
    pub id: String,
    /// Source text of the chunk.
    pub content: String,
    /// Path of the file the chunk was extracted from, relative to the repository root.
    pub file_path: String,
    /// First line of the chunk (1-indexed, inclusive).
    pub start_line: u32,
    /// Last line of the chunk (1-indexed, inclusive).
    pub end_line: u32,
    /// Detected programming language.
    pub language: String,
    /// Chunker-specific metadata (symbol name, kind, parent scope, etc.).
    pub metadata: serde_json::Value,
}

impl CodeChunk {
    /// Number of lines spanned by the chunk.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}
