//! Vector index point payload.
//!
//! The JSON metadata attached to every vector the Embeddings Worker upserts
//! into the [`crate::ports::VectorStoreProvider`] collection. Versioned so
//! the schema can evolve without breaking points written by older workers;
//! unknown fields are rejected rather than silently dropped, since a typo'd
//! field name here would otherwise disappear without a trace.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current payload schema version. Bump when adding/removing/renaming a
/// field in a way that isn't purely additive-with-defaults.
pub const VECTOR_PAYLOAD_SCHEMA_VERSION: u16 = 1;

/// Maximum number of characters of chunk content stored verbatim in the
/// payload. Longer chunks are truncated and `content_truncated` is set;
/// `full_content_length` still records the true length.
pub const VECTOR_PAYLOAD_CONTENT_LIMIT: usize = 2000;

/// Kind of code unit a chunk represents.
crate::define_string_enum! {
    pub enum ChunkType [strum = "snake_case", serde = "snake_case", schema] {
        Function,
        Method,
        Class,
        Module,
        /// Fallback chunk produced by a line-window split when no
        /// language-aware chunker recognized the file.
        Block,
    }
}

/// Metadata payload stored alongside a vector in the index.
///
/// Deliberately rejects unknown fields: a field added here without updating
/// every writer is a version skew bug we want to catch at deserialize time,
/// not an entry silently missing a column downstream.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VectorIndexPayload {
    /// Schema version this payload was written with.
    pub schema_version: u16,
    /// Repository the chunk was extracted from.
    pub repository_id: String,
    /// Commit SHA the chunk was extracted at.
    pub commit_sha: String,
    /// Repository-relative file path.
    pub file_path: String,
    /// Detected language identifier.
    pub language: String,
    /// Kind of code unit.
    pub chunk_type: ChunkType,
    /// Name of the function/class/method, if applicable.
    pub name: Option<String>,
    /// First line of the chunk (1-based).
    pub line_start: u32,
    /// Last line of the chunk (1-based, inclusive).
    pub line_end: u32,
    /// Name of the enclosing class/module, if any.
    pub parent_name: Option<String>,
    /// Leading doc comment / docstring, if present.
    pub docstring: Option<String>,
    /// Chunk source text, truncated to [`VECTOR_PAYLOAD_CONTENT_LIMIT`]
    /// characters.
    pub content: String,
    /// Whether `content` was truncated from the original.
    pub content_truncated: bool,
    /// True length of the untruncated chunk content, in characters.
    pub full_content_length: u32,
    /// Rough token count estimate, used for budget-aware retrieval.
    pub token_estimate: u32,
    /// Nesting depth of the chunk within its file (0 = top-level).
    pub level: u32,
    /// Fully-qualified name (e.g. `module::Struct::method`), if derivable.
    pub qualified_name: Option<String>,
    /// Cyclomatic complexity of the chunk, if computed by the static track.
    pub cyclomatic_complexity: Option<u32>,
    /// Number of source lines in the chunk.
    pub line_count: u32,
    /// Architecture cluster this chunk was assigned to by the semantic
    /// cache track, if clustering has run.
    pub cluster_id: Option<String>,
}

impl VectorIndexPayload {
    /// Build a payload from full (untruncated) content, applying the
    /// content-length cap and recording the truncation flags.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        repository_id: String,
        commit_sha: String,
        file_path: String,
        language: String,
        chunk_type: ChunkType,
        name: Option<String>,
        line_start: u32,
        line_end: u32,
        full_content: &str,
    ) -> Self {
        let full_content_length =
            u32::try_from(full_content.chars().count()).unwrap_or(u32::MAX);
        let content_truncated = full_content.chars().count() > VECTOR_PAYLOAD_CONTENT_LIMIT;
        let content: String = full_content.chars().take(VECTOR_PAYLOAD_CONTENT_LIMIT).collect();
        let line_count = line_end.saturating_sub(line_start).saturating_add(1);
        // Rough heuristic: ~4 characters per token, matching the teacher's
        // other token-budget estimates for English-ish source text.
        let token_estimate = u32::try_from(full_content.len() / 4).unwrap_or(u32::MAX);

        Self {
            schema_version: VECTOR_PAYLOAD_SCHEMA_VERSION,
            repository_id,
            commit_sha,
            file_path,
            language,
            chunk_type,
            name,
            line_start,
            line_end,
            parent_name: None,
            docstring: None,
            content,
            content_truncated,
            full_content_length,
            token_estimate,
            level: 0,
            qualified_name: None,
            cyclomatic_complexity: None,
            line_count,
            cluster_id: None,
        }
    }
}
