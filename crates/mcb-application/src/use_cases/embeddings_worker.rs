//! Embeddings Worker: chunks a repository snapshot, embeds the chunks, and
//! upserts them into the vector index (§4.3).
//!
//! Runs the embeddings track of one analysis end to end: clone the pinned
//! commit, populate the repo content cache via
//! [`super::repo_content_cache_service::RepoContentCacheService`] so later
//! reads of this commit don't need another clone, then chunk every file with
//! the language-aware chunker (falling back to a line-window chunk where the
//! chunker has no symbol table for that language) and embed/upsert in
//! batches. Heartbeats and progress flow through
//! [`super::analysis_state_service::AnalysisStateService`] like every other
//! track; this worker never writes `Analysis` fields directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use ignore::WalkBuilder;
use mcb_domain::entities::analysis::EmbeddingsStatus;
use mcb_domain::error::Result;
use mcb_domain::ports::providers::{
    EmbeddingProvider, LanguageChunkingProvider, ObjectStorageProvider, VcsProvider,
    VectorStoreProvider,
};
use mcb_domain::ports::repositories::{AnalysisRepository, RepoContentCacheRepository};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::value_objects::vector_payload::{ChunkType, VectorIndexPayload};
use mcb_domain::value_objects::{CollectionId, Embedding};
use sha2::{Digest, Sha256};
use tracing::warn;

use super::analysis_state_service::AnalysisStateService;
use super::repo_content_cache_service::RepoContentCacheService;
use crate::constants::{
    EMBEDDING_BATCH_SIZE, EMBEDDING_MAX_RETRIES, EMBEDDING_RETRY_BASE_MS, MAX_EMBEDDABLE_FILE_BYTES,
    PROGRESS_UPDATE_INTERVAL, SKIP_DIRS,
};

/// A chunk paired with the payload and point id it will be upserted under.
struct PreparedChunk {
    id: String,
    text: String,
    payload: VectorIndexPayload,
}

/// Runs the embeddings track end to end for one analysis.
pub struct EmbeddingsWorker<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    state: Arc<AnalysisStateService<R, E>>,
    vcs: Arc<dyn VcsProvider>,
    chunker: Arc<dyn LanguageChunkingProvider>,
    embeddings: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    content_cache_service: Arc<RepoContentCacheService>,
    collection: CollectionId,
}

impl<R, E> EmbeddingsWorker<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    /// Build a new worker over the given state service and collaborating
    /// ports. `collection` is the single shared vector-index collection
    /// every repository's chunks are upserted into (§6); callers pass the
    /// configured `providers.vector_store.collection`, falling back to
    /// [`crate::constants::DEFAULT_EMBEDDINGS_COLLECTION`].
    #[must_use]
    pub fn new(
        state: Arc<AnalysisStateService<R, E>>,
        vcs: Arc<dyn VcsProvider>,
        chunker: Arc<dyn LanguageChunkingProvider>,
        embeddings: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        content_cache_service: Arc<RepoContentCacheService>,
        collection: CollectionId,
    ) -> Self {
        Self {
            state,
            vcs,
            chunker,
            embeddings,
            vector_store,
            content_cache_service,
            collection,
        }
    }

    /// Run the embeddings track for `analysis_id` against
    /// `(repository_id, commit_sha)`. On internal failure the track is left
    /// in `failed` with the error recorded, and the error is also returned
    /// so the caller (the task runner a worker is spawned under) can log it.
    ///
    /// # Errors
    /// Propagates clone, chunking, embedding, vector-store and object-storage
    /// failures after recording them on the embeddings track.
    pub async fn run(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        self.state
            .transition_embeddings(analysis_id, EmbeddingsStatus::Running, Some(1), None)
            .await?;
        self.state.heartbeat(analysis_id).await?;

        match self.run_inner(analysis_id, repository_id, commit_sha).await {
            Ok(()) => {
                self.state
                    .transition_embeddings(analysis_id, EmbeddingsStatus::Completed, Some(100), None)
                    .await?;
                Ok(())
            }
            Err(e) => {
                // Best-effort: the track already failed in substance, don't
                // let a second error from this call mask the original one.
                let _ = self
                    .state
                    .transition_embeddings(analysis_id, EmbeddingsStatus::Failed, None, Some(e.to_string()))
                    .await;
                Err(e)
            }
        }
    }

    async fn run_inner(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        let scratch = self.vcs.clone_at_commit(repository_id, commit_sha).await?;

        self.content_cache_service.ensure(repository_id, commit_sha, &scratch).await?;

        if !self.vector_store.collection_exists(&self.collection).await? {
            self.vector_store
                .create_collection(&self.collection, self.embeddings.dimensions())
                .await?;
        }

        let files = Self::discover_files(&scratch);
        let total = files.len();

        for (i, path) in files.iter().enumerate() {
            let Ok(bytes) = tokio::fs::read(path).await else {
                warn!(file = %path.display(), "failed to read file during embeddings walk, skipping");
                continue;
            };
            let Ok(content) = String::from_utf8(bytes) else {
                continue;
            };

            let relative_path = path
                .strip_prefix(&scratch)
                .unwrap_or(path)
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            let language = Self::detect_language(path);

            let prepared = self.prepare_chunks(repository_id, commit_sha, &relative_path, &language, &content)?;
            if !prepared.is_empty() {
                self.embed_and_upsert(prepared).await?;
            }

            if i % PROGRESS_UPDATE_INTERVAL == 0 {
                self.state.heartbeat(analysis_id).await?;
                let progress = u8::try_from((i * 90 / total.max(1)).min(90)).unwrap_or(90);
                self.state
                    .transition_embeddings(analysis_id, EmbeddingsStatus::Running, Some(progress), None)
                    .await?;
            }
        }

        if let Err(e) = tokio::fs::remove_dir_all(&scratch).await {
            warn!(path = %scratch.display(), error = %e, "failed to clean up embeddings scratch directory");
        }

        tracing::info!(analysis_id, repository_id, commit_sha, files = total, "embeddings track complete");
        Ok(())
    }

    fn prepare_chunks(
        &self,
        repository_id: &str,
        commit_sha: &str,
        relative_path: &str,
        language: &str,
        content: &str,
    ) -> Result<Vec<PreparedChunk>> {
        let chunks = self
            .chunker
            .chunk_file(Path::new(relative_path), content, language)
            .unwrap_or_default();

        let chunks = if chunks.is_empty() {
            Self::fallback_chunk(relative_path, language, content)
        } else {
            chunks
        };

        let mut prepared = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.into_iter().enumerate() {
            let id = Self::point_id(repository_id, commit_sha, relative_path, idx);
            let chunk_type = match chunk.metadata.get("kind").and_then(serde_json::Value::as_str) {
                Some("function") => ChunkType::Function,
                Some("method") => ChunkType::Method,
                Some("class") => ChunkType::Class,
                Some("module") => ChunkType::Module,
                _ => ChunkType::Block,
            };
            let name = chunk.metadata.get("name").and_then(serde_json::Value::as_str).map(str::to_owned);
            let parent_name = chunk.metadata.get("parent_name").and_then(serde_json::Value::as_str).map(str::to_owned);

            let mut payload = VectorIndexPayload::new(
                repository_id.to_owned(),
                commit_sha.to_owned(),
                relative_path.to_owned(),
                language.to_owned(),
                chunk_type,
                name,
                chunk.start_line,
                chunk.end_line,
                &chunk.content,
            );
            payload.parent_name = parent_name;
            prepared.push(PreparedChunk { id, text: chunk.content, payload });
        }
        Ok(prepared)
    }

    async fn embed_and_upsert(&self, prepared: Vec<PreparedChunk>) -> Result<()> {
        for batch in prepared.chunks(EMBEDDING_BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|p| p.text.clone()).collect();
            let vectors = self.embed_with_retry(&texts).await?;

            let ids: Vec<String> = batch.iter().map(|p| p.id.clone()).collect();
            let metadata = batch
                .iter()
                .map(|p| {
                    serde_json::to_value(&p.payload)
                        .ok()
                        .and_then(|v| v.as_object().cloned())
                        .map(|m| m.into_iter().collect())
                        .unwrap_or_default()
                })
                .collect();

            self.vector_store.upsert_vectors(&self.collection, &vectors, metadata, &ids).await?;
        }
        Ok(())
    }

    async fn embed_with_retry(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut attempt = 0;
        loop {
            match self.embeddings.embed_batch(texts).await {
                Ok(vectors) => return Ok(vectors),
                Err(e) if attempt < EMBEDDING_MAX_RETRIES => {
                    attempt += 1;
                    let backoff = EMBEDDING_RETRY_BASE_MS * 2u64.pow(attempt);
                    warn!(attempt, error = %e, "embedding batch failed, retrying");
                    tokio::time::sleep(Duration::from_millis(backoff)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn discover_files(root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .filter_entry(|entry| {
                if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                entry.file_name().to_str().is_none_or(|name| !SKIP_DIRS.contains(&name))
            })
            .build();

        for entry_result in walker {
            let Ok(entry) = entry_result else { continue };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if entry.metadata().is_ok_and(|m| m.len() > MAX_EMBEDDABLE_FILE_BYTES) {
                continue;
            }
            files.push(entry.path().to_path_buf());
        }
        files
    }

    fn detect_language(path: &Path) -> String {
        match path.extension().and_then(|e| e.to_str()) {
            Some("rs") => "rust",
            Some("py") => "python",
            Some("ts" | "tsx") => "typescript",
            Some("js" | "jsx") => "javascript",
            Some("go") => "go",
            Some("java") => "java",
            Some("rb") => "ruby",
            Some("c" | "h") => "c",
            Some("cpp" | "cc" | "hpp") => "cpp",
            _ => "text",
        }
        .to_owned()
    }

    fn fallback_chunk(relative_path: &str, language: &str, content: &str) -> Vec<mcb_domain::entities::CodeChunk> {
        let line_count = u32::try_from(content.lines().count().max(1)).unwrap_or(u32::MAX);
        vec![mcb_domain::entities::CodeChunk {
            id: relative_path.to_owned(),
            content: content.to_owned(),
            file_path: relative_path.to_owned(),
            start_line: 1,
            end_line: line_count,
            language: language.to_owned(),
            metadata: serde_json::Value::Null,
        }]
    }

    fn point_id(repository_id: &str, commit_sha: &str, relative_path: &str, chunk_index: usize) -> String {
        let mut hasher = Sha256::new();
        hasher.update(repository_id.as_bytes());
        hasher.update(b":");
        hasher.update(commit_sha.as_bytes());
        hasher.update(b":");
        hasher.update(relative_path.as_bytes());
        hasher.update(b":");
        hasher.update(chunk_index.to_le_bytes());
        format!("{:x}", hasher.finalize())
    }
}
