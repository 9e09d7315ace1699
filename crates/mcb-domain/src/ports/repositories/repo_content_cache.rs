//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#repository-ports)
//!
//! Repository port for commit-scoped repository content cache metadata.

use async_trait::async_trait;

pub use crate::entities::repo_content_cache::TreeSummary;
use crate::entities::repo_content_cache::{RepoContentCache, RepoContentObject};
use crate::error::Result;

/// Port for repo content cache persistence. Object bytes are NOT part of
/// this port; see [`crate::ports::ObjectStorageProvider`].
#[async_trait]
pub trait RepoContentCacheRepository: Send + Sync {
    /// Performs the create operation for a new snapshot row.
    async fn create(&self, cache: &RepoContentCache) -> Result<()>;
    /// Performs the get by id operation.
    async fn get_by_id(&self, id: &str) -> Result<RepoContentCache>;
    /// Looks up an existing snapshot for `(repository_id, commit_sha)`, so
    /// callers can reuse a cache instead of re-fetching the commit.
    async fn find_by_repo_commit(
        &self,
        repository_id: &str,
        commit_sha: &str,
    ) -> Result<Option<RepoContentCache>>;
    /// Performs the update operation (status transitions, tree summary,
    /// object/byte counters).
    async fn update(&self, cache: &RepoContentCache) -> Result<()>;
    /// Bumps `last_accessed_at` without a full row update, called on every
    /// read so the GC worker can find cold snapshots.
    async fn touch(&self, id: &str, accessed_at: i64) -> Result<()>;
    /// Lists snapshots last accessed before `cutoff` and not referenced by
    /// any pinned analysis, for the GC worker.
    async fn list_evictable(&self, cutoff: i64) -> Result<Vec<RepoContentCache>>;
    /// Performs the delete operation (called after the GC worker has
    /// removed the underlying objects from storage).
    async fn delete(&self, id: &str) -> Result<()>;

    /// Performs the bulk create operation for the file objects belonging to
    /// one snapshot.
    async fn create_objects(&self, objects: &[RepoContentObject]) -> Result<()>;
    /// Lists every object belonging to a snapshot.
    async fn list_objects(&self, cache_id: &str) -> Result<Vec<RepoContentObject>>;
    /// Looks up a single object by snapshot + file path.
    async fn get_object(&self, cache_id: &str, file_path: &str) -> Result<Option<RepoContentObject>>;
}
