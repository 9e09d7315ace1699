//! Repo Content Cache GC Worker: evicts expired and orphaned commit
//! snapshots (§4.7).
//!
//! Three independent reasons retire a snapshot: its fetch failed and has sat
//! around past [`crate::constants::CACHE_FAILED_TTL_SECS`], it got stuck
//! mid-fetch (worker crashed) past [`crate::constants::CACHE_STUCK_TTL_SECS`],
//! or it's simply cold — `Ready` but unread past
//! [`crate::constants::CACHE_AGE_TTL_SECS`]. The repository port already
//! excludes pinned-analysis snapshots from eviction candidates; this worker
//! only has to pick the right TTL per status and delete object storage
//! before the row, so a crash mid-sweep never leaves an orphaned blob with
//! no row pointing at it (the opposite direction — a row with a missing
//! blob — is recoverable by re-running the embeddings track; the reverse
//! is not).

use std::sync::Arc;

use mcb_domain::entities::repo_content_cache::RepoContentCacheStatus;
use mcb_domain::error::Result;
use mcb_domain::ports::providers::ObjectStorageProvider;
use mcb_domain::ports::repositories::RepoContentCacheRepository;
use tracing::{info, warn};

use crate::constants::{CACHE_AGE_TTL_SECS, CACHE_FAILED_TTL_SECS, CACHE_STUCK_TTL_SECS};

const CONTENT_BUCKET: &str = "repo-content";

/// Sweeps and evicts expired repo content cache snapshots.
pub struct AnalysisGcWorker {
    caches: Arc<dyn RepoContentCacheRepository>,
    objects: Arc<dyn ObjectStorageProvider>,
}

impl AnalysisGcWorker {
    /// Build a new GC worker over the given content cache repository and
    /// object storage backend.
    #[must_use]
    pub fn new(caches: Arc<dyn RepoContentCacheRepository>, objects: Arc<dyn ObjectStorageProvider>) -> Self {
        Self { caches, objects }
    }

    /// Run one sweep at `now`, deleting every snapshot past its status's
    /// TTL. Returns the ids of the snapshots evicted. Idempotent: a second
    /// sweep over the same state finds nothing left to evict.
    ///
    /// # Errors
    /// Propagates a repository failure looking up candidates; per-snapshot
    /// object-storage or row-delete failures are logged and skipped so one
    /// bad snapshot doesn't block the rest of the sweep.
    pub async fn sweep(&self, now: i64) -> Result<Vec<String>> {
        let broadest_ttl = CACHE_FAILED_TTL_SECS.min(CACHE_STUCK_TTL_SECS).min(CACHE_AGE_TTL_SECS);
        let candidates = self.caches.list_evictable(now - broadest_ttl).await?;

        let mut evicted = Vec::with_capacity(candidates.len());
        for cache in candidates {
            let ttl = match cache.status {
                RepoContentCacheStatus::Failed => CACHE_FAILED_TTL_SECS,
                RepoContentCacheStatus::Fetching => CACHE_STUCK_TTL_SECS,
                RepoContentCacheStatus::Ready => CACHE_AGE_TTL_SECS,
                RepoContentCacheStatus::Pending | RepoContentCacheStatus::Evicted => continue,
            };
            if cache.last_accessed_at >= now - ttl {
                continue;
            }

            if let Err(e) = self.evict_one(&cache.id, &cache.repository_id, &cache.commit_sha).await {
                warn!(cache_id = %cache.id, error = %e, "failed to evict repo content cache snapshot");
                continue;
            }
            evicted.push(cache.id);
        }

        info!(evicted = evicted.len(), "repo content cache GC sweep complete");
        Ok(evicted)
    }

    async fn evict_one(&self, cache_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        let objects = self.caches.list_objects(cache_id).await?;
        for object in &objects {
            let key = format!("{repository_id}/{commit_sha}/{}", object.file_path);
            if let Err(e) = self.objects.delete(CONTENT_BUCKET, &key).await {
                warn!(cache_id, key = %key, error = %e, "failed to delete cached object during GC");
            }
        }
        self.caches.delete(cache_id).await
    }
}
