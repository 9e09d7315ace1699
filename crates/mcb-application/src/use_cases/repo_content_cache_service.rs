//! Repo Content Cache Service: fetches and serves a commit-scoped snapshot
//! of a repository's working tree (§4.6).
//!
//! One snapshot is shared by every analysis track that targets the same
//! `(repository_id, commit_sha)` pair, so the embeddings worker, the
//! cluster analyzer, and the AI scan worker never each re-clone and
//! re-upload the same commit. `ensure` is the only writer; everything else
//! reads through it.

use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;
use mcb_domain::entities::repo_content_cache::{RepoContentCache, RepoContentCacheStatus, RepoContentObject, TreeNode, TreeSummary};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::ObjectStorageProvider;
use mcb_domain::ports::repositories::RepoContentCacheRepository;
use tracing::{info, warn};

use crate::constants::SKIP_DIRS;

const CONTENT_BUCKET: &str = "repo-content";

/// Result of [`RepoContentCacheService::list_tree`].
pub struct TreeListing {
    /// Every cached object's repository-relative path, in no particular order.
    pub flat_paths: Vec<String>,
    /// The same objects arranged as a directory tree.
    pub hierarchical_tree: TreeSummary,
}

/// Fetches, stores, and serves commit-scoped repository content snapshots.
pub struct RepoContentCacheService {
    caches: Arc<dyn RepoContentCacheRepository>,
    objects: Arc<dyn ObjectStorageProvider>,
}

impl RepoContentCacheService {
    /// Build a new service over the given content cache repository and
    /// object storage backend.
    #[must_use]
    pub fn new(caches: Arc<dyn RepoContentCacheRepository>, objects: Arc<dyn ObjectStorageProvider>) -> Self {
        Self { caches, objects }
    }

    /// Idempotently populate the cache for `(repository_id, commit_sha)`
    /// from a local checkout at `local_repo_path`. A no-op if a `ready`
    /// cache with a tree summary already exists; otherwise walks the
    /// checkout, uploads every file, and writes the tree summary.
    ///
    /// # Errors
    /// Propagates repository/object-storage failures reached outside the
    /// per-file upload loop. A cache is marked `failed` rather than
    /// returning an error when most individual file uploads fail.
    pub async fn ensure(&self, repository_id: &str, commit_sha: &str, local_repo_path: &Path) -> Result<RepoContentCache> {
        if let Some(existing) = self.caches.find_by_repo_commit(repository_id, commit_sha).await? {
            if existing.status == RepoContentCacheStatus::Ready && existing.tree_summary.is_some() {
                return Ok(existing);
            }
        }

        let mut cache = match self.caches.find_by_repo_commit(repository_id, commit_sha).await? {
            Some(existing) => existing,
            None => RepoContentCache {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                created_at: now(),
                repository_id: repository_id.to_owned(),
                commit_sha: commit_sha.to_owned(),
                status: RepoContentCacheStatus::Pending,
                object_count: 0,
                total_bytes: 0,
                tree_summary: None,
                error: None,
                last_accessed_at: now(),
                updated_at: now(),
            },
        };
        if cache.id.is_empty() {
            cache.id = uuid::Uuid::new_v4().to_string();
        }
        let is_new = self.caches.get_by_id(&cache.id).await.is_err();
        cache.status = RepoContentCacheStatus::Fetching;
        cache.error = None;
        if is_new {
            self.caches.create(&cache).await?;
        } else {
            self.caches.update(&cache).await?;
        }

        let already_ready: Vec<RepoContentObject> = self.caches.list_objects(&cache.id).await?;
        let mut ready = already_ready;
        let mut attempted = 0usize;
        let mut failed = 0usize;

        for path in discover_files(local_repo_path) {
            let relative_path = match path.strip_prefix(local_repo_path) {
                Ok(p) => p.to_string_lossy().replace('\\', "/"),
                Err(_) => continue,
            };
            attempted += 1;

            let bytes = match std::fs::read(&path) {
                Ok(b) => b,
                Err(e) => {
                    warn!(path = %relative_path, error = %e, "failed to read file for content cache");
                    failed += 1;
                    continue;
                }
            };
            let hash = content_hash(&bytes);
            if ready.iter().any(|o| o.file_path == relative_path && o.content_hash == hash) {
                continue;
            }

            let key = format!("{repository_id}/{commit_sha}/{relative_path}");
            if let Err(e) = self.objects.put(CONTENT_BUCKET, &key, bytes.clone()).await {
                warn!(path = %relative_path, error = %e, "failed to upload object for content cache");
                failed += 1;
                continue;
            }

            let object = RepoContentObject {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                created_at: now(),
                cache_id: cache.id.clone(),
                file_path: relative_path.clone(),
                content_hash: hash,
                size_bytes: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
                language: detect_language(&path),
                storage_key: key,
            };
            self.caches.create_objects(std::slice::from_ref(&object)).await?;
            ready.push(object);
        }

        if attempted > 0 && failed * 2 > attempted {
            cache.status = RepoContentCacheStatus::Failed;
            cache.error = Some(format!("{failed}/{attempted} objects failed to upload"));
            self.caches.update(&cache).await?;
            return Err(Error::cache(format!("repo content cache {} failed: {}", cache.id, failed)));
        }

        let tree = build_tree_summary(&ready);
        cache.object_count = u32::try_from(ready.len()).unwrap_or(u32::MAX);
        cache.total_bytes = ready.iter().map(|o| o.size_bytes).sum();
        cache.tree_summary = serde_json::to_value(&tree).ok();
        cache.status = RepoContentCacheStatus::Ready;
        cache.updated_at = now();
        self.caches.update(&cache).await?;

        info!(cache_id = %cache.id, objects = ready.len(), "repo content cache ready");
        Ok(cache)
    }

    /// Read one cached file's bytes. Fails with `NotFound` if the path
    /// isn't cached, or a cache-state error if the snapshot isn't `ready`.
    ///
    /// # Errors
    /// Returns an error if no `ready` cache exists for the commit, the
    /// path was never cached, or the object storage read fails.
    pub async fn get_file(&self, repository_id: &str, commit_sha: &str, path: &str) -> Result<Vec<u8>> {
        let cache = self.ready_cache(repository_id, commit_sha).await?;
        self.caches.touch(&cache.id, now()).await?;
        let object = self
            .caches
            .get_object(&cache.id, path)
            .await?
            .ok_or_else(|| Error::not_found(format!("file {path} in repo content cache")))?;
        self.objects.get(CONTENT_BUCKET, &object.storage_key).await
    }

    /// List the cached tree for a commit, both flat and hierarchical.
    ///
    /// # Errors
    /// Returns an error if no `ready` cache exists for the commit.
    pub async fn list_tree(&self, repository_id: &str, commit_sha: &str) -> Result<TreeListing> {
        let cache = self.ready_cache(repository_id, commit_sha).await?;
        self.caches.touch(&cache.id, now()).await?;
        let objects = self.caches.list_objects(&cache.id).await?;
        let flat_paths = objects.iter().map(|o| o.file_path.clone()).collect();
        let hierarchical_tree = build_tree_summary(&objects);
        Ok(TreeListing { flat_paths, hierarchical_tree })
    }

    async fn ready_cache(&self, repository_id: &str, commit_sha: &str) -> Result<RepoContentCache> {
        let cache = self
            .caches
            .find_by_repo_commit(repository_id, commit_sha)
            .await?
            .ok_or_else(|| Error::not_found(format!("repo content cache for {repository_id}@{commit_sha}")))?;
        if cache.status != RepoContentCacheStatus::Ready {
            return Err(Error::cache(format!("repo content cache {} is {}, not ready", cache.id, cache.status)));
        }
        Ok(cache)
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn content_hash(bytes: &[u8]) -> String {
    mcb_utils::hashing::sha256_hex(bytes)
}

fn detect_language(path: &Path) -> Option<String> {
    let lang = match path.extension().and_then(|e| e.to_str()) {
        Some("rs") => "rust",
        Some("py") => "python",
        Some("ts" | "tsx") => "typescript",
        Some("js" | "jsx") => "javascript",
        Some("go") => "go",
        Some("java") => "java",
        Some("rb") => "ruby",
        Some("c" | "h") => "c",
        Some("cpp" | "cc" | "hpp") => "cpp",
        _ => return None,
    };
    Some(lang.to_owned())
}

fn discover_files(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|e| !SKIP_DIRS.iter().any(|skip| e.file_name().to_str() == Some(skip)))
        .build();
    for entry in walker.flatten() {
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files
}

fn build_tree_summary(objects: &[RepoContentObject]) -> TreeSummary {
    let mut root = TreeNode { name: String::new(), path: String::new(), is_dir: true, size_bytes: 0, children: Vec::new() };
    let mut dir_count = 0u32;

    for object in objects {
        let mut node = &mut root;
        let parts: Vec<&str> = object.file_path.split('/').collect();
        for (i, part) in parts.iter().enumerate() {
            let is_last = i == parts.len() - 1;
            let existing = node.children.iter().position(|c| c.name == *part);
            let idx = match existing {
                Some(idx) => idx,
                None => {
                    node.children.push(TreeNode {
                        name: (*part).to_owned(),
                        path: parts[..=i].join("/"),
                        is_dir: !is_last,
                        size_bytes: 0,
                        children: Vec::new(),
                    });
                    if !is_last {
                        dir_count += 1;
                    }
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }
        node.size_bytes = object.size_bytes;
    }

    TreeSummary {
        root,
        file_count: u32::try_from(objects.len()).unwrap_or(u32::MAX),
        dir_count,
        total_size_bytes: objects.iter().map(|o| o.size_bytes).sum(),
    }
}
