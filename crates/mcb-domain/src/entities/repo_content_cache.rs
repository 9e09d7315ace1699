//! Repo Content Cache: a commit-scoped snapshot of a repository's file
//! contents, fetched once per `(repository, commit)` and reused by every
//! track of every analysis that targets that commit.
//!
//! File bytes themselves live in an [`crate::ports::ObjectStorageProvider`]
//! bucket, keyed `"{repository_id}/{commit_sha}/{object_id}"`; the rows here
//! only hold metadata plus a lightweight directory tree summary for quick
//! browsing without touching blob storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a [`RepoContentCache`] snapshot.
crate::define_string_enum! {
    #[derive(Default)]
    pub enum RepoContentCacheStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Created, clone/fetch not started yet.
        #[default]
        Pending,
        /// Clone/export of the commit in progress.
        Fetching,
        /// All objects fetched and stored; ready to serve reads.
        Ready,
        /// Fetch failed.
        Failed,
        /// Garbage-collected: objects deleted from storage, row kept for audit.
        Evicted,
    }
}

impl RepoContentCacheStatus {
    /// Whether this status has no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Failed | Self::Evicted)
    }
}

crate::define_entity_org_created! {
    /// A commit-scoped cache of a repository's working-tree contents.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct RepoContentCache {
        /// Repository this snapshot was taken from.
        pub repository_id: String,
        /// Commit SHA the snapshot pins to.
        pub commit_sha: String,
        /// Lifecycle status.
        pub status: RepoContentCacheStatus,
        /// Number of file objects cached.
        pub object_count: u32,
        /// Total size of all cached objects, in bytes.
        pub total_bytes: u64,
        /// Lightweight directory tree, stored as JSON for quick browsing.
        pub tree_summary: Option<serde_json::Value>,
        /// Error message if fetching failed.
        pub error: Option<String>,
        /// Last time any analysis track read from this cache, used by the
        /// garbage collector to find cold snapshots.
        pub last_accessed_at: i64,
        /// Timestamp when the row was last updated.
        pub updated_at: i64,
    }
}

impl RepoContentCache {
    /// Whether this snapshot can be read from immediately.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == RepoContentCacheStatus::Ready
    }
}

crate::impl_table_schema!(RepoContentCache, "repo_content_caches",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("repository_id", Text),
        ("commit_sha", Text),
        ("status", Text),
        ("object_count", Integer),
        ("total_bytes", Integer),
        ("tree_summary_json", Json, nullable),
        ("error", Text, nullable),
        ("last_accessed_at", Integer),
        ("created_at", Integer),
        ("updated_at", Integer),
    ],
    indexes: [
        "idx_repo_content_caches_repo_commit" => ["repository_id", "commit_sha"],
        "idx_repo_content_caches_last_accessed" => ["last_accessed_at"],
    ],
    foreign_keys: [],
    unique_constraints: [
        ["repository_id", "commit_sha"],
    ],
);

crate::define_entity_org_created! {
    /// A single cached file object belonging to a [`RepoContentCache`]
    /// snapshot. The object's bytes live in object storage; this row only
    /// holds the key and enough metadata to drive chunking/embedding
    /// without re-reading the blob.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct RepoContentObject {
        /// Parent snapshot this object belongs to.
        pub cache_id: String,
        /// Repository-relative file path.
        pub file_path: String,
        /// Content hash (sha256 hex) of the file bytes, used for
        /// cross-commit de-duplication.
        pub content_hash: String,
        /// Size of the file in bytes.
        pub size_bytes: u64,
        /// Detected language identifier, if recognized.
        pub language: Option<String>,
        /// Object storage key: `bucket/key` the bytes live under.
        pub storage_key: String,
    }
}

crate::impl_table_schema!(RepoContentObject, "repo_content_objects",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("cache_id", Text),
        ("file_path", Text),
        ("content_hash", Text),
        ("size_bytes", Integer),
        ("language", Text, nullable),
        ("storage_key", Text),
        ("created_at", Integer),
    ],
    indexes: [
        "idx_repo_content_objects_cache" => ["cache_id"],
        "idx_repo_content_objects_hash" => ["content_hash"],
    ],
    foreign_keys: [
        ("cache_id", "repo_content_caches", "id"),
    ],
    unique_constraints: [
        ["cache_id", "file_path"],
    ],
);

/// A single node (file or directory) in a [`TreeSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreeNode {
    /// Name of this entry (not the full path).
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Whether this node is a directory.
    pub is_dir: bool,
    /// Size in bytes; 0 for directories.
    pub size_bytes: u64,
    /// Child nodes, empty for files.
    pub children: Vec<TreeNode>,
}

/// A lightweight directory tree for a [`RepoContentCache`] snapshot, used to
/// answer browse/list requests without touching object storage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreeSummary {
    /// Root node of the tree (path `""`).
    pub root: TreeNode,
    /// Total number of file objects in the tree.
    pub file_count: u32,
    /// Total number of directories in the tree.
    pub dir_count: u32,
    /// Sum of all file sizes, in bytes.
    pub total_size_bytes: u64,
}
