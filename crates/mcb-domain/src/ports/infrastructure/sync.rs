//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! File synchronization coordination: the higher-level policy that decides
//! *whether* and *what* to re-index in response to file-system changes,
//! sitting above the raw [`super::SyncProvider`]/[`super::SnapshotProvider`]
//! primitives.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Options controlling a single sync pass.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Minimum quiet period to wait for before syncing.
    pub debounce_duration: Duration,
    /// Bypass debouncing and sync immediately.
    pub force: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            debounce_duration: Duration::from_secs(60),
            force: false,
        }
    }
}

/// Outcome of a sync pass.
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Whether a sync was actually performed (vs. debounced/skipped).
    pub performed: bool,
    /// Number of files that changed.
    pub files_changed: usize,
    /// Repository-relative paths of the changed files.
    pub changed_files: Vec<String>,
}

impl SyncResult {
    /// A sync pass that was skipped (debounced).
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            performed: false,
            files_changed: 0,
            changed_files: Vec::new(),
        }
    }

    /// A sync pass that ran and touched `changed_files`.
    #[must_use]
    pub fn completed(changed_files: Vec<String>) -> Self {
        let files_changed = changed_files.len();
        Self {
            performed: true,
            files_changed,
            changed_files,
        }
    }
}

/// Domain port for file synchronization coordination.
#[async_trait]
pub trait SyncCoordinator: Send + Sync {
    /// Whether a sync for `codebase_path` should be debounced right now.
    async fn should_debounce(&self, codebase_path: &std::path::Path) -> Result<bool>;
    /// Run (or skip) a sync pass for `codebase_path`.
    async fn sync(&self, codebase_path: &std::path::Path, options: SyncOptions) -> Result<SyncResult>;
    /// Files changed since the last completed sync.
    async fn get_changed_files(&self, codebase_path: &std::path::Path) -> Result<Vec<String>>;
    /// Mark `codebase_path` as synced as of now.
    async fn mark_synced(&self, codebase_path: &std::path::Path) -> Result<()>;
    /// Number of paths currently tracked by this coordinator.
    fn tracked_file_count(&self) -> usize;
}

/// Shared sync coordinator handle for dependency injection.
pub type SharedSyncCoordinator = Arc<dyn SyncCoordinator>;
