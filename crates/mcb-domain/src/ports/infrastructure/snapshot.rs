//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! Codebase snapshot management: taking and diffing point-in-time captures
//! of a directory tree, and the companion debounce/slot coordination a
//! file watcher uses before acting on a burst of changes.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::entities::codebase::{CodebaseSnapshot, SnapshotChanges};
use crate::error::Result;
use crate::value_objects::config::SyncBatch;

/// Snapshot provider interface: capture and diff a codebase's file tree.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Capture a new snapshot of `root_path`.
    async fn create_snapshot(&self, root_path: &Path) -> Result<CodebaseSnapshot>;
    /// Load the most recently stored snapshot for `root_path`, if any.
    async fn load_snapshot(&self, root_path: &Path) -> Result<Option<CodebaseSnapshot>>;
    /// Diff two snapshots into an add/modify/remove changeset.
    async fn compare_snapshots(
        &self,
        old_snapshot: &CodebaseSnapshot,
        new_snapshot: &CodebaseSnapshot,
    ) -> Result<SnapshotChanges>;
    /// Files changed since the last stored snapshot for `root_path`.
    async fn get_changed_files(&self, root_path: &Path) -> Result<Vec<String>>;
}

/// Sync provider interface: debounce and slot coordination for a file
/// watcher feeding incremental re-indexing.
#[async_trait]
pub trait SyncProvider: Send + Sync {
    /// Whether `codebase_path` is within its debounce window and should be
    /// skipped this tick.
    async fn should_debounce(&self, codebase_path: &Path) -> Result<bool>;
    /// Record that a sync just ran for `codebase_path`.
    async fn update_last_sync(&self, codebase_path: &Path);
    /// Acquire the sync slot for `codebase_path`, returning the pending
    /// batch if one was queued.
    async fn acquire_sync_slot(&self, codebase_path: &Path) -> Result<Option<SyncBatch>>;
    /// Release the sync slot, requeueing `batch` if it wasn't fully
    /// processed.
    async fn release_sync_slot(&self, codebase_path: &Path, batch: SyncBatch) -> Result<()>;
    /// Files changed since the last completed sync for `codebase_path`.
    async fn get_changed_files(&self, codebase_path: &Path) -> Result<Vec<String>>;
    /// How often this provider expects to be polled.
    fn sync_interval(&self) -> Duration;
    /// Minimum quiet period before a burst of changes is considered settled.
    fn debounce_interval(&self) -> Duration;
}
