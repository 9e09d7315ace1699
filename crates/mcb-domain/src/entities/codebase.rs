//! Entities for codebase state management and change tracking.
//!
//! A [`CodebaseSnapshot`] records the indexed state of a collection at a
//! point in time so a later indexing pass can compute a [`SnapshotChanges`]
//! diff and only re-embed what actually changed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Indexed state of a single file at the time a snapshot was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSnapshot {
    /// Stable identifier for the file snapshot.
    pub id: String,
    /// Path of the file relative to the repository root.
    pub path: String,
    /// Last-modified timestamp (Unix epoch) at snapshot time.
    pub modified_at: i64,
    /// File size in bytes at snapshot time.
    pub size: u64,
    /// Content hash at snapshot time (used to detect modification).
    pub hash: String,
    /// Detected programming language.
    pub language: String,
}

/// Indexed state of an entire collection at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodebaseSnapshot {
    /// Stable identifier for the snapshot.
    pub id: String,
    /// Creation timestamp (Unix epoch).
    pub created_at: i64,
    /// Collection the snapshot belongs to.
    pub collection: String,
    /// Per-file state, keyed by file path.
    pub files: HashMap<String, FileSnapshot>,
    /// Total number of files in the snapshot.
    pub total_files: usize,
    /// Total size in bytes across all files.
    pub total_size: u64,
}

/// Difference between two [`CodebaseSnapshot`]s, grouped by change kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotChanges {
    /// Paths present in the new snapshot but absent from the old one.
    pub added: Vec<String>,
    /// Paths present in both snapshots with a different hash.
    pub modified: Vec<String>,
    /// Paths present in the old snapshot but absent from the new one.
    pub removed: Vec<String>,
}

impl SnapshotChanges {
    /// Whether any file was added, modified, or removed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.modified.is_empty() || !self.removed.is_empty()
    }

    /// Total number of changed files across all three categories.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }
}
