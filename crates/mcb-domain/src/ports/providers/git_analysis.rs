//! Git history analyzer port: per-file churn and authorship statistics
//! used by the Cluster Analyzer's hot-spot detection (§4.4). Distinct from
//! [`super::vcs::VcsProvider`], which reads tree/blob content at a single
//! ref; this port reasons about commit *history* over a trailing window.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Churn statistics for a single file over a trailing window.
#[derive(Debug, Clone)]
pub struct FileChurnStat {
    /// Repository-relative file path.
    pub file_path: String,
    /// Number of commits touching this file within the window.
    pub changes: u32,
    /// Number of distinct commit authors within the window.
    pub unique_authors: u32,
}

/// Computes per-file change frequency and authorship spread.
#[async_trait]
pub trait GitAnalyzer: Send + Sync {
    /// Compute per-file commit counts and distinct-author counts for the
    /// trailing `window_days` days, as of `repo_path`'s current checkout.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Vcs`] if the history cannot be read.
    async fn file_churn(&self, repo_path: &Path, window_days: u32) -> Result<Vec<FileChurnStat>>;
}
