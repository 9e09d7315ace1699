//! Version Control System provider port for repository operations.

use crate::entities::git::{GitBranch, GitCommit, GitRepository, RefDiff, RepositoryId};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Version Control System provider for repository operations.
///
/// Abstraction over version control systems (Git, Mercurial, SVN, etc.).
/// The current implementation focuses on Git, but the trait is designed
/// to support other VCS implementations in the future.
#[async_trait]
pub trait VcsProvider: Send + Sync {
    /// Open a repository at the given path
    async fn open_repository(&self, path: &Path) -> Result<GitRepository>;

    /// Get unique repository identifier
    fn repository_id(&self, repo: &GitRepository) -> RepositoryId;

    /// List all local branches in repository
    async fn list_branches(&self, repo: &GitRepository) -> Result<Vec<GitBranch>>;

    /// Get commit history for a branch with optional limit
    async fn commit_history(
        &self,
        repo: &GitRepository,
        branch: &str,
        limit: Option<usize>,
    ) -> Result<Vec<GitCommit>>;

    /// List files in a branch at HEAD
    async fn list_files(&self, repo: &GitRepository, branch: &str) -> Result<Vec<PathBuf>>;

    /// Read file content from a branch at HEAD
    async fn read_file(&self, repo: &GitRepository, branch: &str, path: &Path) -> Result<String>;

    /// VCS type name (e.g., "git", "mercurial", "svn")
    fn vcs_name(&self) -> &str;

    /// Compare two refs and return the diff
    async fn diff_refs(
        &self,
        repo: &GitRepository,
        base_ref: &str,
        head_ref: &str,
    ) -> Result<RefDiff>;

    /// Clone or export `commit_sha` of `repository_url` into a fresh
    /// scratch directory and return its local path. Each caller (the
    /// Embeddings Worker, the AI Scan Worker, the Cluster Analyzer's git
    /// history step) clones independently; no scratch directory is shared
    /// between them.
    ///
    /// The concrete protocol (shallow `git clone`, tarball export from a
    /// forge API, ...) is an infrastructure concern this port deliberately
    /// does not constrain. The default implementation reports the
    /// capability as unavailable so callers fail with a retryable
    /// [`crate::error::Error::UpstreamUnavailable`] rather than panicking
    /// on an unimplemented method.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UpstreamUnavailable`] if cloning is
    /// unsupported or fails.
    async fn clone_at_commit(&self, repository_url: &str, commit_sha: &str) -> Result<PathBuf> {
        let _ = (repository_url, commit_sha);
        Err(crate::error::Error::upstream_unavailable(
            self.vcs_name().to_owned(),
            "clone_at_commit is not implemented by this VCS provider".to_owned(),
        ))
    }
}
