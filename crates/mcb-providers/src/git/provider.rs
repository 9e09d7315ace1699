//! `git2`-backed implementation of [`VcsProvider`].
//!
//! `libgit2` is a synchronous C library; every method opens (or re-opens)
//! the repository inside [`tokio::task::spawn_blocking`] so the port's
//! async signature never blocks the runtime's reactor thread.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use git2::{BranchType, Repository, Sort};
use mcb_domain::entities::git::{
    DiffStatus, FileDiff, GitBranch, GitCommit, GitRepository, RefDiff, RepositoryId,
};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::VcsProvider;

/// `git2`-backed VCS provider. Stateless: every call re-opens the
/// repository at the path carried on [`GitRepository`].
#[derive(Debug, Default)]
pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

async fn blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("git2 blocking task panicked: {e}")))?
}

fn open(path: &Path) -> Result<Repository> {
    Repository::open(path).map_err(|_| Error::repository_not_found(path.display().to_string()))
}

fn root_commit_hash(repo: &Repository) -> Result<String> {
    let mut revwalk = repo.revwalk().map_err(|e| Error::vcs_with_source("failed to create revwalk", e))?;
    revwalk.push_head().map_err(|e| Error::vcs_with_source("failed to push HEAD", e))?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
        .map_err(|e| Error::vcs_with_source("failed to set revwalk sort", e))?;
    let oid = revwalk
        .next()
        .ok_or_else(|| Error::vcs("repository has no commits"))?
        .map_err(|e| Error::vcs_with_source("failed to walk revision history", e))?;
    Ok(oid.to_string())
}

fn default_branch_name(repo: &Repository) -> String {
    repo.head().ok().and_then(|h| h.shorthand().map(str::to_owned)).unwrap_or_else(|| "main".to_owned())
}

fn local_branch_names(repo: &Repository) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let branches = repo.branches(Some(BranchType::Local)).map_err(|e| Error::vcs_with_source("failed to list branches", e))?;
    for entry in branches {
        let (branch, _) = entry.map_err(|e| Error::vcs_with_source("failed to read branch entry", e))?;
        if let Some(name) = branch.name().map_err(|e| Error::vcs_with_source("invalid branch name", e))? {
            names.push(name.to_owned());
        }
    }
    Ok(names)
}

fn remote_url(repo: &Repository) -> Option<String> {
    repo.find_remote("origin").ok().and_then(|r| r.url().map(str::to_owned))
}

fn open_repository_blocking(path: &Path) -> Result<GitRepository> {
    let repo = open(path)?;
    Ok(GitRepository {
        id: RepositoryId::new(root_commit_hash(&repo)?),
        path: path.to_path_buf(),
        default_branch: default_branch_name(&repo),
        branches: local_branch_names(&repo)?,
        remote_url: remote_url(&repo),
    })
}

fn resolve_branch_commit(repo: &Repository, branch: &str) -> Result<git2::Oid> {
    if let Ok(b) = repo.find_branch(branch, BranchType::Local) {
        if let Some(oid) = b.get().target() {
            return Ok(oid);
        }
    }
    repo.revparse_single(branch).map(|obj| obj.id()).map_err(|_| Error::branch_not_found(branch.to_owned()))
}

fn resolve_tree<'repo>(repo: &'repo Repository, refname: &str) -> Result<git2::Tree<'repo>> {
    let object = repo.revparse_single(refname).map_err(|_| Error::branch_not_found(refname.to_owned()))?;
    let commit = object.peel_to_commit().map_err(|e| Error::vcs_with_source("ref does not resolve to a commit", e))?;
    commit.tree().map_err(|e| Error::vcs_with_source("failed to read tree", e))
}

fn to_git_commit(commit: &git2::Commit<'_>) -> GitCommit {
    let author = commit.author();
    GitCommit {
        hash: commit.id().to_string(),
        message: commit.message().unwrap_or_default().to_owned(),
        author: author.name().unwrap_or_default().to_owned(),
        author_email: author.email().unwrap_or_default().to_owned(),
        timestamp: commit.time().seconds(),
        parent_hashes: commit.parent_ids().map(|id| id.to_string()).collect(),
    }
}

fn list_branches_blocking(path: &Path, default_branch: &str) -> Result<Vec<GitBranch>> {
    let repo = open(path)?;
    let mut branches = Vec::new();
    let iter = repo.branches(Some(BranchType::Local)).map_err(|e| Error::vcs_with_source("failed to list branches", e))?;
    for entry in iter {
        let (branch, _) = entry.map_err(|e| Error::vcs_with_source("failed to read branch entry", e))?;
        let Some(name) = branch.name().map_err(|e| Error::vcs_with_source("invalid branch name", e))? else {
            continue;
        };
        let Some(head_commit) = branch.get().target().map(|oid| oid.to_string()) else {
            continue;
        };
        let upstream = branch.upstream().ok().and_then(|u| u.name().ok().flatten().map(str::to_owned));
        branches.push(GitBranch { is_default: name == default_branch, name: name.to_owned(), head_commit, upstream });
    }
    Ok(branches)
}

fn commit_history_blocking(path: &Path, branch: &str, limit: Option<usize>) -> Result<Vec<GitCommit>> {
    let repo = open(path)?;
    let start = resolve_branch_commit(&repo, branch)?;
    let mut revwalk = repo.revwalk().map_err(|e| Error::vcs_with_source("failed to create revwalk", e))?;
    revwalk.push(start).map_err(|e| Error::vcs_with_source("failed to push branch commit", e))?;
    revwalk.set_sorting(Sort::TIME).map_err(|e| Error::vcs_with_source("failed to set revwalk sort", e))?;

    let mut commits = Vec::new();
    for oid in revwalk {
        if limit.is_some_and(|limit| commits.len() >= limit) {
            break;
        }
        let oid = oid.map_err(|e| Error::vcs_with_source("failed to walk revision history", e))?;
        let commit = repo.find_commit(oid).map_err(|e| Error::vcs_with_source("failed to read commit", e))?;
        commits.push(to_git_commit(&commit));
    }
    Ok(commits)
}

fn list_files_blocking(path: &Path, branch: &str) -> Result<Vec<PathBuf>> {
    let repo = open(path)?;
    let oid = resolve_branch_commit(&repo, branch)?;
    let commit = repo.find_commit(oid).map_err(|e| Error::vcs_with_source("failed to read commit", e))?;
    let tree = commit.tree().map_err(|e| Error::vcs_with_source("failed to read tree", e))?;

    let mut files = Vec::new();
    tree.walk(git2::TreeWalkMode::PreOrder, |root, entry| {
        if entry.kind() == Some(git2::ObjectType::Blob) {
            if let Some(name) = entry.name() {
                files.push(PathBuf::from(format!("{root}{name}")));
            }
        }
        git2::TreeWalkResult::Ok
    })
    .map_err(|e| Error::vcs_with_source("failed to walk tree", e))?;
    Ok(files)
}

fn read_file_blocking(path: &Path, branch: &str, file_path: &Path) -> Result<String> {
    let repo = open(path)?;
    let oid = resolve_branch_commit(&repo, branch)?;
    let commit = repo.find_commit(oid).map_err(|e| Error::vcs_with_source("failed to read commit", e))?;
    let tree = commit.tree().map_err(|e| Error::vcs_with_source("failed to read tree", e))?;
    let entry = tree.get_path(file_path).map_err(|_| Error::not_found(format!("file {}", file_path.display())))?;
    let object = entry.to_object(&repo).map_err(|e| Error::vcs_with_source("failed to resolve blob", e))?;
    let blob = object.as_blob().ok_or_else(|| Error::not_found(format!("{} is not a file", file_path.display())))?;
    String::from_utf8(blob.content().to_vec()).map_err(|e| Error::vcs_with_source("file is not valid utf-8", e))
}

fn diff_refs_blocking(path: &Path, base_ref: &str, head_ref: &str) -> Result<RefDiff> {
    let repo = open(path)?;
    let base_tree = resolve_tree(&repo, base_ref)?;
    let head_tree = resolve_tree(&repo, head_ref)?;
    let diff =
        repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None).map_err(|e| Error::vcs_with_source("failed to diff trees", e))?;

    let mut files = Vec::new();
    let mut total_additions = 0usize;
    let mut total_deletions = 0usize;

    for idx in 0..diff.deltas().len() {
        let delta = diff.get_delta(idx).expect("index within diff.deltas().len()");
        let status = match delta.status() {
            git2::Delta::Added => DiffStatus::Added,
            git2::Delta::Deleted => DiffStatus::Deleted,
            git2::Delta::Renamed => DiffStatus::Renamed,
            _ => DiffStatus::Modified,
        };
        let file_path = delta.new_file().path().or_else(|| delta.old_file().path()).map(Path::to_path_buf).unwrap_or_default();

        let (additions, deletions) = git2::Patch::from_diff(&diff, idx)
            .ok()
            .flatten()
            .and_then(|mut patch| patch.line_stats().ok())
            .map(|(_, additions, deletions)| (additions, deletions))
            .unwrap_or((0, 0));

        total_additions += additions;
        total_deletions += deletions;
        files.push(FileDiff { path: file_path, status, additions, deletions });
    }

    Ok(RefDiff { base_ref: base_ref.to_owned(), head_ref: head_ref.to_owned(), files, total_additions, total_deletions })
}

fn clone_at_commit_blocking(repository_url: &str, commit_sha: &str) -> Result<PathBuf> {
    let scratch_dir = std::env::temp_dir().join(format!("mcb-clone-{}", uuid::Uuid::new_v4()));
    let repo = Repository::clone(repository_url, &scratch_dir)
        .map_err(|e| Error::upstream_unavailable("git".to_owned(), format!("clone of {repository_url} failed: {e}")))?;
    let oid = git2::Oid::from_str(commit_sha).map_err(|e| Error::invalid_argument(format!("invalid commit sha {commit_sha}: {e}")))?;
    let commit = repo
        .find_commit(oid)
        .map_err(|e| Error::upstream_unavailable("git".to_owned(), format!("commit {commit_sha} not found after clone: {e}")))?;
    repo.checkout_tree(commit.as_object(), None)
        .map_err(|e| Error::upstream_unavailable("git".to_owned(), format!("checkout of {commit_sha} failed: {e}")))?;
    repo.set_head_detached(oid)
        .map_err(|e| Error::upstream_unavailable("git".to_owned(), format!("detaching HEAD at {commit_sha} failed: {e}")))?;
    Ok(scratch_dir)
}

#[async_trait]
impl VcsProvider for Git2Provider {
    async fn open_repository(&self, path: &Path) -> Result<GitRepository> {
        let path = path.to_path_buf();
        blocking(move || open_repository_blocking(&path)).await
    }

    fn repository_id(&self, repo: &GitRepository) -> RepositoryId {
        repo.id.clone()
    }

    async fn list_branches(&self, repo: &GitRepository) -> Result<Vec<GitBranch>> {
        let path = repo.path.clone();
        let default_branch = repo.default_branch.clone();
        blocking(move || list_branches_blocking(&path, &default_branch)).await
    }

    async fn commit_history(&self, repo: &GitRepository, branch: &str, limit: Option<usize>) -> Result<Vec<GitCommit>> {
        let path = repo.path.clone();
        let branch = branch.to_owned();
        blocking(move || commit_history_blocking(&path, &branch, limit)).await
    }

    async fn list_files(&self, repo: &GitRepository, branch: &str) -> Result<Vec<PathBuf>> {
        let path = repo.path.clone();
        let branch = branch.to_owned();
        blocking(move || list_files_blocking(&path, &branch)).await
    }

    async fn read_file(&self, repo: &GitRepository, branch: &str, path: &Path) -> Result<String> {
        let repo_path = repo.path.clone();
        let branch = branch.to_owned();
        let file_path = path.to_path_buf();
        blocking(move || read_file_blocking(&repo_path, &branch, &file_path)).await
    }

    fn vcs_name(&self) -> &str {
        "git"
    }

    async fn diff_refs(&self, repo: &GitRepository, base_ref: &str, head_ref: &str) -> Result<RefDiff> {
        let path = repo.path.clone();
        let base_ref = base_ref.to_owned();
        let head_ref = head_ref.to_owned();
        blocking(move || diff_refs_blocking(&path, &base_ref, &head_ref)).await
    }

    async fn clone_at_commit(&self, repository_url: &str, commit_sha: &str) -> Result<PathBuf> {
        let repository_url = repository_url.to_owned();
        let commit_sha = commit_sha.to_owned();
        blocking(move || clone_at_commit_blocking(&repository_url, &commit_sha)).await
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::vcs::{VCS_PROVIDERS, VcsProviderConfig, VcsProviderEntry};

fn git2_factory(_config: &VcsProviderConfig) -> std::result::Result<Arc<dyn VcsProvider>, String> {
    Ok(Arc::new(Git2Provider::new()))
}

#[linkme::distributed_slice(VCS_PROVIDERS)]
static GIT2_PROVIDER: VcsProviderEntry =
    VcsProviderEntry { name: "git", description: "libgit2-backed VCS provider for local repository checkouts", build: git2_factory };
