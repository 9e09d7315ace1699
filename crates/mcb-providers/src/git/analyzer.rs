//! `git2`-backed implementation of [`GitAnalyzer`].
//!
//! Separate from [`super::provider::Git2Provider`] because it reasons
//! about commit history over a trailing window rather than a single ref's
//! tree/blob content; kept in the same `git` module since both wrap the
//! same `libgit2` checkout.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use git2::{Repository, Sort};
use mcb_domain::error::Error;
use mcb_domain::ports::providers::{FileChurnStat, GitAnalyzer};

use crate::Result;

/// Walks commit history on the checked-out branch to compute per-file
/// change frequency and distinct-author counts within a trailing window.
#[derive(Debug, Default)]
pub struct Git2GitAnalyzer;

impl Git2GitAnalyzer {
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
    tokio::task::spawn_blocking(f).await.map_err(|e| Error::internal(format!("git2 blocking task panicked: {e}")))?
}

fn open(path: &Path) -> Result<Repository> {
    Repository::open(path).map_err(|_| Error::repository_not_found(path.display().to_string()))
}

fn file_churn_blocking(path: &Path, window_days: u32) -> Result<Vec<FileChurnStat>> {
    let repo = open(path)?;
    let since = Utc::now() - Duration::days(i64::from(window_days));

    let mut revwalk = repo.revwalk().map_err(|e| Error::vcs_with_source("failed to create revwalk", e))?;
    revwalk.push_head().map_err(|e| Error::vcs_with_source("failed to push HEAD", e))?;
    revwalk.set_sorting(Sort::TIME).map_err(|e| Error::vcs_with_source("failed to set revwalk sort", e))?;

    let mut changes: HashMap<String, u32> = HashMap::new();
    let mut authors: HashMap<String, std::collections::HashSet<String>> = HashMap::new();

    for oid in revwalk {
        let oid = oid.map_err(|e| Error::vcs_with_source("failed to walk revision history", e))?;
        let commit = repo.find_commit(oid).map_err(|e| Error::vcs_with_source("failed to read commit", e))?;
        if commit.time().seconds() < since.timestamp() {
            break;
        }

        let tree = commit.tree().map_err(|e| Error::vcs_with_source("failed to read tree", e))?;
        let parent_tree = commit.parent(0).ok().and_then(|p| p.tree().ok());
        let diff = repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .map_err(|e| Error::vcs_with_source("failed to diff commit", e))?;

        let author_email = commit.author().email().unwrap_or_default().to_owned();
        diff.foreach(
            &mut |delta, _| {
                if let Some(file_path) = delta.new_file().path().and_then(|p| p.to_str()) {
                    *changes.entry(file_path.to_owned()).or_insert(0) += 1;
                    authors.entry(file_path.to_owned()).or_default().insert(author_email.clone());
                }
                true
            },
            None,
            None,
            None,
        )
        .map_err(|e| Error::vcs_with_source("failed to enumerate diff deltas", e))?;
    }

    let mut stats: Vec<FileChurnStat> = changes
        .into_iter()
        .map(|(file_path, count)| {
            let unique_authors = authors.get(&file_path).map_or(0, |set| set.len() as u32);
            FileChurnStat { file_path, changes: count, unique_authors }
        })
        .collect();
    stats.sort_by(|a, b| b.changes.cmp(&a.changes).then_with(|| a.file_path.cmp(&b.file_path)));
    Ok(stats)
}

#[async_trait]
impl GitAnalyzer for Git2GitAnalyzer {
    async fn file_churn(&self, repo_path: &Path, window_days: u32) -> Result<Vec<FileChurnStat>> {
        let path = repo_path.to_path_buf();
        blocking(move || file_churn_blocking(&path, window_days)).await
    }
}
