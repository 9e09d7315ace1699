//! Submodule discovery for the hybrid-search collection layout.
//!
//! Each submodule gets its own vector-store collection, nested under its
//! parent's (see [`SubmoduleInfo::collection_name`]), so code inside a
//! vendored dependency doesn't pollute the parent repository's search
//! results. Traversal stops at [`SubmoduleDiscoveryConfig::max_depth`] to
//! bound recursive-submodule pathologies.

use std::path::Path;

use git2::Repository;
use mcb_domain::entities::submodule::{SubmoduleDiscoveryConfig, SubmoduleInfo};
use mcb_domain::error::{Error, Result};

/// Walk `path`'s submodule tree (default discovery config) and return one
/// [`SubmoduleInfo`] per submodule found, parented under `repo_id`.
pub async fn collect_submodules(path: &Path, repo_id: &str) -> Result<Vec<SubmoduleInfo>> {
    collect_submodules_with_config(path, repo_id, SubmoduleDiscoveryConfig::default()).await
}

/// Same as [`collect_submodules`] with an explicit discovery configuration.
pub async fn collect_submodules_with_config(
    path: &Path,
    repo_id: &str,
    config: SubmoduleDiscoveryConfig,
) -> Result<Vec<SubmoduleInfo>> {
    let path = path.to_path_buf();
    let repo_id = repo_id.to_owned();
    tokio::task::spawn_blocking(move || collect_submodules_blocking(&path, &repo_id, &config))
        .await
        .map_err(|e| Error::internal(format!("git2 blocking task panicked: {e}")))?
}

fn collect_submodules_blocking(path: &Path, repo_id: &str, config: &SubmoduleDiscoveryConfig) -> Result<Vec<SubmoduleInfo>> {
    let repo = Repository::open(path).map_err(|_| Error::repository_not_found(path.display().to_string()))?;
    let mut out = Vec::new();
    walk_submodules(&repo, repo_id, 1, config, &mut out);
    Ok(out)
}

fn walk_submodules(repo: &Repository, parent_repo_id: &str, depth: usize, config: &SubmoduleDiscoveryConfig, out: &mut Vec<SubmoduleInfo>) {
    if depth > config.max_depth {
        return;
    }

    let submodules = match repo.submodules() {
        Ok(submodules) => submodules,
        Err(e) => {
            if !config.continue_on_error {
                tracing::warn!(error = %e, "failed to enumerate submodules, stopping traversal");
            }
            return;
        }
    };

    for submodule in submodules {
        let path_str = submodule.path().to_string_lossy().into_owned();
        let is_initialized = submodule.workdir_id().is_some();

        if config.skip_uninitialized && !is_initialized {
            continue;
        }

        let info = SubmoduleInfo {
            id: format!("{parent_repo_id}:{path_str}"),
            path: path_str.clone(),
            url: submodule.url().unwrap_or_default().to_owned(),
            commit_hash: submodule.workdir_id().or_else(|| submodule.head_id()).map(|oid| oid.to_string()).unwrap_or_default(),
            parent_repo_id: parent_repo_id.to_owned(),
            depth,
            name: submodule.name().unwrap_or(&path_str).to_owned(),
            is_initialized,
        };

        if is_initialized {
            match submodule.open() {
                Ok(sub_repo) => walk_submodules(&sub_repo, &info.repo_id(), depth + 1, config, out),
                Err(e) if !config.continue_on_error => {
                    tracing::warn!(error = %e, submodule = %path_str, "failed to open submodule for nested traversal");
                }
                Err(_) => {}
            }
        }

        out.push(info);
    }
}
