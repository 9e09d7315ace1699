//! Pipeline Dispatcher: turns "analyze repository R at commit C" into a
//! persisted [`Analysis`] row and three independently-running jobs.
//!
//! Grounded in [`super::git_indexing::GitIndexingService`]'s shape (resolve
//! → validate → persist → enqueue), generalized from one synchronous
//! indexing pass to three concurrently-dispatched, independently-advancing
//! tracks.

use std::sync::Arc;

use futures::future::BoxFuture;
use mcb_domain::entities::analysis::{Analysis, TriggerType};
use mcb_domain::entities::git::GitRepository;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::providers::{TaskRunnerProvider, VcsProvider};
use mcb_domain::ports::repositories::AnalysisRepository;

use super::analysis_state_service::AnalysisStateService;
use crate::constants::STUCK_THRESHOLD_SECS;

/// One boxed job entry point, given `(analysis_id, repository_id,
/// commit_sha)`. Each track's concrete worker (the Embeddings Worker, the AI
/// Scan Worker, a future static-analysis worker) is wired in by the
/// composition root; the dispatcher stays decoupled from their concrete
/// types so it can be unit tested without constructing any of them.
pub type TrackJob =
    Box<dyn Fn(String, String, String) -> BoxFuture<'static, ()> + Send + Sync>;

/// The three per-track job entry points dispatched on every `trigger`.
pub struct PipelineJobs {
    /// Entry point for the static-analysis track.
    pub static_job: TrackJob,
    /// Entry point for the embeddings track.
    pub embeddings_job: TrackJob,
    /// Entry point for the AI-scan track.
    pub ai_scan_job: TrackJob,
}

/// Dispatches new analysis runs: resolves the target commit, enforces the
/// one-in-flight-per-commit invariant, persists the initial row, and
/// schedules the three independent track jobs.
pub struct PipelineDispatcher<R, E, V, T>
where
    R: AnalysisRepository,
    E: EventBusProvider,
    V: VcsProvider,
    T: TaskRunnerProvider,
{
    analyses: Arc<R>,
    vcs: Arc<V>,
    tasks: Arc<T>,
    state: Arc<AnalysisStateService<R, E>>,
}

impl<R, E, V, T> PipelineDispatcher<R, E, V, T>
where
    R: AnalysisRepository,
    E: EventBusProvider,
    V: VcsProvider,
    T: TaskRunnerProvider,
{
    /// Create a new dispatcher.
    #[must_use]
    pub fn new(analyses: Arc<R>, vcs: Arc<V>, tasks: Arc<T>, state: Arc<AnalysisStateService<R, E>>) -> Self {
        Self { analyses, vcs, tasks, state }
    }

    /// Trigger a new analysis run against `repo` at `commit_sha` (or the
    /// head of `branch`/the repository's default branch if absent).
    ///
    /// # Errors
    /// Returns [`Error::AnalysisInFlight`] if a non-terminal analysis
    /// already exists for the same `(repository_id, commit_sha)` and its
    /// heartbeat is still fresh. Propagates VCS, repository, and event-bus
    /// failures.
    pub async fn trigger(
        &self,
        repo: &GitRepository,
        commit_sha: Option<String>,
        branch: Option<String>,
        trigger_type: TriggerType,
        jobs: PipelineJobs,
    ) -> Result<String> {
        let repository_id = self.vcs.repository_id(repo).as_str().to_owned();
        let commit_sha = match commit_sha {
            Some(sha) => sha,
            None => self.resolve_head(repo, branch.as_deref()).await?,
        };

        if let Some(existing) = self.analyses.find_in_flight(&repository_id, &commit_sha).await? {
            let stale = existing
                .heartbeat_at
                .is_none_or(|hb| chrono::Utc::now().timestamp() - hb > STUCK_THRESHOLD_SECS);
            if !stale {
                return Err(Error::analysis_in_flight(repository_id, commit_sha));
            }
            self.state.force_fail(&existing.id, "heartbeat_stale").await?;
        }

        let id = mcb_domain::value_objects::ids::AnalysisId::new().into_string();
        let mut analysis = Analysis::new(id.clone(), repository_id.clone(), commit_sha.clone(), trigger_type);
        analysis.branch = branch;
        // Static has no pre-`Pending` state to transition from: it's already
        // `Pending` the moment the row exists, so its dispatch timestamp is
        // set here rather than through a no-op State Service transition.
        analysis.static_started_at = Some(chrono::Utc::now().timestamp());
        self.analyses.create(&analysis).await?;

        self.state
            .transition_embeddings(&id, mcb_domain::entities::analysis::EmbeddingsStatus::Pending, None, None)
            .await?;
        self.state
            .transition_ai_scan(&id, mcb_domain::entities::analysis::AiScanStatus::Pending, None, None)
            .await?;

        self.tasks.spawn((jobs.static_job)(id.clone(), repository_id.clone(), commit_sha.clone()))?;
        self.tasks.spawn((jobs.embeddings_job)(id.clone(), repository_id.clone(), commit_sha.clone()))?;
        self.tasks.spawn((jobs.ai_scan_job)(id.clone(), repository_id, commit_sha))?;

        Ok(id)
    }

    async fn resolve_head(&self, repo: &GitRepository, branch: Option<&str>) -> Result<String> {
        let branches = self.vcs.list_branches(repo).await?;
        let target = branch.unwrap_or(repo.default_branch.as_str());
        branches
            .into_iter()
            .find(|b| b.name == target)
            .map(|b| b.head_commit)
            .ok_or_else(|| Error::not_found(format!("branch {target} in repository {}", repo.id)))
    }
}
