//! Analysis State Service: the single authority for mutating an
//! [`Analysis`] row's status fields.
//!
//! Every worker (embeddings, AI scan, the cluster analyzer, the static
//! track) and every periodic task (stuck detector, GC) that needs to move
//! an analysis forward goes through here rather than writing to the
//! repository directly. Centralizing it is what lets §8's invariants hold
//! globally: legal transitions, progress bounds, and the
//! `embeddings_completed => semantic_cache_pending` edge are each enforced
//! in exactly one place.
//!
//! # Architecture
//! Mirrors [`super::indexing_service::IndexingService`]'s shape: a thin
//! coordinator over a repository port and an event bus port, with no
//! in-process state of its own (per the specification's design note that
//! the Persistence Store, not an in-memory cache, is the single source of
//! truth for analysis state).

use std::sync::Arc;

use chrono::Utc;
use mcb_domain::entities::analysis::{
    Analysis, AiScanStatus, AnalysisTrack, EmbeddingsStatus, SemanticCacheStatus, StaticStatus,
};
use mcb_domain::error::{Error, Result};
use mcb_domain::events::DomainEvent;
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::repositories::AnalysisRepository;

/// Minimum interval between persisted heartbeat writes for the same
/// analysis. Back-to-back heartbeat calls within this window are no-ops,
/// protecting the store from a worker reporting liveness between every
/// suspend point.
pub const HEARTBEAT_THROTTLE_SECS: i64 = 5;

/// How an analysis's three independent tracks, plus the chained
/// semantic-cache track, roll up into one headline stage. Priority order
/// mirrors §4.1: an actively-running track always wins, then completion,
/// then failure, then pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStage {
    /// Nothing has started yet.
    Pending,
    /// At least one track is actively executing.
    Running,
    /// Every requested track finished (successfully or not).
    Completed,
    /// No track is running, but at least one ended in failure.
    Failed,
}

impl OverallStage {
    /// Canonical lowercase label used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// The derived, read-only aggregate view of an analysis, as served by the
/// `full-status` endpoint (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStatus {
    /// Rolled-up headline stage.
    pub overall_stage: OverallStage,
    /// Mean progress across every track that has left its not-requested
    /// state (`none`/`pending` for embeddings/semantic-cache/ai-scan; the
    /// static track always counts).
    pub overall_progress: u8,
    /// Whether every requested track has reached a terminal status.
    pub is_complete: bool,
}

/// Compute the read-only derived status for an analysis. Pure function so
/// it can be unit tested without a repository.
#[must_use]
pub fn derive_status(analysis: &Analysis) -> DerivedStatus {
    let running = analysis.static_status == StaticStatus::Running
        || analysis.embeddings_status == EmbeddingsStatus::Running
        || matches!(
            analysis.semantic_cache_status,
            SemanticCacheStatus::Computing | SemanticCacheStatus::GeneratingInsights
        )
        || analysis.ai_scan_status == AiScanStatus::Running;

    let is_complete = analysis.is_complete();

    let overall_stage = if running {
        OverallStage::Running
    } else if is_complete && !analysis.has_failure() {
        OverallStage::Completed
    } else if analysis.has_failure() {
        OverallStage::Failed
    } else {
        OverallStage::Pending
    };

    DerivedStatus {
        overall_stage,
        overall_progress: analysis.overall_progress(),
        is_complete,
    }
}

/// Single authority for mutating [`Analysis`] status fields through
/// validated transitions.
pub struct AnalysisStateService<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    analyses: Arc<R>,
    events: Arc<E>,
}

impl<R, E> AnalysisStateService<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    /// Create a new state service over the given repository and event bus.
    #[must_use]
    pub fn new(analyses: Arc<R>, events: Arc<E>) -> Self {
        Self { analyses, events }
    }

    /// Transition the static-analysis track.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStateTransition`] if `new_status` is not
    /// reachable from the track's current status, or
    /// [`Error::InvalidProgressValue`] if `progress` is out of `0..=100`.
    pub async fn transition_static(
        &self,
        analysis_id: &str,
        new_status: StaticStatus,
        progress: Option<u8>,
        error: Option<String>,
    ) -> Result<Analysis> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let current = analysis.static_status;

        if current == new_status {
            return Ok(analysis);
        }
        if !current.can_transition_to(new_status) {
            return Err(Error::invalid_state_transition(
                AnalysisTrack::Static.as_str().to_owned(),
                current.to_string(),
                new_status.to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        if analysis.static_started_at.is_none() {
            analysis.static_started_at = Some(now);
        }
        let terminal = matches!(new_status, StaticStatus::Completed | StaticStatus::Failed);
        if terminal {
            analysis.static_completed_at = Some(now);
            analysis.static_progress = 100;
        } else if let Some(p) = progress {
            analysis.static_progress = Self::clamp_progress(AnalysisTrack::Static, p)?;
        }
        analysis.static_error = if new_status == StaticStatus::Failed { error } else { None };
        analysis.static_status = new_status;
        analysis.updated_at = now;

        self.analyses.update(&analysis).await?;
        self.emit_transition(analysis_id, AnalysisTrack::Static, current.to_string(), new_status.to_string())
            .await?;
        Ok(analysis)
    }

    /// Transition the embeddings track. On a transition into
    /// [`EmbeddingsStatus::Completed`], atomically advances
    /// `semantic_cache_status` from `none` to `pending` as part of the same
    /// update, per §4.1/§9: this edge must not be observable as lost on a
    /// worker crash between the two writes, so it lives inside this one
    /// transaction rather than as a follow-up call from the Embeddings
    /// Worker.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStateTransition`] or
    /// [`Error::InvalidProgressValue`], as in [`Self::transition_static`].
    pub async fn transition_embeddings(
        &self,
        analysis_id: &str,
        new_status: EmbeddingsStatus,
        progress: Option<u8>,
        error: Option<String>,
    ) -> Result<Analysis> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let current = analysis.embeddings_status;

        if current == new_status {
            return Ok(analysis);
        }
        if !current.can_transition_to(new_status) {
            return Err(Error::invalid_state_transition(
                AnalysisTrack::Embeddings.as_str().to_owned(),
                current.to_string(),
                new_status.to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        if analysis.embeddings_started_at.is_none() && new_status != EmbeddingsStatus::None {
            analysis.embeddings_started_at = Some(now);
        }
        let terminal = matches!(new_status, EmbeddingsStatus::Completed | EmbeddingsStatus::Failed);
        if terminal {
            analysis.embeddings_completed_at = Some(now);
            analysis.embeddings_progress = 100;
        } else if let Some(p) = progress {
            analysis.embeddings_progress = Self::clamp_progress(AnalysisTrack::Embeddings, p)?;
        }
        analysis.embeddings_error = if new_status == EmbeddingsStatus::Failed { error } else { None };
        analysis.embeddings_status = new_status;
        analysis.updated_at = now;

        let mut semantic_cache_armed = false;
        if new_status == EmbeddingsStatus::Completed
            && analysis.semantic_cache_status == SemanticCacheStatus::None
        {
            analysis.semantic_cache_status = SemanticCacheStatus::Pending;
            semantic_cache_armed = true;
        }

        self.analyses.update(&analysis).await?;
        self.emit_transition(
            analysis_id,
            AnalysisTrack::Embeddings,
            current.to_string(),
            new_status.to_string(),
        )
        .await?;
        if semantic_cache_armed {
            self.emit_transition(
                analysis_id,
                AnalysisTrack::SemanticCache,
                SemanticCacheStatus::None.to_string(),
                SemanticCacheStatus::Pending.to_string(),
            )
            .await?;
        }
        Ok(analysis)
    }

    /// Transition the semantic-cache track. Rejected with
    /// [`Error::InvalidStateTransition`] if attempted while embeddings
    /// hasn't completed (the track's own `none -> pending` edge already
    /// encodes this for the common case, but a caller explicitly forcing a
    /// later state is still caught here).
    ///
    /// # Errors
    /// Returns [`Error::InvalidStateTransition`] or
    /// [`Error::InvalidProgressValue`].
    pub async fn transition_semantic_cache(
        &self,
        analysis_id: &str,
        new_status: SemanticCacheStatus,
        progress: Option<u8>,
        error: Option<String>,
    ) -> Result<Analysis> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let current = analysis.semantic_cache_status;

        if current == new_status {
            return Ok(analysis);
        }
        if new_status != SemanticCacheStatus::None
            && !analysis.semantic_cache_eligible()
            && current == SemanticCacheStatus::None
        {
            return Err(Error::invalid_state_transition(
                AnalysisTrack::SemanticCache.as_str().to_owned(),
                current.to_string(),
                new_status.to_string(),
            ));
        }
        if !current.can_transition_to(new_status) {
            return Err(Error::invalid_state_transition(
                AnalysisTrack::SemanticCache.as_str().to_owned(),
                current.to_string(),
                new_status.to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        if analysis.semantic_cache_started_at.is_none() && new_status != SemanticCacheStatus::None {
            analysis.semantic_cache_started_at = Some(now);
        }
        let terminal = matches!(
            new_status,
            SemanticCacheStatus::Completed | SemanticCacheStatus::Failed
        );
        if terminal {
            analysis.semantic_cache_completed_at = Some(now);
            analysis.semantic_cache_progress = 100;
        } else if let Some(p) = progress {
            analysis.semantic_cache_progress = Self::clamp_progress(AnalysisTrack::SemanticCache, p)?;
        }
        analysis.semantic_cache_error = if new_status == SemanticCacheStatus::Failed { error } else { None };
        analysis.semantic_cache_status = new_status;
        analysis.updated_at = now;

        self.analyses.update(&analysis).await?;
        self.emit_transition(
            analysis_id,
            AnalysisTrack::SemanticCache,
            current.to_string(),
            new_status.to_string(),
        )
        .await?;
        Ok(analysis)
    }

    /// Transition the AI-scan track.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStateTransition`] or
    /// [`Error::InvalidProgressValue`].
    pub async fn transition_ai_scan(
        &self,
        analysis_id: &str,
        new_status: AiScanStatus,
        progress: Option<u8>,
        error: Option<String>,
    ) -> Result<Analysis> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let current = analysis.ai_scan_status;

        if current == new_status {
            return Ok(analysis);
        }
        if !current.can_transition_to(new_status) {
            return Err(Error::invalid_state_transition(
                AnalysisTrack::AiScan.as_str().to_owned(),
                current.to_string(),
                new_status.to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        if analysis.ai_scan_started_at.is_none() && new_status != AiScanStatus::None {
            analysis.ai_scan_started_at = Some(now);
        }
        let terminal = matches!(new_status, AiScanStatus::Completed | AiScanStatus::Failed);
        if terminal {
            analysis.ai_scan_completed_at = Some(now);
            analysis.ai_scan_progress = 100;
        } else if let Some(p) = progress {
            analysis.ai_scan_progress = Self::clamp_progress(AnalysisTrack::AiScan, p)?;
        }
        analysis.ai_scan_error = if new_status == AiScanStatus::Failed { error } else { None };
        analysis.ai_scan_status = new_status;
        analysis.updated_at = now;

        self.analyses.update(&analysis).await?;
        self.emit_transition(analysis_id, AnalysisTrack::AiScan, current.to_string(), new_status.to_string())
            .await?;
        Ok(analysis)
    }

    /// Force every non-terminal track to `Failed` with `reason`, bypassing
    /// each track's normal transition table.
    ///
    /// This is the one deliberate escape hatch in the state machine (§4.8):
    /// the stuck-analysis detector and the dispatcher's stale-lock override
    /// both need to fail an analysis whose worker vanished mid-`Pending`,
    /// and `Pending -> Failed` isn't a legal worker-reported transition for
    /// any track. Ordinary callers must keep going through
    /// [`Self::transition_static`] and friends.
    ///
    /// # Errors
    /// Propagates repository/event-bus failures. Never returns
    /// [`Error::InvalidStateTransition`].
    pub async fn force_fail(&self, analysis_id: &str, reason: &str) -> Result<Analysis> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let now = Utc::now().timestamp();

        if !analysis.static_status.is_terminal() {
            let from = analysis.static_status.to_string();
            analysis.static_status = StaticStatus::Failed;
            analysis.static_error = Some(reason.to_owned());
            analysis.static_completed_at = Some(now);
            analysis.static_progress = 100;
            self.emit_transition(analysis_id, AnalysisTrack::Static, from, StaticStatus::Failed.to_string())
                .await?;
        }
        if !analysis.embeddings_status.is_terminal() {
            let from = analysis.embeddings_status.to_string();
            analysis.embeddings_status = EmbeddingsStatus::Failed;
            analysis.embeddings_error = Some(reason.to_owned());
            analysis.embeddings_completed_at = Some(now);
            analysis.embeddings_progress = 100;
            self.emit_transition(
                analysis_id,
                AnalysisTrack::Embeddings,
                from,
                EmbeddingsStatus::Failed.to_string(),
            )
            .await?;
        }
        if !analysis.semantic_cache_status.is_terminal() {
            let from = analysis.semantic_cache_status.to_string();
            analysis.semantic_cache_status = SemanticCacheStatus::Failed;
            analysis.semantic_cache_error = Some(reason.to_owned());
            analysis.semantic_cache_completed_at = Some(now);
            analysis.semantic_cache_progress = 100;
            self.emit_transition(
                analysis_id,
                AnalysisTrack::SemanticCache,
                from,
                SemanticCacheStatus::Failed.to_string(),
            )
            .await?;
        }
        if !analysis.ai_scan_status.is_terminal() {
            let from = analysis.ai_scan_status.to_string();
            analysis.ai_scan_status = AiScanStatus::Failed;
            analysis.ai_scan_error = Some(reason.to_owned());
            analysis.ai_scan_completed_at = Some(now);
            analysis.ai_scan_progress = 100;
            self.emit_transition(analysis_id, AnalysisTrack::AiScan, from, AiScanStatus::Failed.to_string())
                .await?;
        }

        analysis.updated_at = now;
        self.analyses.update(&analysis).await?;
        Ok(analysis)
    }

    /// Record worker liveness for `analysis_id`, throttled to at most one
    /// write per [`HEARTBEAT_THROTTLE_SECS`]. Independent of which track is
    /// currently running.
    ///
    /// # Errors
    /// Propagates repository/event-bus failures.
    pub async fn heartbeat(&self, analysis_id: &str) -> Result<()> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        let now = Utc::now().timestamp();
        if let Some(last) = analysis.heartbeat_at {
            if now - last < HEARTBEAT_THROTTLE_SECS {
                return Ok(());
            }
        }
        analysis.heartbeat_at = Some(now);
        analysis.updated_at = now;
        self.analyses.update(&analysis).await?;
        self.events
            .publish_event(DomainEvent::AnalysisHeartbeat {
                analysis_id: analysis_id.to_owned(),
                at: now,
            })
            .await
    }

    /// Fetch an analysis and compute its derived aggregate status, as
    /// served by the `full-status` endpoint.
    ///
    /// # Errors
    /// Propagates [`Error::AnalysisNotFound`] (via the repository) if the
    /// analysis doesn't exist.
    pub async fn full_status(&self, analysis_id: &str) -> Result<(Analysis, DerivedStatus)> {
        let analysis = self.analyses.get_by_id(analysis_id).await?;
        let derived = derive_status(&analysis);
        Ok((analysis, derived))
    }

    fn clamp_progress(track: AnalysisTrack, value: u8) -> Result<u8> {
        if value > 100 {
            return Err(Error::invalid_progress_value(
                track.as_str().to_owned(),
                i64::from(value),
                "progress must be in 0..=100".to_owned(),
            ));
        }
        Ok(value)
    }

    async fn emit_transition(
        &self,
        analysis_id: &str,
        track: AnalysisTrack,
        from: String,
        to: String,
    ) -> Result<()> {
        self.events
            .publish_event(DomainEvent::AnalysisTrackTransitioned {
                analysis_id: analysis_id.to_owned(),
                track: track.as_str().to_owned(),
                from,
                to,
            })
            .await
    }
}
