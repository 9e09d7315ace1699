//! Stuck-Analysis Detector: periodically fails analyses whose heartbeat has
//! gone stale (§4.8).
//!
//! A worker process can die mid-track without ever reaching a terminal
//! status; nothing else notices until something checks `heartbeat_at`
//! against a staleness cutoff. This is that something. It delegates the
//! actual state change to [`super::analysis_state_service::AnalysisStateService::force_fail`],
//! the one transition path allowed to move a track out of `pending` without
//! going through a worker report.

use std::sync::Arc;

use mcb_domain::error::Result;
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::repositories::{AnalysisQuery, AnalysisRepository};
use tracing::{info, warn};

use super::analysis_state_service::AnalysisStateService;
use crate::constants::STUCK_THRESHOLD_SECS;

/// Reason recorded on every track force-failed by a sweep.
pub const STUCK_FAILURE_REASON: &str = "heartbeat_stale";

/// Periodically sweeps in-flight analyses and force-fails the stale ones.
pub struct AnalysisStuckDetector<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    analyses: Arc<R>,
    state: Arc<AnalysisStateService<R, E>>,
}

impl<R, E> AnalysisStuckDetector<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    /// Build a new detector over the given repository and state service.
    #[must_use]
    pub fn new(analyses: Arc<R>, state: Arc<AnalysisStateService<R, E>>) -> Self {
        Self { analyses, state }
    }

    /// Run one sweep: find every in-flight analysis whose heartbeat is older
    /// than [`STUCK_THRESHOLD_SECS`] and force-fail it. Returns the ids of
    /// the analyses that were force-failed.
    ///
    /// # Errors
    /// Propagates repository or event-bus failures; a failure partway
    /// through leaves earlier force-fails in place (each is its own
    /// transaction) and simply stops short of the remaining candidates.
    pub async fn sweep(&self, now: i64) -> Result<Vec<String>> {
        let cutoff = now - STUCK_THRESHOLD_SECS;
        let query = AnalysisQuery {
            repository_id: None,
            heartbeat_before: Some(cutoff),
            in_flight_only: true,
            limit: 0,
            offset: 0,
        };
        let candidates = self.analyses.list(&query).await?;

        let mut failed = Vec::with_capacity(candidates.len());
        for analysis in candidates {
            // A freshly-created analysis never got a heartbeat yet; only
            // force-fail those that had one and it's past the cutoff, or
            // that have been around longer than the threshold with none at
            // all (a worker that never started).
            let is_stale = match analysis.heartbeat_at {
                Some(hb) => hb < cutoff,
                None => analysis.created_at < cutoff,
            };
            if !is_stale {
                continue;
            }
            match self.state.force_fail(&analysis.id, STUCK_FAILURE_REASON).await {
                Ok(_) => {
                    warn!(analysis_id = %analysis.id, "force-failed stale analysis");
                    failed.push(analysis.id);
                }
                Err(e) => {
                    warn!(analysis_id = %analysis.id, error = %e, "failed to force-fail stale analysis");
                }
            }
        }

        info!(failed = failed.len(), "stuck-analysis sweep complete");
        Ok(failed)
    }
}
