//! Axum routes for the Analysis Execution Core HTTP API (§6).
//!
//! Grounded in the teacher's `axum_harness.rs`/`build_router` test-fixture
//! shape (a plain `Router<Arc<AppState>>` built from one function, dispatched
//! in tests via `tower::ServiceExt::oneshot`), generalized from the MCP tool
//! surface to these seven analysis-scoped routes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream::{Stream, StreamExt};
use mcb_application::use_cases::analysis_dispatcher::PipelineJobs;
use mcb_application::use_cases::analysis_state_service::DerivedStatus;
use mcb_domain::entities::analysis::{Analysis, SemanticCacheStatus, TriggerType};
use mcb_domain::entities::analysis_findings::{AnalysisIssue, DeadCodeFinding, FileChurnFinding, SemanticAiInsight};
use mcb_domain::entities::git::GitRepository;
use mcb_domain::events::DomainEvent;
use mcb_domain::ports::repositories::{
    AnalysisRepository, DeadCodeFindingRepository, FileChurnFindingRepository, IssueRepository,
    SemanticAiInsightRepository,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error_mapping::ApiError;
use crate::state::AnalysisServerState;

/// Build the full Axum router over the given composition root.
#[must_use]
pub fn build_router(state: Arc<AnalysisServerState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyses", post(create_analysis))
        .route("/analyses/{id}", get(get_analysis))
        .route("/analyses/{id}/full-status", get(get_full_status))
        .route("/analyses/{id}/events", get(stream_events))
        .route("/analyses/{id}/issues", get(get_issues))
        .route("/analyses/{id}/architecture", get(get_architecture))
        .route("/analyses/{id}/ai-scan", get(get_ai_scan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct CreateAnalysisRequest {
    repository_id: String,
    commit_sha: Option<String>,
    branch: Option<String>,
    #[serde(default)]
    trigger_type: TriggerType,
}

#[derive(Debug, Serialize)]
struct CreateAnalysisResponse {
    id: String,
    status: &'static str,
}

/// `POST /analyses` — dispatch a new analysis run.
///
/// `repository_id` doubles as the local path (or clone-able URL) the Git
/// VCS provider resolves against, matching the convention every track
/// worker already uses when it calls `VcsProvider::clone_at_commit`.
async fn create_analysis(
    State(state): State<Arc<AnalysisServerState>>,
    Json(req): Json<CreateAnalysisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.rate_limiter.check("analyses.create")?;
    let repo = resolve_repository(&state, &req.repository_id).await?;

    let jobs = build_pipeline_jobs(&state);
    let id = state
        .dispatcher
        .trigger(&repo, req.commit_sha, req.branch, req.trigger_type, jobs)
        .await?;

    Ok(Json(CreateAnalysisResponse { id, status: "pending" }))
}

async fn resolve_repository(state: &AnalysisServerState, repository_id: &str) -> Result<GitRepository, ApiError> {
    let path = PathBuf::from(repository_id);
    Ok(state.vcs.open_repository(&path).await?)
}

/// Wires the dispatcher's three `TrackJob` closures to the concrete workers
/// this composition root built. The embeddings closure chains into the
/// cluster analyzer itself: `AnalysisStateService::transition_embeddings`
/// arms `semantic_cache_status = Pending` atomically when the embeddings
/// track completes, but nothing runs the semantic-cache track unless a
/// caller checks for that and invokes it, which is this closure's job.
fn build_pipeline_jobs(state: &Arc<AnalysisServerState>) -> PipelineJobs {
    let static_worker = Arc::clone(&state.static_worker);
    let embeddings_worker = Arc::clone(&state.embeddings_worker);
    let cluster_analyzer = Arc::clone(&state.cluster_analyzer);
    let analyses = Arc::clone(&state.analyses);
    let ai_scan_worker = Arc::clone(&state.ai_scan_worker);

    PipelineJobs {
        static_job: Box::new(move |analysis_id, repository_id, commit_sha| {
            let worker = Arc::clone(&static_worker);
            Box::pin(async move {
                if let Err(e) = worker.run(&analysis_id, &repository_id, &commit_sha).await {
                    tracing::warn!(analysis_id, error = %e, "static track failed");
                }
            })
        }),
        embeddings_job: Box::new(move |analysis_id, repository_id, commit_sha| {
            let embeddings_worker = Arc::clone(&embeddings_worker);
            let cluster_analyzer = Arc::clone(&cluster_analyzer);
            let analyses = Arc::clone(&analyses);
            Box::pin(async move {
                if let Err(e) = embeddings_worker.run(&analysis_id, &repository_id, &commit_sha).await {
                    tracing::warn!(analysis_id, error = %e, "embeddings track failed");
                    return;
                }
                let eligible = analyses
                    .get_by_id(&analysis_id)
                    .await
                    .map(|a| a.semantic_cache_status == SemanticCacheStatus::Pending)
                    .unwrap_or(false);
                if eligible {
                    if let Err(e) = cluster_analyzer.run(&analysis_id, &repository_id, &commit_sha).await {
                        tracing::warn!(analysis_id, error = %e, "semantic-cache track failed");
                    }
                }
            })
        }),
        ai_scan_job: Box::new(move |analysis_id, repository_id, commit_sha| {
            let worker = Arc::clone(&ai_scan_worker);
            Box::pin(async move {
                if let Err(e) = worker.run(&analysis_id, &repository_id, &commit_sha).await {
                    tracing::warn!(analysis_id, error = %e, "ai-scan track failed");
                }
            })
        }),
    }
}

/// `GET /analyses/:id` — full row.
async fn get_analysis(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Json<Analysis>, ApiError> {
    Ok(Json(state.analyses.get_by_id(&id).await?))
}

#[derive(Debug, Serialize)]
struct FullStatusResponse {
    #[serde(flatten)]
    analysis: Analysis,
    overall_stage: &'static str,
    overall_progress: u8,
    is_complete: bool,
}

impl FullStatusResponse {
    fn new(analysis: Analysis, derived: DerivedStatus) -> Self {
        Self {
            analysis,
            overall_stage: derived.overall_stage.as_str(),
            overall_progress: derived.overall_progress,
            is_complete: derived.is_complete,
        }
    }
}

/// `GET /analyses/:id/full-status` — authoritative per-track snapshot.
async fn get_full_status(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Json<FullStatusResponse>, ApiError> {
    let (analysis, derived) = state.state_service.full_status(&id).await?;
    Ok(Json(FullStatusResponse::new(analysis, derived)))
}

#[derive(Debug, Serialize)]
struct TrackEvent {
    analysis_id: String,
    track: String,
    status: String,
    progress: Option<u8>,
    at: i64,
}

/// `GET /analyses/:id/events` — SSE stream of this analysis's track
/// transitions and progress updates, filtered out of the event bus's
/// global stream (the bus carries every domain event, not just this one
/// analysis's).
async fn stream_events(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, std::convert::Infallible>>>, ApiError> {
    let raw = state.event_bus.subscribe_events().await?;
    let stream = raw.filter_map(move |event| {
        let id = id.clone();
        async move {
            let track_event = to_track_event(&id, event)?;
            let payload = serde_json::to_string(&track_event).ok()?;
            Some(Ok(Event::default().data(payload)))
        }
    });
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}

fn to_track_event(analysis_id: &str, event: DomainEvent) -> Option<TrackEvent> {
    match event {
        DomainEvent::AnalysisTrackTransitioned { analysis_id: event_id, track, to, .. } if event_id == analysis_id => {
            Some(TrackEvent {
                analysis_id: event_id,
                track,
                status: to,
                progress: None,
                at: chrono::Utc::now().timestamp(),
            })
        }
        DomainEvent::AnalysisProgress { analysis_id: event_id, track, progress } if event_id == analysis_id => {
            Some(TrackEvent {
                analysis_id: event_id,
                track,
                status: "running".to_owned(),
                progress: Some(progress),
                at: chrono::Utc::now().timestamp(),
            })
        }
        DomainEvent::AnalysisHeartbeat { analysis_id: event_id, at } if event_id == analysis_id => {
            Some(TrackEvent { analysis_id: event_id, track: "heartbeat".to_owned(), status: "alive".to_owned(), progress: None, at })
        }
        DomainEvent::AnalysisTriggered { analysis_id: event_id, .. } if event_id == analysis_id => {
            Some(TrackEvent { analysis_id: event_id, track: "dispatcher".to_owned(), status: "triggered".to_owned(), progress: None, at: chrono::Utc::now().timestamp() })
        }
        _ => None,
    }
}

/// `GET /analyses/:id/issues` — static-track findings.
async fn get_issues(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AnalysisIssue>>, ApiError> {
    Ok(Json(state.issues.list_by_analysis(&id).await?))
}

#[derive(Debug, Serialize)]
struct ArchitectureResponse {
    dead_code: Vec<DeadCodeFinding>,
    file_churn: Vec<FileChurnFinding>,
}

/// `GET /analyses/:id/architecture` — semantic-cache track findings (dead
/// code + hot spots), the two structured outputs of the cluster analyzer
/// that aren't narrative insights.
async fn get_architecture(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Json<ArchitectureResponse>, ApiError> {
    let dead_code = state.dead_code_findings.list_by_analysis(&id).await?;
    let file_churn = state.file_churn_findings.list_by_analysis(&id).await?;
    Ok(Json(ArchitectureResponse { dead_code, file_churn }))
}

/// `GET /analyses/:id/ai-scan` — AI-scan track insights.
async fn get_ai_scan(
    State(state): State<Arc<AnalysisServerState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SemanticAiInsight>>, ApiError> {
    Ok(Json(state.semantic_ai_insights.list_by_analysis(&id).await?))
}
