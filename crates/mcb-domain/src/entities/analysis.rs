//! Analysis entity: one run of the Analysis Execution Core against a
//! `(repository, commit)` pair.
//!
//! An analysis advances through three independent tracks (`static`,
//! `embeddings`, `ai_scan`), plus a `semantic_cache` track chained after
//! `embeddings` completes. Each track owns its own status, progress,
//! timestamps and error; the entity exposes pure helpers for the allowed
//! transitions so the state machine logic can be unit tested without any
//! I/O. Orchestration (persistence, event emission, heartbeat throttling)
//! lives in the application layer, not here.

use chrono::Utc;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How an analysis run was kicked off.
crate::define_string_enum! {
    #[derive(Default)]
    pub enum TriggerType [strum = "snake_case", serde = "snake_case", schema] {
        /// Triggered by a scheduled/periodic job.
        Scheduled,
        /// Triggered by a VCS webhook (push, PR, etc.).
        Webhook,
        /// Triggered explicitly through the API.
        #[default]
        Manual,
    }
}

/// Status of the static-analysis track (metrics, issues, dead code, churn).
crate::define_string_enum! {
    #[derive(Default)]
    pub enum StaticStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Queued, not yet picked up by a worker.
        #[default]
        Pending,
        /// Currently executing.
        Running,
        /// Finished successfully.
        Completed,
        /// Finished with an unrecoverable error.
        Failed,
    }
}

impl StaticStatus {
    /// Whether this status has no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal transition from `self`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Failed)
                | (Self::Failed, Self::Pending)
        )
    }
}

/// Status of the embeddings track (chunk + embed + upsert to vector index).
crate::define_string_enum! {
    #[derive(Default)]
    pub enum EmbeddingsStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Not requested for this analysis.
        #[default]
        None,
        /// Queued, not yet picked up.
        Pending,
        /// Currently executing.
        Running,
        /// Finished successfully.
        Completed,
        /// Finished with an unrecoverable error.
        Failed,
    }
}

impl EmbeddingsStatus {
    /// Whether this status has no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::None | Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal transition from `self`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::None, Self::Pending)
                | (Self::Pending, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Failed)
                | (Self::Failed, Self::Pending)
        )
    }
}

/// Status of the semantic-cache track. Chained after `embeddings` reaches
/// [`EmbeddingsStatus::Completed`]; clustering and outlier scoring run
/// first, then AI-authored insights are generated from the resulting
/// clusters.
crate::define_string_enum! {
    #[derive(Default)]
    pub enum SemanticCacheStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Not requested / embeddings not complete yet.
        #[default]
        None,
        /// Queued, waiting for embeddings to finish.
        Pending,
        /// Clustering and outlier detection in progress.
        Computing,
        /// Clusters computed, generating AI insight narratives.
        GeneratingInsights,
        /// Finished successfully.
        Completed,
        /// Finished with an unrecoverable error.
        Failed,
    }
}

impl SemanticCacheStatus {
    /// Whether this status has no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::None | Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal transition from `self`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::None, Self::Pending)
                | (Self::Pending, Self::Computing)
                | (Self::Computing, Self::GeneratingInsights)
                | (Self::GeneratingInsights, Self::Completed)
                | (Self::Computing, Self::Failed)
                | (Self::GeneratingInsights, Self::Failed)
                | (Self::Failed, Self::Pending)
        )
    }
}

/// Status of the AI-scan track (broad scan, merge, targeted investigation).
crate::define_string_enum! {
    #[derive(Default)]
    pub enum AiScanStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Not requested for this analysis.
        #[default]
        None,
        /// Queued, not yet picked up.
        Pending,
        /// Currently executing.
        Running,
        /// Finished successfully.
        Completed,
        /// Finished with an unrecoverable error.
        Failed,
    }
}

impl AiScanStatus {
    /// Whether this status has no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::None | Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal transition from `self`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::None, Self::Pending)
                | (Self::Pending, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::Failed)
                | (Self::Failed, Self::Pending)
        )
    }
}

/// Coarse technical-debt banding derived from `vci_score`.
crate::define_string_enum! {
    pub enum TechDebtLevel [strum = "snake_case", serde = "snake_case", schema] {
        Low,
        Moderate,
        High,
        Critical,
    }
}

/// Letter grade derived from `vci_score`, computed on read rather than
/// persisted.
crate::define_string_enum! {
    pub enum Grade [strum = "UPPERCASE", serde = "UPPERCASE", schema] {
        A,
        B,
        C,
        D,
        F,
    }
}

/// The three independently-advancing tracks plus the chained semantic-cache
/// track, as a single enum for use in events and error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTrack {
    /// Static metrics, issues, dead code, file churn.
    Static,
    /// Chunking, embedding, vector index upsert.
    Embeddings,
    /// Clustering, outlier scoring, AI insight narratives.
    SemanticCache,
    /// Broad scan, merge, targeted investigation findings.
    AiScan,
}

impl AnalysisTrack {
    /// Canonical lowercase name used in DB columns and wire payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Embeddings => "embeddings",
            Self::SemanticCache => "semantic_cache",
            Self::AiScan => "ai_scan",
        }
    }
}

/// One run of the analysis pipeline against a repository at a specific
/// commit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    /// Unique identifier for this analysis run.
    pub id: String,
    /// Repository the analysis ran against. Plain string (not the
    /// `RepositoryId` UUID newtype) since analyses can target repositories
    /// that aren't registered as first-class `Repository` entities.
    pub repository_id: String,
    /// Commit SHA the analysis pinned to.
    pub commit_sha: String,
    /// Branch name the commit was observed on, if known.
    pub branch: Option<String>,
    /// What triggered this run.
    pub trigger_type: TriggerType,

    /// Static-analysis track status.
    pub static_status: StaticStatus,
    /// Static-analysis track progress, 0-100.
    pub static_progress: u8,
    /// When the static track started.
    pub static_started_at: Option<i64>,
    /// When the static track completed (success or failure).
    pub static_completed_at: Option<i64>,
    /// Error message if the static track failed.
    pub static_error: Option<String>,

    /// Embeddings track status.
    pub embeddings_status: EmbeddingsStatus,
    /// Embeddings track progress, 0-100.
    pub embeddings_progress: u8,
    /// When the embeddings track started.
    pub embeddings_started_at: Option<i64>,
    /// When the embeddings track completed (success or failure).
    pub embeddings_completed_at: Option<i64>,
    /// Error message if the embeddings track failed.
    pub embeddings_error: Option<String>,

    /// Semantic-cache track status (chained after embeddings).
    pub semantic_cache_status: SemanticCacheStatus,
    /// Semantic-cache track progress, 0-100.
    pub semantic_cache_progress: u8,
    /// When the semantic-cache track started.
    pub semantic_cache_started_at: Option<i64>,
    /// When the semantic-cache track completed (success or failure).
    pub semantic_cache_completed_at: Option<i64>,
    /// Error message if the semantic-cache track failed.
    pub semantic_cache_error: Option<String>,

    /// AI-scan track status.
    pub ai_scan_status: AiScanStatus,
    /// AI-scan track progress, 0-100.
    pub ai_scan_progress: u8,
    /// When the AI-scan track started.
    pub ai_scan_started_at: Option<i64>,
    /// When the AI-scan track completed (success or failure).
    pub ai_scan_completed_at: Option<i64>,
    /// Error message if the AI-scan track failed.
    pub ai_scan_error: Option<String>,

    /// Last time any worker reported liveness for this analysis, used by
    /// the stuck-analysis detector.
    pub heartbeat_at: Option<i64>,

    /// Composite Vitality/Code Index score, fixed-point with 2 decimal
    /// places.
    pub vci_score: Option<Decimal>,
    /// Coarse band derived from `vci_score`.
    pub tech_debt_level: Option<TechDebtLevel>,
    /// Raw static-analysis metrics payload (complexity, LOC, TDG, etc.).
    pub metrics: Option<Value>,
    /// Cluster/outlier summary produced by the semantic-cache track.
    pub semantic_cache: Option<Value>,
    /// Raw AI-scan cache payload (broad scan + merge + investigation
    /// results), kept so a re-run can diff against the previous scan.
    pub ai_scan_cache: Option<Value>,

    /// Pinned analyses are exempt from garbage collection.
    pub pinned: bool,

    /// When this analysis run was created.
    pub created_at: i64,
    /// When this analysis row was last updated.
    pub updated_at: i64,
}

impl Analysis {
    /// Start a new analysis for `repository_id` at `commit_sha`, with the
    /// static track already pending (every analysis always runs the static
    /// track; embeddings/semantic-cache/ai-scan are opted into separately).
    #[must_use]
    pub fn new(id: String, repository_id: String, commit_sha: String, trigger_type: TriggerType) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            repository_id,
            commit_sha,
            branch: None,
            trigger_type,
            static_status: StaticStatus::Pending,
            static_progress: 0,
            static_started_at: None,
            static_completed_at: None,
            static_error: None,
            embeddings_status: EmbeddingsStatus::None,
            embeddings_progress: 0,
            embeddings_started_at: None,
            embeddings_completed_at: None,
            embeddings_error: None,
            semantic_cache_status: SemanticCacheStatus::None,
            semantic_cache_progress: 0,
            semantic_cache_started_at: None,
            semantic_cache_completed_at: None,
            semantic_cache_error: None,
            ai_scan_status: AiScanStatus::None,
            ai_scan_progress: 0,
            ai_scan_started_at: None,
            ai_scan_completed_at: None,
            ai_scan_error: None,
            heartbeat_at: None,
            vci_score: None,
            tech_debt_level: None,
            metrics: None,
            semantic_cache: None,
            ai_scan_cache: None,
            pinned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Request the embeddings track (and transitively, it becomes eligible
    /// to start the semantic-cache track once it completes).
    pub fn request_embeddings(&mut self) {
        if self.embeddings_status == EmbeddingsStatus::None {
            self.embeddings_status = EmbeddingsStatus::Pending;
            self.updated_at = Utc::now().timestamp();
        }
    }

    /// Request the AI-scan track.
    pub fn request_ai_scan(&mut self) {
        if self.ai_scan_status == AiScanStatus::None {
            self.ai_scan_status = AiScanStatus::Pending;
            self.updated_at = Utc::now().timestamp();
        }
    }

    /// Whether the semantic-cache track is eligible to start (embeddings
    /// completed, and semantic-cache hasn't already progressed beyond
    /// `None`).
    #[must_use]
    pub fn semantic_cache_eligible(&self) -> bool {
        self.embeddings_status == EmbeddingsStatus::Completed
            && self.semantic_cache_status == SemanticCacheStatus::None
    }

    /// Whether every requested track has reached a terminal status.
    ///
    /// Semantic-cache is deliberately excluded: it's a track chained off
    /// embeddings rather than one of the three the dispatcher enqueues, and
    /// doesn't gate overall completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.static_status.is_terminal() && self.embeddings_status.is_terminal() && self.ai_scan_status.is_terminal()
    }

    /// Whether any track ended in failure.
    #[must_use]
    pub fn has_failure(&self) -> bool {
        self.static_status == StaticStatus::Failed
            || self.embeddings_status == EmbeddingsStatus::Failed
            || self.semantic_cache_status == SemanticCacheStatus::Failed
            || self.ai_scan_status == AiScanStatus::Failed
    }

    /// Average progress across the three dispatched tracks (static,
    /// embeddings, AI scan). Semantic-cache is excluded: like
    /// [`Self::is_complete`], it's chained off embeddings rather than one of
    /// the tracks the dispatcher enqueues, and tracks still at their
    /// `None`/not-requested state don't dilute the average.
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        let mut total: u32 = u32::from(self.static_progress);
        let mut count: u32 = 1;
        if self.embeddings_status != EmbeddingsStatus::None {
            total += u32::from(self.embeddings_progress);
            count += 1;
        }
        if self.ai_scan_status != AiScanStatus::None {
            total += u32::from(self.ai_scan_progress);
            count += 1;
        }
        u8::try_from(total / count).unwrap_or(100)
    }

    /// Letter grade derived from `vci_score`, `None` until the static track
    /// has computed one.
    #[must_use]
    pub fn grade(&self) -> Option<Grade> {
        let score = self.vci_score?;
        Some(if score >= Decimal::from(90) {
            Grade::A
        } else if score >= Decimal::from(80) {
            Grade::B
        } else if score >= Decimal::from(70) {
            Grade::C
        } else if score >= Decimal::from(60) {
            Grade::D
        } else {
            Grade::F
        })
    }
}

crate::impl_table_schema!(Analysis, "analyses",
    columns: [
        ("id", Text, pk),
        ("repository_id", Text),
        ("commit_sha", Text),
        ("branch", Text, nullable),
        ("trigger_type", Text),
        ("static_status", Text),
        ("static_progress", Integer),
        ("static_started_at", Integer, nullable),
        ("static_completed_at", Integer, nullable),
        ("static_error", Text, nullable),
        ("embeddings_status", Text),
        ("embeddings_progress", Integer),
        ("embeddings_started_at", Integer, nullable),
        ("embeddings_completed_at", Integer, nullable),
        ("embeddings_error", Text, nullable),
        ("semantic_cache_status", Text),
        ("semantic_cache_progress", Integer),
        ("semantic_cache_started_at", Integer, nullable),
        ("semantic_cache_completed_at", Integer, nullable),
        ("semantic_cache_error", Text, nullable),
        ("ai_scan_status", Text),
        ("ai_scan_progress", Integer),
        ("ai_scan_started_at", Integer, nullable),
        ("ai_scan_completed_at", Integer, nullable),
        ("ai_scan_error", Text, nullable),
        ("heartbeat_at", Integer, nullable),
        ("vci_score", Real, nullable),
        ("tech_debt_level", Text, nullable),
        ("metrics_json", Json, nullable),
        ("semantic_cache_json", Json, nullable),
        ("ai_scan_cache_json", Json, nullable),
        ("pinned", Boolean),
        ("created_at", Integer),
        ("updated_at", Integer),
    ],
    indexes: [
        "idx_analyses_repo_commit" => ["repository_id", "commit_sha"],
        "idx_analyses_static_status" => ["static_status"],
        "idx_analyses_heartbeat" => ["heartbeat_at"],
    ],
);
