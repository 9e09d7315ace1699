//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#repository-ports)
//!
//! Repository ports for analysis runs and their satellite findings.

use async_trait::async_trait;

use crate::entities::analysis::Analysis;
use crate::entities::analysis_findings::{
    AnalysisIssue, DeadCodeFinding, FileChurnFinding, SemanticAiInsight,
};
use crate::error::Result;

/// Filter parameters for listing analyses.
#[derive(Debug, Clone, Default)]
pub struct AnalysisQuery {
    /// Restrict to a single repository, if set.
    pub repository_id: Option<String>,
    /// Restrict to analyses whose heartbeat is older than this cutoff
    /// (Unix epoch seconds), used by the stuck-analysis detector.
    pub heartbeat_before: Option<i64>,
    /// Restrict to in-flight analyses only (no track has reached a
    /// terminal status).
    pub in_flight_only: bool,
    /// Maximum number of rows to return.
    pub limit: u32,
    /// Number of rows to skip, for pagination.
    pub offset: u32,
}

/// Port for analysis run persistence.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Performs the create operation.
    async fn create(&self, analysis: &Analysis) -> Result<()>;
    /// Performs the get by id operation.
    async fn get_by_id(&self, id: &str) -> Result<Analysis>;
    /// Finds the most recent analysis for `(repository_id, commit_sha)`
    /// that hasn't finished every requested track, used to enforce
    /// one-in-flight-per-commit.
    async fn find_in_flight(&self, repository_id: &str, commit_sha: &str) -> Result<Option<Analysis>>;
    /// Performs the list operation against a filter.
    async fn list(&self, query: &AnalysisQuery) -> Result<Vec<Analysis>>;
    /// Performs the update operation. Callers pass the full row; concurrent
    /// track updates should be merged by the caller before calling this.
    async fn update(&self, analysis: &Analysis) -> Result<()>;
    /// Performs the delete operation (used by the GC worker for
    /// un-pinned, expired analyses).
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Port for static-analysis issue persistence.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Performs the bulk create operation for a batch of issues from one
    /// analysis run.
    async fn create_batch(&self, issues: &[AnalysisIssue]) -> Result<()>;
    /// Lists every issue for an analysis run.
    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<AnalysisIssue>>;
    /// Updates the triage status of a single issue.
    async fn update_status(&self, id: &str, status: crate::entities::analysis_findings::AnalysisIssueStatus) -> Result<()>;
}

/// Port for dead-code finding persistence.
#[async_trait]
pub trait DeadCodeFindingRepository: Send + Sync {
    /// Performs the bulk create operation for a batch of findings.
    async fn create_batch(&self, findings: &[DeadCodeFinding]) -> Result<()>;
    /// Lists every finding for an analysis run.
    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<DeadCodeFinding>>;
    /// Marks a finding as dismissed (false positive).
    async fn dismiss(&self, id: &str) -> Result<()>;
}

/// Port for file-churn finding persistence.
#[async_trait]
pub trait FileChurnFindingRepository: Send + Sync {
    /// Performs the bulk create operation for a batch of findings.
    async fn create_batch(&self, findings: &[FileChurnFinding]) -> Result<()>;
    /// Lists every finding for an analysis run, ordered by descending risk.
    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<FileChurnFinding>>;
}

/// Port for AI-authored semantic insight persistence.
#[async_trait]
pub trait SemanticAiInsightRepository: Send + Sync {
    /// Performs the bulk create operation for a batch of insights.
    async fn create_batch(&self, insights: &[SemanticAiInsight]) -> Result<()>;
    /// Lists every insight for an analysis run.
    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<SemanticAiInsight>>;
}
