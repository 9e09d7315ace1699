//! Self-contained JSON documents stored in [`crate::entities::analysis::Analysis::semantic_cache`]
//! and [`crate::entities::analysis::Analysis::ai_scan_cache`].
//!
//! Both tracks persist their richest output as an opaque blob on the
//! analysis row rather than a satellite table, so a later re-run can diff
//! against the previous one without a join. Versioned and closed to unknown
//! fields for the same reason as [`super::vector_payload::VectorIndexPayload`]:
//! a renamed/dropped field here is a version-skew bug, not a silently
//! missing column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current schema version for [`SemanticCachePayload`].
pub const SEMANTIC_CACHE_SCHEMA_VERSION: u16 = 1;
/// Current schema version for [`AiScanCachePayload`].
pub const AI_SCAN_CACHE_SCHEMA_VERSION: u16 = 1;

/// One architecture cluster discovered by the Cluster Analyzer, summarizing
/// the chunks assigned `cluster_id` equal to [`Self::cluster_id`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClusterSummary {
    /// Cluster identifier, matching the `cluster_id` written onto member
    /// vector-index payloads. `-1` is never summarized here; outliers are
    /// tracked separately.
    pub cluster_id: String,
    /// Repository-relative file paths with at least one chunk in this
    /// cluster.
    pub file_paths: Vec<String>,
    /// Number of chunks assigned to this cluster.
    pub size: usize,
    /// Directory depth every member shares, if any (used as a cheap label
    /// before the LLM narrative is generated).
    pub common_prefix: Option<String>,
}

/// Architectural summary and outlier/dead-code/hot-spot counts produced by
/// one semantic-cache track run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SemanticCachePayload {
    /// Schema version this payload was written with.
    pub schema_version: u16,
    /// Commit the clustering ran against.
    pub commit_sha: String,
    /// Unix timestamp the clustering pass completed at.
    pub generated_at: i64,
    /// Clusters discovered, largest first.
    pub clusters: Vec<ClusterSummary>,
    /// File paths of chunks that never reached cluster density
    /// (`cluster_id = -1`) and were not suppressed by architectural
    /// context.
    pub outlier_file_paths: Vec<String>,
    /// Number of dead-code findings persisted for this run.
    pub dead_code_count: usize,
    /// Number of file-churn hot-spot findings persisted for this run.
    pub hot_spot_count: usize,
}

/// A single tool invocation performed by the investigator, appended to a
/// [`MergedIssueResult`]'s trace regardless of whether the call succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToolCallTrace {
    /// Name of the tool invoked (`read_file`, `search`, `cli_run`).
    pub tool: String,
    /// Arguments the model supplied, verbatim.
    pub input: serde_json::Value,
    /// Text returned to the model as the tool result.
    pub output: String,
    /// Wallclock duration of the call, in milliseconds.
    pub duration_ms: u64,
}

/// Investigation outcome attached to a merged issue that was investigated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InvestigationResult {
    /// Whether the investigator confirmed, refuted, or couldn't resolve the
    /// issue within its iteration budget.
    pub verdict: String,
    /// The agent's closing explanation.
    pub explanation: String,
    /// Every tool call the agent made, in order.
    pub trace: Vec<ToolCallTrace>,
}

/// One issue surviving the merge pass, with its supporting models and
/// optional investigation result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MergedIssueResult {
    /// Dimension/category the issue was raised under (e.g. `"security"`,
    /// `"performance"`, `"correctness"`, `"maintainability"`).
    pub dimension: String,
    /// Severity band.
    pub severity: String,
    /// Short human-readable title (from the highest-confidence candidate).
    pub title: String,
    /// Full description (from the highest-confidence candidate).
    pub description: String,
    /// Repository-relative file path, if the issue is file-scoped.
    pub file: Option<String>,
    /// 1-based start line, if known.
    pub line_start: Option<u32>,
    /// 1-based end line, if known.
    pub line_end: Option<u32>,
    /// Post-consensus-boost confidence, `0.0..=1.0`.
    pub confidence: f64,
    /// Model ids whose candidate issue merged into this one.
    pub supporting_models: Vec<String>,
    /// Investigation result, if this issue's severity qualified it and the
    /// investigator ran.
    pub investigation: Option<InvestigationResult>,
}

/// Self-contained AI Scan result document (`AIScanCacheResponse`): broad
/// scan plus merge plus optional investigation, keyed by commit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AiScanCachePayload {
    /// Schema version this payload was written with.
    pub schema_version: u16,
    /// Commit the scan ran against.
    pub commit_sha: String,
    /// Unix timestamp the scan completed at.
    pub generated_at: i64,
    /// Model ids that were consulted during the broad scan (including ones
    /// that timed out or returned malformed JSON and contributed nothing).
    pub models_consulted: Vec<String>,
    /// Total candidate issues collected across every model before merging.
    pub candidate_count: usize,
    /// Issues surviving the merge pass.
    pub issues: Vec<MergedIssueResult>,
}
