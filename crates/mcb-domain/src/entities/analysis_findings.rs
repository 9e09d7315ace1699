//! Satellite findings produced by an analysis run: issues surfaced by the
//! static track, dead-code candidates, file-churn hot spots, and
//! AI-authored semantic insights.
//!
//! These are one-to-many children of [`super::analysis::Analysis`], kept as
//! separate tables rather than nested JSON so they can be queried, filtered
//! and paginated independently of the parent analysis row.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of an [`AnalysisIssue`].
crate::define_string_enum! {
    pub enum IssueSeverity [strum = "snake_case", serde = "snake_case", schema] {
        Info,
        Warning,
        Error,
        Critical,
    }
}

/// Lifecycle status of an [`AnalysisIssue`].
crate::define_string_enum! {
    #[derive(Default)]
    pub enum AnalysisIssueStatus [strum = "snake_case", serde = "snake_case", schema] {
        /// Surfaced by the current analysis, not yet triaged.
        #[default]
        Open,
        /// Reviewed and accepted as a real problem, tracked externally.
        Acknowledged,
        /// Fixed in a later commit; no longer present in the latest run.
        Resolved,
        /// Reviewed and judged not worth fixing.
        Dismissed,
    }
}

crate::define_entity_org_created! {
    /// A single static-analysis issue (complexity hotspot, lint violation,
    /// style/convention break) surfaced for one file/line in an analysis run.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct AnalysisIssue {
        /// Analysis run this issue belongs to.
        pub analysis_id: String,
        /// Repository-relative file path the issue was found in.
        pub file_path: String,
        /// 1-based line number, if applicable.
        pub line: Option<u32>,
        /// Machine-readable rule/check identifier (e.g. `"high-cyclomatic-complexity"`).
        pub rule: String,
        /// Human-readable description of the issue.
        pub message: String,
        /// Severity band.
        pub severity: IssueSeverity,
        /// Triage status.
        pub status: AnalysisIssueStatus,
    }
}

crate::impl_table_schema!(AnalysisIssue, "analysis_issues",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("analysis_id", Text),
        ("file_path", Text),
        ("line", Integer, nullable),
        ("rule", Text),
        ("message", Text),
        ("severity", Text),
        ("status", Text),
        ("created_at", Integer),
    ],
    indexes: [
        "idx_analysis_issues_analysis" => ["analysis_id"],
        "idx_analysis_issues_severity" => ["severity"],
    ],
    foreign_keys: [
        ("analysis_id", "analyses", "id"),
    ],
    unique_constraints: [],
);

crate::define_entity_org_created! {
    /// A function, method, or item the static track believes is unreachable
    /// or unused.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct DeadCodeFinding {
        /// Analysis run this finding belongs to.
        pub analysis_id: String,
        /// Repository-relative file path.
        pub file_path: String,
        /// 1-based line number where the item is defined.
        pub line: u32,
        /// Kind of item (`"function"`, `"struct"`, `"const"`, ...).
        pub item_type: String,
        /// Name of the item.
        pub name: String,
        /// Estimated blast radius of removing it (lines, callers, etc.),
        /// 0.0-1.0.
        pub impact_score: f64,
        /// Confidence the item really is dead: 1.0 when proven by a
        /// call-graph analyzer, lower when only heuristically inferred.
        pub confidence: f64,
        /// Whether a reviewer has dismissed this as a false positive.
        pub is_dismissed: bool,
    }
}

crate::impl_table_schema!(DeadCodeFinding, "dead_code_findings",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("analysis_id", Text),
        ("file_path", Text),
        ("line", Integer),
        ("item_type", Text),
        ("name", Text),
        ("impact_score", Real),
        ("confidence", Real),
        ("is_dismissed", Boolean),
        ("created_at", Integer),
    ],
    indexes: [
        "idx_dead_code_findings_analysis" => ["analysis_id"],
    ],
    foreign_keys: [
        ("analysis_id", "analyses", "id"),
    ],
    unique_constraints: [],
);

crate::define_entity_org_created! {
    /// A file flagged as a risk hot spot based on how often it changes and
    /// how well it's covered by tests.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct FileChurnFinding {
        /// Analysis run this finding belongs to.
        pub analysis_id: String,
        /// Repository-relative file path.
        pub file_path: String,
        /// Number of commits touching this file in the trailing 90 days.
        pub changes_90d: u32,
        /// Test coverage rate for this file, 0.0-1.0, if known.
        pub coverage_rate: Option<f64>,
        /// Number of distinct authors who touched this file in the window.
        pub unique_authors: u32,
        /// Human-readable risk factors that contributed to the score
        /// (e.g. `["high churn", "low coverage", "single author"]`).
        pub risk_factors: Vec<String>,
        /// Composite risk score, 0.0-1.0.
        pub risk_score: f64,
    }
}

crate::impl_table_schema!(FileChurnFinding, "file_churn_findings",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("analysis_id", Text),
        ("file_path", Text),
        ("changes_90d", Integer),
        ("coverage_rate", Real, nullable),
        ("unique_authors", Integer),
        ("risk_factors_json", Json),
        ("risk_score", Real),
        ("created_at", Integer),
    ],
    indexes: [
        "idx_file_churn_findings_analysis" => ["analysis_id"],
        "idx_file_churn_findings_risk" => ["risk_score"],
    ],
    foreign_keys: [
        ("analysis_id", "analyses", "id"),
    ],
    unique_constraints: [],
);

/// Kind of narrative an AI-scan insight conveys.
crate::define_string_enum! {
    pub enum InsightType [strum = "snake_case", serde = "snake_case", schema] {
        /// Describes an architectural cluster or module boundary.
        ClusterSummary,
        /// Flags a vector-space outlier (file that doesn't fit any cluster).
        Outlier,
        /// Calls out a cross-cutting concern (duplication, layering break).
        CrossCutting,
        /// General recommendation distilled from the broad scan + merge passes.
        Recommendation,
    }
}

/// How urgently an insight should be acted on.
crate::define_string_enum! {
    pub enum InsightPriority [strum = "snake_case", serde = "snake_case", schema] {
        Low,
        Medium,
        High,
    }
}

crate::define_entity_org_created! {
    /// An AI-generated architectural observation produced by the semantic
    /// cache track (cluster summaries, outliers) or the AI-scan track
    /// (broad scan findings after merge + investigation).
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    pub struct SemanticAiInsight {
        /// Analysis run this insight belongs to.
        pub analysis_id: String,
        /// Kind of insight.
        pub insight_type: InsightType,
        /// Short human-readable title.
        pub title: String,
        /// Full narrative body.
        pub body: String,
        /// Cluster identifier this insight is about, if any.
        pub cluster_id: Option<String>,
        /// Repository-relative file paths the insight references.
        pub file_paths: Vec<String>,
        /// Priority/urgency band.
        pub priority: InsightPriority,
    }
}

crate::impl_table_schema!(SemanticAiInsight, "semantic_ai_insights",
    columns: [
        ("id", Text, pk),
        ("org_id", Text),
        ("analysis_id", Text),
        ("insight_type", Text),
        ("title", Text),
        ("body", Text),
        ("cluster_id", Text, nullable),
        ("file_paths_json", Json),
        ("priority", Text),
        ("created_at", Integer),
    ],
    indexes: [
        "idx_semantic_ai_insights_analysis" => ["analysis_id"],
    ],
    foreign_keys: [
        ("analysis_id", "analyses", "id"),
    ],
    unique_constraints: [],
);
