//! Static Analysis Worker: walks one commit's tree and raises per-file
//! issues plus a composite vitality score (§4.1's "static track").
//!
//! Unlike the other three tracks, the specification treats the static
//! track's deep metrics (AST-level complexity, TDG) as owned by an external
//! tokenizer/AST capability outside this system's scope — `Analysis.metrics`
//! is documented as opaque at this layer. What this worker computes instead
//! is a bounded, deterministic proxy: it reuses the same chunker the
//! Embeddings Worker chunks with, scores each chunk's branch-keyword density
//! as a cyclomatic-complexity heuristic, and raises an [`AnalysisIssue`] for
//! chunks that cross a named threshold. No vector store or embedding
//! provider is touched; this track never depends on the embeddings track
//! and runs concurrently with it (§4.2 step 5 dispatches both from the same
//! trigger).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use mcb_domain::entities::analysis::{StaticStatus, TechDebtLevel};
use mcb_domain::entities::analysis_findings::{AnalysisIssue, AnalysisIssueStatus, IssueSeverity};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::providers::{LanguageChunkingProvider, VcsProvider};
use mcb_domain::ports::repositories::{AnalysisRepository, IssueRepository};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{info, warn};

use super::analysis_state_service::AnalysisStateService;
use crate::constants::{
    PROGRESS_UPDATE_INTERVAL, SKIP_DIRS, STATIC_COMPLEXITY_ERROR_THRESHOLD,
    STATIC_COMPLEXITY_WARNING_THRESHOLD, STATIC_LONG_FUNCTION_LINES, TECH_DEBT_CRITICAL_THRESHOLD,
    TECH_DEBT_LOW_THRESHOLD, TECH_DEBT_MODERATE_THRESHOLD, VCI_COMPLEXITY_PENALTY_WEIGHT,
    VCI_ISSUE_DENSITY_PENALTY_WEIGHT,
};

/// Branch-introducing tokens counted toward a chunk's complexity heuristic.
/// Deliberately language-agnostic: the chunker's fallback already runs over
/// languages with no dedicated parser, so the heuristic can't assume a
/// specific grammar either.
const BRANCH_KEYWORDS: &[&str] =
    &["if", "else", "for", "while", "match", "case", "catch", "except", "&&", "||", "?:"];

/// Counts branch-keyword occurrences as a cyclomatic-complexity proxy,
/// starting from a baseline of 1 (a chunk with no branches is still one
/// path through it).
fn estimate_complexity(content: &str) -> u32 {
    let lower = content.to_lowercase();
    let mut count: u32 = 1;
    for keyword in BRANCH_KEYWORDS {
        count += u32::try_from(lower.matches(keyword).count()).unwrap_or(u32::MAX);
    }
    count
}

/// Aggregate counters accumulated over one repository walk.
#[derive(Debug, Default)]
struct StaticMetrics {
    files_scanned: u32,
    chunks_scanned: u32,
    total_lines: u64,
    total_complexity: u64,
    issues_by_severity: std::collections::HashMap<&'static str, u32>,
}

impl StaticMetrics {
    fn record_issue(&mut self, severity: IssueSeverity) {
        let key = match severity {
            IssueSeverity::Critical => "critical",
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
            IssueSeverity::Info => "info",
        };
        *self.issues_by_severity.entry(key).or_insert(0) += 1;
    }

    fn issue_count(&self) -> u32 {
        self.issues_by_severity.values().sum()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "files_scanned": self.files_scanned,
            "chunks_scanned": self.chunks_scanned,
            "total_lines": self.total_lines,
            "total_complexity": self.total_complexity,
            "issues_by_severity": self.issues_by_severity,
        })
    }
}

/// Runs the static track end to end for one analysis.
pub struct StaticAnalysisWorker<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    analyses: Arc<R>,
    state: Arc<AnalysisStateService<R, E>>,
    vcs: Arc<dyn VcsProvider>,
    chunker: Arc<dyn LanguageChunkingProvider>,
    issues: Arc<dyn IssueRepository>,
}

impl<R, E> StaticAnalysisWorker<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    /// Build a new worker over the given state service and collaborating ports.
    #[must_use]
    pub fn new(
        analyses: Arc<R>,
        state: Arc<AnalysisStateService<R, E>>,
        vcs: Arc<dyn VcsProvider>,
        chunker: Arc<dyn LanguageChunkingProvider>,
        issues: Arc<dyn IssueRepository>,
    ) -> Self {
        Self { analyses, state, vcs, chunker, issues }
    }

    /// Run the static track for `analysis_id` against `(repository_id,
    /// commit_sha)`. Always runs (no `None` status for this track, unlike
    /// embeddings/semantic-cache/ai-scan): every analysis gets a vitality
    /// score.
    ///
    /// # Errors
    /// Propagates clone, chunking, and repository failures after recording
    /// them on the static track.
    pub async fn run(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        self.state.transition_static(analysis_id, StaticStatus::Running, Some(0), None).await?;
        self.state.heartbeat(analysis_id).await?;

        match self.run_inner(analysis_id, repository_id, commit_sha).await {
            Ok(()) => {
                self.state.transition_static(analysis_id, StaticStatus::Completed, Some(100), None).await?;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .state
                    .transition_static(analysis_id, StaticStatus::Failed, None, Some(e.to_string()))
                    .await;
                Err(e)
            }
        }
    }

    async fn run_inner(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        let scratch = self.vcs.clone_at_commit(repository_id, commit_sha).await?;

        let files = Self::discover_files(&scratch);
        let total = files.len();
        let mut metrics = StaticMetrics::default();
        let mut issues = Vec::new();
        let now = chrono::Utc::now().timestamp();

        for (i, path) in files.iter().enumerate() {
            let Ok(content) = tokio::fs::read_to_string(path).await else {
                continue;
            };
            let relative_path = path
                .strip_prefix(&scratch)
                .unwrap_or(path)
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            let language = Self::detect_language(path);

            let chunks = self.chunker.chunk_file(Path::new(&relative_path), &content, &language).unwrap_or_default();
            metrics.files_scanned += 1;

            for chunk in &chunks {
                metrics.chunks_scanned += 1;
                let line_count = u64::from(chunk.line_count());
                metrics.total_lines += line_count;
                let complexity = estimate_complexity(&chunk.content);
                metrics.total_complexity += u64::from(complexity);

                if complexity >= STATIC_COMPLEXITY_WARNING_THRESHOLD {
                    let severity = if complexity >= STATIC_COMPLEXITY_ERROR_THRESHOLD {
                        IssueSeverity::Error
                    } else {
                        IssueSeverity::Warning
                    };
                    metrics.record_issue(severity);
                    issues.push(Self::new_issue(
                        analysis_id,
                        &relative_path,
                        chunk.start_line,
                        "high-cyclomatic-complexity",
                        format!("estimated cyclomatic complexity {complexity} crosses the configured threshold"),
                        severity,
                        now,
                    ));
                }
                if chunk.line_count() >= STATIC_LONG_FUNCTION_LINES {
                    metrics.record_issue(IssueSeverity::Info);
                    issues.push(Self::new_issue(
                        analysis_id,
                        &relative_path,
                        chunk.start_line,
                        "long-function",
                        format!("chunk spans {} lines", chunk.line_count()),
                        IssueSeverity::Info,
                        now,
                    ));
                }
            }

            if i % PROGRESS_UPDATE_INTERVAL == 0 {
                self.state.heartbeat(analysis_id).await?;
                let progress = u8::try_from((i * 90 / total.max(1)).min(90)).unwrap_or(90);
                self.state.transition_static(analysis_id, StaticStatus::Running, Some(progress), None).await?;
            }
        }

        if !issues.is_empty() {
            self.issues.create_batch(&issues).await?;
        }
        self.persist_score(analysis_id, &metrics).await?;

        if let Err(e) = tokio::fs::remove_dir_all(&scratch).await {
            warn!(path = %scratch.display(), error = %e, "failed to clean up static analysis scratch directory");
        }

        info!(
            analysis_id,
            repository_id,
            commit_sha,
            files = total,
            issues = metrics.issue_count(),
            "static track complete"
        );
        Ok(())
    }

    async fn persist_score(&self, analysis_id: &str, metrics: &StaticMetrics) -> Result<()> {
        let chunks = metrics.chunks_scanned.max(1);
        let avg_complexity = metrics.total_complexity as f64 / f64::from(chunks);
        let lines_k = (metrics.total_lines.max(1) as f64) / 1000.0;
        let issue_density = f64::from(metrics.issue_count()) / lines_k;

        let score = (100.0
            - VCI_COMPLEXITY_PENALTY_WEIGHT * avg_complexity
            - VCI_ISSUE_DENSITY_PENALTY_WEIGHT * issue_density)
            .clamp(0.0, 100.0);

        let tech_debt_level = if score >= TECH_DEBT_LOW_THRESHOLD {
            TechDebtLevel::Low
        } else if score >= TECH_DEBT_MODERATE_THRESHOLD {
            TechDebtLevel::Moderate
        } else if score >= TECH_DEBT_CRITICAL_THRESHOLD {
            TechDebtLevel::High
        } else {
            TechDebtLevel::Critical
        };

        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        analysis.vci_score = Decimal::from_f64(score).map(|d| d.round_dp(2));
        analysis.tech_debt_level = Some(tech_debt_level);
        analysis.metrics = Some(metrics.to_json());
        analysis.updated_at = chrono::Utc::now().timestamp();
        self.analyses.update(&analysis).await
    }

    fn new_issue(
        analysis_id: &str,
        file_path: &str,
        line: u32,
        rule: &str,
        message: String,
        severity: IssueSeverity,
        now: i64,
    ) -> AnalysisIssue {
        AnalysisIssue {
            id: uuid::Uuid::new_v4().to_string(),
            org_id: String::new(),
            created_at: now,
            analysis_id: analysis_id.to_owned(),
            file_path: file_path.to_owned(),
            line: Some(line),
            rule: rule.to_owned(),
            message,
            severity,
            status: AnalysisIssueStatus::Open,
        }
    }

    fn discover_files(root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .filter_entry(|entry| {
                if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                entry.file_name().to_str().is_none_or(|name| !SKIP_DIRS.contains(&name))
            })
            .build();

        for entry_result in walker {
            let Ok(entry) = entry_result else { continue };
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
        files
    }

    fn detect_language(path: &Path) -> String {
        match path.extension().and_then(|e| e.to_str()) {
            Some("rs") => "rust",
            Some("py") => "python",
            Some("ts" | "tsx") => "typescript",
            Some("js" | "jsx") => "javascript",
            Some("go") => "go",
            Some("java") => "java",
            _ => "text",
        }
        .to_owned()
    }
}
