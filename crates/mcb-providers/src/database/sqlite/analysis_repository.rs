//! `SQLite` persistence for the Analysis Execution Core: analysis runs and
//! their satellite findings (issues, dead code, file churn, AI insights),
//! plus the commit-scoped repo content cache.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use mcb_domain::entities::analysis::{Analysis, TechDebtLevel};
use mcb_domain::entities::analysis_findings::{
    AnalysisIssue, AnalysisIssueStatus, DeadCodeFinding, FileChurnFinding, SemanticAiInsight,
};
use mcb_domain::entities::repo_content_cache::{RepoContentCache, RepoContentObject};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::database::{DatabaseExecutor, SqlParam, SqlRow};
use mcb_domain::ports::repositories::analysis::{AnalysisQuery, AnalysisRepository, DeadCodeFindingRepository, FileChurnFindingRepository, IssueRepository, SemanticAiInsightRepository};
use mcb_domain::ports::repositories::repo_content_cache::RepoContentCacheRepository;

use super::query_helpers::{query_all, query_one};
use super::row_helpers::{
    json_opt, opt_f64, opt_f64_param, opt_i64, opt_i64_param, opt_str, opt_str_param, req_bool,
    req_f64, req_i64, req_parsed, req_str,
};

fn decimal_param(value: Option<Decimal>) -> SqlParam {
    match value.and_then(|d| d.to_f64()) {
        Some(v) => SqlParam::F64(v),
        None => SqlParam::Null,
    }
}

fn opt_decimal(row: &dyn SqlRow, col: &str) -> Result<Option<Decimal>> {
    Ok(opt_f64(row, col)?.and_then(Decimal::from_f64))
}

fn row_to_analysis(row: &dyn SqlRow) -> Result<Analysis> {
    Ok(Analysis {
        id: req_str(row, "id")?,
        repository_id: req_str(row, "repository_id")?,
        commit_sha: req_str(row, "commit_sha")?,
        branch: opt_str(row, "branch")?,
        trigger_type: req_parsed(row, "trigger_type")?,
        static_status: req_parsed(row, "static_status")?,
        static_progress: req_i64(row, "static_progress")? as u8,
        static_started_at: opt_i64(row, "static_started_at")?,
        static_completed_at: opt_i64(row, "static_completed_at")?,
        static_error: opt_str(row, "static_error")?,
        embeddings_status: req_parsed(row, "embeddings_status")?,
        embeddings_progress: req_i64(row, "embeddings_progress")? as u8,
        embeddings_started_at: opt_i64(row, "embeddings_started_at")?,
        embeddings_completed_at: opt_i64(row, "embeddings_completed_at")?,
        embeddings_error: opt_str(row, "embeddings_error")?,
        semantic_cache_status: req_parsed(row, "semantic_cache_status")?,
        semantic_cache_progress: req_i64(row, "semantic_cache_progress")? as u8,
        semantic_cache_started_at: opt_i64(row, "semantic_cache_started_at")?,
        semantic_cache_completed_at: opt_i64(row, "semantic_cache_completed_at")?,
        semantic_cache_error: opt_str(row, "semantic_cache_error")?,
        ai_scan_status: req_parsed(row, "ai_scan_status")?,
        ai_scan_progress: req_i64(row, "ai_scan_progress")? as u8,
        ai_scan_started_at: opt_i64(row, "ai_scan_started_at")?,
        ai_scan_completed_at: opt_i64(row, "ai_scan_completed_at")?,
        ai_scan_error: opt_str(row, "ai_scan_error")?,
        heartbeat_at: opt_i64(row, "heartbeat_at")?,
        vci_score: opt_decimal(row, "vci_score")?,
        tech_debt_level: opt_str(row, "tech_debt_level")?
            .map(|s| TechDebtLevel::from_str(&s).map_err(|e| Error::memory(e.to_string())))
            .transpose()?,
        metrics: json_opt(row, "metrics_json", "invalid analysis metrics JSON")?,
        semantic_cache: json_opt(row, "semantic_cache_json", "invalid analysis semantic_cache JSON")?,
        ai_scan_cache: json_opt(row, "ai_scan_cache_json", "invalid analysis ai_scan_cache JSON")?,
        pinned: req_bool(row, "pinned")?,
        created_at: req_i64(row, "created_at")?,
        updated_at: req_i64(row, "updated_at")?,
    })
}

fn analysis_params(a: &Analysis) -> Result<Vec<SqlParam>> {
    Ok(vec![
        SqlParam::String(a.id.clone()),
        SqlParam::String(a.repository_id.clone()),
        SqlParam::String(a.commit_sha.clone()),
        opt_str_param(&a.branch),
        SqlParam::String(a.trigger_type.to_string()),
        SqlParam::String(a.static_status.to_string()),
        SqlParam::I64(i64::from(a.static_progress)),
        opt_i64_param(a.static_started_at),
        opt_i64_param(a.static_completed_at),
        opt_str_param(&a.static_error),
        SqlParam::String(a.embeddings_status.to_string()),
        SqlParam::I64(i64::from(a.embeddings_progress)),
        opt_i64_param(a.embeddings_started_at),
        opt_i64_param(a.embeddings_completed_at),
        opt_str_param(&a.embeddings_error),
        SqlParam::String(a.semantic_cache_status.to_string()),
        SqlParam::I64(i64::from(a.semantic_cache_progress)),
        opt_i64_param(a.semantic_cache_started_at),
        opt_i64_param(a.semantic_cache_completed_at),
        opt_str_param(&a.semantic_cache_error),
        SqlParam::String(a.ai_scan_status.to_string()),
        SqlParam::I64(i64::from(a.ai_scan_progress)),
        opt_i64_param(a.ai_scan_started_at),
        opt_i64_param(a.ai_scan_completed_at),
        opt_str_param(&a.ai_scan_error),
        opt_i64_param(a.heartbeat_at),
        decimal_param(a.vci_score),
        match &a.tech_debt_level {
            Some(l) => SqlParam::String(l.to_string()),
            None => SqlParam::Null,
        },
        match &a.metrics {
            Some(v) => super::row_helpers::json_param(v)?,
            None => SqlParam::Null,
        },
        match &a.semantic_cache {
            Some(v) => super::row_helpers::json_param(v)?,
            None => SqlParam::Null,
        },
        match &a.ai_scan_cache {
            Some(v) => super::row_helpers::json_param(v)?,
            None => SqlParam::Null,
        },
        SqlParam::Bool(a.pinned),
        SqlParam::I64(a.created_at),
        SqlParam::I64(a.updated_at),
    ])
}

/// `SQLite`-backed [`AnalysisRepository`].
pub struct SqliteAnalysisRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteAnalysisRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl AnalysisRepository for SqliteAnalysisRepository {
    async fn create(&self, analysis: &Analysis) -> Result<()> {
        let params = analysis_params(analysis)?;
        self.executor
            .execute(
                r"
                INSERT INTO analyses (
                    id, repository_id, commit_sha, branch, trigger_type,
                    static_status, static_progress, static_started_at, static_completed_at, static_error,
                    embeddings_status, embeddings_progress, embeddings_started_at, embeddings_completed_at, embeddings_error,
                    semantic_cache_status, semantic_cache_progress, semantic_cache_started_at, semantic_cache_completed_at, semantic_cache_error,
                    ai_scan_status, ai_scan_progress, ai_scan_started_at, ai_scan_completed_at, ai_scan_error,
                    heartbeat_at, vci_score, tech_debt_level, metrics_json, semantic_cache_json, ai_scan_cache_json,
                    pinned, created_at, updated_at
                ) VALUES (?,?,?,?,?, ?,?,?,?,?, ?,?,?,?,?, ?,?,?,?,?, ?,?,?,?,?, ?,?,?,?,?,?, ?,?,?)
                ",
                &params,
            )
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<Analysis> {
        query_one(
            &self.executor,
            "SELECT * FROM analyses WHERE id = ?",
            &[SqlParam::String(id.to_string())],
            row_to_analysis,
        )
        .await?
        .ok_or_else(|| Error::analysis_not_found(id))
    }

    async fn find_in_flight(&self, repository_id: &str, commit_sha: &str) -> Result<Option<Analysis>> {
        query_one(
            &self.executor,
            r"
            SELECT * FROM analyses
            WHERE repository_id = ? AND commit_sha = ?
              AND NOT (
                static_status IN ('completed', 'failed')
                AND embeddings_status IN ('none', 'completed', 'failed')
                AND semantic_cache_status IN ('none', 'completed', 'failed')
                AND ai_scan_status IN ('none', 'completed', 'failed')
              )
            ORDER BY created_at DESC
            LIMIT 1
            ",
            &[
                SqlParam::String(repository_id.to_string()),
                SqlParam::String(commit_sha.to_string()),
            ],
            row_to_analysis,
        )
        .await
    }

    async fn list(&self, query: &AnalysisQuery) -> Result<Vec<Analysis>> {
        let mut sql = String::from("SELECT * FROM analyses WHERE 1=1");
        let mut params: Vec<SqlParam> = Vec::new();

        if let Some(repository_id) = &query.repository_id {
            sql.push_str(" AND repository_id = ?");
            params.push(SqlParam::String(repository_id.clone()));
        }
        if let Some(heartbeat_before) = query.heartbeat_before {
            sql.push_str(" AND heartbeat_at IS NOT NULL AND heartbeat_at < ?");
            params.push(SqlParam::I64(heartbeat_before));
        }
        if query.in_flight_only {
            sql.push_str(
                r" AND NOT (
                    static_status IN ('completed', 'failed')
                    AND embeddings_status IN ('none', 'completed', 'failed')
                    AND semantic_cache_status IN ('none', 'completed', 'failed')
                    AND ai_scan_status IN ('none', 'completed', 'failed')
                )",
            );
        }

        sql.push_str(" ORDER BY created_at DESC");
        if query.limit > 0 {
            sql.push_str(" LIMIT ?");
            params.push(SqlParam::I64(i64::from(query.limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                params.push(SqlParam::I64(i64::from(query.offset)));
            }
        }

        query_all(&self.executor, &sql, &params, row_to_analysis, "analysis").await
    }

    async fn update(&self, analysis: &Analysis) -> Result<()> {
        let mut params = analysis_params(analysis)?;
        // drop id (col 1), re-append for WHERE clause
        params.remove(0);
        params.push(SqlParam::String(analysis.id.clone()));

        self.executor
            .execute(
                r"
                UPDATE analyses SET
                    repository_id = ?, commit_sha = ?, branch = ?, trigger_type = ?,
                    static_status = ?, static_progress = ?, static_started_at = ?, static_completed_at = ?, static_error = ?,
                    embeddings_status = ?, embeddings_progress = ?, embeddings_started_at = ?, embeddings_completed_at = ?, embeddings_error = ?,
                    semantic_cache_status = ?, semantic_cache_progress = ?, semantic_cache_started_at = ?, semantic_cache_completed_at = ?, semantic_cache_error = ?,
                    ai_scan_status = ?, ai_scan_progress = ?, ai_scan_started_at = ?, ai_scan_completed_at = ?, ai_scan_error = ?,
                    heartbeat_at = ?, vci_score = ?, tech_debt_level = ?, metrics_json = ?, semantic_cache_json = ?, ai_scan_cache_json = ?,
                    pinned = ?, updated_at = ?
                WHERE id = ?
                ",
                &params,
            )
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.executor
            .execute(
                "DELETE FROM analyses WHERE id = ?",
                &[SqlParam::String(id.to_string())],
            )
            .await
    }
}

fn row_to_issue(row: &dyn SqlRow) -> Result<AnalysisIssue> {
    Ok(AnalysisIssue {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        analysis_id: req_str(row, "analysis_id")?,
        file_path: req_str(row, "file_path")?,
        line: opt_i64(row, "line")?.map(|v| v as u32),
        rule: req_str(row, "rule")?,
        message: req_str(row, "message")?,
        severity: req_parsed(row, "severity")?,
        status: req_parsed(row, "status")?,
    })
}

/// `SQLite`-backed [`IssueRepository`].
pub struct SqliteIssueRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteIssueRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl IssueRepository for SqliteIssueRepository {
    async fn create_batch(&self, issues: &[AnalysisIssue]) -> Result<()> {
        for issue in issues {
            let params = [
                SqlParam::String(issue.id.clone()),
                SqlParam::String(issue.org_id.clone()),
                SqlParam::String(issue.analysis_id.clone()),
                SqlParam::String(issue.file_path.clone()),
                opt_i64_param(issue.line.map(i64::from)),
                SqlParam::String(issue.rule.clone()),
                SqlParam::String(issue.message.clone()),
                SqlParam::String(issue.severity.to_string()),
                SqlParam::String(issue.status.to_string()),
                SqlParam::I64(issue.created_at),
            ];
            self.executor
                .execute(
                    r"
                    INSERT INTO analysis_issues
                        (id, org_id, analysis_id, file_path, line, rule, message, severity, status, created_at)
                    VALUES (?,?,?,?,?,?,?,?,?,?)
                    ",
                    &params,
                )
                .await?;
        }
        Ok(())
    }

    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<AnalysisIssue>> {
        query_all(
            &self.executor,
            "SELECT * FROM analysis_issues WHERE analysis_id = ? ORDER BY severity DESC, created_at ASC",
            &[SqlParam::String(analysis_id.to_string())],
            row_to_issue,
            "analysis issue",
        )
        .await
    }

    async fn update_status(&self, id: &str, status: AnalysisIssueStatus) -> Result<()> {
        self.executor
            .execute(
                "UPDATE analysis_issues SET status = ? WHERE id = ?",
                &[
                    SqlParam::String(status.to_string()),
                    SqlParam::String(id.to_string()),
                ],
            )
            .await
    }
}

fn row_to_dead_code_finding(row: &dyn SqlRow) -> Result<DeadCodeFinding> {
    Ok(DeadCodeFinding {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        analysis_id: req_str(row, "analysis_id")?,
        file_path: req_str(row, "file_path")?,
        line: req_i64(row, "line")? as u32,
        item_type: req_str(row, "item_type")?,
        name: req_str(row, "name")?,
        impact_score: req_f64(row, "impact_score")?,
        confidence: req_f64(row, "confidence")?,
        is_dismissed: req_bool(row, "is_dismissed")?,
    })
}

/// `SQLite`-backed [`DeadCodeFindingRepository`].
pub struct SqliteDeadCodeFindingRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteDeadCodeFindingRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl DeadCodeFindingRepository for SqliteDeadCodeFindingRepository {
    async fn create_batch(&self, findings: &[DeadCodeFinding]) -> Result<()> {
        for f in findings {
            let params = [
                SqlParam::String(f.id.clone()),
                SqlParam::String(f.org_id.clone()),
                SqlParam::String(f.analysis_id.clone()),
                SqlParam::String(f.file_path.clone()),
                SqlParam::I64(i64::from(f.line)),
                SqlParam::String(f.item_type.clone()),
                SqlParam::String(f.name.clone()),
                SqlParam::F64(f.impact_score),
                SqlParam::F64(f.confidence),
                SqlParam::Bool(f.is_dismissed),
                SqlParam::I64(f.created_at),
            ];
            self.executor
                .execute(
                    r"
                    INSERT INTO dead_code_findings
                        (id, org_id, analysis_id, file_path, line, item_type, name, impact_score, confidence, is_dismissed, created_at)
                    VALUES (?,?,?,?,?,?,?,?,?,?,?)
                    ",
                    &params,
                )
                .await?;
        }
        Ok(())
    }

    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<DeadCodeFinding>> {
        query_all(
            &self.executor,
            "SELECT * FROM dead_code_findings WHERE analysis_id = ? ORDER BY impact_score DESC",
            &[SqlParam::String(analysis_id.to_string())],
            row_to_dead_code_finding,
            "dead code finding",
        )
        .await
    }

    async fn dismiss(&self, id: &str) -> Result<()> {
        self.executor
            .execute(
                "UPDATE dead_code_findings SET is_dismissed = ? WHERE id = ?",
                &[SqlParam::Bool(true), SqlParam::String(id.to_string())],
            )
            .await
    }
}

fn row_to_file_churn_finding(row: &dyn SqlRow) -> Result<FileChurnFinding> {
    let risk_factors: Vec<String> =
        super::row_helpers::json_vec(row, "risk_factors_json", "invalid risk_factors JSON")?;
    Ok(FileChurnFinding {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        analysis_id: req_str(row, "analysis_id")?,
        file_path: req_str(row, "file_path")?,
        changes_90d: req_i64(row, "changes_90d")? as u32,
        coverage_rate: opt_f64(row, "coverage_rate")?,
        unique_authors: req_i64(row, "unique_authors")? as u32,
        risk_factors,
        risk_score: req_f64(row, "risk_score")?,
    })
}

/// `SQLite`-backed [`FileChurnFindingRepository`].
pub struct SqliteFileChurnFindingRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteFileChurnFindingRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl FileChurnFindingRepository for SqliteFileChurnFindingRepository {
    async fn create_batch(&self, findings: &[FileChurnFinding]) -> Result<()> {
        for f in findings {
            let risk_factors_json = super::row_helpers::json_param(&f.risk_factors)?;
            let params = [
                SqlParam::String(f.id.clone()),
                SqlParam::String(f.org_id.clone()),
                SqlParam::String(f.analysis_id.clone()),
                SqlParam::String(f.file_path.clone()),
                SqlParam::I64(i64::from(f.changes_90d)),
                opt_f64_param(f.coverage_rate),
                SqlParam::I64(i64::from(f.unique_authors)),
                risk_factors_json,
                SqlParam::F64(f.risk_score),
                SqlParam::I64(f.created_at),
            ];
            self.executor
                .execute(
                    r"
                    INSERT INTO file_churn_findings
                        (id, org_id, analysis_id, file_path, changes_90d, coverage_rate, unique_authors, risk_factors_json, risk_score, created_at)
                    VALUES (?,?,?,?,?,?,?,?,?,?)
                    ",
                    &params,
                )
                .await?;
        }
        Ok(())
    }

    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<FileChurnFinding>> {
        query_all(
            &self.executor,
            "SELECT * FROM file_churn_findings WHERE analysis_id = ? ORDER BY risk_score DESC",
            &[SqlParam::String(analysis_id.to_string())],
            row_to_file_churn_finding,
            "file churn finding",
        )
        .await
    }
}

fn row_to_semantic_ai_insight(row: &dyn SqlRow) -> Result<SemanticAiInsight> {
    let file_paths: Vec<String> =
        super::row_helpers::json_vec(row, "file_paths_json", "invalid file_paths JSON")?;
    Ok(SemanticAiInsight {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        analysis_id: req_str(row, "analysis_id")?,
        insight_type: req_parsed(row, "insight_type")?,
        title: req_str(row, "title")?,
        body: req_str(row, "body")?,
        cluster_id: opt_str(row, "cluster_id")?,
        file_paths,
        priority: req_parsed(row, "priority")?,
    })
}

/// `SQLite`-backed [`SemanticAiInsightRepository`].
pub struct SqliteSemanticAiInsightRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteSemanticAiInsightRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl SemanticAiInsightRepository for SqliteSemanticAiInsightRepository {
    async fn create_batch(&self, insights: &[SemanticAiInsight]) -> Result<()> {
        for i in insights {
            let file_paths_json = super::row_helpers::json_param(&i.file_paths)?;
            let params = [
                SqlParam::String(i.id.clone()),
                SqlParam::String(i.org_id.clone()),
                SqlParam::String(i.analysis_id.clone()),
                SqlParam::String(i.insight_type.to_string()),
                SqlParam::String(i.title.clone()),
                SqlParam::String(i.body.clone()),
                opt_str_param(&i.cluster_id),
                file_paths_json,
                SqlParam::String(i.priority.to_string()),
                SqlParam::I64(i.created_at),
            ];
            self.executor
                .execute(
                    r"
                    INSERT INTO semantic_ai_insights
                        (id, org_id, analysis_id, insight_type, title, body, cluster_id, file_paths_json, priority, created_at)
                    VALUES (?,?,?,?,?,?,?,?,?,?)
                    ",
                    &params,
                )
                .await?;
        }
        Ok(())
    }

    async fn list_by_analysis(&self, analysis_id: &str) -> Result<Vec<SemanticAiInsight>> {
        query_all(
            &self.executor,
            "SELECT * FROM semantic_ai_insights WHERE analysis_id = ? ORDER BY created_at ASC",
            &[SqlParam::String(analysis_id.to_string())],
            row_to_semantic_ai_insight,
            "semantic ai insight",
        )
        .await
    }
}

fn row_to_repo_content_cache(row: &dyn SqlRow) -> Result<RepoContentCache> {
    Ok(RepoContentCache {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        repository_id: req_str(row, "repository_id")?,
        commit_sha: req_str(row, "commit_sha")?,
        status: req_parsed(row, "status")?,
        object_count: req_i64(row, "object_count")? as u32,
        total_bytes: req_i64(row, "total_bytes")? as u64,
        tree_summary: json_opt(row, "tree_summary_json", "invalid tree_summary JSON")?,
        error: opt_str(row, "error")?,
        last_accessed_at: req_i64(row, "last_accessed_at")?,
        updated_at: req_i64(row, "updated_at")?,
    })
}

fn row_to_repo_content_object(row: &dyn SqlRow) -> Result<RepoContentObject> {
    Ok(RepoContentObject {
        id: req_str(row, "id")?,
        org_id: req_str(row, "org_id")?,
        created_at: req_i64(row, "created_at")?,
        cache_id: req_str(row, "cache_id")?,
        file_path: req_str(row, "file_path")?,
        content_hash: req_str(row, "content_hash")?,
        size_bytes: req_i64(row, "size_bytes")? as u64,
        language: opt_str(row, "language")?,
        storage_key: req_str(row, "storage_key")?,
    })
}

/// `SQLite`-backed [`RepoContentCacheRepository`].
pub struct SqliteRepoContentCacheRepository {
    executor: Arc<dyn DatabaseExecutor>,
}

impl SqliteRepoContentCacheRepository {
    /// Create a repository that uses the given executor.
    #[must_use]
    pub fn new(executor: Arc<dyn DatabaseExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl RepoContentCacheRepository for SqliteRepoContentCacheRepository {
    async fn create(&self, cache: &RepoContentCache) -> Result<()> {
        let tree_summary_json = match &cache.tree_summary {
            Some(v) => super::row_helpers::json_param(v)?,
            None => SqlParam::Null,
        };
        let params = [
            SqlParam::String(cache.id.clone()),
            SqlParam::String(cache.org_id.clone()),
            SqlParam::String(cache.repository_id.clone()),
            SqlParam::String(cache.commit_sha.clone()),
            SqlParam::String(cache.status.to_string()),
            SqlParam::I64(i64::from(cache.object_count)),
            SqlParam::I64(i64::try_from(cache.total_bytes).unwrap_or(i64::MAX)),
            tree_summary_json,
            opt_str_param(&cache.error),
            SqlParam::I64(cache.last_accessed_at),
            SqlParam::I64(cache.created_at),
            SqlParam::I64(cache.updated_at),
        ];
        self.executor
            .execute(
                r"
                INSERT INTO repo_content_caches
                    (id, org_id, repository_id, commit_sha, status, object_count, total_bytes,
                     tree_summary_json, error, last_accessed_at, created_at, updated_at)
                VALUES (?,?,?,?,?,?,?,?,?,?,?,?)
                ",
                &params,
            )
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<RepoContentCache> {
        query_one(
            &self.executor,
            "SELECT * FROM repo_content_caches WHERE id = ?",
            &[SqlParam::String(id.to_string())],
            row_to_repo_content_cache,
        )
        .await?
        .ok_or_else(|| Error::not_found(format!("repo content cache {id}")))
    }

    async fn find_by_repo_commit(
        &self,
        repository_id: &str,
        commit_sha: &str,
    ) -> Result<Option<RepoContentCache>> {
        query_one(
            &self.executor,
            "SELECT * FROM repo_content_caches WHERE repository_id = ? AND commit_sha = ?",
            &[
                SqlParam::String(repository_id.to_string()),
                SqlParam::String(commit_sha.to_string()),
            ],
            row_to_repo_content_cache,
        )
        .await
    }

    async fn update(&self, cache: &RepoContentCache) -> Result<()> {
        let tree_summary_json = match &cache.tree_summary {
            Some(v) => super::row_helpers::json_param(v)?,
            None => SqlParam::Null,
        };
        let params = [
            SqlParam::String(cache.status.to_string()),
            SqlParam::I64(i64::from(cache.object_count)),
            SqlParam::I64(i64::try_from(cache.total_bytes).unwrap_or(i64::MAX)),
            tree_summary_json,
            opt_str_param(&cache.error),
            SqlParam::I64(cache.updated_at),
            SqlParam::String(cache.id.clone()),
        ];
        self.executor
            .execute(
                r"
                UPDATE repo_content_caches
                SET status = ?, object_count = ?, total_bytes = ?, tree_summary_json = ?, error = ?, updated_at = ?
                WHERE id = ?
                ",
                &params,
            )
            .await
    }

    async fn touch(&self, id: &str, accessed_at: i64) -> Result<()> {
        self.executor
            .execute(
                "UPDATE repo_content_caches SET last_accessed_at = ? WHERE id = ?",
                &[SqlParam::I64(accessed_at), SqlParam::String(id.to_string())],
            )
            .await
    }

    async fn list_evictable(&self, cutoff: i64) -> Result<Vec<RepoContentCache>> {
        query_all(
            &self.executor,
            "SELECT * FROM repo_content_caches WHERE last_accessed_at < ? AND status != 'evicted'",
            &[SqlParam::I64(cutoff)],
            row_to_repo_content_cache,
            "repo content cache",
        )
        .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.executor
            .execute(
                "DELETE FROM repo_content_caches WHERE id = ?",
                &[SqlParam::String(id.to_string())],
            )
            .await
    }

    async fn create_objects(&self, objects: &[RepoContentObject]) -> Result<()> {
        for o in objects {
            let params = [
                SqlParam::String(o.id.clone()),
                SqlParam::String(o.org_id.clone()),
                SqlParam::String(o.cache_id.clone()),
                SqlParam::String(o.file_path.clone()),
                SqlParam::String(o.content_hash.clone()),
                SqlParam::I64(i64::try_from(o.size_bytes).unwrap_or(i64::MAX)),
                opt_str_param(&o.language),
                SqlParam::String(o.storage_key.clone()),
                SqlParam::I64(o.created_at),
            ];
            self.executor
                .execute(
                    r"
                    INSERT INTO repo_content_objects
                        (id, org_id, cache_id, file_path, content_hash, size_bytes, language, storage_key, created_at)
                    VALUES (?,?,?,?,?,?,?,?,?)
                    ",
                    &params,
                )
                .await?;
        }
        Ok(())
    }

    async fn list_objects(&self, cache_id: &str) -> Result<Vec<RepoContentObject>> {
        query_all(
            &self.executor,
            "SELECT * FROM repo_content_objects WHERE cache_id = ? ORDER BY file_path ASC",
            &[SqlParam::String(cache_id.to_string())],
            row_to_repo_content_object,
            "repo content object",
        )
        .await
    }

    async fn get_object(&self, cache_id: &str, file_path: &str) -> Result<Option<RepoContentObject>> {
        query_one(
            &self.executor,
            "SELECT * FROM repo_content_objects WHERE cache_id = ? AND file_path = ?",
            &[
                SqlParam::String(cache_id.to_string()),
                SqlParam::String(file_path.to_string()),
            ],
            row_to_repo_content_object,
        )
        .await
    }
}
