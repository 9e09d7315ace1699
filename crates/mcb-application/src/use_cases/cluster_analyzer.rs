//! Cluster / Architecture Analyzer: turns one commit's vector-index points
//! into architecture clusters, outliers, dead-code candidates and hot-spot
//! findings (§4.4).
//!
//! Chained in-process from [`super::embeddings_worker::EmbeddingsWorker`]
//! the moment the embeddings track reaches
//! [`mcb_domain::entities::analysis::EmbeddingsStatus::Completed`] — the
//! State Service arms `semantic_cache_status = pending` atomically as part
//! of that transition, and the worker invokes this analyzer's job entry
//! point right after. Like every other track, this worker clones its own
//! scratch checkout; nothing is shared with the Embeddings Worker's clone.
//!
//! The vector index point contract
//! ([`mcb_domain::ports::VectorStoreProvider::search_similar`] /
//! `list_vectors`) never surfaces the raw embedding vector — only
//! [`mcb_domain::value_objects::vector_payload::VectorIndexPayload`]
//! metadata and chunk text. True HDBSCAN needs the vectors; lacking them,
//! clustering here runs over a bag-of-words term-frequency vector derived
//! from each chunk's source text, using cosine similarity as the density
//! metric. This is a deliberate, documented simplification of the
//! specification's "density-based clustering... using cosine distance"
//! requirement, not an oversight.

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use mcb_domain::entities::analysis::SemanticCacheStatus;
use mcb_domain::entities::analysis_findings::{
    DeadCodeFinding, FileChurnFinding, InsightPriority, InsightType, SemanticAiInsight,
};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::providers::{
    CallGraphAnalyzer, CallGraphNode, CoverageProvider, GitAnalyzer, LlmMessage, LlmProvider,
    VcsProvider, VectorStoreProvider,
};
use mcb_domain::ports::providers::vector_store::StoreCollectionId;
use mcb_domain::ports::repositories::{
    AnalysisRepository, DeadCodeFindingRepository, FileChurnFindingRepository,
    SemanticAiInsightRepository,
};
use mcb_domain::value_objects::vector_payload::{ChunkType, VectorIndexPayload};
use mcb_domain::value_objects::{ClusterSummary, SEMANTIC_CACHE_SCHEMA_VERSION, SemanticCachePayload};
use tracing::{info, warn};

use super::analysis_state_service::AnalysisStateService;
use crate::constants::{
    CHURN_WINDOW_DAYS, CLUSTER_MIN_POINTS, CLUSTER_NEIGHBOR_SIMILARITY, CLUSTER_VECTOR_FETCH_LIMIT,
    DEAD_CODE_CONFIDENCE_HEURISTIC, DEAD_CODE_CONFIDENCE_PROVEN, ENTRY_POINT_PATTERNS,
    HOT_SPOT_CHANGE_THRESHOLD, IMPACT_LINE_COUNT_SCALE, IMPACT_LINE_COUNT_WEIGHT,
    RISK_AUTHORS_SCALE, RISK_AUTHORS_WEIGHT, RISK_CHURN_SCALE, RISK_CHURN_WEIGHT,
    RISK_COVERAGE_WEIGHT, RISK_UNKNOWN_COVERAGE_ASSUMPTION, UTILITY_DIR_PATTERNS,
};

/// Cap on how many clusters get their own narrated insight per run, to
/// bound LLM call volume on repositories with many small clusters.
const MAX_NARRATED_CLUSTERS: usize = 5;

/// Timeout for the single recommendation-narrative completion call.
const INSIGHT_MODEL_TIMEOUT_SECS: u64 = 30;

/// One decoded, filtered vector-index point ready for clustering.
struct ClusterPoint {
    id: String,
    payload: VectorIndexPayload,
    term_freq: HashMap<String, f64>,
}

/// Runs the semantic-cache track end to end for one analysis.
pub struct ClusterAnalyzer<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    analyses: Arc<R>,
    state: Arc<AnalysisStateService<R, E>>,
    vcs: Arc<dyn VcsProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    call_graph: Arc<dyn CallGraphAnalyzer>,
    coverage: Arc<dyn CoverageProvider>,
    git_analyzer: Arc<dyn GitAnalyzer>,
    llm: Arc<dyn LlmProvider>,
    dead_code_findings: Arc<dyn DeadCodeFindingRepository>,
    file_churn_findings: Arc<dyn FileChurnFindingRepository>,
    insights: Arc<dyn SemanticAiInsightRepository>,
    collection: StoreCollectionId,
}

impl<R, E> ClusterAnalyzer<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    /// Build a new analyzer over the given state service and collaborating
    /// ports. `collection` is the single shared vector-index collection
    /// every repository's chunks live in (§6); the analyzer filters the
    /// points it reads back down to `repository_id`/`commit_sha` itself,
    /// since [`VectorStoreProvider::list_vectors`] carries no server-side
    /// filter.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        analyses: Arc<R>,
        state: Arc<AnalysisStateService<R, E>>,
        vcs: Arc<dyn VcsProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        call_graph: Arc<dyn CallGraphAnalyzer>,
        coverage: Arc<dyn CoverageProvider>,
        git_analyzer: Arc<dyn GitAnalyzer>,
        llm: Arc<dyn LlmProvider>,
        dead_code_findings: Arc<dyn DeadCodeFindingRepository>,
        file_churn_findings: Arc<dyn FileChurnFindingRepository>,
        insights: Arc<dyn SemanticAiInsightRepository>,
        collection: StoreCollectionId,
    ) -> Self {
        Self {
            analyses,
            state,
            vcs,
            vector_store,
            call_graph,
            coverage,
            git_analyzer,
            llm,
            dead_code_findings,
            file_churn_findings,
            insights,
            collection,
        }
    }

    /// Run the semantic-cache track for `analysis_id` against
    /// `(repository_id, commit_sha)`.
    ///
    /// # Errors
    /// Propagates clone, vector-store, git-history and repository failures
    /// after recording them on the semantic-cache track.
    pub async fn run(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        self.state
            .transition_semantic_cache(analysis_id, SemanticCacheStatus::Computing, Some(0), None)
            .await?;
        self.state.heartbeat(analysis_id).await?;

        match self.run_inner(analysis_id, repository_id, commit_sha).await {
            Ok(payload) => {
                self.persist_cache_blob(analysis_id, &payload).await?;
                self.state
                    .transition_semantic_cache(analysis_id, SemanticCacheStatus::Completed, Some(100), None)
                    .await?;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .state
                    .transition_semantic_cache(analysis_id, SemanticCacheStatus::Failed, None, Some(e.to_string()))
                    .await;
                Err(e)
            }
        }
    }

    async fn run_inner(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<SemanticCachePayload> {
        let workspace_root = self.vcs.clone_at_commit(repository_id, commit_sha).await?;

        let raw = self.vector_store.list_vectors(&self.collection, CLUSTER_VECTOR_FETCH_LIMIT).await?;
        let points = Self::decode_points(repository_id, commit_sha, raw);
        self.state.heartbeat(analysis_id).await?;

        let assignments = Self::cluster_points(&points);
        let clusters = Self::summarize_clusters(&points, &assignments);
        self.write_back_cluster_ids(&self.collection, &points, &assignments).await;

        let outlier_indices: Vec<usize> =
            (0..points.len()).filter(|&i| assignments[i] < 0).collect();

        let dead_code =
            self.detect_dead_code(analysis_id, &workspace_root, &points, &outlier_indices).await?;
        if !dead_code.is_empty() {
            self.dead_code_findings.create_batch(&dead_code).await?;
        }
        self.state
            .transition_semantic_cache(analysis_id, SemanticCacheStatus::Computing, Some(60), None)
            .await?;

        let hot_spots = self.detect_hot_spots(analysis_id, &workspace_root).await?;
        if !hot_spots.is_empty() {
            self.file_churn_findings.create_batch(&hot_spots).await?;
        }

        self.state
            .transition_semantic_cache(analysis_id, SemanticCacheStatus::GeneratingInsights, Some(80), None)
            .await?;

        let outlier_file_paths: Vec<String> = outlier_indices
            .iter()
            .filter(|&&i| !Self::is_test_file(&points[i].payload.file_path))
            .map(|&i| points[i].payload.file_path.clone())
            .collect();

        let insights = self
            .generate_insights(analysis_id, commit_sha, &clusters, &outlier_file_paths, &dead_code, &hot_spots)
            .await;
        if !insights.is_empty() {
            self.insights.create_batch(&insights).await?;
        }

        if let Err(e) = tokio::fs::remove_dir_all(&workspace_root).await {
            warn!(path = %workspace_root.display(), error = %e, "failed to clean up cluster analyzer scratch directory");
        }

        info!(
            analysis_id,
            repository_id,
            commit_sha,
            clusters = clusters.len(),
            dead_code = dead_code.len(),
            hot_spots = hot_spots.len(),
            "semantic cache track complete"
        );

        Ok(SemanticCachePayload {
            schema_version: SEMANTIC_CACHE_SCHEMA_VERSION,
            commit_sha: commit_sha.to_owned(),
            generated_at: chrono::Utc::now().timestamp(),
            clusters,
            outlier_file_paths,
            dead_code_count: dead_code.len(),
            hot_spot_count: hot_spots.len(),
        })
    }

    async fn persist_cache_blob(&self, analysis_id: &str, payload: &SemanticCachePayload) -> Result<()> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        analysis.semantic_cache = Some(
            serde_json::to_value(payload)
                .map_err(|e| Error::corrupt_payload("semantic_cache".to_owned(), e.to_string()))?,
        );
        analysis.updated_at = chrono::Utc::now().timestamp();
        self.analyses.update(&analysis).await
    }

    fn decode_points(
        repository_id: &str,
        commit_sha: &str,
        raw: Vec<mcb_domain::value_objects::SearchResult>,
    ) -> Vec<ClusterPoint> {
        let mut points = Vec::with_capacity(raw.len());
        for hit in raw {
            let payload: VectorIndexPayload = match serde_json::from_value(hit.metadata) {
                Ok(p) => p,
                Err(e) => {
                    warn!(point_id = %hit.id, error = %e, "skipping vector point with corrupt payload");
                    continue;
                }
            };
            if payload.repository_id != repository_id || payload.commit_sha != commit_sha {
                continue;
            }
            if !matches!(payload.chunk_type, ChunkType::Function | ChunkType::Method) {
                continue;
            }
            let term_freq = Self::term_frequencies(&payload.content);
            points.push(ClusterPoint { id: hit.id, payload, term_freq });
        }
        points
    }

    fn term_frequencies(content: &str) -> HashMap<String, f64> {
        let mut freq: HashMap<String, f64> = HashMap::new();
        for token in content.split(|c: char| !c.is_alphanumeric()) {
            if token.len() < 3 {
                continue;
            }
            *freq.entry(token.to_lowercase()).or_insert(0.0) += 1.0;
        }
        freq
    }

    fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
        let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let dot: f64 = shorter.iter().filter_map(|(k, va)| longer.get(k).map(|vb| va * vb)).sum();
        let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    /// DBSCAN over cosine similarity between chunk term-frequency vectors.
    /// Returns one cluster id per point in `points`' order, `-1` for
    /// outliers. `O(n^2)`, bounded by [`CLUSTER_VECTOR_FETCH_LIMIT`].
    fn cluster_points(points: &[ClusterPoint]) -> Vec<i64> {
        let n = points.len();
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if Self::cosine_similarity(&points[i].term_freq, &points[j].term_freq) >= CLUSTER_NEIGHBOR_SIMILARITY {
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                }
            }
        }

        let mut assignment = vec![-1i64; n];
        let mut visited = vec![false; n];
        let mut next_cluster_id = 0i64;

        for i in 0..n {
            if visited[i] || neighbors[i].len() + 1 < CLUSTER_MIN_POINTS {
                continue;
            }
            visited[i] = true;
            let cluster_id = next_cluster_id;
            next_cluster_id += 1;
            assignment[i] = cluster_id;

            let mut queue: VecDeque<usize> = neighbors[i].iter().copied().collect();
            while let Some(p) = queue.pop_front() {
                if assignment[p] < 0 {
                    assignment[p] = cluster_id;
                }
                if visited[p] {
                    continue;
                }
                visited[p] = true;
                if neighbors[p].len() + 1 >= CLUSTER_MIN_POINTS {
                    queue.extend(neighbors[p].iter().copied());
                }
            }
        }

        assignment
    }

    fn summarize_clusters(points: &[ClusterPoint], assignments: &[i64]) -> Vec<ClusterSummary> {
        let mut by_cluster: HashMap<i64, Vec<usize>> = HashMap::new();
        for (i, &cluster_id) in assignments.iter().enumerate() {
            if cluster_id >= 0 {
                by_cluster.entry(cluster_id).or_default().push(i);
            }
        }

        let mut summaries: Vec<ClusterSummary> = by_cluster
            .into_iter()
            .map(|(cluster_id, indices)| {
                let mut file_paths: Vec<String> =
                    indices.iter().map(|&i| points[i].payload.file_path.clone()).collect();
                file_paths.sort();
                file_paths.dedup();
                let common_prefix = Self::common_directory(&file_paths);
                ClusterSummary { cluster_id: cluster_id.to_string(), size: indices.len(), file_paths, common_prefix }
            })
            .collect();
        summaries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.cluster_id.cmp(&b.cluster_id)));
        summaries
    }

    fn common_directory(file_paths: &[String]) -> Option<String> {
        let first = file_paths.first()?;
        let mut prefix: Vec<&str> = first.split('/').collect();
        prefix.pop();
        for path in &file_paths[1..] {
            let parts: Vec<&str> = path.split('/').collect();
            let shared = prefix.iter().zip(parts.iter()).take_while(|(a, b)| a == b).count();
            prefix.truncate(shared);
            if prefix.is_empty() {
                return None;
            }
        }
        if prefix.is_empty() { None } else { Some(prefix.join("/")) }
    }

    async fn write_back_cluster_ids(
        &self,
        collection: &StoreCollectionId,
        points: &[ClusterPoint],
        assignments: &[i64],
    ) {
        for (point, &cluster_id) in points.iter().zip(assignments.iter()) {
            if cluster_id < 0 {
                continue;
            }
            if let Err(e) =
                self.vector_store.set_cluster_id(collection, &point.id, &cluster_id.to_string()).await
            {
                warn!(point_id = %point.id, error = %e, "failed to write back cluster_id");
            }
        }
    }

    fn classify_layer(file_path: &str) -> &'static str {
        let lower = file_path.to_lowercase();
        if Self::is_test_file(&lower) {
            "tests"
        } else if lower.contains("model") {
            "models"
        } else if lower.contains("service") {
            "services"
        } else if lower.contains("api") || lower.contains("handler") || lower.contains("route") {
            "api"
        } else if lower.contains("worker") {
            "workers"
        } else if UTILITY_DIR_PATTERNS.iter().any(|p| lower.contains(p)) {
            "utils"
        } else {
            "unknown"
        }
    }

    fn is_test_file(file_path: &str) -> bool {
        file_path.to_lowercase().contains("test")
    }

    async fn detect_dead_code(
        &self,
        analysis_id: &str,
        workspace_root: &Path,
        points: &[ClusterPoint],
        outlier_indices: &[usize],
    ) -> Result<Vec<DeadCodeFinding>> {
        let entry_patterns: Vec<String> = ENTRY_POINT_PATTERNS.iter().map(|p| (*p).to_owned()).collect();

        let mut file_counts: HashMap<&str, usize> = HashMap::new();
        for p in points {
            *file_counts.entry(p.payload.file_path.as_str()).or_insert(0) += 1;
        }
        let total_points = points.len().max(1);

        let now = chrono::Utc::now().timestamp();
        let mut findings = Vec::new();

        for &i in outlier_indices {
            let payload = &points[i].payload;
            if Self::is_test_file(&payload.file_path) {
                continue;
            }
            let name = payload.name.clone().unwrap_or_else(|| "<anonymous>".to_owned());
            let node = CallGraphNode {
                file_path: payload.file_path.clone(),
                name: name.clone(),
                line: payload.line_start,
            };

            let (is_dead, confidence) =
                match self.call_graph.is_reachable(workspace_root, &node, &entry_patterns) {
                    Ok(reachable) => (!reachable, DEAD_CODE_CONFIDENCE_PROVEN),
                    Err(_) => {
                        if Self::classify_layer(&payload.file_path) == "utils" {
                            // Heuristic-only signal over a directory that's
                            // conventionally a public export surface is more
                            // likely a false positive than real dead code.
                            continue;
                        }
                        (true, DEAD_CODE_CONFIDENCE_HEURISTIC)
                    }
                };
            if !is_dead {
                continue;
            }

            let line_count = f64::from(payload.line_count);
            let size_component = (line_count / IMPACT_LINE_COUNT_SCALE).min(1.0);
            let centrality = (*file_counts.get(payload.file_path.as_str()).unwrap_or(&0) as f64
                / total_points as f64)
                .min(1.0);
            let impact_score =
                IMPACT_LINE_COUNT_WEIGHT * size_component + (1.0 - IMPACT_LINE_COUNT_WEIGHT) * centrality;

            findings.push(DeadCodeFinding {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                analysis_id: analysis_id.to_owned(),
                file_path: payload.file_path.clone(),
                line: payload.line_start,
                item_type: payload.chunk_type.to_string(),
                name,
                impact_score,
                confidence,
                is_dismissed: false,
                created_at: now,
            });
        }

        Ok(findings)
    }

    async fn detect_hot_spots(&self, analysis_id: &str, workspace_root: &Path) -> Result<Vec<FileChurnFinding>> {
        let churn = self.git_analyzer.file_churn(workspace_root, CHURN_WINDOW_DAYS).await?;
        let now = chrono::Utc::now().timestamp();
        let mut findings = Vec::with_capacity(churn.len());

        for stat in churn {
            if stat.changes <= HOT_SPOT_CHANGE_THRESHOLD {
                continue;
            }
            let coverage_rate = self.coverage.coverage_for_file(workspace_root, &stat.file_path).await?;
            let coverage_for_score = coverage_rate.unwrap_or(RISK_UNKNOWN_COVERAGE_ASSUMPTION);

            let churn_component = (f64::from(stat.changes) / RISK_CHURN_SCALE).min(1.0);
            let authors_component = (f64::from(stat.unique_authors) / RISK_AUTHORS_SCALE).min(1.0);
            let risk_score = RISK_CHURN_WEIGHT * churn_component
                + RISK_COVERAGE_WEIGHT * (1.0 - coverage_for_score)
                + RISK_AUTHORS_WEIGHT * authors_component;

            let mut risk_factors = Vec::new();
            if churn_component >= 0.5 {
                risk_factors.push("high churn".to_owned());
            }
            if coverage_for_score < 0.5 {
                risk_factors.push("low coverage".to_owned());
            }
            if stat.unique_authors <= 1 {
                risk_factors.push("single author".to_owned());
            }

            findings.push(FileChurnFinding {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                analysis_id: analysis_id.to_owned(),
                file_path: stat.file_path,
                changes_90d: stat.changes,
                coverage_rate,
                unique_authors: stat.unique_authors,
                risk_factors,
                risk_score,
                created_at: now,
            });
        }

        Ok(findings)
    }

    async fn generate_insights(
        &self,
        analysis_id: &str,
        commit_sha: &str,
        clusters: &[ClusterSummary],
        outlier_file_paths: &[String],
        dead_code: &[DeadCodeFinding],
        hot_spots: &[FileChurnFinding],
    ) -> Vec<SemanticAiInsight> {
        let now = chrono::Utc::now().timestamp();
        let mut insights = Vec::new();

        for cluster in clusters.iter().take(MAX_NARRATED_CLUSTERS) {
            let body = format!(
                "{} files cluster around {}.",
                cluster.size,
                cluster.common_prefix.as_deref().unwrap_or("a shared theme, no common directory"),
            );
            insights.push(SemanticAiInsight {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                analysis_id: analysis_id.to_owned(),
                insight_type: InsightType::ClusterSummary,
                title: format!("Cluster {}", cluster.cluster_id),
                body,
                cluster_id: Some(cluster.cluster_id.clone()),
                file_paths: cluster.file_paths.clone(),
                priority: InsightPriority::Low,
                created_at: now,
            });
        }

        if !outlier_file_paths.is_empty() {
            insights.push(SemanticAiInsight {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                analysis_id: analysis_id.to_owned(),
                insight_type: InsightType::Outlier,
                title: "Architectural outliers".to_owned(),
                body: format!(
                    "{} file(s) did not fit any architecture cluster: {}.",
                    outlier_file_paths.len(),
                    outlier_file_paths.join(", "),
                ),
                cluster_id: None,
                file_paths: outlier_file_paths.to_vec(),
                priority: InsightPriority::Medium,
                created_at: now,
            });
        }

        if !dead_code.is_empty() || !hot_spots.is_empty() {
            let prompt = format!(
                "Commit {commit_sha}: {} dead-code candidate(s), {} hot-spot file(s). \
                 Summarize the most pressing follow-up in two sentences.",
                dead_code.len(),
                hot_spots.len(),
            );
            let body = match self
                .llm
                .complete(
                    "You are a senior engineer summarizing a codebase health report.",
                    &[LlmMessage::user(prompt)],
                    Duration::from_secs(INSIGHT_MODEL_TIMEOUT_SECS),
                )
                .await
            {
                Ok(response) if response.content.as_deref().is_some_and(|c| !c.is_empty()) => {
                    response.content.unwrap_or_default()
                }
                _ => format!(
                    "{} dead-code candidate(s) and {} hot-spot file(s) flagged; review before the next release.",
                    dead_code.len(),
                    hot_spots.len(),
                ),
            };
            insights.push(SemanticAiInsight {
                id: uuid::Uuid::new_v4().to_string(),
                org_id: String::new(),
                analysis_id: analysis_id.to_owned(),
                insight_type: InsightType::Recommendation,
                title: "Recommended follow-up".to_owned(),
                body,
                cluster_id: None,
                file_paths: Vec::new(),
                priority: InsightPriority::High,
                created_at: now,
            });
        }

        insights
    }
}
