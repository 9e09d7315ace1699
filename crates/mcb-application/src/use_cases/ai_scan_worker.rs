//! AI Scan Worker: multi-model broad scan, cross-model dedup merge, and
//! optional tool-calling investigation of high-severity findings (§4.5).
//!
//! Three phases, each a hard boundary: **Broad Scan** fans out a size-bounded
//! repository digest to every configured model concurrently; **Merge**
//! deduplicates the resulting candidate issues by title/file/dimension
//! similarity; **Investigate** runs a bounded tool-calling agent over the
//! issues severe enough to warrant it. The whole pipeline runs independently
//! of the other three tracks — it clones its own scratch checkout and shares
//! nothing with the Embeddings Worker or Cluster Analyzer.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use ignore::WalkBuilder;
use mcb_domain::entities::analysis::AiScanStatus;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::providers::{
    LlmMessage, LlmProvider, LlmToolCall, LlmToolSpec, SandboxExecutor, VcsProvider,
};
use mcb_domain::ports::repositories::AnalysisRepository;
use mcb_domain::value_objects::{
    AI_SCAN_CACHE_SCHEMA_VERSION, AiScanCachePayload, InvestigationResult, MergedIssueResult,
    ToolCallTrace,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::analysis_state_service::AnalysisStateService;
use crate::constants::{
    CONFIG_FILE_NAMES, CONSENSUS_BOOST_PER_MODEL, ENTRY_POINT_PATTERNS, EXCERPT_SIZE,
    MAX_FILE_SIZE, MAX_INVESTIGATION_ITERATIONS, SANDBOX_COMMAND_TIMEOUT_SECS, SIMILARITY_THRESHOLD,
    SKIP_DIRS, BROAD_SCAN_MODEL_TIMEOUT_SECS,
};

/// Cap on how many files are folded into the broad-scan digest, to bound
/// prompt size on large repositories. Dropped files are logged, never
/// silently omitted.
const MAX_DIGEST_FILES: usize = 300;

/// System prompt sent with every broad-scan model call, demanding
/// structured JSON output of candidate issues.
const BROAD_SCAN_SYSTEM_PROMPT: &str = "You are a senior code reviewer. Given a repository \
digest, respond with ONLY a JSON array of candidate issues, no prose, no markdown fences. \
Each element: {\"dimension\": string, \"severity\": \"info\"|\"warning\"|\"error\"|\"critical\", \
\"title\": string, \"description\": string, \"file\": string|null, \"line_start\": number|null, \
\"line_end\": number|null, \"confidence\": number between 0 and 1, \"evidence\": string}.";

/// One issue as reported by a single model, before merge.
#[derive(Debug, Clone, Deserialize)]
struct CandidateIssue {
    dimension: String,
    severity: String,
    title: String,
    description: String,
    file: Option<String>,
    line_start: Option<u32>,
    line_end: Option<u32>,
    confidence: f64,
    #[allow(dead_code)]
    evidence: String,
}

/// A candidate issue tagged with the model that produced it.
struct AttributedCandidate {
    model_id: String,
    issue: CandidateIssue,
}

/// Runs the AI Scan track end to end for one analysis.
pub struct AiScanWorker<R, E>
where
    R: AnalysisRepository,
    E: EventBusProvider,
{
    analyses: Arc<R>,
    state: Arc<AnalysisStateService<R, E>>,
    vcs: Arc<dyn VcsProvider>,
    broad_scan_models: Vec<Arc<dyn LlmProvider>>,
    investigator: Arc<dyn LlmProvider>,
    sandbox: Arc<dyn SandboxExecutor>,
}

impl<R, E> AiScanWorker<R, E>
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
        broad_scan_models: Vec<Arc<dyn LlmProvider>>,
        investigator: Arc<dyn LlmProvider>,
        sandbox: Arc<dyn SandboxExecutor>,
    ) -> Self {
        Self { analyses, state, vcs, broad_scan_models, investigator, sandbox }
    }

    /// Run the AI Scan track for `analysis_id` against
    /// `(repository_id, commit_sha)`.
    ///
    /// # Errors
    /// Propagates clone and repository-update failures after recording them
    /// on the AI Scan track. A model that fails or times out does not fail
    /// the track; it simply contributes nothing to the broad scan.
    pub async fn run(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<()> {
        self.state.transition_ai_scan(analysis_id, AiScanStatus::Running, Some(0), None).await?;
        self.state.heartbeat(analysis_id).await?;

        match self.run_inner(analysis_id, repository_id, commit_sha).await {
            Ok(payload) => {
                self.persist_cache_blob(analysis_id, &payload).await?;
                self.state.transition_ai_scan(analysis_id, AiScanStatus::Completed, Some(100), None).await?;
                Ok(())
            }
            Err(e) => {
                let _ = self
                    .state
                    .transition_ai_scan(analysis_id, AiScanStatus::Failed, None, Some(e.to_string()))
                    .await;
                Err(e)
            }
        }
    }

    async fn run_inner(&self, analysis_id: &str, repository_id: &str, commit_sha: &str) -> Result<AiScanCachePayload> {
        let workspace_root = self.vcs.clone_at_commit(repository_id, commit_sha).await?;

        let digest = Self::build_digest(&workspace_root);
        let candidates = self.run_broad_scan(analysis_id, &digest).await;
        self.state.heartbeat(analysis_id).await?;
        self.state.transition_ai_scan(analysis_id, AiScanStatus::Running, Some(50), None).await?;

        let mut issues = Self::merge_candidates(candidates);
        self.investigate(analysis_id, &workspace_root, &mut issues).await?;

        if let Err(e) = tokio::fs::remove_dir_all(&workspace_root).await {
            warn!(path = %workspace_root.display(), error = %e, "failed to clean up AI scan scratch directory");
        }

        info!(analysis_id, repository_id, commit_sha, issues = issues.len(), "AI scan track complete");

        Ok(AiScanCachePayload {
            schema_version: AI_SCAN_CACHE_SCHEMA_VERSION,
            commit_sha: commit_sha.to_owned(),
            generated_at: chrono::Utc::now().timestamp(),
            models_consulted: self.broad_scan_models.iter().map(|m| m.model_id().to_owned()).collect(),
            candidate_count: issues.iter().map(|i| i.supporting_models.len()).sum(),
            issues,
        })
    }

    async fn persist_cache_blob(&self, analysis_id: &str, payload: &AiScanCachePayload) -> Result<()> {
        let mut analysis = self.analyses.get_by_id(analysis_id).await?;
        analysis.ai_scan_cache = Some(
            serde_json::to_value(payload)
                .map_err(|e| Error::corrupt_payload("ai_scan_cache".to_owned(), e.to_string()))?,
        );
        analysis.updated_at = chrono::Utc::now().timestamp();
        self.analyses.update(&analysis).await
    }

    fn build_digest(workspace_root: &Path) -> String {
        let mut config_files = Vec::new();
        let mut entry_files = Vec::new();
        let mut other_files = Vec::new();

        let walker = WalkBuilder::new(workspace_root)
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
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let relative = path
                .strip_prefix(workspace_root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");

            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if CONFIG_FILE_NAMES.contains(&file_name) {
                config_files.push(relative);
            } else if ENTRY_POINT_PATTERNS.iter().any(|p| relative.to_lowercase().contains(p)) {
                entry_files.push(relative);
            } else {
                other_files.push(relative);
            }
        }

        let total_candidates = config_files.len() + entry_files.len() + other_files.len();
        let mut ordered: Vec<String> = config_files.into_iter().chain(entry_files).chain(other_files).collect();
        if ordered.len() > MAX_DIGEST_FILES {
            warn!(
                total = total_candidates,
                included = MAX_DIGEST_FILES,
                "broad-scan digest truncated to file cap"
            );
            ordered.truncate(MAX_DIGEST_FILES);
        }

        let mut digest = String::new();
        for relative in ordered {
            let Ok(content) = std::fs::read_to_string(workspace_root.join(&relative)) else {
                continue;
            };
            let excerpt: String = if content.len() > MAX_FILE_SIZE {
                content.chars().take(EXCERPT_SIZE).collect()
            } else {
                content
            };
            digest.push_str(&format!("=== {relative} ===\n{excerpt}\n\n"));
        }
        digest
    }

    async fn run_broad_scan(&self, analysis_id: &str, digest: &str) -> Vec<AttributedCandidate> {
        let system_prompt = BROAD_SCAN_SYSTEM_PROMPT;
        let message = LlmMessage::user(digest.to_owned());
        let timeout = Duration::from_secs(BROAD_SCAN_MODEL_TIMEOUT_SECS);

        let calls = self.broad_scan_models.iter().map(|model| {
            let model = Arc::clone(model);
            let message = message.clone();
            async move {
                let model_id = model.model_id().to_owned();
                let result = model.complete(system_prompt, std::slice::from_ref(&message), timeout).await;
                (model_id, result)
            }
        });

        let results = join_all(calls).await;
        let mut candidates = Vec::new();
        for (model_id, result) in results {
            match result {
                Ok(response) => match Self::parse_candidates(response.content.as_deref().unwrap_or_default()) {
                    Ok(parsed) => {
                        for issue in parsed {
                            candidates.push(AttributedCandidate { model_id: model_id.clone(), issue });
                        }
                    }
                    Err(e) => {
                        warn!(model = %model_id, error = %e, "broad scan model returned malformed JSON, skipping");
                    }
                },
                Err(e) => {
                    warn!(model = %model_id, error = %e, "broad scan model call failed, skipping");
                }
            }
        }

        let _ = self.state.heartbeat(analysis_id).await;
        candidates
    }

    fn parse_candidates(content: &str) -> std::result::Result<Vec<CandidateIssue>, serde_json::Error> {
        let trimmed = content.trim().trim_start_matches("```json").trim_start_matches("```").trim_end_matches("```");
        serde_json::from_str(trimmed.trim())
    }

    fn normalized_title(title: &str) -> String {
        title.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn line_range_overlap(a: (Option<u32>, Option<u32>), b: (Option<u32>, Option<u32>)) -> f64 {
        match (a, b) {
            ((Some(a_start), Some(a_end)), (Some(b_start), Some(b_end))) => {
                let start = a_start.max(b_start);
                let end = a_end.min(b_end);
                if start > end {
                    0.0
                } else {
                    let overlap = f64::from(end - start + 1);
                    let widest = f64::from(a_end.saturating_sub(a_start).max(b_end.saturating_sub(b_start)) + 1);
                    (overlap / widest).min(1.0)
                }
            }
            ((None, None), (None, None)) => 1.0,
            _ => 0.0,
        }
    }

    /// Composite similarity over `(normalized_title, file, dimension,
    /// line_range_overlap)`, approximating the distilled spec's
    /// sequence-ratio metric with `strsim::normalized_levenshtein` over
    /// normalized titles (no Ratcliff/Obershelp implementation exists in the
    /// dependency set available to this workspace).
    fn similarity(a: &CandidateIssue, b: &CandidateIssue) -> f64 {
        let title_sim =
            strsim::normalized_levenshtein(&Self::normalized_title(&a.title), &Self::normalized_title(&b.title));
        let dimension_match = if a.dimension.eq_ignore_ascii_case(&b.dimension) { 1.0 } else { 0.0 };
        let file_match = match (&a.file, &b.file) {
            (Some(fa), Some(fb)) => f64::from(u8::from(fa == fb)),
            (None, None) => 1.0,
            _ => 0.0,
        };
        let line_overlap = Self::line_range_overlap((a.line_start, a.line_end), (b.line_start, b.line_end));

        0.6 * title_sim + 0.2 * dimension_match + 0.1 * file_match + 0.1 * line_overlap
    }

    /// Greedy single-pass clustering: each candidate joins the first
    /// existing merged issue it matches `SIMILARITY_THRESHOLD` against, or
    /// seeds a new one. Order-dependent but deterministic given stable model
    /// iteration order, and consistent with the distilled spec's pairwise
    /// merge semantics (no global optimum is specified).
    fn merge_candidates(candidates: Vec<AttributedCandidate>) -> Vec<MergedIssueResult> {
        struct Group {
            best: CandidateIssue,
            supporting_models: Vec<String>,
        }

        let mut groups: Vec<Group> = Vec::new();
        for candidate in candidates {
            let existing = groups
                .iter_mut()
                .find(|g| Self::similarity(&g.best, &candidate.issue) >= SIMILARITY_THRESHOLD);

            match existing {
                Some(group) => {
                    if candidate.issue.confidence > group.best.confidence {
                        group.best = candidate.issue;
                    }
                    if !group.supporting_models.contains(&candidate.model_id) {
                        group.supporting_models.push(candidate.model_id);
                    }
                }
                None => {
                    groups.push(Group { best: candidate.issue, supporting_models: vec![candidate.model_id] });
                }
            }
        }

        groups
            .into_iter()
            .map(|g| {
                let boost = CONSENSUS_BOOST_PER_MODEL * f64::from(u32::try_from(g.supporting_models.len() - 1).unwrap_or(0));
                MergedIssueResult {
                    dimension: g.best.dimension,
                    severity: g.best.severity,
                    title: g.best.title,
                    description: g.best.description,
                    file: g.best.file,
                    line_start: g.best.line_start,
                    line_end: g.best.line_end,
                    confidence: (g.best.confidence + boost).min(1.0),
                    supporting_models: g.supporting_models,
                    investigation: None,
                }
            })
            .collect()
    }

    async fn investigate(&self, analysis_id: &str, workspace_root: &Path, issues: &mut [MergedIssueResult]) -> Result<()> {
        let investigable: Vec<usize> = issues
            .iter()
            .enumerate()
            .filter(|(_, i)| i.severity.eq_ignore_ascii_case("critical") || i.severity.eq_ignore_ascii_case("high"))
            .map(|(idx, _)| idx)
            .collect();

        let total = investigable.len().max(1);
        for (n, idx) in investigable.into_iter().enumerate() {
            let result = self.run_investigation(workspace_root, &issues[idx]).await;
            issues[idx].investigation = Some(result);

            let progress = 50 + u8::try_from(((n + 1) * 50 / total).min(50)).unwrap_or(50);
            self.state.transition_ai_scan(analysis_id, AiScanStatus::Running, Some(progress), None).await?;
            self.state.heartbeat(analysis_id).await?;
        }
        Ok(())
    }

    fn investigation_tools() -> Vec<LlmToolSpec> {
        vec![
            LlmToolSpec {
                name: "read_file".to_owned(),
                description: "Read a file's content, optionally restricted to a line range.".to_owned(),
                parameters_schema: json!({
                    "type": "object",
                    "properties": {
                        "path": {"type": "string"},
                        "line_start": {"type": "integer"},
                        "line_end": {"type": "integer"},
                    },
                    "required": ["path"],
                }),
            },
            LlmToolSpec {
                name: "search".to_owned(),
                description: "Search file contents for a substring, optionally scoped to a path glob.".to_owned(),
                parameters_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {"type": "string"},
                        "path_glob": {"type": "string"},
                    },
                    "required": ["query"],
                }),
            },
            LlmToolSpec {
                name: "cli_run".to_owned(),
                description: "Run a shell command in a sandboxed, network-isolated directory.".to_owned(),
                parameters_schema: json!({
                    "type": "object",
                    "properties": {"command": {"type": "string"}},
                    "required": ["command"],
                }),
            },
        ]
    }

    async fn run_investigation(&self, workspace_root: &Path, issue: &MergedIssueResult) -> InvestigationResult {
        let tools = Self::investigation_tools();
        let system_prompt = "You are investigating a reported code issue. Use the available tools to \
            confirm or refute it, then reply with a JSON object {\"verdict\": \"confirmed\"|\"refuted\"|\"inconclusive\", \
            \"explanation\": string} and no further tool calls.";

        let mut messages = vec![LlmMessage::user(format!(
            "Issue: {} ({}). {}\nFile: {}. Lines: {:?}-{:?}.",
            issue.title,
            issue.dimension,
            issue.description,
            issue.file.as_deref().unwrap_or("<repository-wide>"),
            issue.line_start,
            issue.line_end,
        ))];
        let mut trace = Vec::new();

        for _ in 0..MAX_INVESTIGATION_ITERATIONS {
            let response = match self
                .investigator
                .complete_with_tools(system_prompt, &messages, &tools, Duration::from_secs(SANDBOX_COMMAND_TIMEOUT_SECS))
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    return InvestigationResult {
                        verdict: "inconclusive".to_owned(),
                        explanation: format!("investigator call failed: {e}"),
                        trace,
                    };
                }
            };

            if !response.wants_tool_calls() {
                return Self::parse_verdict(response.content.as_deref().unwrap_or_default(), trace);
            }

            for call in &response.tool_calls {
                let started = Instant::now();
                let output = self.dispatch_tool(workspace_root, call).await;
                trace.push(ToolCallTrace {
                    tool: call.name.clone(),
                    input: call.arguments.clone(),
                    output: output.clone(),
                    duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                });
                messages.push(LlmMessage::tool_result(call.id.clone(), output));
            }
        }

        InvestigationResult {
            verdict: "inconclusive".to_owned(),
            explanation: "investigation exceeded its iteration budget".to_owned(),
            trace,
        }
    }

    fn parse_verdict(content: &str, trace: Vec<ToolCallTrace>) -> InvestigationResult {
        #[derive(Deserialize)]
        struct Verdict {
            verdict: String,
            explanation: String,
        }

        let trimmed = content.trim().trim_start_matches("```json").trim_start_matches("```").trim_end_matches("```");
        match serde_json::from_str::<Verdict>(trimmed.trim()) {
            Ok(v) => InvestigationResult { verdict: v.verdict, explanation: v.explanation, trace },
            Err(_) => InvestigationResult { verdict: "inconclusive".to_owned(), explanation: content.to_owned(), trace },
        }
    }

    async fn dispatch_tool(&self, workspace_root: &Path, call: &LlmToolCall) -> String {
        match call.name.as_str() {
            "read_file" => self.tool_read_file(workspace_root, &call.arguments),
            "search" => self.tool_search(workspace_root, &call.arguments),
            "cli_run" => self.tool_cli_run(workspace_root, &call.arguments).await,
            other => format!("unknown tool: {other}"),
        }
    }

    fn tool_read_file(&self, workspace_root: &Path, args: &Value) -> String {
        let Some(path) = args.get("path").and_then(Value::as_str) else {
            return "missing required argument: path".to_owned();
        };
        let Ok(content) = std::fs::read_to_string(workspace_root.join(path)) else {
            return format!("file not found or not readable: {path}");
        };
        let line_start = args.get("line_start").and_then(Value::as_u64).unwrap_or(1) as usize;
        let line_end = args.get("line_end").and_then(Value::as_u64).map(|v| v as usize);

        let lines: Vec<&str> = content.lines().collect();
        let start = line_start.saturating_sub(1).min(lines.len());
        let end = line_end.unwrap_or(lines.len()).min(lines.len());
        lines[start..end.max(start)].join("\n")
    }

    fn tool_search(&self, workspace_root: &Path, args: &Value) -> String {
        let Some(query) = args.get("query").and_then(Value::as_str) else {
            return "missing required argument: query".to_owned();
        };
        let path_glob = args.get("path_glob").and_then(Value::as_str);
        let query_lower = query.to_lowercase();

        let mut hits = Vec::new();
        let walker = WalkBuilder::new(workspace_root)
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
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(workspace_root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            if let Some(glob) = path_glob {
                if !relative.contains(glob.trim_matches('*')) {
                    continue;
                }
            }
            let Ok(content) = std::fs::read_to_string(entry.path()) else { continue };
            for (line_no, line) in content.lines().enumerate() {
                if line.to_lowercase().contains(&query_lower) {
                    hits.push(format!("{relative}:{}: {}", line_no + 1, line.trim()));
                    if hits.len() >= 50 {
                        return hits.join("\n");
                    }
                }
            }
        }
        if hits.is_empty() { "no matches".to_owned() } else { hits.join("\n") }
    }

    async fn tool_cli_run(&self, workspace_root: &Path, args: &Value) -> String {
        let Some(command) = args.get("command").and_then(Value::as_str) else {
            return "missing required argument: command".to_owned();
        };
        match self
            .sandbox
            .run(workspace_root, command, Duration::from_secs(SANDBOX_COMMAND_TIMEOUT_SECS))
            .await
        {
            Ok(outcome) if outcome.timed_out => "command timed out".to_owned(),
            Ok(outcome) => format!(
                "exit_code={:?}\nstdout:\n{}\nstderr:\n{}",
                outcome.exit_code, outcome.stdout, outcome.stderr
            ),
            Err(e) => format!("sandbox execution failed: {e}"),
        }
    }
}
