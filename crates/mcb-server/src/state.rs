//! Composition root for the Analysis Execution Core HTTP service.
//!
//! Mirrors the shape of `mcb-infrastructure::di::bootstrap::init_app`
//! (resolve providers through the linkme registry, wrap each in an `Arc`,
//! assemble the use cases over them) but is self-contained: the old
//! `AppContext` wires up the MCP tool surface this service doesn't expose,
//! so `AnalysisServerState` builds only what the analysis HTTP routes need.

use std::sync::Arc;
use std::time::Duration;

use mcb_application::use_cases::ai_scan_worker::AiScanWorker;
use mcb_application::use_cases::analysis_dispatcher::PipelineDispatcher;
use mcb_application::use_cases::analysis_state_service::AnalysisStateService;
use mcb_application::use_cases::cluster_analyzer::ClusterAnalyzer;
use mcb_application::use_cases::embeddings_worker::EmbeddingsWorker;
use mcb_application::use_cases::repo_content_cache_service::RepoContentCacheService;
use mcb_application::use_cases::static_analysis_worker::StaticAnalysisWorker;
use mcb_application::constants::DEFAULT_EMBEDDINGS_COLLECTION;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::EventBusProvider;
use mcb_domain::ports::providers::vector_store::StoreCollectionId;
use mcb_domain::ports::providers::{LlmProvider, SandboxExecutor, TaskRunnerProvider, VcsProvider};
use mcb_domain::ports::repositories::{
    DeadCodeFindingRepository, FileChurnFindingRepository, IssueRepository,
    RepoContentCacheRepository, SemanticAiInsightRepository,
};
use mcb_domain::registry::llm::{LlmProviderConfig, resolve_llm_provider};
use mcb_domain::registry::object_storage::{ObjectStorageProviderConfig, resolve_object_storage_provider};
use mcb_infrastructure::config::{AnalysisModelConfig, AppConfig};
use mcb_infrastructure::di::database_resolver::DatabaseProviderResolver;
use mcb_infrastructure::di::provider_resolvers::{
    EmbeddingProviderResolver, EventBusProviderResolver, LanguageProviderResolver,
    TaskRunnerProviderResolver, VcsProviderResolver, VectorStoreProviderResolver,
};
use mcb_infrastructure::rate_limit::RateLimiter;
use mcb_providers::analysis::{LcovCoverageProvider, NativeCallGraphAnalyzer};
use mcb_providers::database::sqlite::{
    SqliteAnalysisRepository, SqliteDeadCodeFindingRepository, SqliteFileChurnFindingRepository,
    SqliteIssueRepository, SqliteRepoContentCacheRepository, SqliteSemanticAiInsightRepository,
};
use mcb_providers::git::Git2GitAnalyzer;
use mcb_providers::sandbox::ProcessSandboxExecutor;

/// Analysis run repository used throughout this service; concrete so
/// `AnalysisStateService`/`PipelineDispatcher` can be named without a `dyn`
/// indirection on the hottest path (every status transition).
pub type AnalysisRepo = SqliteAnalysisRepository;

/// The composition root's per-track worker types, generic over the concrete
/// repository and event bus this service resolves.
pub type Dispatcher = PipelineDispatcher<AnalysisRepo, dyn EventBusProvider, dyn VcsProvider, dyn TaskRunnerProvider>;
pub type StateService = AnalysisStateService<AnalysisRepo, dyn EventBusProvider>;
pub type StaticAnalysis = StaticAnalysisWorker<AnalysisRepo, dyn EventBusProvider>;
pub type Embeddings = EmbeddingsWorker<AnalysisRepo, dyn EventBusProvider>;
pub type ClusterAnalysis = ClusterAnalyzer<AnalysisRepo, dyn EventBusProvider>;
pub type AiScan = AiScanWorker<AnalysisRepo, dyn EventBusProvider>;

/// Everything an Axum handler needs to serve the Analysis Execution Core
/// API, cloned cheaply (every field is an `Arc`) into each request.
///
/// The four track workers are exposed directly (rather than only through
/// the dispatcher) because `POST /analyses` builds the `TrackJob` closures
/// passed to [`Dispatcher::trigger`] itself — the dispatcher only knows how
/// to enqueue and track progress, not which concrete worker backs each job.
#[derive(Clone)]
pub struct AnalysisServerState {
    pub config: Arc<AppConfig>,
    pub dispatcher: Arc<Dispatcher>,
    pub state_service: Arc<StateService>,
    pub static_worker: Arc<StaticAnalysis>,
    pub embeddings_worker: Arc<Embeddings>,
    pub cluster_analyzer: Arc<ClusterAnalysis>,
    pub ai_scan_worker: Arc<AiScan>,
    pub analyses: Arc<AnalysisRepo>,
    pub issues: Arc<SqliteIssueRepository>,
    pub dead_code_findings: Arc<SqliteDeadCodeFindingRepository>,
    pub file_churn_findings: Arc<SqliteFileChurnFindingRepository>,
    pub semantic_ai_insights: Arc<SqliteSemanticAiInsightRepository>,
    pub repo_content_cache: Arc<SqliteRepoContentCacheRepository>,
    pub event_bus: Arc<dyn EventBusProvider>,
    pub vcs: Arc<dyn VcsProvider>,
    pub rate_limiter: Arc<RateLimiter>,
}

/// Picks the LLM connection details for one registered model by looking up
/// its id in `providers.llm.configs` (the shape every other provider family
/// in this config uses: a lean pointer in the model registry, full
/// connection detail in the named-configs map).
fn llm_provider_config(config: &AppConfig, model: &AnalysisModelConfig) -> LlmProviderConfig {
    let named = config.providers.llm.configs.get(&model.id);
    let mut cfg = LlmProviderConfig::new(&model.provider);
    cfg.model_id = Some(model.id.clone());
    cfg.timeout = Some(Duration::from_secs(model.timeout_s));
    if let Some(named) = named {
        cfg.base_url = named.base_url.clone();
        cfg.api_key = named.api_key.clone();
    }
    cfg
}

fn resolve_object_storage(config: &AppConfig) -> Result<Arc<dyn mcb_domain::ports::providers::ObjectStorageProvider>> {
    let container = &config.providers.object_storage;
    let mut cfg = ObjectStorageProviderConfig::new(container.provider.as_deref().unwrap_or("fs"));
    cfg.root_dir = container.root.clone().or_else(|| Some("./object-storage".to_owned()));
    resolve_object_storage_provider(&cfg)
}

impl AnalysisServerState {
    /// Build the full composition root from a loaded `AppConfig`.
    ///
    /// # Errors
    /// Returns an error if any provider fails to resolve, the database
    /// cannot be reached, or no LLM model is configured for the AI Scan
    /// track (every analysis requests it, so at least one model is
    /// required at startup).
    pub async fn build(config: Arc<AppConfig>) -> Result<Self> {
        let db_resolver = DatabaseProviderResolver::new(Arc::clone(&config));
        let db_path = config.analysis.workspace_root.join("analysis.db");
        let executor = db_resolver.resolve_and_connect(&db_path).await?;

        let analyses = Arc::new(SqliteAnalysisRepository::new(Arc::clone(&executor)));
        let issues = Arc::new(SqliteIssueRepository::new(Arc::clone(&executor)));
        let dead_code_findings = Arc::new(SqliteDeadCodeFindingRepository::new(Arc::clone(&executor)));
        let file_churn_findings = Arc::new(SqliteFileChurnFindingRepository::new(Arc::clone(&executor)));
        let semantic_ai_insights = Arc::new(SqliteSemanticAiInsightRepository::new(Arc::clone(&executor)));
        let repo_content_cache = Arc::new(SqliteRepoContentCacheRepository::new(Arc::clone(&executor)));

        let event_bus = EventBusProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let vcs = VcsProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let tasks = TaskRunnerProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let chunker = LanguageProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let embeddings = EmbeddingProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let vector_store = VectorStoreProviderResolver::new(Arc::clone(&config)).resolve_from_config()?;
        let objects = resolve_object_storage(&config)?;

        let call_graph: Arc<dyn mcb_domain::ports::providers::CallGraphAnalyzer> =
            Arc::new(NativeCallGraphAnalyzer::new());
        let coverage: Arc<dyn mcb_domain::ports::providers::CoverageProvider> =
            Arc::new(LcovCoverageProvider::new("lcov.info"));
        let git_analyzer: Arc<dyn mcb_domain::ports::providers::GitAnalyzer> = Arc::new(Git2GitAnalyzer::new());
        let sandbox: Arc<dyn SandboxExecutor> = Arc::new(ProcessSandboxExecutor::new());

        if config.analysis.models.is_empty() {
            return Err(Error::config(
                "analysis.models must list at least one LLM model for the AI Scan track",
            ));
        }
        let mut broad_scan_models: Vec<Arc<dyn LlmProvider>> = Vec::with_capacity(config.analysis.models.len());
        for model in &config.analysis.models {
            let cfg = llm_provider_config(&config, model);
            broad_scan_models.push(resolve_llm_provider(&cfg)?);
        }
        let investigator_cfg = llm_provider_config(&config, &config.analysis.models[0]);
        let investigator = resolve_llm_provider(&investigator_cfg)?;

        let state_service: Arc<StateService> =
            Arc::new(AnalysisStateService::new(Arc::clone(&analyses), Arc::clone(&event_bus)));

        let dispatcher: Arc<Dispatcher> = Arc::new(PipelineDispatcher::new(
            Arc::clone(&analyses),
            Arc::clone(&vcs),
            Arc::clone(&tasks),
            Arc::clone(&state_service),
        ));

        let static_worker: Arc<StaticAnalysis> = Arc::new(StaticAnalysisWorker::new(
            Arc::clone(&analyses),
            Arc::clone(&state_service),
            Arc::clone(&vcs),
            Arc::clone(&chunker),
            Arc::clone(&issues) as Arc<dyn IssueRepository>,
        ));

        let content_cache_service = Arc::new(RepoContentCacheService::new(
            Arc::clone(&repo_content_cache) as Arc<dyn RepoContentCacheRepository>,
            Arc::clone(&objects),
        ));
        let embeddings_collection = StoreCollectionId::from_name(
            config.providers.vector_store.collection.as_deref().unwrap_or(DEFAULT_EMBEDDINGS_COLLECTION),
        );

        let embeddings_worker: Arc<Embeddings> = Arc::new(EmbeddingsWorker::new(
            Arc::clone(&state_service),
            Arc::clone(&vcs),
            chunker,
            embeddings,
            Arc::clone(&vector_store),
            content_cache_service,
            embeddings_collection.clone(),
        ));

        let cluster_analyzer: Arc<ClusterAnalysis> = Arc::new(ClusterAnalyzer::new(
            Arc::clone(&analyses),
            Arc::clone(&state_service),
            Arc::clone(&vcs),
            Arc::clone(&vector_store),
            call_graph,
            coverage,
            git_analyzer,
            investigator.clone(),
            Arc::clone(&dead_code_findings) as Arc<dyn DeadCodeFindingRepository>,
            Arc::clone(&file_churn_findings) as Arc<dyn FileChurnFindingRepository>,
            Arc::clone(&semantic_ai_insights) as Arc<dyn SemanticAiInsightRepository>,
            embeddings_collection,
        ));

        let ai_scan_worker: Arc<AiScan> = Arc::new(AiScanWorker::new(
            Arc::clone(&analyses),
            Arc::clone(&state_service),
            Arc::clone(&vcs),
            broad_scan_models,
            investigator,
            sandbox,
        ));

        let rate_limiter = Arc::new(RateLimiter::new(
            config.analysis.rate_limit_enabled,
            config.analysis.rate_limits.clone(),
        ));

        Ok(Self {
            config,
            dispatcher,
            state_service,
            static_worker,
            embeddings_worker,
            cluster_analyzer,
            ai_scan_worker,
            analyses,
            issues,
            dead_code_findings,
            file_churn_findings,
            semantic_ai_insights,
            repo_content_cache,
            event_bus,
            vcs,
            rate_limiter,
        })
    }
}
