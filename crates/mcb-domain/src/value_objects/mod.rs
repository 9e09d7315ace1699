//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Value objects: immutable, identity-less domain concepts.
//!
//! Strong-typed identifiers live in [`ids`]; everything else (configuration,
//! type aliases, project/org context, browse/search results) has its own
//! module below.

pub mod analysis_cache;
pub mod browse;
pub mod config;
pub mod ids;
pub mod org_context;
pub mod project_context;
pub mod project_settings;
pub mod search;
pub mod types;
pub mod vector_payload;

pub use analysis_cache::{
    AI_SCAN_CACHE_SCHEMA_VERSION, AiScanCachePayload, ClusterSummary, InvestigationResult,
    MergedIssueResult, SEMANTIC_CACHE_SCHEMA_VERSION, SemanticCachePayload, ToolCallTrace,
};
pub use browse::{
    CollectionInfo, FileInfo, FileNode, FileTreeNode, HIGHLIGHT_NAMES, HighlightCategory,
    HighlightSpan, HighlightedCode, HtmlRenderer, map_highlight_to_category,
};
pub use config::{CacheConfig, EmbeddingConfig, LlmConfig, ObjectStoreConfig, SyncBatch, VectorStoreConfig};
pub use ids::{
    AnalysisId, AnalysisIssueId, ApiKeyId, AssignmentId, BranchId, CheckpointId, ChunkId,
    ClassId, CodebaseId, CollectionId, DeadCodeFindingId, DecisionId, DelegationId, DependencyId,
    DiffId, ErrorPatternId, ErrorPatternMatchId, ExecutionId, FileChurnFindingId, FileId,
    FunctionId, IssueCommentId, IssueId, IssueLabelAssignmentId, IssueLabelId,
    MemorySearchId, ObservationId, OperationId, OrgId, OriginContextId, PhaseId, PlanId,
    PlanReviewId, PlanVersionId, ProjectId, QualityGateId, RepoContentCacheId,
    RepoContentObjectId, RepositoryId, SemanticInsightId, SessionId, SessionSummaryId,
    SnapshotId, SubmoduleId, TeamId, TeamMemberId, ToolCallId, TransitionId, UserId, WorktreeId,
};
pub use org_context::OrgContext;
pub use project_context::ProjectContext;
pub use project_settings::{
    ProjectEmbeddingConfig, ProjectProvidersSettings, ProjectSettings, ProjectVectorStoreConfig,
};
pub use search::{Embedding, SearchResult};
pub use types::{
    CacheProviderKind, EmbeddingProviderKind, Language, OperationType, SupportedLanguage,
    VectorStoreProviderKind,
};
pub use vector_payload::{
    ChunkType, VectorIndexPayload, VECTOR_PAYLOAD_CONTENT_LIMIT, VECTOR_PAYLOAD_SCHEMA_VERSION,
};
