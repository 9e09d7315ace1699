#![allow(unused_imports)]

//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#repository-ports)
//!
//! Repository ports for data persistence.

pub mod agent_repository;
pub mod analysis;
pub mod auth;
pub mod file_hash;
pub mod index;
pub mod issue;
pub mod memory;
pub mod org_entity_repository;
pub mod plan_entity_repository;
pub mod project;
pub mod repo_content_cache;
pub mod vcs;
pub mod workflow;

pub use agent_repository::{
    AgentCheckpointRepository, AgentEventRepository, AgentRepository, AgentSessionQuery,
    AgentSessionRepository,
};
pub use analysis::{
    AnalysisQuery, AnalysisRepository, DeadCodeFindingRepository, FileChurnFindingRepository,
    IssueRepository as AnalysisIssueRepository, SemanticAiInsightRepository,
};
pub use auth::{ApiKeyInfo, AuthRepositoryPort, UserWithApiKey};
pub use file_hash::FileHashRepository;
pub use index::{IndexRepository, IndexStats};
pub use issue::{
    IssueCommentRegistry, IssueEntityRepository, IssueLabelAssignmentManager, IssueLabelRegistry,
    IssueRegistry,
};
pub use memory::{FtsSearchResult, MemoryRepository};
pub use org_entity_repository::{
    ApiKeyRegistry, OrgEntityRepository, OrgRegistry, TeamMemberManager, TeamRegistry, UserRegistry,
};
pub use plan_entity_repository::{
    PlanEntityRepository, PlanRegistry, PlanReviewRegistry, PlanVersionRegistry,
};
pub use project::ProjectRepository;
pub use repo_content_cache::{RepoContentCacheRepository, TreeSummary};
pub use vcs::VcsEntityRepository;
pub use workflow::{TransitionRepository, WorkflowSessionRepository};
