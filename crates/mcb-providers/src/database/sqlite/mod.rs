//! SQLite backend for the canonical schema.
//!
//! Implements [`SchemaDdlGenerator`] (every table registered in
//! `mcb_domain::schema::Schema::definition`: projects, collections,
//! observations, session_summaries, file_hashes, the Analysis Execution
//! Core tables, and the rest) for SQLite. Provides [`SqliteExecutor`]
//! (port [`DatabaseExecutor`]), [`SqliteMemoryRepository`] (port
//! [`MemoryRepository`]), the entity-specific repositories below, and
//! factory functions for DI.

mod agent_repository;
mod analysis_repository;
mod backend;
mod ddl;
mod ensure_parent;
mod executor;
mod file_hash_repository;
mod issue_entity_repository;
#[macro_use]
mod macros;
mod memory_repository;
mod org_entity_repository;
mod plan_entity_repository;
mod project_repository;
mod provider;
mod query_helpers;
mod row_convert;
mod row_helpers;
mod sea_entities;
mod vcs_entity_repository;

pub use agent_repository::SqliteAgentRepository;
pub use analysis_repository::{
    SqliteAnalysisRepository, SqliteDeadCodeFindingRepository, SqliteFileChurnFindingRepository,
    SqliteIssueRepository, SqliteRepoContentCacheRepository, SqliteSemanticAiInsightRepository,
};
pub use backend::SqliteBackend;
pub use ddl::SqliteSchemaDdlGenerator;
pub use executor::SqliteExecutor;
pub use file_hash_repository::{SqliteFileHashConfig, SqliteFileHashRepository};
pub use issue_entity_repository::SqliteIssueEntityRepository;
pub use memory_repository::SqliteMemoryRepository;
pub use org_entity_repository::SqliteOrgEntityRepository;
pub use plan_entity_repository::SqlitePlanEntityRepository;
pub use project_repository::SqliteProjectRepository;
pub use provider::{
    SqliteDatabaseProvider, create_agent_repository, create_agent_repository_from_executor,
    create_memory_repository, create_memory_repository_with_executor, create_project_repository,
    create_project_repository_from_executor, create_vcs_entity_repository_from_executor,
};
pub use vcs_entity_repository::SqliteVcsEntityRepository;
