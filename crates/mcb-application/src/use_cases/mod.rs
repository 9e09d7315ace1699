//! Use Cases - Application Layer Services
//!
//! **Documentation**: [docs/modules/application.md](../../../../docs/modules/application.md#use-cases)
//!
//! This module contains the use case implementations that orchestrate
//! business logic and coordinate between domain entities and external ports.
//!
//! ## Use Cases Implemented
//!
//! - `agent_session_service`: Manages agent session lifecycle and tool history
//! - `context_service`: Code intelligence and semantic operations
//! - `indexing_service`: Code indexing and ingestion operations
//! - `memory_service`: Observation/memory capture and awareness
//! - `search_service`: Semantic, hybrid, and lexical search operations
//! - `analysis_state_service`: Validated status transitions for analysis runs
//! - `analysis_dispatcher`: Triggers new analysis runs and enqueues tracks
//! - `embeddings_worker`: Chunk + embed + upsert a commit's tree
//! - `cluster_analyzer`: Clustering, dead-code, hot-spot and insight generation
//! - `ai_scan_worker`: Broad scan, merge, and targeted investigation
//! - `static_analysis_worker`: Per-chunk complexity issues and the vitality score
//! - `repo_content_cache_service`: Commit-scoped blob cache reads/writes
//! - `analysis_gc_worker`: Evicts expired/orphaned content cache entries
//! - `analysis_stuck_detector`: Fails analyses whose heartbeat has gone stale
//!
//! ## Dependency Injection
//!
//! All use cases receive their dependencies through constructor injection.
//! They receive their dependencies (ports) through constructor injection.

pub mod agent_session_service;
pub mod ai_scan_worker;
pub mod analysis_dispatcher;
pub mod analysis_gc_worker;
pub mod analysis_state_service;
pub mod analysis_stuck_detector;
pub mod cluster_analyzer;
pub mod context_service;
pub mod embeddings_worker;
pub mod indexing_service;
pub mod memory_service;
pub mod repo_content_cache_service;
pub mod search_service;
pub mod static_analysis_worker;

pub use agent_session_service::*;
pub use ai_scan_worker::*;
pub use analysis_dispatcher::*;
pub use analysis_gc_worker::*;
pub use analysis_state_service::*;
pub use analysis_stuck_detector::*;
pub use cluster_analyzer::*;
pub use context_service::*;
pub use embeddings_worker::*;
pub use indexing_service::*;
pub use memory_service::*;
pub use repo_content_cache_service::*;
pub use search_service::*;
pub use static_analysis_worker::*;
