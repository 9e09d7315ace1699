//! # Providers Layer
//!
//! Concrete adapter implementations for the ports defined in `mcb-domain`:
//! database backends, caches, and native analyzers.
//!
//! - [`database`] – `SQLite`/`SeaORM` persistence, schema DDL generation
//! - [`cache`] – in-memory (Moka) cache provider
//! - [`analysis`] – native static-analysis adapters
//! - [`object_storage`] – filesystem and HTTP (`MinIO`/S3-style) blob storage
//! - [`vector_store`] – HTTP (Qdrant-style) vector index client
//! - [`embedding`] – HTTP embedding-provider client
//! - [`llm`] – HTTP LLM-model client used by the AI Scan subsystem
//! - [`git`] – `git2`-backed VCS provider and submodule discovery
//! - [`language_chunking`] – universal line/brace-aware code chunker
//! - [`runtime`] – `tokio`-backed background task runner
//! - [`sandbox`] – subprocess-based sandboxed command execution
#![allow(missing_docs)]

/// Native static-analysis adapters.
pub mod analysis;
/// Cache provider implementations.
pub mod cache;
/// Provider-local constants.
pub mod constants;
/// Database backends (SQLite, SeaORM) and schema DDL generation.
pub mod database;
/// Embedding-provider HTTP client.
pub mod embedding;
/// `git2`-backed VCS provider and submodule discovery.
pub mod git;
/// Universal code-chunking adapter.
pub mod language_chunking;
/// LLM-model HTTP client.
pub mod llm;
/// Filesystem and HTTP object-storage adapters.
pub mod object_storage;
/// `tokio`-backed background task runner.
pub mod runtime;
/// Subprocess-based sandboxed command execution.
pub mod sandbox;
/// HTTP (Qdrant-style) vector-index client.
pub mod vector_store;

/// Convenience re-export: `SeaORM` migrator used by infrastructure bootstrap.
pub use database::seaorm::migration;

/// Crate-local result alias, matching the convention every adapter module
/// here already imports as `crate::Result`.
pub type Result<T> = mcb_domain::error::Result<T>;
