//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! DI service display names.
//!
//! Used by bootstrap and catalog for service registration and logging.

/// Embedding service display name.
pub const EMBEDDING_SERVICE_NAME: &str = "Embedding Service";

/// Vector store service display name.
pub const VECTOR_STORE_SERVICE_NAME: &str = "Vector Store Service";

/// Cache service display name.
pub const CACHE_SERVICE_NAME: &str = "Cache Service";

/// Language service display name.
pub const LANGUAGE_SERVICE_NAME: &str = "Language Service";
