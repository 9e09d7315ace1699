//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! Key-value state persistence for small pieces of process state that
//! need to survive a restart but don't warrant a full repository/entity
//! (e.g. the last-processed cursor for a periodic worker). Distinct from
//! [`crate::ports::providers::CacheProvider`], which is explicitly allowed
//! to evict/expire entries; a `StateStoreProvider` entry stays until
//! explicitly deleted.

use async_trait::async_trait;

use crate::error::Result;

/// Durable key-value state store.
#[async_trait]
pub trait StateStoreProvider: Send + Sync {
    /// Fetch the raw value stored at `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    /// Store `value` at `key`, overwriting any existing entry.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;
    /// Remove the entry at `key`. Idempotent: deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<()>;
    /// List every key sharing `prefix`.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;
}
