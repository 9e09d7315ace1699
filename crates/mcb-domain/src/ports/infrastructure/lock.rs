//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! Distributed logical locking over a named resource key, backing the
//! Pipeline Dispatcher's "one in-flight analysis per `(repository_id,
//! commit_sha)`" guarantee for backends where that can't be expressed as a
//! single conditional insert (e.g. a store without row-level
//! compare-and-swap).

use async_trait::async_trait;

use crate::error::Result;

/// A held lock; dropping it (or calling [`LockGuard::release`] explicitly)
/// releases the underlying resource key.
#[async_trait]
pub trait LockGuard: Send + Sync {
    /// The key this guard is holding.
    fn key(&self) -> &str;
    /// Release the lock before the guard is dropped.
    async fn release(&self) -> Result<()>;
}

/// Acquires advisory locks over arbitrary string keys.
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Attempt to acquire the lock for `key`, held for at most `ttl_secs`.
    /// Returns `None` if another holder currently has it.
    async fn try_acquire(
        &self,
        key: &str,
        ttl_secs: u64,
    ) -> Result<Option<Box<dyn LockGuard>>>;
}
