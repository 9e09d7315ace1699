//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Clonable handle around a shared `CacheProvider`, used to thread one cache
//! instance through the DI-constructed service graph without each service
//! needing to know the concrete adapter behind it.

use std::sync::Arc;

use mcb_domain::ports::CacheProvider;

/// Shared, clonable handle to the process-wide cache provider.
#[derive(Clone)]
pub struct SharedCacheProvider {
    inner: Arc<dyn CacheProvider>,
}

impl SharedCacheProvider {
    /// Wrap an existing `Arc<dyn CacheProvider>`.
    #[must_use]
    pub fn from_arc(inner: Arc<dyn CacheProvider>) -> Self {
        Self { inner }
    }

    /// Borrow the underlying provider.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn CacheProvider> {
        &self.inner
    }
}

impl std::fmt::Debug for SharedCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCacheProvider")
            .field("provider_name", &self.inner.provider_name())
            .finish()
    }
}

impl std::ops::Deref for SharedCacheProvider {
    type Target = Arc<dyn CacheProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
