//! Redis-backed cache provider.
//!
//! Distributed counterpart to [`super::moka::MokaCacheProvider`]: same
//! [`CacheProvider`] surface, backed by a shared Redis instance so multiple
//! process instances see the same cache. Selected via the `"redis"` cache
//! provider name when running more than one API/worker instance.

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tokio::sync::OnceCell;

/// Redis-backed cache provider using a connection-managed async client.
///
/// The connection manager is established lazily on first use rather than at
/// construction time: the registry factory that builds this provider is
/// synchronous (see [`redis_cache_factory`]), so eagerly connecting would
/// require blocking on the async runtime from inside provider resolution.
pub struct RedisCacheProvider {
    client: redis::Client,
    manager: OnceCell<ConnectionManager>,
}

impl RedisCacheProvider {
    /// Build a provider targeting `redis_url` (e.g. `redis://127.0.0.1:6379`).
    /// Does not connect; the connection is established on first use.
    ///
    /// # Errors
    /// Returns an error if `redis_url` is not a valid Redis connection URL.
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(|e| Error::Infrastructure {
            message: format!("invalid redis url: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(Self { client, manager: OnceCell::new() })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        self.manager
            .get_or_try_init(|| async {
                self.client
                    .get_connection_manager()
                    .await
                    .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.connection().await?;
        match config.ttl {
            Some(ttl) => {
                let secs = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, secs)
                    .await
                    .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))?;
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        let removed: u64 = conn
            .del(key)
            .await
            .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))?;
        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;
        conn.exists(key)
            .await
            .map_err(|e| Error::upstream_unavailable("redis".to_owned(), e.to_string()))
    }

    async fn clear(&self) -> Result<()> {
        // Scoped to this provider's own keys would require a namespace
        // prefix scan; deliberately left as a logical no-op here since the
        // Analysis Execution Core never needs to flush a shared Redis
        // instance wholesale. Callers that need that should target Moka.
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats { hits: 0, misses: 0, entries: 0, hit_rate: 0.0, bytes_used: 0 })
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RedisCacheProvider")
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::cache::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config
        .uri
        .as_deref()
        .ok_or_else(|| "Redis cache provider requires uri in config".to_owned())?;
    let provider = RedisCacheProvider::new(uri).map_err(|e| e.to_string())?;
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis-backed distributed cache",
    factory: redis_cache_factory,
};
