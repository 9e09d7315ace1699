//! Provider configuration management port
//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#provider-ports)
//!
//! Lets callers (admin API, CLI) read and update a named provider's
//! configuration blob at runtime, independent of the specific provider kind
//! (embedding, vector store, ...). Distinct from `ProviderResolver`, which
//! turns config into a live provider instance.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Manages runtime-readable/writable configuration for named providers.
#[async_trait]
pub trait ProviderConfigManagerInterface: Send + Sync {
    /// Fetch the current configuration for `provider_name`, if any is set.
    async fn get_config(&self, provider_name: &str) -> Result<Option<Value>>;

    /// Replace the configuration for `provider_name`.
    async fn set_config(&self, provider_name: &str, config: Value) -> Result<()>;

    /// Names of every provider with a stored configuration.
    async fn list_configured_providers(&self) -> Result<Vec<String>>;
}
