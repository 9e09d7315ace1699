//! LLM Model Provider Registry
//!
//! Auto-registration system for LLM model providers using linkme
//! distributed slices. Each entry in the model registry of §6's
//! environment contract (`{id, provider, timeout_s}`) resolves to one
//! instance via this registry, selected by the `provider` config string
//! (e.g. `"openai-http"`, `"anthropic-http"`).

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for LLM model provider creation.
///
/// Contains all configuration options that an LLM provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct LlmProviderConfig {
    /// Provider name (e.g., "openai-http", "anthropic-http", "null").
    pub provider: String,
    /// Model identifier as registered in the model registry.
    pub model_id: Option<String>,
    /// API key for authentication.
    pub api_key: Option<String>,
    /// Base URL for the provider API.
    pub base_url: Option<String>,
    /// Per-call timeout, per the model registry's `timeout_s`.
    pub timeout: Option<Duration>,
    /// Additional provider-specific configuration.
    pub extra: HashMap<String, String>,
}

crate::impl_config_builder!(LlmProviderConfig {
    /// Set the model identifier.
    model_id: with_model_id(into String),
    /// Set the API key.
    api_key: with_api_key(into String),
    /// Set the base URL for the API.
    base_url: with_base_url(into String),
});

impl LlmProviderConfig {
    /// Set the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

crate::impl_registry!(
    provider_trait: crate::ports::providers::LlmProvider,
    config_type: LlmProviderConfig,
    entry_type: LlmProviderEntry,
    slice_name: LLM_PROVIDERS,
    resolve_fn: resolve_llm_provider,
    list_fn: list_llm_providers
);
