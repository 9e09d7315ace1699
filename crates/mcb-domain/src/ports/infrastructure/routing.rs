//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! Provider routing and selection: lets a caller ask "which embedding /
//! vector-store provider should I use for this operation" without hard
//! coding a provider name, and lets health observations feed back into that
//! choice.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Health status for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProviderHealthStatus {
    /// Provider is responding normally.
    #[default]
    Healthy,
    /// Provider is responding but with elevated latency/errors.
    Degraded,
    /// Provider is not responding.
    Unhealthy,
}

/// Context for provider selection decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderContext {
    /// Kind of operation being routed (e.g. `"embed"`, `"search"`).
    pub operation_type: String,
    /// How strongly cost should influence selection, 0.0-1.0.
    pub cost_sensitivity: f64,
    /// How strongly output quality should influence selection, 0.0-1.0.
    pub quality_requirement: f64,
    /// How strongly latency should influence selection, 0.0-1.0.
    pub latency_sensitivity: f64,
    /// Providers to prefer when multiple are eligible.
    pub preferred_providers: Vec<String>,
    /// Providers to exclude from consideration.
    pub excluded_providers: Vec<String>,
}

impl ProviderContext {
    /// Build an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation type.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation_type = operation.into();
        self
    }

    /// Add a preferred provider.
    #[must_use]
    pub fn prefer(mut self, provider: impl Into<String>) -> Self {
        self.preferred_providers.push(provider.into());
        self
    }

    /// Add an excluded provider.
    #[must_use]
    pub fn exclude(mut self, provider: impl Into<String>) -> Self {
        self.excluded_providers.push(provider.into());
        self
    }
}

/// Provider routing interface: selects a backend provider for a given
/// operation and tracks per-provider health from reported outcomes.
#[async_trait]
pub trait ProviderRouter: Send + Sync {
    /// Select which embedding provider to use for `context`.
    async fn select_embedding_provider(&self, context: &ProviderContext) -> Result<String>;
    /// Select which vector-store provider to use for `context`.
    async fn select_vector_store_provider(&self, context: &ProviderContext) -> Result<String>;
    /// Current observed health of a provider.
    async fn get_provider_health(&self, provider_id: &str) -> Result<ProviderHealthStatus>;
    /// Report a failed call against a provider, for health tracking.
    async fn report_failure(&self, provider_id: &str, error: &str) -> Result<()>;
    /// Report a successful call against a provider, for health tracking.
    async fn report_success(&self, provider_id: &str) -> Result<()>;
    /// Current observed health of every known provider.
    async fn get_all_health(&self) -> Result<HashMap<String, ProviderHealthStatus>>;
    /// Freeform diagnostic stats per provider.
    async fn get_stats(&self) -> HashMap<String, serde_json::Value>;
}
