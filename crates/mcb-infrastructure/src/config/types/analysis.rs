//! Analysis Execution Core configuration: LLM model registry, the
//! encryption helper's secret key, rate-limiting toggles, and the
//! heartbeat/stuck-detector/GC thresholds that `mcb-application::constants`
//! otherwise hardcodes.

use serde::{Deserialize, Serialize};

const REDACTED: &str = "REDACTED";

/// One entry in the AI Scan track's LLM model registry.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisModelConfig {
    /// Model identifier referenced by analysis requests (e.g. "gpt-4o-mini").
    pub id: String,
    /// Provider name resolved via the `llm` provider registry.
    pub provider: String,
    /// Per-completion timeout in seconds.
    #[serde(default = "AnalysisModelConfig::default_timeout_s")]
    pub timeout_s: u64,
}

impl AnalysisModelConfig {
    fn default_timeout_s() -> u64 {
        60
    }
}

impl std::fmt::Debug for AnalysisModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisModelConfig")
            .field("id", &self.id)
            .field("provider", &self.provider)
            .field("timeout_s", &self.timeout_s)
            .finish()
    }
}

/// Per-scope rate-limit settings, keyed by scope name (e.g. "analyses.create",
/// "webhooks") in [`AnalysisConfig::rate_limits`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitScope {
    /// Requests permitted per window.
    pub limit: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

/// Analysis Execution Core configuration.
///
/// Loaded as the `analysis` table of [`super::app::AppConfig`]; every field
/// mirrors a constant in `mcb-application::constants` so deployments can
/// override the default without a rebuild.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// LLM model registry available to the AI Scan track.
    #[serde(default)]
    pub models: Vec<AnalysisModelConfig>,
    /// Symmetric key (hex or base64, provider-specific) used by the
    /// encryption helper to seal stored OAuth tokens.
    pub secret_key: Option<String>,
    /// Master switch for the per-scope rate limiter.
    #[serde(default = "AnalysisConfig::default_rate_limit_enabled")]
    pub rate_limit_enabled: bool,
    /// Per-scope rate-limit overrides. Scopes absent here fall back to the
    /// resilience layer's `rate_limiter_rps`/`rate_limiter_burst`.
    #[serde(default)]
    pub rate_limits: std::collections::HashMap<String, RateLimitScope>,
    /// Minimum interval between persisted heartbeat writes (seconds).
    #[serde(default = "AnalysisConfig::default_heartbeat_throttle_secs")]
    pub heartbeat_throttle_secs: i64,
    /// How long a heartbeat may go stale before the stuck-analysis detector
    /// force-fails every non-terminal track (seconds).
    #[serde(default = "AnalysisConfig::default_stuck_threshold_secs")]
    pub stuck_threshold_secs: i64,
    /// GC TTL for a `Failed` repo content cache (seconds).
    #[serde(default = "AnalysisConfig::default_cache_failed_ttl_secs")]
    pub cache_failed_ttl_secs: i64,
    /// GC TTL for a cache stuck in `Fetching` (orphaned worker) (seconds).
    #[serde(default = "AnalysisConfig::default_cache_stuck_ttl_secs")]
    pub cache_stuck_ttl_secs: i64,
    /// GC TTL for an unpinned, cold `Ready` cache since last access (seconds).
    #[serde(default = "AnalysisConfig::default_cache_age_ttl_secs")]
    pub cache_age_ttl_secs: i64,
    /// Directory under which each tracked repository is checked out, named
    /// by its `repository_id` (the same identity the content cache keys
    /// blobs by: `"{repository_id}/{commit_sha}/{object_id}"`). The HTTP
    /// layer resolves `POST /analyses`'s `repository_id` to a local
    /// checkout by joining it onto this root before handing it to the VCS
    /// provider.
    #[serde(default = "AnalysisConfig::default_workspace_root")]
    pub workspace_root: std::path::PathBuf,
}

impl AnalysisConfig {
    fn default_rate_limit_enabled() -> bool {
        true
    }

    fn default_heartbeat_throttle_secs() -> i64 {
        5
    }

    fn default_stuck_threshold_secs() -> i64 {
        600
    }

    fn default_cache_failed_ttl_secs() -> i64 {
        86_400
    }

    fn default_cache_stuck_ttl_secs() -> i64 {
        3_600
    }

    fn default_cache_age_ttl_secs() -> i64 {
        30 * 86_400
    }

    fn default_workspace_root() -> std::path::PathBuf {
        std::path::PathBuf::from("./workspaces")
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            secret_key: None,
            rate_limit_enabled: Self::default_rate_limit_enabled(),
            rate_limits: std::collections::HashMap::new(),
            heartbeat_throttle_secs: Self::default_heartbeat_throttle_secs(),
            stuck_threshold_secs: Self::default_stuck_threshold_secs(),
            cache_failed_ttl_secs: Self::default_cache_failed_ttl_secs(),
            cache_stuck_ttl_secs: Self::default_cache_stuck_ttl_secs(),
            cache_age_ttl_secs: Self::default_cache_age_ttl_secs(),
            workspace_root: Self::default_workspace_root(),
        }
    }
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("models", &self.models)
            .field("secret_key", &self.secret_key.as_ref().map(|_| REDACTED))
            .field("rate_limit_enabled", &self.rate_limit_enabled)
            .field("rate_limits", &self.rate_limits)
            .field("heartbeat_throttle_secs", &self.heartbeat_throttle_secs)
            .field("stuck_threshold_secs", &self.stuck_threshold_secs)
            .field("cache_failed_ttl_secs", &self.cache_failed_ttl_secs)
            .field("cache_stuck_ttl_secs", &self.cache_stuck_ttl_secs)
            .field("cache_age_ttl_secs", &self.cache_age_ttl_secs)
            .field("workspace_root", &self.workspace_root)
            .finish()
    }
}
