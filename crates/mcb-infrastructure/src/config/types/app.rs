//! Main application configuration

use std::collections::HashMap;

use mcb_domain::value_objects::{EmbeddingConfig, LlmConfig, ObjectStoreConfig, VectorStoreConfig};
use serde::{Deserialize, Serialize};

pub use super::analysis::AnalysisConfig;
// Re-export all config types from modules
pub use super::infrastructure::{
    CacheProvider, CacheSystemConfig, LimitsConfig, LoggingConfig, MetricsConfig, ResilienceConfig,
};
pub use super::mode::{ModeConfig, OperatingMode};
pub use super::server::{
    ServerConfig, ServerCorsConfig, ServerNetworkConfig, ServerSslConfig, ServerTimeoutConfig,
};
pub use super::system::{
    AdminApiKeyConfig, ApiKeyConfig, AuthConfig, BackupConfig, DaemonConfig, EventBusConfig,
    JwtConfig, OperationsConfig, PasswordAlgorithm, SnapshotConfig, SyncConfig,
};

/// Embedding configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingConfigContainer {
    /// Provider name
    pub provider: Option<String>,
    /// Model name
    pub model: Option<String>,
    /// Base URL for API
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Embedding dimensions
    pub dimensions: Option<usize>,
    /// Shared ONNX model cache directory (`FastEmbed` provider)
    #[serde(default)]
    pub cache_dir: Option<std::path::PathBuf>,
    /// Named configs for TOML format
    #[serde(default)]
    pub configs: HashMap<String, EmbeddingConfig>,
}

/// Vector store configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectorStoreConfigContainer {
    /// Provider name
    pub provider: Option<String>,
    /// Server address
    pub address: Option<String>,
    /// Embedding dimensions
    pub dimensions: Option<usize>,
    /// Collection name
    pub collection: Option<String>,
    /// Named configs for TOML format
    #[serde(default)]
    pub configs: HashMap<String, VectorStoreConfig>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Provider name (e.g. "sqlite", "postgres").
    /// Resolved via the linkme provider registry.
    #[serde(default = "DatabaseConfig::default_provider")]
    pub provider: String,
    /// Database file path, required by the `sqlite` provider.
    #[serde(default)]
    pub path: Option<std::path::PathBuf>,
}

impl DatabaseConfig {
    fn default_provider() -> String {
        "sqlite".to_string()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: Self::default_provider(),
            path: None,
        }
    }
}

/// Database provider configuration container.
///
/// `provider` selects the default database backend; `configs` holds one
/// named [`DatabaseConfig`] per backend (e.g. `configs.default` for the
/// primary `SQLite` file used by bootstrap).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfigContainer {
    /// Provider name (e.g. "sqlite", "postgres").
    #[serde(default = "DatabaseConfigContainer::default_provider")]
    pub provider: String,
    /// Named configs for TOML format
    #[serde(default)]
    pub configs: HashMap<String, DatabaseConfig>,
}

impl DatabaseConfigContainer {
    fn default_provider() -> String {
        "sqlite".to_string()
    }

    /// The configured default provider name.
    pub fn as_str(&self) -> &str {
        self.provider.as_str()
    }
}

impl Default for DatabaseConfigContainer {
    fn default() -> Self {
        Self {
            provider: Self::default_provider(),
            configs: HashMap::new(),
        }
    }
}

/// Indexing pipeline tuning: batch size and concurrency for the static
/// analysis / embedding track that walks a repository's files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexingConfig {
    /// Number of files processed per indexing batch.
    #[serde(default = "IndexingConfig::default_batch_size")]
    pub batch_size: usize,
    /// Maximum number of concurrent indexing workers.
    #[serde(default = "IndexingConfig::default_max_concurrency")]
    pub max_concurrency: usize,
}

impl IndexingConfig {
    fn default_batch_size() -> usize {
        32
    }

    fn default_max_concurrency() -> usize {
        4
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            batch_size: Self::default_batch_size(),
            max_concurrency: Self::default_max_concurrency(),
        }
    }
}

/// Configuration for the out-of-process MCP transport (`mcb-server`),
/// carried alongside the HTTP API's own configuration but not otherwise
/// consumed by it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    /// Whether the MCP transport is enabled alongside the HTTP API.
    #[serde(default)]
    pub enabled: bool,
}

/// Provider configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfigContainer,
    /// Vector store provider configuration
    #[serde(default)]
    pub vector_store: VectorStoreConfigContainer,
    /// Database provider configuration
    #[serde(default)]
    pub database: DatabaseConfigContainer,
    /// Object storage provider configuration
    #[serde(default)]
    pub object_storage: ObjectStoreConfigContainer,
    /// LLM-model provider configuration (Analysis Execution Core's AI Scan track)
    #[serde(default)]
    pub llm: LlmConfigContainer,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            embedding: EmbeddingConfigContainer {
                provider: Some("fastembed".to_string()),
                ..Default::default()
            },
            vector_store: VectorStoreConfigContainer {
                provider: Some("edgevec".to_string()),
                ..Default::default()
            },
            database: DatabaseConfigContainer::default(),
            object_storage: ObjectStoreConfigContainer::default(),
            llm: LlmConfigContainer::default(),
        }
    }
}

/// Object storage provider configuration container, mirroring
/// [`EmbeddingConfigContainer`]'s shape for blob storage backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectStoreConfigContainer {
    /// Provider name (e.g. "filesystem", "http").
    pub provider: Option<String>,
    /// Root directory (filesystem provider) or base URL (HTTP provider).
    pub root: Option<String>,
    /// Named configs for TOML format
    #[serde(default)]
    pub configs: HashMap<String, ObjectStoreConfig>,
}

/// LLM-model provider configuration container, mirroring
/// [`EmbeddingConfigContainer`]'s shape for chat-completion backends used by
/// the AI Scan track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfigContainer {
    /// Default provider name (e.g. "openai-http").
    pub provider: Option<String>,
    /// Named configs for TOML format, keyed by model id.
    #[serde(default)]
    pub configs: HashMap<String, LlmConfig>,
}

/// Infrastructure configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    /// Cache system configuration
    pub cache: CacheSystemConfig,
    /// EventBus configuration
    pub event_bus: EventBusConfig,
    /// Metrics configuration
    pub metrics: MetricsConfig,
    /// Resilience configuration
    pub resilience: ResilienceConfig,
    /// Limits configuration
    pub limits: LimitsConfig,
}

/// Data management configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Snapshot configuration
    pub snapshot: SnapshotConfig,
    /// Sync configuration
    pub sync: SyncConfig,
    /// Backup configuration
    pub backup: BackupConfig,
}

/// System infrastructure and data configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Infrastructure configurations
    pub infrastructure: InfrastructureConfig,
    /// Data management configurations
    pub data: DataConfig,
}

/// Operations and daemon configurations combined
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationsDaemonConfig {
    /// Daemon configuration
    pub daemon: DaemonConfig,
    /// Operations configuration
    pub operations: OperationsConfig,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Operating mode configuration
    #[serde(default)]
    pub mode: ModeConfig,
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Provider configurations
    pub providers: ProvidersConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// System configurations
    pub system: SystemConfig,
    /// Operations and daemon configurations
    pub operations_daemon: OperationsDaemonConfig,
    /// Indexing pipeline tuning
    #[serde(default)]
    pub indexing: IndexingConfig,
    /// MCP transport configuration
    #[serde(default)]
    pub mcp: McpConfig,
    /// Analysis Execution Core configuration: model registry, rate
    /// limiting, encryption key, heartbeat/stuck/GC thresholds.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}
