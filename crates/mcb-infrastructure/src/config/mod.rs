//! Configuration Management - Type-safe, layered, Validated
//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md#configuration)
//!
//! Provides YAML configuration loading (Loco convention), validation, and
//! type-safe configuration for all system components.

pub mod data;
pub mod loader;
mod mcp_context_config;
pub mod paths;
pub mod test_builder;
pub mod types;
pub mod validation;
pub mod watcher;

// Re-export main configuration types
pub use types::{
    AnalysisConfig, AnalysisModelConfig, AppConfig, AuthConfig, CacheProvider, CacheSystemConfig,
    DatabaseConfig, DatabaseConfigContainer, LoggingConfig, RateLimitScope, ServerConfig,
    ServerCorsConfig, ServerNetworkConfig, ServerSslConfig, ServerTimeoutConfig,
};

pub use loader::ConfigLoader;
pub use mcp_context_config::{GitConfig, McpContextConfig};
pub use paths::{
    COLLECTION_MAPPING_FILENAME, COLLECTION_MAPPING_LOCK_FILENAME, VCS_LOCK_FILENAME,
    VCS_REGISTRY_FILENAME, config_dir,
};
pub use test_builder::TestConfigBuilder;
pub use validation::validate_app_config;
pub use watcher::{ConfigWatcher, ConfigWatcherBuilder, ConfigWatcherUtils};
