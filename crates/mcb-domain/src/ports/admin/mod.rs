//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!

#![allow(unused_imports)]
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!

pub mod dashboard;
pub mod operations;
pub mod providers;

pub use dashboard::{
    AgentSessionStats, DailyCount, DashboardQueryPort, MonthlyCount, ToolCallCount,
};
pub use operations::{
    IndexingOperation, IndexingOperationStatus, IndexingOperationsInterface, ValidationOperation,
    ValidationOperationResult, ValidationOperationsInterface, ValidationStatus,
};
pub use providers::{
    CacheAdminInterface, EmbeddingAdminInterface, LanguageAdminInterface, ProviderInfo,
    VectorStoreAdminInterface,
};
