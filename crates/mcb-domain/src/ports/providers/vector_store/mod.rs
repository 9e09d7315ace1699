//!
//! **Documentation**: [docs/modules/domain.md](../../../../../../docs/modules/domain.md#provider-ports)
//!

mod admin;
mod browser;
mod provider;

pub use admin::VectorStoreAdmin;
pub use browser::VectorStoreBrowser;
pub use provider::VectorStoreProvider;

/// Collection identifier as seen by the storage-level admin/provider traits.
pub type StoreCollectionId = crate::value_objects::CollectionId;
/// Embedding vector as seen by the storage-level provider trait.
pub type StoreEmbedding = crate::value_objects::Embedding;
/// Search hit as seen by the storage-level provider trait.
pub type StoreSearchResult = crate::value_objects::SearchResult;
/// Arbitrary key/value metadata attached to a stored vector or collection.
pub type MetadataMap = std::collections::HashMap<String, serde_json::Value>;
/// Result type returned by vector-store port methods.
pub type PortResult<T> = crate::error::Result<T>;
