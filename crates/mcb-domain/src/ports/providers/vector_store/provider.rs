//!
//! **Documentation**: [docs/modules/domain.md](../../../../../../docs/modules/domain.md#provider-ports)
//!
#![allow(missing_docs)]

use async_trait::async_trait;

use super::{
    MetadataMap, PortResult, StoreCollectionId, StoreEmbedding, StoreSearchResult,
    VectorStoreAdmin, VectorStoreBrowser,
};

#[async_trait]
pub trait VectorStoreProvider: VectorStoreAdmin + VectorStoreBrowser + Send + Sync {
    async fn create_collection(
        &self,
        collection: &StoreCollectionId,
        dimensions: usize,
    ) -> PortResult<()>;

    async fn delete_collection(&self, collection: &StoreCollectionId) -> PortResult<()>;

    async fn insert_vectors(
        &self,
        collection: &StoreCollectionId,
        vectors: &[StoreEmbedding],
        metadata: Vec<MetadataMap>,
    ) -> PortResult<Vec<String>>;

    /// Insert or overwrite points at caller-chosen ids.
    ///
    /// The Embeddings Worker derives a deterministic id per chunk
    /// (`repository_id`, `commit_sha`, `file_path`, chunk index) so re-running
    /// it for the same commit upserts in place instead of accumulating
    /// duplicate points. Backends with native point-id upsert (Qdrant,
    /// Milvus) should override this; the default falls back to
    /// [`Self::insert_vectors`] and returns ids assigned by the backend
    /// rather than `ids`, so it is not actually idempotent — acceptable only
    /// for backends that don't support addressed upsert at all.
    ///
    /// # Errors
    /// Returns whatever [`Self::insert_vectors`] returns by default.
    async fn upsert_vectors(
        &self,
        collection: &StoreCollectionId,
        vectors: &[StoreEmbedding],
        metadata: Vec<MetadataMap>,
        ids: &[String],
    ) -> PortResult<Vec<String>> {
        let _ = ids;
        self.insert_vectors(collection, vectors, metadata).await
    }

    async fn search_similar(
        &self,
        collection: &StoreCollectionId,
        query_vector: &[f32],
        limit: usize,
        filter: Option<&str>,
    ) -> PortResult<Vec<StoreSearchResult>>;

    async fn delete_vectors(
        &self,
        collection: &StoreCollectionId,
        ids: &[String],
    ) -> PortResult<()>;

    async fn get_vectors_by_ids(
        &self,
        collection: &StoreCollectionId,
        ids: &[String],
    ) -> PortResult<Vec<StoreSearchResult>>;

    async fn list_vectors(
        &self,
        collection: &StoreCollectionId,
        limit: usize,
    ) -> PortResult<Vec<StoreSearchResult>>;

    /// Patch only the `cluster_id` payload field of a stored point, leaving
    /// its vector untouched. The Cluster Analyzer uses this to write back
    /// architecture-cluster assignments without re-embedding.
    ///
    /// [`StoreSearchResult`] never carries the raw vector (see
    /// [`super::VectorStoreBrowser`]), so a generic payload-only update
    /// cannot be expressed in terms of [`Self::upsert_vectors`], which
    /// requires one. The default implementation reports the capability
    /// unavailable; backends with native partial-payload updates (Qdrant's
    /// `set_payload`, for example) should override it.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::UpstreamUnavailable`] if unsupported
    /// by this backend or if the update itself fails.
    async fn set_cluster_id(
        &self,
        collection: &StoreCollectionId,
        id: &str,
        cluster_id: &str,
    ) -> PortResult<()> {
        let _ = (collection, id, cluster_id);
        Err(crate::error::Error::upstream_unavailable(
            "vector_store".to_owned(),
            "set_cluster_id is not implemented by this vector store provider".to_owned(),
        ))
    }
}
