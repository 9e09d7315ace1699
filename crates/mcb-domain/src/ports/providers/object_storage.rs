//! Object storage provider port.
//!
//! Put/get/delete of opaque blob objects by key, under named buckets. Backs
//! the Repo Content Cache: file bytes for a `(repository, commit)` snapshot
//! live here, keyed `"{repository_id}/{commit_sha}/{object_id}"`; the
//! Persistence Store only ever holds the key and metadata, never the bytes.

use async_trait::async_trait;

use crate::error::Result;

/// Put/get/delete of opaque blob objects under named buckets.
#[async_trait]
pub trait ObjectStorageProvider: Send + Sync {
    /// Upload `bytes` to `bucket/key`, overwriting any existing object.
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Download the bytes stored at `bucket/key`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::NotFound`] if no object exists at that key.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Delete the object at `bucket/key`. Idempotent: deleting a missing key
    /// is not an error.
    async fn delete(&self, bucket: &str, key: &str) -> Result<()>;

    /// Check whether an object exists at `bucket/key` without downloading it.
    async fn exists(&self, bucket: &str, key: &str) -> Result<bool>;

    /// Name of the backend, for diagnostics (e.g. `"minio"`, `"fs"`).
    fn provider_name(&self) -> &str;
}
