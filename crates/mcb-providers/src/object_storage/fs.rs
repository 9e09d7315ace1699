//! Local filesystem object storage adapter.
//!
//! Stores each `bucket/key` pair as a file at `root/bucket/key` under a
//! configured root directory. The default backend for local development and
//! tests, where standing up a real `MinIO`/S3 endpoint is unnecessary.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::ObjectStorageProvider;
use tokio::fs;

/// Filesystem-backed object storage rooted at a single directory.
pub struct FsObjectStorageProvider {
    root: PathBuf,
}

impl FsObjectStorageProvider {
    /// Root every `bucket/key` pair under `root`. Creates nothing yet;
    /// directories are created lazily on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `bucket/key` to a path under the root, rejecting any key that
    /// would escape it via `..` path segments.
    fn resolve(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        if key.split('/').any(|segment| segment == "..") || bucket.contains("..") {
            return Err(Error::Infrastructure {
                message: format!("object key escapes storage root: {bucket}/{key}"),
                source: None,
            });
        }
        Ok(self.root.join(bucket).join(key))
    }
}

#[async_trait]
impl ObjectStorageProvider for FsObjectStorageProvider {
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<()> {
        let path = self.resolve(bucket, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| Error::Infrastructure {
                message: format!("failed to create object storage directory {}: {e}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }
        fs::write(&path, bytes).await.map_err(|e| Error::Infrastructure {
            message: format!("failed to write object {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.resolve(bucket, key)?;
        fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::not_found(format!("object {bucket}/{key}"))
            } else {
                Error::Infrastructure {
                    message: format!("failed to read object {}: {e}", path.display()),
                    source: Some(Box::new(e)),
                }
            }
        })
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<()> {
        let path = self.resolve(bucket, key)?;
        match fs::remove_file(&path).await {
            Ok(()) | Err(_) if !Path::new(&path).exists() => Ok(()),
            Err(e) => Err(Error::Infrastructure {
                message: format!("failed to delete object {}: {e}", path.display()),
                source: Some(Box::new(e)),
            }),
        }
    }

    async fn exists(&self, bucket: &str, key: &str) -> Result<bool> {
        let path = self.resolve(bucket, key)?;
        Ok(fs::metadata(&path).await.is_ok())
    }

    fn provider_name(&self) -> &str {
        "fs"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::object_storage::{
    OBJECT_STORAGE_PROVIDERS, ObjectStorageProviderConfig, ObjectStorageProviderEntry,
};

fn fs_object_storage_factory(
    config: &ObjectStorageProviderConfig,
) -> std::result::Result<Arc<dyn ObjectStorageProvider>, String> {
    let root = config
        .root_dir
        .clone()
        .ok_or_else(|| "fs object storage provider requires root_dir in config".to_owned())?;
    Ok(Arc::new(FsObjectStorageProvider::new(root)))
}

#[linkme::distributed_slice(OBJECT_STORAGE_PROVIDERS)]
static FS_PROVIDER: ObjectStorageProviderEntry = ObjectStorageProviderEntry {
    name: "fs",
    description: "Local filesystem object storage, rooted at a configured directory",
    build: fs_object_storage_factory,
};
