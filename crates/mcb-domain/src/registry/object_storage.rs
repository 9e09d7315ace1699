//! Object Storage Provider Registry
//!
//! Auto-registration system for object storage providers using linkme
//! distributed slices. Providers register themselves via
//! `#[linkme::distributed_slice]` and are discovered at runtime, selected by
//! the `provider` config string (e.g. `"s3-http"`, `"fs"`) per §6's
//! environment contract (object-storage endpoint/credentials/bucket/secure
//! flag).

use std::collections::HashMap;

/// Configuration for object storage provider creation.
///
/// Contains all configuration options that an object storage provider might
/// need. Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ObjectStorageProviderConfig {
    /// Provider name (e.g., "s3-http", "fs", "memory").
    pub provider: String,
    /// Endpoint URL (e.g. a `MinIO`/S3 host) for HTTP-backed providers.
    pub endpoint: Option<String>,
    /// Access key / key id for authentication.
    pub access_key: Option<String>,
    /// Secret key for authentication.
    pub secret_key: Option<String>,
    /// Default bucket name.
    pub bucket: Option<String>,
    /// Whether to use TLS (`https`) against the endpoint.
    pub secure: Option<bool>,
    /// Local root directory, for filesystem-backed providers.
    pub root_dir: Option<String>,
    /// Additional provider-specific configuration.
    pub extra: HashMap<String, String>,
}

crate::impl_config_builder!(ObjectStorageProviderConfig {
    /// Set the endpoint URL.
    endpoint: with_endpoint(into String),
    /// Set the access key.
    access_key: with_access_key(into String),
    /// Set the secret key.
    secret_key: with_secret_key(into String),
    /// Set the default bucket name.
    bucket: with_bucket(into String),
    /// Set the local root directory.
    root_dir: with_root_dir(into String),
});

impl ObjectStorageProviderConfig {
    /// Set the TLS/`secure` flag.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }
}

crate::impl_registry!(
    provider_trait: crate::ports::providers::ObjectStorageProvider,
    config_type: ObjectStorageProviderConfig,
    entry_type: ObjectStorageProviderEntry,
    slice_name: OBJECT_STORAGE_PROVIDERS,
    resolve_fn: resolve_object_storage_provider,
    list_fn: list_object_storage_providers
);
