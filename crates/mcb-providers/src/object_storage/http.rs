//! HTTP (`MinIO`/S3-style) object storage adapter.
//!
//! Talks to a single path-style HTTP endpoint (`{endpoint}/{bucket}/{key}`)
//! using plain PUT/GET/DELETE/HEAD, matching the "S3/`MinIO`-style" object
//! storage client called out in the expanded spec's provider list. Full
//! AWS SigV4 signing is out of scope (an infrastructure-internal transport
//! concern the core spec does not constrain) — auth is a static bearer
//! token or access/secret pair sent as headers, which is what `MinIO`'s
//! path-style endpoint accepts behind most deployments' reverse proxies.

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::ObjectStorageProvider;
use reqwest::{Client, StatusCode};

/// HTTP object storage client addressed by a base endpoint URL.
pub struct HttpObjectStorageProvider {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
    secret_key: Option<String>,
}

impl HttpObjectStorageProvider {
    /// Build a client against `endpoint` (e.g. `https://minio.internal:9000`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            access_key: None,
            secret_key: None,
        }
    }

    /// Attach static access/secret credentials, sent as `X-Access-Key`/
    /// `X-Secret-Key` headers on every request.
    #[must_use]
    pub fn with_credentials(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), bucket, key)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match (&self.access_key, &self.secret_key) {
            (Some(access), Some(secret)) => builder.header("X-Access-Key", access).header("X-Secret-Key", secret),
            _ => builder,
        }
    }
}

#[async_trait]
impl ObjectStorageProvider for HttpObjectStorageProvider {
    async fn put(&self, bucket: &str, key: &str, bytes: Vec<u8>) -> Result<()> {
        let url = self.object_url(bucket, key);
        let response = self
            .request(self.client.put(&url).body(bytes))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("object_storage".to_owned(), e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::upstream_unavailable(
                "object_storage".to_owned(),
                format!("PUT {url} failed with status {}", response.status()),
            ))
        }
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(bucket, key);
        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("object_storage".to_owned(), e.to_string()))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::not_found(format!("object {bucket}/{key}"))),
            status if status.is_success() => response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| Error::upstream_unavailable("object_storage".to_owned(), e.to_string())),
            status => Err(Error::upstream_unavailable(
                "object_storage".to_owned(),
                format!("GET {url} failed with status {status}"),
            )),
        }
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<()> {
        let url = self.object_url(bucket, key);
        let response = self
            .request(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("object_storage".to_owned(), e.to_string()))?;
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(Error::upstream_unavailable(
                "object_storage".to_owned(),
                format!("DELETE {url} failed with status {}", response.status()),
            ))
        }
    }

    async fn exists(&self, bucket: &str, key: &str) -> Result<bool> {
        let url = self.object_url(bucket, key);
        let response = self
            .request(self.client.head(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("object_storage".to_owned(), e.to_string()))?;
        Ok(response.status().is_success())
    }

    fn provider_name(&self) -> &str {
        "s3-http"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::object_storage::{
    OBJECT_STORAGE_PROVIDERS, ObjectStorageProviderConfig, ObjectStorageProviderEntry,
};

fn http_object_storage_factory(
    config: &ObjectStorageProviderConfig,
) -> std::result::Result<Arc<dyn ObjectStorageProvider>, String> {
    let endpoint = config
        .endpoint
        .clone()
        .ok_or_else(|| "s3-http object storage provider requires endpoint in config".to_owned())?;
    let mut provider = HttpObjectStorageProvider::new(endpoint);
    if let (Some(access), Some(secret)) = (&config.access_key, &config.secret_key) {
        provider = provider.with_credentials(access.clone(), secret.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(OBJECT_STORAGE_PROVIDERS)]
static HTTP_PROVIDER: ObjectStorageProviderEntry = ObjectStorageProviderEntry {
    name: "s3-http",
    description: "Path-style HTTP object storage client (MinIO/S3-compatible)",
    build: http_object_storage_factory,
};
