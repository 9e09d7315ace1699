//! HTTP (Qdrant-style) vector-index adapter.
//!
//! Talks to a single Qdrant-compatible REST endpoint. Qdrant restricts point
//! ids to unsigned integers or UUIDs, while the Embeddings Worker derives a
//! deterministic logical id as a sha256 hex string (see
//! `embeddings_worker::point_id`) so re-runs upsert in place. This adapter
//! bridges the two by deriving a UUID v5 from the logical id (stable,
//! collision-free within a collection) and carrying the original logical id
//! through unchanged in the point's payload under `"point_key"`, so callers
//! that round-trip ids through [`mcb_domain::value_objects::SearchResult::id`]
//! still see the logical id rather than the Qdrant-internal UUID.

use std::collections::HashMap;

use async_trait::async_trait;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::providers::vector_store::{
    MetadataMap, PortResult, StoreCollectionId, StoreEmbedding, StoreSearchResult,
    VectorStoreAdmin, VectorStoreBrowser, VectorStoreProvider,
};
use mcb_domain::value_objects::{CollectionInfo, FileInfo, SearchResult};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Namespace used to derive a stable Qdrant point UUID from a caller-supplied
/// logical point id.
const POINT_ID_NAMESPACE: Uuid = Uuid::from_bytes(*b"mcb-point-id-ns!");

fn point_uuid(logical_id: &str) -> Uuid {
    Uuid::new_v5(&POINT_ID_NAMESPACE, logical_id.as_bytes())
}

/// Qdrant point ids are either a UUID string or an unsigned integer; render
/// either shape as a plain string without the quoting `Value::to_string`
/// would add around a JSON string.
fn qdrant_id_to_string(value: &Value) -> String {
    value.as_str().map(str::to_owned).unwrap_or_else(|| value.to_string())
}

/// HTTP client against a Qdrant-compatible vector database.
pub struct QdrantHttpVectorStoreProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl QdrantHttpVectorStoreProvider {
    /// Build a client against `endpoint` (e.g. `http://qdrant.internal:6333`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into(), api_key: None }
    }

    /// Attach an API key, sent as the `api-key` header on every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn collection_url(&self, collection: &StoreCollectionId) -> String {
        format!("{}/collections/{}", self.endpoint.trim_end_matches('/'), collection)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("api-key", key),
            None => builder,
        }
    }

    async fn post_json(&self, url: &str, body: Value) -> Result<Value> {
        let response = self
            .request(self.client.post(url).json(&body))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        if !status.is_success() {
            return Err(Error::upstream_unavailable(
                "vector_store".to_owned(),
                format!("POST {url} failed with status {status}: {body}"),
            ));
        }
        Ok(body)
    }

    fn point_to_search_result(id: &str, payload: &Value, score: f32) -> SearchResult {
        let get_str = |key: &str| payload.get(key).and_then(Value::as_str).unwrap_or_default().to_owned();
        let get_u32 = |key: &str| payload.get(key).and_then(Value::as_u64).unwrap_or(0) as u32;
        SearchResult {
            id: payload.get("point_key").and_then(Value::as_str).map(str::to_owned).unwrap_or_else(|| id.to_owned()),
            file_path: get_str("file_path"),
            content: get_str("content"),
            score,
            start_line: get_u32("line_start"),
            end_line: get_u32("line_end"),
            language: get_str("language"),
            metadata: payload.clone(),
        }
    }
}

#[async_trait]
impl VectorStoreAdmin for QdrantHttpVectorStoreProvider {
    async fn collection_exists(&self, collection: &StoreCollectionId) -> PortResult<bool> {
        let url = self.collection_url(collection);
        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        Ok(response.status().is_success())
    }

    async fn get_stats(&self, collection: &StoreCollectionId) -> PortResult<MetadataMap> {
        let url = self.collection_url(collection);
        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::not_found(format!("collection {collection}")));
        }
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        let mut stats: MetadataMap = HashMap::new();
        if let Some(result) = body.get("result") {
            if let Some(obj) = result.as_object() {
                for (k, v) in obj {
                    stats.insert(k.clone(), v.clone());
                }
            }
        }
        Ok(stats)
    }

    async fn flush(&self, _collection: &StoreCollectionId) -> PortResult<()> {
        // Qdrant persists writes synchronously per `wait=true` upsert; no
        // separate flush endpoint exists.
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "qdrant-http"
    }
}

#[async_trait]
impl VectorStoreBrowser for QdrantHttpVectorStoreProvider {
    async fn list_collections(&self) -> Result<Vec<CollectionInfo>> {
        let url = format!("{}/collections", self.endpoint.trim_end_matches('/'));
        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        let names = body
            .get("result")
            .and_then(|r| r.get("collections"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let mut infos = Vec::with_capacity(names.len());
        for entry in names {
            let name = entry.get("name").and_then(Value::as_str).unwrap_or_default().to_owned();
            infos.push(CollectionInfo::new(name, 0, 0, None, self.provider_name()));
        }
        Ok(infos)
    }

    async fn list_file_paths(&self, collection: &StoreCollectionId, limit: usize) -> Result<Vec<FileInfo>> {
        let hits = self.list_vectors(collection, limit).await?;
        let mut by_path: HashMap<String, (u32, String, Option<u64>)> = HashMap::new();
        for hit in hits {
            let entry = by_path.entry(hit.file_path.clone()).or_insert((0, hit.language.clone(), None));
            entry.0 += 1;
        }
        let mut files: Vec<FileInfo> = by_path
            .into_iter()
            .map(|(path, (count, language, size))| FileInfo::new(path, count, language, size))
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    async fn get_chunks_by_file(&self, collection: &StoreCollectionId, file_path: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/points/scroll", self.collection_url(collection));
        let body = self
            .post_json(
                &url,
                json!({
                    "limit": 1000,
                    "with_payload": true,
                    "with_vector": false,
                    "filter": {"must": [{"key": "file_path", "match": {"value": file_path}}]},
                }),
            )
            .await?;
        let points = body.get("result").and_then(|r| r.get("points")).and_then(Value::as_array).cloned().unwrap_or_default();
        Ok(points
            .iter()
            .map(|p| {
                let id = p.get("id").map(qdrant_id_to_string).unwrap_or_default();
                let payload = p.get("payload").cloned().unwrap_or(Value::Null);
                Self::point_to_search_result(&id, &payload, 0.0)
            })
            .collect())
    }
}

#[async_trait]
impl VectorStoreProvider for QdrantHttpVectorStoreProvider {
    async fn create_collection(&self, collection: &StoreCollectionId, dimensions: usize) -> PortResult<()> {
        let url = self.collection_url(collection);
        let response = self
            .request(self.client.put(&url).json(&json!({"vectors": {"size": dimensions, "distance": "Cosine"}})))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::upstream_unavailable(
                "vector_store".to_owned(),
                format!("create_collection failed with status {}", response.status()),
            ))
        }
    }

    async fn delete_collection(&self, collection: &StoreCollectionId) -> PortResult<()> {
        let url = self.collection_url(collection);
        let response = self
            .request(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| Error::upstream_unavailable("vector_store".to_owned(), e.to_string()))?;
        if response.status().is_success() || response.status() == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(Error::upstream_unavailable(
                "vector_store".to_owned(),
                format!("delete_collection failed with status {}", response.status()),
            ))
        }
    }

    async fn insert_vectors(
        &self,
        collection: &StoreCollectionId,
        vectors: &[StoreEmbedding],
        metadata: Vec<MetadataMap>,
    ) -> PortResult<Vec<String>> {
        let ids: Vec<String> = vectors.iter().enumerate().map(|(i, _)| format!("auto-{i}-{}", Uuid::new_v4())).collect();
        self.upsert_vectors(collection, vectors, metadata, &ids).await
    }

    async fn upsert_vectors(
        &self,
        collection: &StoreCollectionId,
        vectors: &[StoreEmbedding],
        metadata: Vec<MetadataMap>,
        ids: &[String],
    ) -> PortResult<Vec<String>> {
        let url = format!("{}/points?wait=true", self.collection_url(collection));
        let points: Vec<Value> = vectors
            .iter()
            .zip(metadata.iter())
            .zip(ids.iter())
            .map(|((vector, payload), id)| {
                let mut payload_obj: serde_json::Map<String, Value> = payload.clone().into_iter().collect();
                payload_obj.insert("point_key".to_owned(), json!(id));
                json!({
                    "id": point_uuid(id).to_string(),
                    "vector": vector.vector,
                    "payload": payload_obj,
                })
            })
            .collect();
        self.post_json(&url, json!({"points": points})).await?;
        Ok(ids.to_vec())
    }

    async fn search_similar(
        &self,
        collection: &StoreCollectionId,
        query_vector: &[f32],
        limit: usize,
        filter: Option<&str>,
    ) -> PortResult<Vec<StoreSearchResult>> {
        let url = format!("{}/points/search", self.collection_url(collection));
        let mut body = json!({
            "vector": query_vector,
            "limit": limit,
            "with_payload": true,
        });
        if let Some(filter_json) = filter {
            if let Ok(parsed) = serde_json::from_str::<Value>(filter_json) {
                body["filter"] = parsed;
            }
        }
        let response = self.post_json(&url, body).await?;
        let hits = response.get("result").and_then(Value::as_array).cloned().unwrap_or_default();
        Ok(hits
            .iter()
            .map(|h| {
                let id = h.get("id").map(qdrant_id_to_string).unwrap_or_default();
                let score = h.get("score").and_then(Value::as_f64).unwrap_or(0.0) as f32;
                let payload = h.get("payload").cloned().unwrap_or(Value::Null);
                Self::point_to_search_result(&id, &payload, score)
            })
            .collect())
    }

    async fn delete_vectors(&self, collection: &StoreCollectionId, ids: &[String]) -> PortResult<()> {
        let url = format!("{}/points/delete?wait=true", self.collection_url(collection));
        let qdrant_ids: Vec<String> = ids.iter().map(|id| point_uuid(id).to_string()).collect();
        self.post_json(&url, json!({"points": qdrant_ids})).await?;
        Ok(())
    }

    async fn get_vectors_by_ids(&self, collection: &StoreCollectionId, ids: &[String]) -> PortResult<Vec<StoreSearchResult>> {
        let url = format!("{}/points", self.collection_url(collection));
        let qdrant_ids: Vec<String> = ids.iter().map(|id| point_uuid(id).to_string()).collect();
        let body = self.post_json(&url, json!({"ids": qdrant_ids, "with_payload": true, "with_vector": false})).await?;
        let points = body.get("result").and_then(Value::as_array).cloned().unwrap_or_default();
        Ok(points
            .iter()
            .map(|p| {
                let id = p.get("id").map(qdrant_id_to_string).unwrap_or_default();
                let payload = p.get("payload").cloned().unwrap_or(Value::Null);
                Self::point_to_search_result(&id, &payload, 0.0)
            })
            .collect())
    }

    async fn list_vectors(&self, collection: &StoreCollectionId, limit: usize) -> PortResult<Vec<StoreSearchResult>> {
        let url = format!("{}/points/scroll", self.collection_url(collection));
        let body = self.post_json(&url, json!({"limit": limit, "with_payload": true, "with_vector": false})).await?;
        let points = body.get("result").and_then(|r| r.get("points")).and_then(Value::as_array).cloned().unwrap_or_default();
        Ok(points
            .iter()
            .map(|p| {
                let id = p.get("id").map(qdrant_id_to_string).unwrap_or_default();
                let payload = p.get("payload").cloned().unwrap_or(Value::Null);
                Self::point_to_search_result(&id, &payload, 0.0)
            })
            .collect())
    }

    async fn set_cluster_id(&self, collection: &StoreCollectionId, id: &str, cluster_id: &str) -> PortResult<()> {
        let url = format!("{}/points/payload?wait=true", self.collection_url(collection));
        self.post_json(
            &url,
            json!({
                "payload": {"cluster_id": cluster_id.parse::<i64>().unwrap_or(-1)},
                "points": [point_uuid(id).to_string()],
            }),
        )
        .await?;
        Ok(())
    }
}

impl std::fmt::Debug for QdrantHttpVectorStoreProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantHttpVectorStoreProvider").field("endpoint", &self.endpoint).finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use mcb_domain::registry::vector_store::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

fn qdrant_http_factory(config: &VectorStoreProviderConfig) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    let endpoint = config.uri.clone().ok_or_else(|| "qdrant-http vector store provider requires uri in config".to_owned())?;
    let mut provider = QdrantHttpVectorStoreProvider::new(endpoint);
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static QDRANT_HTTP_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "qdrant-http",
    description: "HTTP client against a Qdrant-compatible vector database",
    build: qdrant_http_factory,
};
