//! Vector-index adapters.
//!
//! [`qdrant_http`] is the only concrete adapter: an HTTP client against a
//! Qdrant-compatible REST API, the "HTTP vector-index client (Qdrant-style)"
//! called out in the expanded spec's provider list.

pub mod qdrant_http;

pub use qdrant_http::QdrantHttpVectorStoreProvider;
