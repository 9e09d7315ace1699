//! Embedding-provider adapters.
//!
//! [`http`] is the only concrete adapter: an OpenAI-compatible embeddings
//! HTTP client, covering the hosted embedding APIs named in the expanded
//! spec's provider list.

pub mod http;

pub use http::HttpEmbeddingProvider;
