//! SHA-256 content hashing.
//!
//! One digest helper shared by every call site that needs a stable
//! content-addressed identifier for a byte buffer (the repo content
//! cache's object dedup, the embeddings worker's file-level content hash).

use sha2::{Digest, Sha256};

/// Lowercase hex-encoded SHA-256 digest of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
