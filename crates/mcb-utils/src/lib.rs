//! # Shared Utilities
//!
//! Small, dependency-light helpers shared across the workspace that don't
//! belong to any single layer: content hashing, crate-local error types for
//! utility-level failures.
//!
//! - [`hashing`] – SHA-256 content hashing, consolidating the `repo-content
//!   cache` and `embeddings worker`'s identical inline digest calls.
#![allow(missing_docs)]

/// Content hashing helpers.
pub mod hashing;
