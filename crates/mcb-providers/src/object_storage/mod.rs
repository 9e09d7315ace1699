//! Object Storage Provider Implementations
//!
//! Concrete backends for [`mcb_domain::ports::ObjectStorageProvider`], the
//! port the Repo Content Cache uses to persist commit-scoped file bytes
//! under `"{repository_id}/{commit_sha}/{object_id}"` keys (§6).
//!
//! ## Available Providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | `FsObjectStorageProvider` | Local filesystem root directory; default for dev/tests |
//! | `HttpObjectStorageProvider` | S3/`MinIO`-style path-addressed HTTP backend |

pub mod fs;
pub mod http;

pub use fs::FsObjectStorageProvider;
pub use http::HttpObjectStorageProvider;
