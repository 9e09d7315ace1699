//! Test-coverage provider port: per-file line coverage rate, used by the
//! Cluster Analyzer's hot-spot risk scoring (§4.4). Coverage tooling is
//! inherently per-ecosystem (`lcov`, `cobertura`, `tarpaulin` reports, ...);
//! this port abstracts over whichever report format an infrastructure
//! adapter knows how to parse for the workspace under analysis.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Reads per-file test coverage for a checked-out repository.
#[async_trait]
pub trait CoverageProvider: Send + Sync {
    /// Line coverage rate in `0.0..=1.0` for `file_path`, or `None` if no
    /// coverage data is available for this workspace or file.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Io`] if a coverage report exists but
    /// cannot be read.
    async fn coverage_for_file(&self, repo_path: &Path, file_path: &str) -> Result<Option<f64>>;
}
