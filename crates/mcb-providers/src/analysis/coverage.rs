//! `lcov`-backed implementation of [`CoverageProvider`].
//!
//! Reads a single `lcov.info` report (the format `cargo llvm-cov`, `grcov`
//! and most JS/Python coverage tools can all emit) rooted at a
//! configurable path relative to the repository checkout, and answers
//! per-file line coverage from its `DA:` (line execution count) records.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mcb_domain::error::Error;
use mcb_domain::ports::providers::CoverageProvider;

use crate::Result;

/// Per-file `(lines hit, lines instrumented)` parsed from one `SF:`/`end_of_record` block.
#[derive(Debug, Clone, Copy, Default)]
struct FileCoverage {
    hit: u32,
    total: u32,
}

/// Parses an `lcov.info` report on demand (no caching: reports are small
/// and callers query once per hot-spot candidate during a cluster
/// analysis pass, not in a hot loop).
#[derive(Debug, Clone)]
pub struct LcovCoverageProvider {
    /// Path to the `lcov.info` file, relative to the repository root passed
    /// to [`CoverageProvider::coverage_for_file`].
    report_relative_path: PathBuf,
}

impl LcovCoverageProvider {
    #[must_use]
    pub fn new(report_relative_path: impl Into<PathBuf>) -> Self {
        Self { report_relative_path: report_relative_path.into() }
    }

    fn parse(report: &str) -> HashMap<String, FileCoverage> {
        let mut files: HashMap<String, FileCoverage> = HashMap::new();
        let mut current: Option<String> = None;

        for line in report.lines() {
            if let Some(path) = line.strip_prefix("SF:") {
                current = Some(path.trim().to_owned());
                files.entry(path.trim().to_owned()).or_default();
            } else if let Some(rest) = line.strip_prefix("DA:") {
                let Some(path) = &current else { continue };
                let mut parts = rest.splitn(2, ',');
                let Some(_line_no) = parts.next() else { continue };
                let Some(hits) = parts.next().and_then(|h| h.split(',').next()).and_then(|h| h.parse::<u64>().ok()) else {
                    continue;
                };
                let entry = files.entry(path.clone()).or_default();
                entry.total += 1;
                if hits > 0 {
                    entry.hit += 1;
                }
            } else if line == "end_of_record" {
                current = None;
            }
        }

        files
    }
}

#[async_trait]
impl CoverageProvider for LcovCoverageProvider {
    async fn coverage_for_file(&self, repo_path: &Path, file_path: &str) -> Result<Option<f64>> {
        let report_path = repo_path.join(&self.report_relative_path);
        let report = match tokio::fs::read_to_string(&report_path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io_with_source(format!("failed to read {}", report_path.display()), e)),
        };

        let files = Self::parse(&report);
        let normalized = file_path.trim_start_matches("./");
        let coverage = files.iter().find(|(path, _)| path.trim_start_matches("./") == normalized).map(|(_, cov)| *cov);

        Ok(coverage.and_then(|cov| if cov.total == 0 { None } else { Some(f64::from(cov.hit) / f64::from(cov.total)) }))
    }
}
