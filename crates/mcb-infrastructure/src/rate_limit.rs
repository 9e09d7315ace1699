//! In-process, per-scope fixed-window rate limiter.
//!
//! Advisory rather than globally consistent: each process instance keeps its
//! own window counters in a `DashMap`, matching §5's explicit allowance that
//! the limiter need not coordinate across replicas. Grounded in
//! `backend/app/core/rate_limit.py` from `original_source/`, generalized from
//! its single fixed-window-per-key scheme to named scopes sourced from
//! [`crate::config::AnalysisConfig::rate_limits`].

use std::sync::atomic::{AtomicU32, AtomicU64};
use std::sync::atomic::Ordering;

use chrono::Utc;
use dashmap::DashMap;
use mcb_domain::error::{Error, Result};

use crate::config::RateLimitScope;

struct Window {
    /// Unix epoch seconds the current window started at.
    started_at: AtomicU64,
    count: AtomicU32,
}

/// Per-scope fixed-window limiter. One instance is shared across every
/// request handler for the process lifetime.
pub struct RateLimiter {
    enabled: bool,
    scopes: std::collections::HashMap<String, RateLimitScope>,
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    /// Build a limiter from the loaded `analysis.rate_limit_enabled`/
    /// `rate_limits` configuration.
    #[must_use]
    pub fn new(enabled: bool, scopes: std::collections::HashMap<String, RateLimitScope>) -> Self {
        Self { enabled, scopes, windows: DashMap::new() }
    }

    /// Check and record one request against `scope`. No-op (always allows)
    /// if the limiter is disabled or `scope` has no configured limit.
    ///
    /// # Errors
    /// Returns [`Error::RateLimited`] with the remaining window time in
    /// `retry_after_secs` if `scope`'s window is exhausted.
    pub fn check(&self, scope: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let Some(limit) = self.scopes.get(scope) else {
            return Ok(());
        };

        let now = Utc::now().timestamp().max(0) as u64;
        let entry = self
            .windows
            .entry(scope.to_owned())
            .or_insert_with(|| Window { started_at: AtomicU64::new(now), count: AtomicU32::new(0) });

        let started_at = entry.started_at.load(Ordering::SeqCst);
        if now.saturating_sub(started_at) >= limit.window_secs {
            entry.started_at.store(now, Ordering::SeqCst);
            entry.count.store(0, Ordering::SeqCst);
        }

        let count = entry.count.fetch_add(1, Ordering::SeqCst) + 1;
        if count > limit.limit {
            let elapsed = now.saturating_sub(entry.started_at.load(Ordering::SeqCst));
            let retry_after_secs = limit.window_secs.saturating_sub(elapsed);
            return Err(Error::rate_limited(scope.to_owned(), retry_after_secs));
        }
        Ok(())
    }
}
