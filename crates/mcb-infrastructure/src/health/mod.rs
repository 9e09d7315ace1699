//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Health check registry: a small pub/sub-free aggregator that lets
//! independent subsystems register a [`HealthChecker`] and exposes a single
//! [`HealthResponse`] for the `/health` endpoint.

pub mod checkers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Overall or per-check health status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Fully operational.
    Up,
    /// Operational but degraded (elevated latency, non-fatal errors).
    Degraded,
    /// Not operational.
    Down,
    /// No check has run yet.
    #[default]
    Unknown,
}

impl HealthStatus {
    /// True for [`HealthStatus::Up`].
    #[must_use]
    pub fn is_healthy(self) -> bool {
        matches!(self, Self::Up)
    }

    /// True for any status that can still serve traffic.
    #[must_use]
    pub fn is_operational(self) -> bool {
        matches!(self, Self::Up | Self::Degraded)
    }

    fn worst(self, other: Self) -> Self {
        use HealthStatus::{Degraded, Down, Unknown, Up};
        match (self, other) {
            (Down, _) | (_, Down) => Down,
            (Degraded, _) | (_, Degraded) => Degraded,
            (Unknown, _) | (_, Unknown) => Unknown,
            (Up, Up) => Up,
        }
    }
}

/// Result of a single health check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the checked component.
    pub name: String,
    /// Resulting status.
    pub status: HealthStatus,
    /// Error description, present when status is not [`HealthStatus::Up`].
    pub error: Option<String>,
    /// Time taken to run the check, in milliseconds.
    pub response_time_ms: u64,
    /// Arbitrary structured detail attached by the checker.
    pub details: Option<serde_json::Value>,
}

impl HealthCheck {
    /// Build an `Up` result with no detail.
    #[must_use]
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            error: None,
            response_time_ms: 0,
            details: None,
        }
    }

    /// Build a `Down` result with an optional error message.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            error,
            response_time_ms: 0,
            details: None,
        }
    }

    /// Build a `Degraded` result with an optional error message.
    #[must_use]
    pub fn degraded(name: impl Into<String>, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Degraded,
            error,
            response_time_ms: 0,
            details: None,
        }
    }

    /// Attach structured detail to this result.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Record how long the check took.
    #[must_use]
    pub fn with_response_time(mut self, response_time_ms: u64) -> Self {
        self.response_time_ms = response_time_ms;
        self
    }
}

/// Aggregated health response across every registered checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Worst status across `checks`.
    pub status: HealthStatus,
    /// Per-checker results, keyed by name.
    pub checks: HashMap<String, HealthCheck>,
}

impl HealthResponse {
    /// Build an empty, `Up` response.
    #[must_use]
    pub fn new() -> Self {
        Self { status: HealthStatus::Up, checks: HashMap::new() }
    }

    /// Fold a check result in, downgrading the overall status if needed.
    #[must_use]
    pub fn add_check(mut self, check: HealthCheck) -> Self {
        self.status = self.status.worst(check.status);
        self.checks.insert(check.name.clone(), check);
        self
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// A single named health check implementation.
#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// Run the check.
    async fn check_health(&self) -> HealthCheck;
}

/// Registry of health checkers, aggregated into one [`HealthResponse`].
pub struct HealthRegistry {
    checkers: RwLock<HashMap<String, Arc<dyn HealthChecker>>>,
}

impl HealthRegistry {
    /// Build an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { checkers: RwLock::new(HashMap::new()) }
    }

    /// Register a checker under `name`, replacing any existing one.
    pub async fn register_checker(&self, name: String, checker: impl HealthChecker + 'static) {
        self.checkers.write().await.insert(name, Arc::new(checker));
    }

    /// Run every registered checker and aggregate the results.
    pub async fn perform_health_checks(&self) -> HealthResponse {
        let checkers = self.checkers.read().await.clone();
        let mut response = HealthResponse::new();
        for (name, checker) in checkers {
            let started = Instant::now();
            let mut check = checker.check_health().await;
            if check.response_time_ms == 0 {
                check.response_time_ms = started.elapsed().as_millis() as u64;
            }
            check.name = name;
            response = response.add_check(check);
        }
        response
    }

    /// Names of every registered checker.
    pub async fn list_checks(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checkers.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for HealthRegistry {
    fn default() -> Self {
        Self::new()
    }
}
