//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! System-level resource metrics (CPU, memory), as opposed to the
//! application-defined counters/gauges/histograms of
//! [`crate::ports::providers::MetricsProvider`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single point-in-time system resource reading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Process CPU usage, percent of one core (0.0-100.0+).
    pub cpu_percent: f64,
    /// Process resident memory usage, in bytes.
    pub memory_bytes: u64,
    /// Wall-clock seconds since the process started.
    pub uptime_seconds: u64,
}

/// Collects system-level resource metrics for the current process.
#[async_trait]
pub trait SystemMetricsCollectorInterface: Send + Sync {
    /// Take a fresh reading of every metric.
    async fn collect(&self) -> Result<SystemMetrics>;
    /// Last observed CPU usage, percent of one core.
    fn cpu_usage(&self) -> f64;
    /// Last observed resident memory usage, percent of configured limit.
    fn memory_usage(&self) -> f64;
}
