//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../../docs/modules/infrastructure.md)
//!
//! Concrete [`super::HealthChecker`] implementations: a generic closure-backed
//! checker for services that can self-report pass/fail, and a system
//! resource checker backed by `sysinfo`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::json;
use sysinfo::System;

use super::{HealthCheck, HealthChecker};

/// Default CPU usage threshold above which the system checker reports degraded.
const DEFAULT_CPU_THRESHOLD_PERCENT: f32 = 90.0;
/// Default memory usage threshold above which the system checker reports degraded.
const DEFAULT_MEMORY_THRESHOLD_PERCENT: f64 = 90.0;
/// Minimum gap between CPU samples for `sysinfo` to report a meaningful delta.
const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Wraps a fallible closure as a [`HealthChecker`].
pub struct ServiceHealthChecker<F> {
    name: String,
    check: F,
}

impl<F> ServiceHealthChecker<F>
where
    F: Fn() -> Result<(), String> + Send + Sync,
{
    /// Build a checker named `name` that reports healthy when `check` returns `Ok`.
    pub fn new(name: impl Into<String>, check: F) -> Self {
        Self { name: name.into(), check }
    }
}

#[async_trait]
impl<F> HealthChecker for ServiceHealthChecker<F>
where
    F: Fn() -> Result<(), String> + Send + Sync,
{
    async fn check_health(&self) -> HealthCheck {
        let started = Instant::now();
        let result = (self.check)();
        let elapsed = started.elapsed().as_millis() as u64;
        match result {
            Ok(()) => HealthCheck::healthy(&self.name).with_response_time(elapsed),
            Err(message) => {
                HealthCheck::failed(&self.name, Some(message)).with_response_time(elapsed)
            }
        }
    }
}

/// Reports process/system CPU and memory usage.
pub struct SystemHealthChecker {
    cpu_threshold_percent: f32,
    memory_threshold_percent: f64,
}

impl SystemHealthChecker {
    /// Build a checker using the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpu_threshold_percent: DEFAULT_CPU_THRESHOLD_PERCENT,
            memory_threshold_percent: DEFAULT_MEMORY_THRESHOLD_PERCENT,
        }
    }

    /// Build a checker with explicit degradation thresholds.
    #[must_use]
    pub fn with_thresholds(cpu_threshold_percent: f32, memory_threshold_percent: f64) -> Self {
        Self { cpu_threshold_percent, memory_threshold_percent }
    }
}

impl Default for SystemHealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthChecker for SystemHealthChecker {
    async fn check_health(&self) -> HealthCheck {
        let started = Instant::now();

        let mut sys = System::new_all();
        sys.refresh_cpu_usage();
        tokio::time::sleep(CPU_SAMPLE_INTERVAL).await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let cpu_usage_percent = f64::from(sys.global_cpu_usage());
        let memory_total_bytes = sys.total_memory();
        let memory_used_bytes = sys.used_memory();
        let memory_usage_percent = if memory_total_bytes == 0 {
            0.0
        } else {
            (memory_used_bytes as f64 / memory_total_bytes as f64) * 100.0
        };

        let status = if cpu_usage_percent >= f64::from(self.cpu_threshold_percent)
            || memory_usage_percent >= self.memory_threshold_percent
        {
            super::HealthStatus::Degraded
        } else {
            super::HealthStatus::Up
        };

        let details = json!({
            "cpu_usage_percent": cpu_usage_percent,
            "cpu_threshold_percent": f64::from(self.cpu_threshold_percent),
            "memory_used_bytes": memory_used_bytes,
            "memory_total_bytes": memory_total_bytes,
            "memory_usage_percent": memory_usage_percent,
            "memory_threshold_percent": self.memory_threshold_percent,
        });

        HealthCheck {
            name: "system".to_string(),
            status,
            error: None,
            response_time_ms: started.elapsed().as_millis() as u64,
            details: Some(details),
        }
    }
}
