//! `tokio::spawn`-backed [`TaskRunnerProvider`].

use std::sync::Arc;

use futures::future::BoxFuture;
use mcb_domain::ports::providers::TaskRunnerProvider;
use mcb_domain::registry::task_runner::{TASK_RUNNER_PROVIDERS, TaskRunnerProviderConfig, TaskRunnerProviderEntry};

use crate::Result;

/// Fires each track job onto the ambient `tokio` runtime via
/// `tokio::spawn`, detached: the dispatcher does not await track
/// completion, it only schedules it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTaskRunner;

impl TokioTaskRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TaskRunnerProvider for TokioTaskRunner {
    fn spawn(&self, task: BoxFuture<'static, ()>) -> Result<()> {
        tokio::spawn(task);
        Ok(())
    }
}

fn tokio_task_runner_factory(_config: &TaskRunnerProviderConfig) -> std::result::Result<Arc<dyn TaskRunnerProvider>, String> {
    Ok(Arc::new(TokioTaskRunner::new()))
}

#[linkme::distributed_slice(TASK_RUNNER_PROVIDERS)]
static TOKIO_PROVIDER: TaskRunnerProviderEntry = TaskRunnerProviderEntry {
    name: "tokio",
    description: "tokio::spawn-backed background task runner",
    build: tokio_task_runner_factory,
};
