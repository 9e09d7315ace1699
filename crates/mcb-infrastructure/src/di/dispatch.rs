//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../../docs/modules/infrastructure.md#dependency-injection)
//!
//! Task dispatch: a thin, injectable wrapper around `Arc<dyn TaskRunnerProvider>`
//! that background workers (the analysis pipeline dispatcher, the GC sweep,
//! the stuck-analysis detector) use to fan work out without depending on
//! `tokio::spawn` directly.

use std::sync::Arc;

use mcb_domain::error::Result;
use mcb_domain::ports::TaskRunnerProvider;
use tracing::warn;

/// Dispatches named background work onto the configured task runner.
#[derive(Clone)]
pub struct TaskDispatcher {
    runner: Arc<dyn TaskRunnerProvider>,
}

impl TaskDispatcher {
    /// Build a dispatcher around a task runner provider.
    #[must_use]
    pub fn new(runner: Arc<dyn TaskRunnerProvider>) -> Self {
        Self { runner }
    }

    /// Dispatch `task`, logging (but not propagating) a spawn failure under
    /// `label` — callers that need to surface the failure should use
    /// [`Self::dispatch`] directly instead.
    pub fn dispatch_named(&self, label: &str, task: futures::future::BoxFuture<'static, ()>) {
        if let Err(err) = self.runner.spawn(task) {
            warn!(task = label, error = %err, "failed to dispatch background task");
        }
    }

    /// Dispatch `task`, propagating a spawn failure to the caller.
    ///
    /// # Errors
    /// Returns an error if the underlying task runner refuses the task.
    pub fn dispatch(&self, task: futures::future::BoxFuture<'static, ()>) -> Result<()> {
        self.runner.spawn(task)
    }
}

impl std::fmt::Debug for TaskDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TaskDispatcher")
    }
}
