//! Sandboxed command execution port, used exclusively by the AI Scan
//! investigator's `cli_run` tool (§4.5). Implementations MUST deny network
//! access and restrict the filesystem view to the sandbox root; this port
//! only carries the contract, not the isolation mechanism (container,
//! namespace, chroot, ...), which is an infrastructure concern.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Outcome of a single sandboxed command execution.
#[derive(Debug, Clone)]
pub struct SandboxRunOutcome {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Process exit code, if the process ran to completion.
    pub exit_code: Option<i32>,
    /// Whether the wallclock limit was hit and the process was killed.
    pub timed_out: bool,
}

/// Runs a single shell command inside an isolated sandbox directory.
#[async_trait]
pub trait SandboxExecutor: Send + Sync {
    /// Execute `command` with `sandbox_root` as the working directory and
    /// the only visible filesystem subtree, with network access disabled
    /// and killed after `wallclock_limit`.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Io`] if the sandbox itself could not
    /// be prepared or the process could not be spawned. A command that
    /// runs but exits non-zero, or that times out, is reported via
    /// [`SandboxRunOutcome`], not as an `Err`.
    async fn run(
        &self,
        sandbox_root: &Path,
        command: &str,
        wallclock_limit: Duration,
    ) -> Result<SandboxRunOutcome>;
}
