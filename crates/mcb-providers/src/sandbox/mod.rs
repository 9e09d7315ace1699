//! Process-based [`SandboxExecutor`].
//!
//! Not a real sandbox: no container, namespace or chroot. It restricts a
//! command's working directory to `sandbox_root` and enforces the caller's
//! wallclock limit via [`tokio::time::timeout`], matching the degree of
//! isolation [`super::git`]'s own subprocess-driven tests rely on. A
//! production deployment that needs real filesystem/network confinement
//! should wrap this with an OS-level sandbox (bubblewrap, gVisor, a
//! container runtime) in front of the command line, not replace it — this
//! type only carries the port's timeout/output-capture contract.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use mcb_domain::error::Error;
use mcb_domain::ports::providers::sandbox::{SandboxExecutor, SandboxRunOutcome};
use tokio::process::Command;

use crate::Result;

/// Runs a command via `sh -c` with its cwd pinned to the sandbox root.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSandboxExecutor;

impl ProcessSandboxExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SandboxExecutor for ProcessSandboxExecutor {
    async fn run(
        &self,
        sandbox_root: &Path,
        command: &str,
        wallclock_limit: Duration,
    ) -> Result<SandboxRunOutcome> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(sandbox_root)
            .env_remove("http_proxy")
            .env_remove("https_proxy")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::io_with_source(format!("spawn sandboxed command: {command}"), e))?;

        match tokio::time::timeout(wallclock_limit, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(SandboxRunOutcome {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
                timed_out: false,
            }),
            Ok(Err(e)) => Err(Error::io_with_source(
                format!("wait for sandboxed command: {command}"),
                e,
            )),
            Err(_) => Ok(SandboxRunOutcome {
                stdout: String::new(),
                stderr: format!("command exceeded {wallclock_limit:?} wallclock limit"),
                exit_code: None,
                timed_out: true,
            }),
        }
    }
}
