//! `tokio`-backed background task runner.
//!
//! The only concrete [`TaskRunnerProvider`][mcb_domain::ports::providers::TaskRunnerProvider]
//! in this workspace: every track job the Pipeline Dispatcher schedules
//! ultimately runs on the `tokio` runtime the server binary starts, so
//! there is no second runtime to abstract over.

mod tokio_task_runner;

pub use tokio_task_runner::TokioTaskRunner;
