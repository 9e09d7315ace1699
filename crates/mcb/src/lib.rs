//! Process entry point crate for the Analysis Execution Core.
//!
//! Thin by design: configuration loading and logging setup live in
//! `mcb-infrastructure`, the HTTP surface lives in `mcb-server`. This crate
//! only owns `main` and the `clap` CLI shape.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
