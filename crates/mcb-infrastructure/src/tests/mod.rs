//! Internal unit tests for infrastructure services
//!
//! These tests are inside the crate to access pub(crate) modules.

mod auth_tests;
mod snapshot_tests;
mod sync_tests;
