//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `SYNC_BATCH_SIZE`.
pub const SYNC_BATCH_SIZE: usize = 100;
/// Constant value for `SYNC_DEBOUNCE_DELAY_MS`.
pub const SYNC_DEBOUNCE_DELAY_MS: u64 = 500;
/// Constant value for `SYNC_TIMEOUT_SECS`.
pub const SYNC_TIMEOUT_SECS: u64 = 300;
/// Constant value for `SYNC_MAX_CONCURRENT`.
pub const SYNC_MAX_CONCURRENT: usize = 10;
