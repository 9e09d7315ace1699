//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `DEFAULT_OPERATION_TIMEOUT_SECS`.
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 60;
/// Constant value for `DEFAULT_BATCH_OPERATION_SIZE`.
pub const DEFAULT_BATCH_OPERATION_SIZE: usize = 100;
/// Constant value for `DEFAULT_OPERATION_RETRY_ATTEMPTS`.
pub const DEFAULT_OPERATION_RETRY_ATTEMPTS: u32 = 3;
