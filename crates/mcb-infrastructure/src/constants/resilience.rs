//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `CIRCUIT_BREAKER_FAILURE_THRESHOLD`.
pub const CIRCUIT_BREAKER_FAILURE_THRESHOLD: u32 = 5;
/// Constant value for `CIRCUIT_BREAKER_SUCCESS_THRESHOLD`.
pub const CIRCUIT_BREAKER_SUCCESS_THRESHOLD: u32 = 2;
/// Constant value for `CIRCUIT_BREAKER_TIMEOUT_SECS`.
pub const CIRCUIT_BREAKER_TIMEOUT_SECS: u64 = 60;
/// Constant value for `RATE_LIMITER_DEFAULT_RPS`.
pub const RATE_LIMITER_DEFAULT_RPS: u32 = 100;
/// Constant value for `RATE_LIMITER_DEFAULT_BURST`.
pub const RATE_LIMITER_DEFAULT_BURST: u32 = 200;
