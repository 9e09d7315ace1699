//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Infrastructure utilities
//!
//! Reusable helpers for timing and common patterns.
mod timing;

pub use timing::TimedOperation;
