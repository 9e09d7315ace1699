//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `AST_PARSE_TIMEOUT_MS`.
pub const AST_PARSE_TIMEOUT_MS: u64 = 5000;
/// Constant value for `AST_MAX_FILE_SIZE_BYTES`.
pub const AST_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;
/// Constant value for `AST_MAX_PARSE_DEPTH`.
pub const AST_MAX_PARSE_DEPTH: usize = 512;
