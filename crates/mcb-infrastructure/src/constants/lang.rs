//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `DEFAULT_TREE_SITTER_LANGUAGE_POOL_SIZE`.
pub const DEFAULT_TREE_SITTER_LANGUAGE_POOL_SIZE: usize = 8;
/// Constant value for `LANGUAGE_DETECTION_CACHE_CAPACITY`.
pub const LANGUAGE_DETECTION_CACHE_CAPACITY: usize = 1024;
